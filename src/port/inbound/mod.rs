//! Inbound (driving) ports consumed by inbound adapters.
//!
//! # Modules
//!
//! - [`fusion`]: Fusion strategy interface
//! - [`validation`]: Pre-trade validation result types

pub mod fusion;
pub mod validation;
