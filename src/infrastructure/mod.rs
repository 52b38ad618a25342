//! Infrastructure layer.
//!
//! Provides technical concerns that support the application without containing
//! decision logic: configuration, component construction, and the runtime.
//!
//! # Submodules
//!
//! - [`config`] - Configuration loading and validation
//! - [`factory`] - Component factory functions
//! - [`orchestration`] - Scan runtime

pub mod config;
pub mod factory;
pub mod orchestration;
