//! Quantamental - prediction market edge detection and position sizing.
//!
//! Fuses a research-derived fundamental probability with technical
//! indicators into a hybrid forecast, compares it to the market price, and
//! sizes approved trades with fractional Kelly under hard risk limits.
//!
//! # Architecture
//!
//! - [`domain`] - Exchange-agnostic value types: signals, edge, sizing, trades
//! - [`application`] - The decision core: fusion, edge, sizing, validation
//! - [`port`] - Traits at the seams: fusion strategy, market source,
//!   executor, trade recorder, stop signal
//! - [`adapter`] - CLI plus file and paper-trading implementations of the ports
//! - [`infrastructure`] - Configuration, component factories, scan runtime
//! - [`error`] - Error types for the crate
//!
//! # Example
//!
//! ```
//! use quantamental::application::decision::engine::DecisionRequest;
//! use quantamental::domain::{feature::QuantFeatureSet, id::Ticker};
//! use quantamental::infrastructure::config::settings::Config;
//! use quantamental::infrastructure::factory::build_engine;
//!
//! let engine = build_engine(&Config::default());
//! let decision = engine.decide(&DecisionRequest {
//!     ticker: Ticker::new("DEMO"),
//!     fundamental_prob: 0.5,
//!     features: QuantFeatureSet::default(),
//!     price_cents: 50,
//! });
//! assert!(!decision.should_submit());
//! ```

pub mod adapter;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;
