//! Shared test utilities available to both unit and integration tests.
//!
//! Enabled via `#[cfg(test)]` (unit tests) or the `testkit` feature
//! (integration tests).
//!
//! # Modules
//!
//! - [`domain`] - Builders for domain primitives: tickers, features, snapshots.
//! - [`config`] - Canonical test configurations (fast scan loop, file paths).
//! - [`ports`] - In-memory implementations of the outbound ports.

pub mod config;
pub mod domain;
pub mod ports;
