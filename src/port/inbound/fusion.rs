//! Fusion strategy port.
//!
//! A [`Fuser`] combines the research-derived fundamental probability with
//! quantitative features into a single hybrid probability. Implementations
//! are mutually exclusive strategies over the same interface; one is chosen at
//! startup and used for the whole run.
//!
//! # Example
//!
//! ```ignore
//! use quantamental::port::inbound::fusion::Fuser;
//! use quantamental::domain::{feature::QuantFeatureSet, outcome::Outcome};
//!
//! struct Passthrough;
//!
//! impl Fuser for Passthrough {
//!     fn name(&self) -> &'static str { "passthrough" }
//!     fn requires_training(&self) -> bool { false }
//!     fn fuse(&self, fundamental_prob: f64, _: &QuantFeatureSet) -> Outcome<f64> {
//!         Outcome::Nominal(fundamental_prob)
//!     }
//! }
//! ```

use serde::Serialize;

use crate::domain::{
    feature::QuantFeatureSet, outcome::Outcome, signal::SignalSet, signal::SignalWeights,
};

/// Self-description of a fusion strategy for operator diagnostics.
#[derive(Debug, Clone, Serialize)]
pub struct FuserDiagnostics {
    /// Strategy name as used in configuration.
    pub strategy_type: &'static str,
    /// Whether the strategy depends on an offline-trained model.
    pub requires_training: bool,
    /// Static signal weights, for weight-based strategies.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weights: Option<SignalWeights>,
    /// Confidence dampening constant, for weight-based strategies.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
}

/// Strategy that fuses a fundamental probability with quantitative features.
pub trait Fuser: Send + Sync {
    /// Configuration name of the strategy.
    fn name(&self) -> &'static str;

    /// Return `true` if the strategy needs an offline-trained model.
    fn requires_training(&self) -> bool;

    /// Produce the hybrid probability.
    ///
    /// Never fails outward: on malformed input the result is
    /// [`Outcome::Degraded`] carrying a neutral fallback.
    fn fuse(&self, fundamental_prob: f64, features: &QuantFeatureSet) -> Outcome<f64>;

    /// Per-signal breakdown behind a fusion, if the strategy has one.
    fn signals(&self, _fundamental_prob: f64, _features: &QuantFeatureSet) -> Option<SignalSet> {
        None
    }

    /// Describe this strategy.
    fn diagnostics(&self) -> FuserDiagnostics {
        FuserDiagnostics {
            strategy_type: self.name(),
            requires_training: self.requires_training(),
            weights: None,
            confidence: None,
        }
    }
}
