//! Ensemble signal configuration.

use serde::Deserialize;

use crate::application::fusion::ensemble::DEFAULT_CONFIDENCE;
use crate::domain::signal::SignalWeights;

/// Weights and dampening for the weighted ensemble.
#[derive(Debug, Clone, Deserialize)]
pub struct SignalConfig {
    /// Pull toward 0.5 applied after averaging; 1.0 disables dampening.
    #[serde(default = "default_confidence")]
    pub confidence: f64,
    #[serde(default)]
    pub weights: SignalWeights,
}

const fn default_confidence() -> f64 {
    DEFAULT_CONFIDENCE
}

impl Default for SignalConfig {
    fn default() -> Self {
        Self {
            confidence: default_confidence(),
            weights: SignalWeights::default(),
        }
    }
}
