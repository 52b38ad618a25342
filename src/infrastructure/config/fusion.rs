//! Fusion strategy selection.

use std::fmt;
use std::path::PathBuf;

use serde::Deserialize;

/// Available fusion strategies. Chosen once at startup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FusionStrategy {
    /// Training-free weighted average of normalized signals.
    #[default]
    WeightedEnsemble,
    /// Offline-trained logistic classifier.
    TrainedClassifier,
}

impl fmt::Display for FusionStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WeightedEnsemble => f.write_str("weighted_ensemble"),
            Self::TrainedClassifier => f.write_str("trained_classifier"),
        }
    }
}

/// Fusion configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FusionConfig {
    #[serde(default)]
    pub strategy: FusionStrategy,
    /// Classifier model file; required for `trained_classifier`.
    #[serde(default)]
    pub model_path: Option<PathBuf>,
}
