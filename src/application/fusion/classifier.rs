//! Fusion through an offline-trained logistic classifier.
//!
//! The model is a standard-scaled logistic regression exported as JSON. Its
//! linear score is the log-odds of `classes[1]`; the reported probability is
//! the probability of the configured `positive_class`, so the class column is
//! always chosen by name.
//!
//! ```json
//! {
//!   "feature_names": ["rsi_14", "macd_hist", "fundamental_prob"],
//!   "scaler": { "mean": [50.0, 0.0, 0.5], "scale": [15.0, 0.05, 0.2] },
//!   "coefficients": [-0.2, 0.6, 1.4],
//!   "intercept": 0.0,
//!   "classes": ["no", "yes"],
//!   "positive_class": "yes"
//! }
//! ```

use std::path::Path;

use serde::Deserialize;
use tracing::{info, warn};

use crate::domain::{feature::QuantFeatureSet, outcome::Outcome, probability::clamp_forecast};
use crate::error::{Error, Result};
use crate::port::inbound::fusion::Fuser;

/// Feature name under which the fundamental probability is exposed to the model.
pub const FUNDAMENTAL_FEATURE: &str = "fundamental_prob";

const NEUTRAL: f64 = 0.5;

/// Standard-scaler parameters, one entry per feature.
#[derive(Debug, Clone, Deserialize)]
pub struct ScalerParams {
    pub mean: Vec<f64>,
    pub scale: Vec<f64>,
}

/// Serialized logistic model.
#[derive(Debug, Clone, Deserialize)]
pub struct ClassifierModel {
    pub feature_names: Vec<String>,
    pub scaler: ScalerParams,
    pub coefficients: Vec<f64>,
    pub intercept: f64,
    pub classes: Vec<String>,
    pub positive_class: String,
}

impl ClassifierModel {
    /// Parse and validate a model from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        let model: Self = serde_json::from_str(json)?;
        model.validate()?;
        Ok(model)
    }

    /// Load and validate a model file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    fn validate(&self) -> Result<()> {
        let width = self.feature_names.len();
        if width == 0 {
            return Err(Error::Parse("model has no features".into()));
        }
        if self.scaler.mean.len() != width
            || self.scaler.scale.len() != width
            || self.coefficients.len() != width
        {
            return Err(Error::Parse(format!(
                "model expects {width} features but scaler/coefficients disagree"
            )));
        }
        if self.classes.len() != 2 {
            return Err(Error::Parse(format!(
                "binary model needs 2 classes, got {}",
                self.classes.len()
            )));
        }
        self.positive_column()?;
        Ok(())
    }

    /// Column of the positive class in `classes`.
    pub fn positive_column(&self) -> Result<usize> {
        self.classes
            .iter()
            .position(|class| class == &self.positive_class)
            .ok_or_else(|| {
                Error::Parse(format!(
                    "positive class '{}' not in {:?}",
                    self.positive_class, self.classes
                ))
            })
    }

    /// Probability of each class for one feature row, in `classes` order.
    #[must_use]
    pub fn predict_proba(&self, row: &[f64]) -> [f64; 2] {
        let score = row
            .iter()
            .zip(&self.scaler.mean)
            .zip(&self.scaler.scale)
            .zip(&self.coefficients)
            .fold(self.intercept, |acc, (((x, mean), scale), coef)| {
                // Constant features are exported with zero scale.
                let scale = if *scale == 0.0 { 1.0 } else { *scale };
                acc + coef * (x - mean) / scale
            });
        let second = 1.0 / (1.0 + (-score).exp());
        [1.0 - second, second]
    }
}

/// Fuser backed by a trained classifier.
///
/// A missing or invalid model does not stop the process; the fuser then
/// degrades every forecast to 0.5.
#[derive(Debug, Clone)]
pub struct ClassifierFuser {
    model: std::result::Result<ClassifierModel, String>,
}

impl ClassifierFuser {
    /// Create a fuser from a model, rejecting one that fails validation.
    pub fn new(model: ClassifierModel) -> Result<Self> {
        model.validate()?;
        Ok(Self { model: Ok(model) })
    }

    /// Load the model at `path`, degrading if it cannot be used.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        match ClassifierModel::load(path) {
            Ok(model) => {
                info!(path = %path.display(), features = model.feature_names.len(), "Classifier model loaded");
                Self { model: Ok(model) }
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Classifier model unavailable, forecasts will be neutral");
                Self::unloaded(e.to_string())
            }
        }
    }

    /// A fuser without a model; every forecast degrades to 0.5.
    pub fn unloaded(reason: impl std::fmt::Display) -> Self {
        Self {
            model: Err(format!("no model loaded: {reason}")),
        }
    }

    /// Return `true` if a usable model is loaded.
    #[must_use]
    pub const fn is_loaded(&self) -> bool {
        self.model.is_ok()
    }

    fn feature_row(
        model: &ClassifierModel,
        fundamental_prob: f64,
        features: &QuantFeatureSet,
    ) -> std::result::Result<Vec<f64>, String> {
        model
            .feature_names
            .iter()
            .map(|name| {
                let value = if name == FUNDAMENTAL_FEATURE {
                    Some(fundamental_prob)
                } else {
                    features.get(name)
                };
                match value {
                    Some(v) if v.is_finite() => Ok(v),
                    Some(v) => Err(format!("feature {name} is {v}")),
                    None => Err(format!("missing feature {name}")),
                }
            })
            .collect()
    }
}

impl Fuser for ClassifierFuser {
    fn name(&self) -> &'static str {
        "trained_classifier"
    }

    fn requires_training(&self) -> bool {
        true
    }

    fn fuse(&self, fundamental_prob: f64, features: &QuantFeatureSet) -> Outcome<f64> {
        let model = match &self.model {
            Ok(model) => model,
            Err(reason) => return Outcome::degraded(NEUTRAL, reason.clone()),
        };

        let row = match Self::feature_row(model, fundamental_prob, features) {
            Ok(row) => row,
            Err(reason) => return Outcome::degraded(NEUTRAL, reason),
        };

        let column = match model.positive_column() {
            Ok(column) => column,
            Err(e) => return Outcome::degraded(NEUTRAL, e.to_string()),
        };

        let Some(&probability) = model.predict_proba(&row).get(column) else {
            return Outcome::degraded(NEUTRAL, format!("no probability for class column {column}"));
        };
        if !probability.is_finite() {
            return Outcome::degraded(NEUTRAL, format!("model produced {probability}"));
        }
        Outcome::Nominal(clamp_forecast(probability))
    }
}
