//! Weighted-ensemble fusion with confidence dampening.
//!
//! The hybrid probability is the weighted mean of the present signals, pulled
//! toward 0.5 by a confidence constant and clamped to the forecast band so the
//! ensemble never reports near-certainty.

use tracing::debug;

use super::normalizer::SignalNormalizer;
use crate::domain::{
    feature::QuantFeatureSet,
    outcome::Outcome,
    probability::{clamp_forecast, clamp_unit},
    signal::{SignalSet, SignalWeights},
};
use crate::port::inbound::fusion::{Fuser, FuserDiagnostics};

/// Default confidence constant applied after averaging.
pub const DEFAULT_CONFIDENCE: f64 = 0.7;

/// Training-free fusion of fundamental and technical signals.
#[derive(Debug, Clone)]
pub struct EnsembleFuser {
    weights: SignalWeights,
    confidence: f64,
    normalizer: SignalNormalizer,
}

impl EnsembleFuser {
    /// Create a fuser with the given weights and confidence constant.
    #[must_use]
    pub const fn new(weights: SignalWeights, confidence: f64) -> Self {
        Self {
            weights,
            confidence,
            normalizer: SignalNormalizer::new(),
        }
    }

    /// Static weight table.
    #[must_use]
    pub const fn weights(&self) -> &SignalWeights {
        &self.weights
    }

    /// Signals that feed the weighted mean.
    ///
    /// An empty feature set bypasses normalization: only the fundamental
    /// signal is present.
    #[must_use]
    pub fn signal_set(&self, fundamental_prob: f64, features: &QuantFeatureSet) -> SignalSet {
        if features.is_empty() {
            SignalSet::fundamental_only(fundamental_prob)
        } else {
            self.normalizer.normalize(fundamental_prob, features)
        }
    }

    /// Weighted mean over present signals, `None` if their weights sum to zero.
    #[must_use]
    pub fn weighted_mean(&self, signals: &SignalSet) -> Option<f64> {
        let (weighted_sum, total_weight) = signals.iter().fold(
            (0.0, 0.0),
            |(sum, total), (name, value)| {
                let weight = self.weights.weight(name);
                (sum + value * weight, total + weight)
            },
        );

        (total_weight > 0.0).then(|| weighted_sum / total_weight)
    }

    /// Pull a probability toward 0.5 and clamp it to the forecast band.
    #[must_use]
    pub fn dampen(&self, probability: f64) -> f64 {
        clamp_forecast(0.5 + (probability - 0.5) * self.confidence)
    }
}

impl Default for EnsembleFuser {
    fn default() -> Self {
        Self::new(SignalWeights::default(), DEFAULT_CONFIDENCE)
    }
}

impl Fuser for EnsembleFuser {
    fn name(&self) -> &'static str {
        "weighted_ensemble"
    }

    fn requires_training(&self) -> bool {
        false
    }

    fn fuse(&self, fundamental_prob: f64, features: &QuantFeatureSet) -> Outcome<f64> {
        if !fundamental_prob.is_finite() {
            return Outcome::degraded(0.5, format!("fundamental_prob is {fundamental_prob}"));
        }
        let fallback = clamp_unit(fundamental_prob);

        if let Some(key) = features.first_non_finite() {
            return Outcome::degraded(fallback, format!("feature {key} is not finite"));
        }

        let signals = self.signal_set(fundamental_prob, features);
        let Some(mean) = self.weighted_mean(&signals) else {
            return Outcome::degraded(fallback, "present signals carry no weight");
        };
        if !mean.is_finite() {
            return Outcome::degraded(fallback, format!("weighted mean is {mean}"));
        }

        let hybrid = self.dampen(mean);
        debug!(
            signals = signals.len(),
            weighted_mean = mean,
            hybrid,
            "Ensemble forecast"
        );
        Outcome::Nominal(hybrid)
    }

    fn signals(&self, fundamental_prob: f64, features: &QuantFeatureSet) -> Option<SignalSet> {
        Some(self.signal_set(fundamental_prob, features))
    }

    fn diagnostics(&self) -> FuserDiagnostics {
        FuserDiagnostics {
            strategy_type: self.name(),
            requires_training: self.requires_training(),
            weights: Some(self.weights),
            confidence: Some(self.confidence),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::signal::SignalName;

    fn reference_features() -> QuantFeatureSet {
        QuantFeatureSet {
            rsi_14: Some(45.0),
            macd_hist: Some(0.02),
            obv: Some(5000.0),
            volume_sma_5: Some(1000.0),
            hours_to_expiration: Some(48.0),
        }
    }

    #[test]
    fn reference_inputs_fuse_to_expected_forecast() {
        let fuser = EnsembleFuser::default();
        let signals = fuser.signal_set(0.65, &reference_features());
        let mean = fuser.weighted_mean(&signals).unwrap();

        assert!((mean - 0.589).abs() < 0.005, "weighted mean {mean}");

        let hybrid = fuser.fuse(0.65, &reference_features());
        assert!(!hybrid.is_degraded());
        assert!((hybrid.value() - 0.564).abs() < 0.005, "hybrid {}", hybrid.value());
    }

    #[test]
    fn empty_features_short_circuit_to_fundamental() {
        let fuser = EnsembleFuser::default();
        let outcome = fuser.fuse(0.5, &QuantFeatureSet::default());
        assert_eq!(outcome, Outcome::Nominal(0.5));

        let signals = fuser.signal_set(0.5, &QuantFeatureSet::default());
        assert_eq!(signals.len(), 1);
        assert_eq!(signals.get(SignalName::Fundamental), Some(0.5));
    }

    #[test]
    fn dampening_pulls_toward_neutral() {
        let fuser = EnsembleFuser::default();
        assert!((fuser.dampen(0.8) - 0.71).abs() < 1e-9);
        assert!((fuser.dampen(0.2) - 0.29).abs() < 1e-9);
    }

    #[test]
    fn forecast_stays_in_band_for_extreme_signals() {
        let fuser = EnsembleFuser::default();
        let extremes = [-1.0e6, -500.0, -1.0, 0.0, 1.0, 500.0, 1.0e6];

        for fundamental in [0.0, 0.01, 0.5, 0.99, 1.0] {
            for value in extremes {
                let features = QuantFeatureSet {
                    rsi_14: Some(value),
                    macd_hist: Some(value),
                    obv: Some(value.abs()),
                    volume_sma_5: Some(1.0),
                    hours_to_expiration: Some(value.abs()),
                };
                let hybrid = *fuser.fuse(fundamental, &features).value();
                assert!(
                    (0.05..=0.95).contains(&hybrid),
                    "fundamental {fundamental}, extreme {value} gave {hybrid}"
                );
            }
        }
    }

    #[test]
    fn weights_are_renormalized_over_present_signals() {
        let fuser = EnsembleFuser::default();
        let mut signals = SignalSet::new();
        signals.insert(SignalName::Fundamental, 0.8);
        signals.insert(SignalName::Volume, 0.3);

        // (0.8 * 0.40 + 0.3 * 0.10) / 0.50
        let mean = fuser.weighted_mean(&signals).unwrap();
        assert!((mean - 0.7).abs() < 1e-9);
    }

    #[test]
    fn non_finite_feature_degrades_to_fundamental() {
        let fuser = EnsembleFuser::default();
        let features = QuantFeatureSet {
            obv: Some(f64::INFINITY),
            ..reference_features()
        };
        let outcome = fuser.fuse(0.65, &features);

        assert!(outcome.is_degraded());
        assert_eq!(*outcome.value(), 0.65);
    }

    #[test]
    fn non_finite_fundamental_degrades_to_neutral() {
        let outcome = EnsembleFuser::default().fuse(f64::NAN, &reference_features());
        assert!(outcome.is_degraded());
        assert_eq!(*outcome.value(), 0.5);
    }

    #[test]
    fn zero_weight_signal_set_degrades() {
        let weights = SignalWeights {
            fundamental: 0.0,
            momentum: 0.4,
            mean_reversion: 0.3,
            volume: 0.2,
            time_decay: 0.1,
        };
        let fuser = EnsembleFuser::new(weights, DEFAULT_CONFIDENCE);
        let outcome = fuser.fuse(0.7, &QuantFeatureSet::default());

        assert!(outcome.is_degraded());
        assert_eq!(*outcome.value(), 0.7);
    }
}
