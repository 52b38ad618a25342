//! Conversion of raw features into probability-space signals.
//!
//! Each rule reads its own inputs only; no signal feeds another except that
//! `time_decay` is derived from the fundamental probability.

use crate::domain::{
    feature::QuantFeatureSet,
    signal::{SignalName, SignalSet},
};

/// Steepness of the logistic applied to the MACD histogram.
const MOMENTUM_STEEPNESS: f64 = 10.0;

/// OBV-to-average-volume ratio at which the volume signal saturates.
const VOLUME_RATIO_CAP: f64 = 10.0;

const NEUTRAL: f64 = 0.5;

/// Maps a [`QuantFeatureSet`] plus the fundamental probability to a [`SignalSet`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SignalNormalizer;

impl SignalNormalizer {
    /// Create a normalizer.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Compute all five signals.
    #[must_use]
    pub fn normalize(&self, fundamental_prob: f64, features: &QuantFeatureSet) -> SignalSet {
        let mut signals = SignalSet::new();
        signals.insert(SignalName::Fundamental, fundamental_prob);
        signals.insert(
            SignalName::Momentum,
            Self::momentum(features.macd_hist.unwrap_or(0.0)),
        );
        signals.insert(SignalName::MeanReversion, Self::mean_reversion(features.rsi()));
        signals.insert(
            SignalName::Volume,
            Self::volume(
                features.obv.unwrap_or(0.0),
                features.volume_sma_5.unwrap_or(0.0),
            ),
        );
        signals.insert(
            SignalName::TimeDecay,
            Self::time_decay(fundamental_prob, features.hours_remaining()),
        );
        signals
    }

    /// Logistic transform of the MACD histogram; neutral when flat.
    #[must_use]
    pub fn momentum(macd_hist: f64) -> f64 {
        if macd_hist == 0.0 {
            return NEUTRAL;
        }
        1.0 / (1.0 + (-MOMENTUM_STEEPNESS * macd_hist).exp())
    }

    /// Piecewise RSI reversion signal.
    ///
    /// Oversold (< 30) reads bullish and overbought (> 70) bearish, with a mild
    /// linear lean in between. Not clamped here: extreme RSI can leave [0, 1]
    /// until the ensemble clamps the fused value.
    #[must_use]
    pub fn mean_reversion(rsi: f64) -> f64 {
        if rsi < 30.0 {
            0.7 + (30.0 - rsi) * 0.01
        } else if rsi > 70.0 {
            0.3 - (rsi - 70.0) * 0.01
        } else {
            0.5 + (50.0 - rsi) * 0.002
        }
    }

    /// OBV relative to average volume, compressed around neutral.
    #[must_use]
    pub fn volume(obv: f64, volume_sma_5: f64) -> f64 {
        if volume_sma_5 > 0.0 && obv > 0.0 {
            let ratio = (obv / volume_sma_5).min(VOLUME_RATIO_CAP) / VOLUME_RATIO_CAP;
            NEUTRAL + (ratio - NEUTRAL) * 0.5
        } else {
            NEUTRAL
        }
    }

    /// Push the fundamental toward the extreme it already favors as expiry nears.
    #[must_use]
    pub fn time_decay(fundamental_prob: f64, hours_to_expiration: f64) -> f64 {
        let (step, floor, ceiling) = if hours_to_expiration < 6.0 {
            (0.2, 0.05, 0.95)
        } else if hours_to_expiration < 24.0 {
            (0.1, 0.1, 0.9)
        } else {
            return fundamental_prob;
        };

        if fundamental_prob > NEUTRAL {
            (fundamental_prob + step).min(ceiling)
        } else {
            (fundamental_prob - step).max(floor)
        }
    }
}
