//! Quantitative features consumed by the signal normalizer.
//!
//! Feature values are produced by an external indicator pipeline; the core
//! treats them as already-computed numbers. Every key is optional and falls
//! back to a documented default when absent.

use serde::{Deserialize, Serialize};

/// RSI assumed when `rsi_14` is absent (neutral).
pub const DEFAULT_RSI: f64 = 50.0;

/// Hours to expiration assumed when `hours_to_expiration` is absent.
pub const DEFAULT_HOURS_TO_EXPIRATION: f64 = 24.0;

/// Names of the recognized feature keys, in canonical order.
pub const FEATURE_KEYS: [&str; 5] = [
    "rsi_14",
    "macd_hist",
    "obv",
    "volume_sma_5",
    "hours_to_expiration",
];

/// Technical features for one market in one scan cycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct QuantFeatureSet {
    /// 14-period RSI, 0-100.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rsi_14: Option<f64>,
    /// MACD histogram (signed).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub macd_hist: Option<f64>,
    /// On-balance volume (signed, cumulative).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub obv: Option<f64>,
    /// 5-period simple moving average of volume.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volume_sma_5: Option<f64>,
    /// Hours until the market resolves.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hours_to_expiration: Option<f64>,
}

impl QuantFeatureSet {
    /// Return `true` when no feature is present.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.rsi_14.is_none()
            && self.macd_hist.is_none()
            && self.obv.is_none()
            && self.volume_sma_5.is_none()
            && self.hours_to_expiration.is_none()
    }

    /// RSI, or the neutral default.
    #[must_use]
    pub fn rsi(&self) -> f64 {
        self.rsi_14.unwrap_or(DEFAULT_RSI)
    }

    /// Hours to expiration, or the one-day default.
    #[must_use]
    pub fn hours_remaining(&self) -> f64 {
        self.hours_to_expiration.unwrap_or(DEFAULT_HOURS_TO_EXPIRATION)
    }

    /// Look up a feature by its key name.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<f64> {
        match key {
            "rsi_14" => self.rsi_14,
            "macd_hist" => self.macd_hist,
            "obv" => self.obv,
            "volume_sma_5" => self.volume_sma_5,
            "hours_to_expiration" => self.hours_to_expiration,
            _ => None,
        }
    }

    /// Name of the first present feature that is NaN or infinite.
    #[must_use]
    pub fn first_non_finite(&self) -> Option<&'static str> {
        FEATURE_KEYS
            .iter()
            .find(|key| self.get(key).is_some_and(|value| !value.is_finite()))
            .copied()
    }
}
