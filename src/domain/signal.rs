//! Probability-space signals and their static weights.
//!
//! A signal is a named value in probability space. The set of names is fixed
//! and each name carries a process-wide weight; the weights sum to 1.0 and
//! are never changed at runtime.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Recognized signal names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SignalName {
    /// Research-derived probability, passed through unchanged.
    Fundamental,
    /// Logistic transform of the MACD histogram.
    Momentum,
    /// Piecewise RSI reversion signal.
    MeanReversion,
    /// OBV relative to average volume.
    Volume,
    /// Fundamental pushed toward its favored extreme as expiry nears.
    TimeDecay,
}

impl SignalName {
    /// Every signal name, in canonical order.
    pub const ALL: [Self; 5] = [
        Self::Fundamental,
        Self::Momentum,
        Self::MeanReversion,
        Self::Volume,
        Self::TimeDecay,
    ];

    /// Snake-case label used in config and logs.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Fundamental => "fundamental",
            Self::Momentum => "momentum",
            Self::MeanReversion => "mean_reversion",
            Self::Volume => "volume",
            Self::TimeDecay => "time_decay",
        }
    }

    const fn index(self) -> usize {
        match self {
            Self::Fundamental => 0,
            Self::Momentum => 1,
            Self::MeanReversion => 2,
            Self::Volume => 3,
            Self::TimeDecay => 4,
        }
    }
}

impl fmt::Display for SignalName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Static weight assigned to each signal name.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SignalWeights {
    pub fundamental: f64,
    pub momentum: f64,
    pub mean_reversion: f64,
    pub volume: f64,
    pub time_decay: f64,
}

impl SignalWeights {
    /// Weight for a signal name.
    #[must_use]
    pub const fn weight(&self, name: SignalName) -> f64 {
        match name {
            SignalName::Fundamental => self.fundamental,
            SignalName::Momentum => self.momentum,
            SignalName::MeanReversion => self.mean_reversion,
            SignalName::Volume => self.volume,
            SignalName::TimeDecay => self.time_decay,
        }
    }

    /// Sum of all weights.
    #[must_use]
    pub fn total(&self) -> f64 {
        SignalName::ALL.iter().map(|name| self.weight(*name)).sum()
    }

    /// Iterate `(name, weight)` pairs in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (SignalName, f64)> + '_ {
        SignalName::ALL.iter().map(|name| (*name, self.weight(*name)))
    }
}

impl Default for SignalWeights {
    fn default() -> Self {
        Self {
            fundamental: 0.40,
            momentum: 0.25,
            mean_reversion: 0.15,
            volume: 0.10,
            time_decay: 0.10,
        }
    }
}

/// Signals computed for one market, keyed by name.
///
/// A name without a value is "absent" and excluded from fusion.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SignalSet {
    values: [Option<f64>; 5],
}

impl SignalSet {
    /// Create an empty signal set.
    #[must_use]
    pub const fn new() -> Self {
        Self { values: [None; 5] }
    }

    /// Signal set holding only the fundamental probability.
    #[must_use]
    pub fn fundamental_only(fundamental: f64) -> Self {
        let mut set = Self::new();
        set.insert(SignalName::Fundamental, fundamental);
        set
    }

    /// Set the value of a signal.
    pub fn insert(&mut self, name: SignalName, value: f64) {
        self.values[name.index()] = Some(value);
    }

    /// Value of a signal, if present.
    #[must_use]
    pub const fn get(&self, name: SignalName) -> Option<f64> {
        self.values[name.index()]
    }

    /// Number of present signals.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.iter().filter(|value| value.is_some()).count()
    }

    /// Return `true` if no signal is present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate present signals in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (SignalName, f64)> + '_ {
        SignalName::ALL
            .iter()
            .filter_map(|name| self.get(*name).map(|value| (*name, value)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_weights_sum_to_one() {
        let weights = SignalWeights::default();
        assert!((weights.total() - 1.0).abs() < 1e-12);
        assert_eq!(weights.weight(SignalName::Momentum), 0.25);
    }

    #[test]
    fn signal_set_tracks_presence() {
        let mut set = SignalSet::new();
        assert!(set.is_empty());
        set.insert(SignalName::Volume, 0.52);
        set.insert(SignalName::Fundamental, 0.65);

        assert_eq!(set.len(), 2);
        assert_eq!(set.get(SignalName::Volume), Some(0.52));
        assert_eq!(set.get(SignalName::Momentum), None);

        let names: Vec<_> = set.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec![SignalName::Fundamental, SignalName::Volume]);
    }

    #[test]
    fn names_round_trip_through_serde() {
        let json = serde_json::to_string(&SignalName::MeanReversion).unwrap();
        assert_eq!(json, "\"mean_reversion\"");
        assert_eq!(SignalName::TimeDecay.to_string(), "time_decay");
    }
}
