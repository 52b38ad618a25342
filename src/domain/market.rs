//! Market snapshots handed to the decision core.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::feature::QuantFeatureSet;
use super::id::Ticker;

/// Everything the decision core needs about one market in one scan cycle.
///
/// The fundamental probability comes from the research collaborator and the
/// features from the indicator pipeline; both are computed elsewhere.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketSnapshot {
    pub ticker: Ticker,
    #[serde(default)]
    pub title: String,
    /// Current ask for YES, in cents.
    pub yes_ask: u32,
    /// Contracts traded; used for the liquidity filter.
    #[serde(default)]
    pub volume: u64,
    pub fundamental_prob: f64,
    #[serde(default)]
    pub quant_features: QuantFeatureSet,
    /// Market close time, when the venue reports one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiration: Option<DateTime<Utc>>,
}

impl MarketSnapshot {
    /// Hours from `now` until the market closes, floored at zero.
    #[must_use]
    pub fn hours_until_close(&self, now: DateTime<Utc>) -> Option<f64> {
        self.expiration.map(|close| {
            let millis = (close - now).num_milliseconds() as f64;
            (millis / 3_600_000.0).max(0.0)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn closing_at(expiration: Option<DateTime<Utc>>) -> MarketSnapshot {
        MarketSnapshot {
            ticker: Ticker::from("SENATE-PA"),
            title: String::new(),
            yes_ask: 42,
            volume: 0,
            fundamental_prob: 0.61,
            quant_features: QuantFeatureSet::default(),
            expiration,
        }
    }

    #[test]
    fn hours_until_close_counts_forward() {
        let now = Utc::now();
        let snapshot = closing_at(Some(now + Duration::minutes(150)));
        assert_eq!(snapshot.hours_until_close(now), Some(2.5));
    }

    #[test]
    fn closed_market_has_zero_hours_left() {
        let now = Utc::now();
        let snapshot = closing_at(Some(now - Duration::hours(3)));
        assert_eq!(snapshot.hours_until_close(now), Some(0.0));
        assert_eq!(closing_at(None).hours_until_close(now), None);
    }

    #[test]
    fn deserializes_without_optional_fields() {
        let json = r#"{"ticker": "SENATE-PA", "yes_ask": 42, "fundamental_prob": 0.61}"#;
        let snapshot: MarketSnapshot = serde_json::from_str(json).unwrap();

        assert_eq!(snapshot.ticker.as_str(), "SENATE-PA");
        assert_eq!(snapshot.volume, 0);
        assert!(snapshot.quant_features.is_empty());
        assert!(snapshot.expiration.is_none());
    }
}
