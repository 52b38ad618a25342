//! Builders for domain primitives used across tests.
//!
//! Provides concise factory functions for [`MarketSnapshot`],
//! [`QuantFeatureSet`], and related types so tests focus on assertions
//! rather than construction boilerplate.

use crate::domain::feature::QuantFeatureSet;
use crate::domain::id::Ticker;
use crate::domain::market::MarketSnapshot;
use crate::domain::trade::{Side, TradeRecord};

/// Create a [`Ticker`] from a string.
pub fn ticker(id: &str) -> Ticker {
    Ticker::new(id)
}

/// The reference feature set: RSI 45, MACD 0.02, OBV 5000, volume 1000, 48h.
pub fn reference_features() -> QuantFeatureSet {
    QuantFeatureSet {
        rsi_14: Some(45.0),
        macd_hist: Some(0.02),
        obv: Some(5000.0),
        volume_sma_5: Some(1000.0),
        hours_to_expiration: Some(48.0),
    }
}

/// A liquid market with the reference features.
///
/// With default config, fundamental 0.65 at 40¢ is a BUY and at 60¢ a SKIP.
pub fn market(ticker: &str, fundamental_prob: f64, yes_ask: u32) -> MarketSnapshot {
    MarketSnapshot {
        ticker: Ticker::new(ticker),
        title: format!("{ticker} market"),
        yes_ask,
        volume: 5_000,
        fundamental_prob,
        quant_features: reference_features(),
        expiration: None,
    }
}

/// A market below the default liquidity floor.
pub fn illiquid_market(ticker: &str) -> MarketSnapshot {
    MarketSnapshot {
        volume: 10,
        ..market(ticker, 0.65, 40)
    }
}

/// A market with no technical features.
pub fn featureless_market(ticker: &str) -> MarketSnapshot {
    MarketSnapshot {
        quant_features: QuantFeatureSet::default(),
        ..market(ticker, 0.65, 40)
    }
}

/// A YES trade record stamped now.
pub fn trade(ticker: &str, count: u32, price_cents: u32, edge: f64) -> TradeRecord {
    TradeRecord::now(Ticker::new(ticker), Side::Yes, count, price_cents, edge)
}
