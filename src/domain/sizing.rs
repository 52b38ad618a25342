//! Position sizing result.

use serde::Serialize;

/// Contract count and the Kelly fractions that produced it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct PositionSizingResult {
    /// Contracts to buy; zero means do not trade.
    pub contracts: u32,
    /// Full Kelly fraction for an even-money payoff.
    pub kelly_raw: f64,
    /// Kelly fraction after applying the configured fraction.
    pub kelly_adjusted: f64,
}

impl PositionSizingResult {
    /// A result that buys nothing.
    #[must_use]
    pub const fn none() -> Self {
        Self {
            contracts: 0,
            kelly_raw: 0.0,
            kelly_adjusted: 0.0,
        }
    }
}
