//! Fractional-Kelly position sizing.
//!
//! Sizing treats the contract as an even-money bet on the model's probability,
//! bets a fixed fraction of full Kelly, and caps the stake at the configured
//! max position. Two overrides keep a genuine high-edge opportunity from
//! rounding down to zero contracts: a $1 minimum stake above the edge
//! threshold, and a one-contract minimum above 1.5x the threshold.

use rust_decimal::prelude::ToPrimitive;

use super::limits::RiskLimits;
use crate::domain::{
    outcome::Outcome,
    probability::{implied_probability, is_tradable_price},
    sizing::PositionSizingResult,
};

const MIN_STAKE_DOLLARS: f64 = 1.0;
const MIN_CONTRACT_EDGE_MULTIPLE: f64 = 1.5;

/// Converts edge into a contract count under capital limits.
#[derive(Debug, Clone)]
pub struct PositionSizer {
    limits: RiskLimits,
}

impl PositionSizer {
    /// Create a sizer bound to the given limits.
    #[must_use]
    pub const fn new(limits: RiskLimits) -> Self {
        Self { limits }
    }

    /// Size a YES purchase at `price_cents` given the model's `edge`.
    ///
    /// Non-positive edge always yields zero contracts. Unusable inputs degrade
    /// to zero contracts rather than failing.
    #[must_use]
    pub fn size(&self, edge: f64, price_cents: u32) -> Outcome<PositionSizingResult> {
        if !edge.is_finite() {
            return Outcome::degraded(PositionSizingResult::none(), format!("edge is {edge}"));
        }
        if edge <= 0.0 {
            return Outcome::Nominal(PositionSizingResult::none());
        }
        if !is_tradable_price(i64::from(price_cents)) {
            return Outcome::degraded(
                PositionSizingResult::none(),
                format!("price {price_cents}¢ is not tradable"),
            );
        }
        let Some(max_position) = self.limits.max_position_dollars.to_f64() else {
            return Outcome::degraded(
                PositionSizingResult::none(),
                "max position is not representable",
            );
        };

        let market_prob = implied_probability(price_cents);
        let our_prob = (market_prob + edge).clamp(0.01, 0.99);

        let kelly_raw = our_prob - (1.0 - our_prob);
        let kelly_adjusted = kelly_raw * self.limits.kelly_fraction;

        let mut position_dollars = max_position
            .min(kelly_adjusted * max_position / self.limits.max_portfolio_risk_fraction);
        if !position_dollars.is_finite() {
            return Outcome::degraded(
                PositionSizingResult::none(),
                format!("position size is {position_dollars}"),
            );
        }

        let threshold = self.limits.min_edge_threshold;
        if position_dollars < MIN_STAKE_DOLLARS && edge > threshold {
            position_dollars = MIN_STAKE_DOLLARS;
        }

        // Saturating cast; a negative Kelly stake floors to zero.
        let mut contracts = (position_dollars / market_prob).floor().max(0.0) as u32;
        if contracts == 0 && edge > MIN_CONTRACT_EDGE_MULTIPLE * threshold {
            contracts = 1;
        }

        Outcome::Nominal(PositionSizingResult {
            contracts,
            kelly_raw,
            kelly_adjusted,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn sizer() -> PositionSizer {
        PositionSizer::new(RiskLimits::default())
    }

    #[test]
    fn non_positive_edge_never_buys() {
        for price in [1, 10, 50, 90, 99] {
            for edge in [0.0, -0.01, -0.5, -1.0] {
                let result = sizer().size(edge, price);
                assert_eq!(result.value().contracts, 0, "edge {edge} at {price}¢");
                assert!(!result.is_degraded());
            }
        }
    }

    #[test]
    fn even_money_kelly_at_fifty_cents() {
        let result = sizer().size(0.20, 50).into_value();

        assert!((result.kelly_raw - 0.40).abs() < 1e-9);
        assert!((result.kelly_adjusted - 0.10).abs() < 1e-9);
        // $100 cap at 50¢ allows at most 200 contracts.
        assert!(result.contracts > 0 && result.contracts <= 200);
    }

    #[test]
    fn position_is_capped_at_max_dollars() {
        let result = sizer().size(0.45, 50).into_value();
        assert_eq!(result.contracts, 200);
    }

    #[test]
    fn reference_forecast_at_forty_cents() {
        let result = sizer().size(0.1623, 40).into_value();
        // 0.25 * (2 * 0.5623 - 1) * $100 / 0.10 = $31.15 -> 77 contracts at 40¢
        assert_eq!(result.contracts, 77);
    }

    #[test]
    fn minimum_stake_override_buys_at_least_one_dollar() {
        let limits = RiskLimits {
            max_position_dollars: dec!(2),
            min_edge_threshold: 0.01,
            ..RiskLimits::default()
        };
        // Kelly stake: 0.25 * 0.04 * 2 / 0.1 = $0.20, forced up to $1.
        let result = PositionSizer::new(limits).size(0.02, 50).into_value();
        assert_eq!(result.contracts, 2);
    }

    #[test]
    fn minimum_stake_buys_one_expensive_contract() {
        let limits = RiskLimits {
            max_position_dollars: dec!(0.5),
            min_edge_threshold: 0.02,
            ..RiskLimits::default()
        };
        // The $0.50 Kelly stake is raised to $1, which covers one 95¢ contract.
        let result = PositionSizer::new(limits).size(0.04, 95).into_value();
        assert_eq!(result.contracts, 1);
    }

    #[test]
    fn negative_kelly_without_override_buys_nothing() {
        let limits = RiskLimits {
            min_edge_threshold: 0.5,
            ..RiskLimits::default()
        };
        // our_prob 0.30 gives a negative even-money Kelly fraction.
        let result = PositionSizer::new(limits).size(0.10, 20).into_value();
        assert_eq!(result.contracts, 0);
        assert!(result.kelly_raw < 0.0);
    }

    #[test]
    fn untradable_price_degrades_to_zero() {
        let result = sizer().size(0.2, 0);
        assert!(result.is_degraded());
        assert_eq!(result.value().contracts, 0);

        assert!(sizer().size(0.2, 100).is_degraded());
    }

    #[test]
    fn non_finite_edge_degrades_to_zero() {
        let result = sizer().size(f64::NAN, 50);
        assert!(result.is_degraded());
        assert_eq!(result.value().contracts, 0);
    }
}
