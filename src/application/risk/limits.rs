//! Capital and safety limits for sizing and validation.

use rust_decimal::Decimal;

/// Risk limits injected into the sizer and the validator.
#[derive(Debug, Clone, PartialEq)]
pub struct RiskLimits {
    /// Maximum notional risked on a single order, in dollars.
    pub max_position_dollars: Decimal,
    /// Fraction of full Kelly to bet.
    pub kelly_fraction: f64,
    /// Fraction of capital the max position represents.
    pub max_portfolio_risk_fraction: f64,
    /// Minimum edge required before sizing a position.
    pub min_edge_threshold: f64,
    /// Hard ceiling on contracts per order, independent of capital.
    pub max_contracts: u32,
}

impl Default for RiskLimits {
    fn default() -> Self {
        Self {
            max_position_dollars: Decimal::from(100),
            kelly_fraction: 0.25,
            max_portfolio_risk_fraction: 0.10,
            min_edge_threshold: 0.08,
            max_contracts: 1000,
        }
    }
}
