//! Risk and sizing configuration.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::application::risk::limits::RiskLimits;

/// Risk management configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct RiskConfig {
    /// Maximum notional per order in dollars.
    #[serde(default = "default_max_position_dollars")]
    pub max_position_dollars: Decimal,
    /// Fraction of full Kelly to bet (0.25 = quarter Kelly).
    #[serde(default = "default_kelly_fraction")]
    pub kelly_fraction: f64,
    /// Share of capital represented by the max position.
    #[serde(default = "default_max_portfolio_risk_fraction")]
    pub max_portfolio_risk_fraction: f64,
    /// Minimum edge before a position is sized.
    #[serde(default = "default_min_edge_threshold")]
    pub min_edge_threshold: f64,
    /// Hard ceiling on contracts per order.
    #[serde(default = "default_max_contracts")]
    pub max_contracts: u32,
}

fn default_max_position_dollars() -> Decimal {
    Decimal::from(100)
}

const fn default_kelly_fraction() -> f64 {
    0.25
}

const fn default_max_portfolio_risk_fraction() -> f64 {
    0.10
}

const fn default_min_edge_threshold() -> f64 {
    0.08
}

const fn default_max_contracts() -> u32 {
    1000
}

impl Default for RiskConfig {
    fn default() -> Self {
        Self {
            max_position_dollars: default_max_position_dollars(),
            kelly_fraction: default_kelly_fraction(),
            max_portfolio_risk_fraction: default_max_portfolio_risk_fraction(),
            min_edge_threshold: default_min_edge_threshold(),
            max_contracts: default_max_contracts(),
        }
    }
}

impl From<RiskConfig> for RiskLimits {
    fn from(config: RiskConfig) -> Self {
        Self {
            max_position_dollars: config.max_position_dollars,
            kelly_fraction: config.kelly_fraction,
            max_portfolio_risk_fraction: config.max_portfolio_risk_fraction,
            min_edge_threshold: config.min_edge_threshold,
            max_contracts: config.max_contracts,
        }
    }
}
