//! Edge evaluation against the market ask.

use crate::domain::{
    edge::{EdgeAction, EdgeDecision},
    probability::implied_probability,
};

/// Compares a hybrid probability to the market-implied probability.
#[derive(Debug, Clone, Copy)]
pub struct EdgeEvaluator {
    min_edge_threshold: f64,
}

impl EdgeEvaluator {
    /// Create an evaluator that buys only above `min_edge_threshold`.
    #[must_use]
    pub const fn new(min_edge_threshold: f64) -> Self {
        Self { min_edge_threshold }
    }

    /// Minimum edge required to buy.
    #[must_use]
    pub const fn threshold(&self) -> f64 {
        self.min_edge_threshold
    }

    /// Signed edge: `hybrid_prob - price_cents / 100`.
    #[must_use]
    pub fn edge(hybrid_prob: f64, price_cents: u32) -> f64 {
        hybrid_prob - implied_probability(price_cents)
    }

    /// Edge plus the action it implies under the threshold.
    #[must_use]
    pub fn evaluate(&self, hybrid_prob: f64, price_cents: u32) -> EdgeDecision {
        let edge = Self::edge(hybrid_prob, price_cents);
        let action = if edge > self.min_edge_threshold {
            EdgeAction::Buy
        } else {
            EdgeAction::Skip
        };
        EdgeDecision { edge, action }
    }
}
