//! Edge between a fused forecast and the market price.

use std::fmt;

use serde::Serialize;

/// What to do with a market after edge evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum EdgeAction {
    /// Edge clears the threshold; size a position.
    Buy,
    /// Edge is at or below the threshold.
    Skip,
}

impl fmt::Display for EdgeAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Buy => f.write_str("BUY"),
            Self::Skip => f.write_str("SKIP"),
        }
    }
}

/// Signed edge and the action it implies.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EdgeDecision {
    /// `hybrid_prob - price/100`; positive means the contract looks underpriced.
    pub edge: f64,
    /// Action implied by the edge and the configured threshold.
    pub action: EdgeAction,
}

impl EdgeDecision {
    /// Return `true` if the decision is to buy.
    #[must_use]
    pub fn is_buy(&self) -> bool {
        self.action == EdgeAction::Buy
    }
}
