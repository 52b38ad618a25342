//! Order execution port.

use async_trait::async_trait;

use crate::domain::{id::Ticker, trade::Side};
use crate::error::Result;

/// An order that passed validation and is ready to submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderRequest {
    pub ticker: Ticker,
    pub side: Side,
    pub count: u32,
    /// Limit price in cents.
    pub price_cents: u32,
}

/// Result of submitting an order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExecutionResult {
    /// Order accepted by the venue.
    Filled {
        /// Venue-assigned order identifier.
        order_id: String,
        /// Contracts filled.
        count: u32,
    },
    /// Order was not placed.
    Failed {
        /// The failure reason.
        reason: String,
    },
}

impl ExecutionResult {
    /// Check if the order was filled.
    #[must_use]
    pub const fn is_filled(&self) -> bool {
        matches!(self, Self::Filled { .. })
    }
}

/// Executor for submitting orders to a venue.
#[async_trait]
pub trait OrderExecutor: Send + Sync {
    /// Submit an order.
    async fn execute(&self, order: &OrderRequest) -> Result<ExecutionResult>;

    /// Venue name for logging.
    fn exchange_name(&self) -> &'static str;
}
