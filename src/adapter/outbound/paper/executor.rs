//! Simulated order execution.
//!
//! Every order is reported as fully filled at its limit price. Nothing leaves
//! the process, which makes this the executor for unattended runs and tests.

use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use rust_decimal::Decimal;
use tracing::info;

use crate::error::Result;
use crate::port::outbound::executor::{ExecutionResult, OrderExecutor, OrderRequest};

/// Paper-trading executor.
#[derive(Debug, Default)]
pub struct PaperExecutor {
    sequence: AtomicU64,
}

impl PaperExecutor {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Orders filled so far.
    #[must_use]
    pub fn filled(&self) -> u64 {
        self.sequence.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl OrderExecutor for PaperExecutor {
    async fn execute(&self, order: &OrderRequest) -> Result<ExecutionResult> {
        let seq = self.sequence.fetch_add(1, Ordering::Relaxed) + 1;
        let order_id = format!("paper-{}-{seq}", Utc::now().timestamp_millis());
        let cost = Decimal::from(order.count) * Decimal::new(i64::from(order.price_cents), 2);

        info!(
            order_id = %order_id,
            ticker = %order.ticker,
            side = %order.side,
            count = order.count,
            price_cents = order.price_cents,
            cost = %cost,
            "Paper order filled"
        );

        Ok(ExecutionResult::Filled {
            order_id,
            count: order.count,
        })
    }

    fn exchange_name(&self) -> &'static str {
        "paper"
    }
}
