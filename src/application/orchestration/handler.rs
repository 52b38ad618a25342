//! Per-market handling for a scan cycle.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::application::decision::engine::{Decision, DecisionEngine, DecisionRequest};
use crate::domain::{id::Ticker, market::MarketSnapshot, trade::TradeRecord};
use crate::port::outbound::executor::{ExecutionResult, OrderExecutor};
use crate::port::outbound::recorder::TradeRecorder;

/// Why a market was not analyzed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// Traded volume is under the liquidity floor.
    Illiquid { volume: u64, minimum: u64 },
    /// No technical features were supplied for the market.
    InsufficientData,
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Illiquid { volume, minimum } => {
                write!(f, "volume {volume} below liquidity floor {minimum}")
            }
            Self::InsufficientData => write!(f, "insufficient technical data"),
        }
    }
}

/// What happened to one market.
#[derive(Debug, Clone)]
pub enum MarketOutcome {
    /// Filtered out before the decision engine ran.
    Skipped { ticker: Ticker, reason: SkipReason },
    /// Analyzed, but no order was submitted.
    Passed(Decision),
    /// Order submitted and the venue responded.
    Executed {
        decision: Decision,
        result: ExecutionResult,
    },
    /// Order submission raised an error.
    ExecutionError { decision: Decision, error: String },
}

impl MarketOutcome {
    /// The decision, if the engine ran.
    #[must_use]
    pub const fn decision(&self) -> Option<&Decision> {
        match self {
            Self::Skipped { .. } => None,
            Self::Passed(decision)
            | Self::Executed { decision, .. }
            | Self::ExecutionError { decision, .. } => Some(decision),
        }
    }

    /// Return `true` if an order was filled.
    #[must_use]
    pub const fn is_trade(&self) -> bool {
        matches!(self, Self::Executed { result, .. } if result.is_filled())
    }
}

/// Counters for one scan cycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CycleReport {
    /// Markets that reached the decision engine.
    pub analyzed: usize,
    /// Markets filtered before analysis.
    pub skipped: usize,
    /// Markets whose edge cleared the threshold.
    pub opportunities: usize,
    /// Orders filled.
    pub trades: usize,
}

impl CycleReport {
    /// Fold one market outcome into the counters.
    pub fn observe(&mut self, outcome: &MarketOutcome) {
        match outcome.decision() {
            None => self.skipped += 1,
            Some(decision) => {
                self.analyzed += 1;
                if decision.edge.is_buy() {
                    self.opportunities += 1;
                }
            }
        }
        if outcome.is_trade() {
            self.trades += 1;
        }
    }
}

/// Screens, decides, executes, and records one market at a time.
pub struct MarketHandler {
    engine: DecisionEngine,
    executor: Arc<dyn OrderExecutor>,
    recorder: Arc<dyn TradeRecorder>,
    min_market_liquidity: u64,
}

impl MarketHandler {
    #[must_use]
    pub fn new(
        engine: DecisionEngine,
        executor: Arc<dyn OrderExecutor>,
        recorder: Arc<dyn TradeRecorder>,
        min_market_liquidity: u64,
    ) -> Self {
        Self {
            engine,
            executor,
            recorder,
            min_market_liquidity,
        }
    }

    /// The decision engine in use.
    #[must_use]
    pub const fn engine(&self) -> &DecisionEngine {
        &self.engine
    }

    /// Reason to skip a market before analysis, if any.
    #[must_use]
    pub fn screen(&self, snapshot: &MarketSnapshot) -> Option<SkipReason> {
        if snapshot.volume < self.min_market_liquidity {
            return Some(SkipReason::Illiquid {
                volume: snapshot.volume,
                minimum: self.min_market_liquidity,
            });
        }
        if snapshot.quant_features.is_empty() {
            return Some(SkipReason::InsufficientData);
        }
        None
    }

    /// Run one market through screening, the decision engine, and execution.
    ///
    /// Never fails: execution errors and trade-log write failures are logged
    /// and reported in the outcome.
    pub async fn handle(&self, snapshot: &MarketSnapshot) -> MarketOutcome {
        if let Some(reason) = self.screen(snapshot) {
            debug!(ticker = %snapshot.ticker, reason = %reason, "Skipping market");
            return MarketOutcome::Skipped {
                ticker: snapshot.ticker.clone(),
                reason,
            };
        }

        let decision = self.engine.decide(&DecisionRequest::from_snapshot(snapshot));
        let Some(order) = decision.order() else {
            return MarketOutcome::Passed(decision);
        };

        match self.executor.execute(&order).await {
            Ok(result) => {
                match &result {
                    ExecutionResult::Filled { order_id, count } => {
                        info!(
                            ticker = %order.ticker,
                            order_id = %order_id,
                            count,
                            price_cents = order.price_cents,
                            edge = decision.edge.edge,
                            exchange = self.executor.exchange_name(),
                            "Trade executed"
                        );
                        let trade = TradeRecord::now(
                            order.ticker.clone(),
                            order.side,
                            *count,
                            order.price_cents,
                            decision.edge.edge,
                        );
                        if let Err(e) = self.recorder.record(&trade) {
                            warn!(ticker = %order.ticker, error = %e, "Failed to record trade");
                        }
                    }
                    ExecutionResult::Failed { reason } => {
                        warn!(ticker = %order.ticker, reason = %reason, "Order not filled");
                    }
                }
                MarketOutcome::Executed { decision, result }
            }
            Err(e) => {
                warn!(ticker = %order.ticker, error = %e, "Order submission failed");
                MarketOutcome::ExecutionError {
                    decision,
                    error: e.to_string(),
                }
            }
        }
    }
}
