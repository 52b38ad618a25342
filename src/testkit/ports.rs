//! In-memory implementations of the outbound ports.
//!
//! - [`StaticSource`] - Returns the same markets every cycle, counting fetches.
//! - [`FailingSource`] - Errors on every fetch.
//! - [`RecordingExecutor`] - Fills every order and keeps what it saw.
//! - [`MemoryRecorder`] - Collects trade records in memory.
//! - [`StopAfter`] - Requests a stop after a fixed number of polls.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::market::MarketSnapshot;
use crate::domain::trade::TradeRecord;
use crate::error::{Error, Result};
use crate::port::outbound::executor::{ExecutionResult, OrderExecutor, OrderRequest};
use crate::port::outbound::market::MarketSource;
use crate::port::outbound::recorder::TradeRecorder;
use crate::port::outbound::shutdown::StopSignal;

fn lock<T>(mutex: &Mutex<T>) -> std::sync::MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(std::sync::PoisonError::into_inner)
}

/// Source that serves a fixed market list.
pub struct StaticSource {
    markets: Vec<MarketSnapshot>,
    fetches: AtomicUsize,
}

impl StaticSource {
    pub fn new(markets: Vec<MarketSnapshot>) -> Self {
        Self {
            markets,
            fetches: AtomicUsize::new(0),
        }
    }

    /// Number of fetches so far.
    pub fn fetches(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl MarketSource for StaticSource {
    async fn fetch_markets(&self) -> Result<Vec<MarketSnapshot>> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        Ok(self.markets.clone())
    }

    fn source_name(&self) -> &'static str {
        "static"
    }
}

/// Source whose every fetch fails.
#[derive(Default)]
pub struct FailingSource;

#[async_trait]
impl MarketSource for FailingSource {
    async fn fetch_markets(&self) -> Result<Vec<MarketSnapshot>> {
        Err(Error::Parse("source unavailable".into()))
    }

    fn source_name(&self) -> &'static str {
        "failing"
    }
}

/// Executor that fills every order and remembers it.
#[derive(Default)]
pub struct RecordingExecutor {
    orders: Mutex<Vec<OrderRequest>>,
}

impl RecordingExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Orders submitted so far.
    pub fn orders(&self) -> Vec<OrderRequest> {
        lock(&self.orders).clone()
    }
}

#[async_trait]
impl OrderExecutor for RecordingExecutor {
    async fn execute(&self, order: &OrderRequest) -> Result<ExecutionResult> {
        let mut orders = lock(&self.orders);
        orders.push(order.clone());
        Ok(ExecutionResult::Filled {
            order_id: format!("test-{}", orders.len()),
            count: order.count,
        })
    }

    fn exchange_name(&self) -> &'static str {
        "test"
    }
}

/// Recorder that keeps trades in memory.
#[derive(Default)]
pub struct MemoryRecorder {
    trades: Mutex<Vec<TradeRecord>>,
}

impl MemoryRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Trades recorded so far.
    pub fn trades(&self) -> Vec<TradeRecord> {
        lock(&self.trades).clone()
    }
}

impl TradeRecorder for MemoryRecorder {
    fn record(&self, trade: &TradeRecord) -> Result<()> {
        lock(&self.trades).push(trade.clone());
        Ok(())
    }
}

/// Stop signal that fires once `polls` checks have returned `false`.
pub struct StopAfter {
    remaining: AtomicUsize,
}

impl StopAfter {
    pub fn new(polls: usize) -> Self {
        Self {
            remaining: AtomicUsize::new(polls),
        }
    }

    /// A signal that never fires.
    pub fn never() -> Self {
        Self::new(usize::MAX)
    }
}

impl StopSignal for StopAfter {
    fn stop_requested(&self) -> bool {
        self.remaining
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
            .is_err()
    }
}
