//! Scan runtime lifecycle.
//!
//! One cycle reads every market snapshot, hands each to the
//! [`MarketHandler`], logs a summary, and idles until the next scan. The stop
//! signal is polled before every cycle, before every market, and every
//! `kill_switch_poll_secs` while idle, so shutdown latency is bounded by the
//! poll period rather than the scan interval.

use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;
use tokio::sync::watch;
use tokio::time::Instant;
use tracing::{error, info, warn};

use crate::adapter::outbound::file::{
    kill_switch::FileKillSwitch, snapshot::SnapshotFile, trade_log::TradeLog,
};
use crate::adapter::outbound::paper::executor::PaperExecutor;
use crate::application::orchestration::handler::{CycleReport, MarketHandler};
use crate::domain::id::Ticker;
use crate::error::Result;
use crate::infrastructure::config::scan::ScanConfig;
use crate::infrastructure::config::settings::Config;
use crate::infrastructure::factory::build_engine;
use crate::port::outbound::market::MarketSource;
use crate::port::outbound::shutdown::StopSignal;

/// Totals for one run of the scan loop.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SessionSummary {
    /// Cycles started, including failed ones.
    pub cycles: u64,
    /// Orders filled across all cycles.
    pub trades: u64,
}

enum CycleEnd {
    Completed(CycleReport),
    Stopped(CycleReport),
}

/// The scan loop and its collaborators.
pub struct ScanRuntime {
    handler: MarketHandler,
    source: Arc<dyn MarketSource>,
    stop: Arc<dyn StopSignal>,
    scan: ScanConfig,
}

impl ScanRuntime {
    #[must_use]
    pub fn new(
        handler: MarketHandler,
        source: Arc<dyn MarketSource>,
        stop: Arc<dyn StopSignal>,
        scan: ScanConfig,
    ) -> Self {
        Self {
            handler,
            source,
            stop,
            scan,
        }
    }

    /// Wire the runtime from configuration: snapshot file source, paper
    /// executor, file trade log, and file kill switch.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        let handler = MarketHandler::new(
            build_engine(config),
            Arc::new(PaperExecutor::new()),
            Arc::new(TradeLog::new(&config.trade_log_path)),
            config.scan.min_market_liquidity,
        );
        Self::new(
            handler,
            Arc::new(SnapshotFile::new(&config.scan.markets_path)),
            Arc::new(FileKillSwitch::new(&config.kill_switch_path)),
            config.scan.clone(),
        )
    }

    /// Run until the stop signal, Ctrl-C, or the cycle limit.
    pub async fn run(&self) -> SessionSummary {
        let (shutdown_tx, shutdown_rx) = watch::channel(false);
        let ctrl_c = tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                info!("Ctrl-C received");
                let _ = shutdown_tx.send(true);
            }
        });

        let summary = self.run_with_shutdown(shutdown_rx).await;
        ctrl_c.abort();
        summary
    }

    /// Run with an externally controlled shutdown channel.
    ///
    /// Sending `true`, or dropping the sender, stops the loop at the next
    /// check.
    pub async fn run_with_shutdown(&self, mut shutdown: watch::Receiver<bool>) -> SessionSummary {
        info!(
            source = self.source.source_name(),
            strategy = self.handler.engine().fuser().name(),
            scan_interval_secs = self.scan.scan_interval_secs,
            max_cycles = self.scan.max_cycles,
            "Scan runtime starting"
        );

        let mut summary = SessionSummary::default();
        loop {
            if self
                .scan
                .cycle_limit()
                .is_some_and(|limit| summary.cycles >= limit)
            {
                info!(cycles = summary.cycles, "Cycle limit reached");
                break;
            }
            if self.should_stop(&shutdown) {
                break;
            }

            summary.cycles += 1;
            let cycle = summary.cycles;
            info!(cycle, "Scan cycle starting");

            let wait = match self.run_cycle(&mut shutdown).await {
                Ok(CycleEnd::Completed(report)) => {
                    summary.trades += report.trades as u64;
                    Self::log_cycle(cycle, &report, summary.trades);
                    self.scan.scan_interval()
                }
                Ok(CycleEnd::Stopped(report)) => {
                    summary.trades += report.trades as u64;
                    Self::log_cycle(cycle, &report, summary.trades);
                    break;
                }
                Err(e) => {
                    error!(cycle, error = %e, backoff_secs = self.scan.error_backoff_secs, "Scan cycle failed");
                    self.scan.error_backoff()
                }
            };

            if self
                .scan
                .cycle_limit()
                .is_some_and(|limit| summary.cycles >= limit)
            {
                info!(cycles = summary.cycles, "Cycle limit reached");
                break;
            }
            if !self.idle(wait, &mut shutdown).await {
                break;
            }
        }

        info!(
            cycles = summary.cycles,
            trades = summary.trades,
            "Scan runtime stopped"
        );
        summary
    }

    async fn run_cycle(&self, shutdown: &mut watch::Receiver<bool>) -> Result<CycleEnd> {
        let markets = self.source.fetch_markets().await?;
        let mut report = CycleReport::default();
        if markets.is_empty() {
            warn!(source = self.source.source_name(), "No markets available");
            return Ok(CycleEnd::Completed(report));
        }
        info!(markets = markets.len(), "Markets fetched");

        let mut processed: HashSet<Ticker> = HashSet::new();
        for market in &markets {
            if self.should_stop(shutdown) {
                return Ok(CycleEnd::Stopped(report));
            }
            if !processed.insert(market.ticker.clone()) {
                continue;
            }

            let outcome = self.handler.handle(market).await;
            report.observe(&outcome);

            if outcome.decision().is_some() && !self.pause(self.scan.market_pause(), shutdown).await {
                return Ok(CycleEnd::Stopped(report));
            }
        }
        Ok(CycleEnd::Completed(report))
    }

    fn log_cycle(cycle: u64, report: &CycleReport, total_trades: u64) {
        info!(
            cycle,
            analyzed = report.analyzed,
            skipped = report.skipped,
            opportunities = report.opportunities,
            trades = report.trades,
            total_trades,
            "Scan cycle complete"
        );
    }

    fn should_stop(&self, shutdown: &watch::Receiver<bool>) -> bool {
        if *shutdown.borrow() {
            info!("Shutdown signal received");
            return true;
        }
        if self.stop.stop_requested() {
            info!("Shutdown initiated by kill switch");
            return true;
        }
        false
    }

    /// Sleep for `duration`, waking early only on shutdown. Returns `false`
    /// if shutdown was requested.
    async fn pause(&self, duration: Duration, shutdown: &mut watch::Receiver<bool>) -> bool {
        if duration.is_zero() {
            return true;
        }
        tokio::select! {
            () = tokio::time::sleep(duration) => true,
            result = shutdown.changed() => result.is_ok() && !*shutdown.borrow(),
        }
    }

    /// Idle for `duration`, polling the stop signal every poll period.
    /// Returns `false` if a stop was requested.
    async fn idle(&self, duration: Duration, shutdown: &mut watch::Receiver<bool>) -> bool {
        let deadline = Instant::now() + duration;
        loop {
            if self.should_stop(shutdown) {
                return false;
            }
            let now = Instant::now();
            if now >= deadline {
                return true;
            }
            let nap = (deadline - now).min(self.scan.kill_switch_poll());
            if !self.pause(nap, shutdown).await {
                return false;
            }
        }
    }
}
