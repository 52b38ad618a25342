mod support;

use std::sync::Arc;

use quantamental::application::decision::engine::DecisionEngine;
use quantamental::application::fusion::ensemble::EnsembleFuser;
use quantamental::application::orchestration::handler::MarketHandler;
use quantamental::application::risk::limits::RiskLimits;
use quantamental::adapter::outbound::file::trade_log::TradeLog;
use quantamental::infrastructure::config::scan::ScanConfig;
use quantamental::infrastructure::orchestration::runtime::{ScanRuntime, SessionSummary};
use quantamental::port::outbound::market::MarketSource;
use quantamental::port::outbound::shutdown::StopSignal;
use quantamental::testkit::config::{fast_scan, in_dir};
use quantamental::testkit::domain::{featureless_market, illiquid_market, market};
use quantamental::testkit::ports::{
    FailingSource, MemoryRecorder, RecordingExecutor, StaticSource, StopAfter,
};
use support::files::Workspace;
use tokio::sync::watch;

struct Harness {
    executor: Arc<RecordingExecutor>,
    recorder: Arc<MemoryRecorder>,
    runtime: ScanRuntime,
}

fn harness(source: Arc<dyn MarketSource>, stop: Arc<dyn StopSignal>, scan: ScanConfig) -> Harness {
    let executor = Arc::new(RecordingExecutor::new());
    let recorder = Arc::new(MemoryRecorder::new());
    let engine = DecisionEngine::new(Box::new(EnsembleFuser::default()), RiskLimits::default());
    let handler = MarketHandler::new(
        engine,
        executor.clone(),
        recorder.clone(),
        scan.min_market_liquidity,
    );
    Harness {
        executor,
        recorder,
        runtime: ScanRuntime::new(handler, source, stop, scan),
    }
}

async fn run(runtime: &ScanRuntime) -> SessionSummary {
    let (_tx, rx) = watch::channel(false);
    runtime.run_with_shutdown(rx).await
}

#[tokio::test]
async fn mixed_markets_trade_only_the_opportunity() {
    let source = Arc::new(StaticSource::new(vec![
        market("BUY-ME", 0.65, 40),
        market("TOO-PRICEY", 0.65, 60),
        illiquid_market("THIN"),
        featureless_market("BLANK"),
    ]));
    let h = harness(source.clone(), Arc::new(StopAfter::never()), fast_scan(1));

    let summary = run(&h.runtime).await;

    assert_eq!(summary, SessionSummary { cycles: 1, trades: 1 });
    assert_eq!(source.fetches(), 1);
    let orders = h.executor.orders();
    assert_eq!(orders.len(), 1);
    assert_eq!(orders[0].ticker.as_str(), "BUY-ME");
    assert_eq!(orders[0].count, 77);
    assert_eq!(h.recorder.trades().len(), 1);
}

#[tokio::test]
async fn each_cycle_revisits_every_market() {
    let source = Arc::new(StaticSource::new(vec![market("A", 0.65, 40)]));
    let h = harness(source.clone(), Arc::new(StopAfter::never()), fast_scan(3));

    let summary = run(&h.runtime).await;

    assert_eq!(summary.cycles, 3);
    assert_eq!(summary.trades, 3);
    assert_eq!(source.fetches(), 3);
}

#[tokio::test]
async fn stop_signal_ends_an_unbounded_run() {
    let source = Arc::new(StaticSource::new(vec![market("A", 0.65, 40)]));
    // One poll before the cycle, one before the market, then stop.
    let h = harness(source, Arc::new(StopAfter::new(2)), fast_scan(0));

    let summary = run(&h.runtime).await;

    assert_eq!(summary.cycles, 1);
    assert_eq!(summary.trades, 1);
}

#[tokio::test]
async fn failing_source_backs_off_and_retries() {
    let h = harness(Arc::new(FailingSource), Arc::new(StopAfter::never()), fast_scan(2));

    let summary = run(&h.runtime).await;

    assert_eq!(summary, SessionSummary { cycles: 2, trades: 0 });
    assert!(h.executor.orders().is_empty());
}

#[tokio::test]
async fn file_wired_runtime_writes_the_trade_log() {
    let workspace = Workspace::new();
    workspace.write_markets(&[market("FILE-A", 0.65, 40), market("FILE-B", 0.65, 60)]);
    let config = in_dir(workspace.path());

    let (_tx, rx) = watch::channel(false);
    let summary = ScanRuntime::from_config(&config).run_with_shutdown(rx).await;

    assert_eq!(summary.trades, 1);
    let trades = TradeLog::new(workspace.trade_log_path()).read_all().unwrap();
    assert_eq!(trades.len(), 1);
    assert_eq!(trades[0].ticker.as_str(), "FILE-A");
    assert_eq!(trades[0].count, 77);
}

#[tokio::test]
async fn kill_switch_file_stops_before_first_cycle() {
    let workspace = Workspace::new();
    workspace.write_markets(&[market("A", 0.65, 40)]);
    std::fs::write(workspace.kill_switch_path(), "").unwrap();

    let mut config = in_dir(workspace.path());
    config.scan.max_cycles = 0;

    let (_tx, rx) = watch::channel(false);
    let summary = ScanRuntime::from_config(&config).run_with_shutdown(rx).await;

    assert_eq!(summary.cycles, 0);
    assert!(!workspace.kill_switch_path().exists());
    assert!(!workspace.trade_log_path().exists());
}
