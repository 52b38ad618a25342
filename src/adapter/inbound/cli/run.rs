//! Handler for the `run` command.

use serde_json::json;

use crate::adapter::inbound::cli::command::RunArgs;
use crate::adapter::inbound::cli::{config, output};
use crate::error::Result;
use crate::infrastructure::config::settings::Config;
use crate::infrastructure::orchestration::runtime::{ScanRuntime, SessionSummary};

/// Execute the run command.
pub async fn execute(args: &RunArgs) -> Result<()> {
    let mut config = config::load_or_default(&args.config)?;
    apply_overrides(&mut config, args);
    if output::is_json() {
        config.logging.format = "json".to_string();
    }
    config.init_logging();

    if !output::is_quiet() && !output::is_json() {
        print_startup(&config);
    }

    let summary = ScanRuntime::from_config(&config).run().await;
    print_summary(&summary);
    Ok(())
}

fn apply_overrides(config: &mut Config, args: &RunArgs) {
    if let Some(max_cycles) = args.max_cycles {
        config.scan.max_cycles = max_cycles;
    }
    if let Some(markets) = &args.markets {
        config.scan.markets_path.clone_from(markets);
    }
}

fn print_startup(config: &Config) {
    output::header(env!("CARGO_PKG_VERSION"));
    output::field("Strategy", config.fusion.strategy);
    output::field("Markets", config.scan.markets_path.display());
    output::field("Trade log", config.trade_log_path.display());
    output::field("Kill switch", config.kill_switch_path.display());
    output::field("Interval", format!("{}s", config.scan.scan_interval_secs));
    if output::verbosity() > 0 {
        output::field("Min edge", format!("{:.3}", config.risk.min_edge_threshold));
        output::field("Kelly", format!("{:.2}", config.risk.kelly_fraction));
        output::field("Max position", format!("${}", config.risk.max_position_dollars));
    }
    output::hint(&format!(
        "stop with Ctrl-C or `quantamental stop` (creates {})",
        config.kill_switch_path.display()
    ));
}

fn print_summary(summary: &SessionSummary) {
    if output::is_json() {
        output::json_output(json!({
            "command": "run",
            "cycles": summary.cycles,
            "trades": summary.trades,
        }));
        return;
    }
    output::section("Session");
    output::field("Cycles", summary.cycles);
    output::field("Trades", summary.trades);
}
