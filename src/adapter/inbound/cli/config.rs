//! Handler for the `config` command group.

use std::fs;
use std::path::Path;

use serde_json::json;
use tracing::debug;

use crate::adapter::inbound::cli::output;
use crate::error::{ConfigError, Result};
use crate::infrastructure::config::settings::Config;

/// Default config template with documentation.
const CONFIG_TEMPLATE: &str = include_str!("../../../../config.toml.example");

/// Load the config at `path`, or defaults when no file exists there.
///
/// Commands that work out of the box use this; `config show` and
/// `config validate` require the file.
pub fn load_or_default(path: &Path) -> Result<Config> {
    if path.exists() {
        Config::load(path)
    } else {
        debug!(path = %path.display(), "No config file, using defaults");
        Ok(Config::default())
    }
}

/// Execute `config init`.
pub fn execute_init(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        return Err(ConfigError::InvalidValue {
            field: "config",
            reason: "file already exists (use --force to overwrite)".to_string(),
        }
        .into());
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    fs::write(path, CONFIG_TEMPLATE)?;
    output::section("Config Initialized");
    output::success("Created configuration file");
    output::field("Path", path.display());
    output::section("Next Steps");
    output::note(&format!("1. Edit {} with your settings", path.display()));
    output::note(&format!(
        "2. Run: quantamental config validate -c {}",
        path.display()
    ));
    output::note(&format!("3. Run: quantamental analyze -c {}", path.display()));
    Ok(())
}

/// Execute `config show`.
pub fn execute_show(path: &Path) -> Result<()> {
    let config = Config::load(path)?;

    if output::is_json() {
        output::json_output(json!({
            "command": "config.show",
            "kill_switch_path": config.kill_switch_path,
            "trade_log_path": config.trade_log_path,
            "logging": { "level": config.logging.level, "format": config.logging.format },
            "signals": {
                "confidence": config.signals.confidence,
                "weights": config.signals.weights,
            },
            "fusion": {
                "strategy": config.fusion.strategy.to_string(),
                "model_path": config.fusion.model_path,
            },
            "risk": {
                "max_position_dollars": config.risk.max_position_dollars.to_string(),
                "kelly_fraction": config.risk.kelly_fraction,
                "max_portfolio_risk_fraction": config.risk.max_portfolio_risk_fraction,
                "min_edge_threshold": config.risk.min_edge_threshold,
                "max_contracts": config.risk.max_contracts,
            },
            "scan": {
                "markets_path": config.scan.markets_path,
                "min_market_liquidity": config.scan.min_market_liquidity,
                "scan_interval_secs": config.scan.scan_interval_secs,
                "kill_switch_poll_secs": config.scan.kill_switch_poll_secs,
                "market_pause_secs": config.scan.market_pause_secs,
                "error_backoff_secs": config.scan.error_backoff_secs,
                "max_cycles": config.scan.max_cycles,
            },
        }));
        return Ok(());
    }

    output::section("Effective Configuration");
    output::field("Kill switch", config.kill_switch_path.display());
    output::field("Trade log", config.trade_log_path.display());
    output::field(
        "Logging",
        format!("{} ({})", config.logging.level, config.logging.format),
    );

    output::section("Fusion");
    output::field("Strategy", config.fusion.strategy);
    if let Some(model) = &config.fusion.model_path {
        output::field("Model", model.display());
    }
    output::field("Confidence", format!("{:.2}", config.signals.confidence));
    for (name, weight) in config.signals.weights.iter() {
        output::field(name.as_str(), format!("{weight:.2}"));
    }

    output::section("Risk");
    output::field(
        "Max position",
        format!("${}", config.risk.max_position_dollars),
    );
    output::field("Kelly", format!("{:.2}", config.risk.kelly_fraction));
    output::field(
        "Portfolio cap",
        format!("{:.1}%", config.risk.max_portfolio_risk_fraction * 100.0),
    );
    output::field(
        "Min edge",
        format!("{:.1}%", config.risk.min_edge_threshold * 100.0),
    );
    output::field("Max contracts", config.risk.max_contracts);

    output::section("Scan");
    output::field("Markets", config.scan.markets_path.display());
    output::field("Min volume", config.scan.min_market_liquidity);
    output::field("Interval", format!("{}s", config.scan.scan_interval_secs));
    output::field(
        "Stop poll",
        format!("{}s", config.scan.kill_switch_poll_secs),
    );
    output::field(
        "Max cycles",
        config
            .scan
            .cycle_limit()
            .map_or_else(|| "unbounded".to_string(), |n| n.to_string()),
    );

    Ok(())
}

/// Execute `config validate`.
pub fn execute_validate(path: &Path) -> Result<()> {
    let config = Config::load(path)?;

    if output::is_json() {
        output::json_output(json!({
            "command": "config.validate",
            "path": path,
            "valid": true,
            "strategy": config.fusion.strategy.to_string(),
        }));
        return Ok(());
    }

    output::section("Config Validation");
    output::field("Path", path.display());
    output::success("Config file is valid");

    if let Some(model) = &config.fusion.model_path {
        if !model.exists() {
            output::warning(&format!(
                "model file {} not found; forecasts will be neutral",
                model.display()
            ));
        }
    }

    output::field(
        "Next",
        format!("quantamental config show -c {}", path.display()),
    );

    Ok(())
}
