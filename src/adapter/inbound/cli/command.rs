//! Command-line interface definitions.
//!
//! Defines the CLI structure for the quantamental application using `clap`.
//! The CLI evaluates single markets, runs the scan loop, reads back the trade
//! log, and manages configuration.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use super::paths;

/// Prediction market edge detection and fractional-Kelly sizing CLI
#[derive(Parser, Debug)]
#[command(name = "quantamental")]
#[command(version)]
pub struct Cli {
    /// Color output mode [auto, always, never]
    #[arg(
        long,
        global = true,
        default_value = "auto",
        hide_possible_values = true
    )]
    pub color: ColorChoice,

    /// JSON output for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Decrease output verbosity
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase output verbosity
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Color output mode for terminal rendering.
#[derive(Clone, Debug, Default, clap::ValueEnum)]
pub enum ColorChoice {
    /// Detect automatically
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Evaluate a single market and show the full decision
    Evaluate(EvaluateArgs),

    /// Self-test the decision core on reference inputs
    Analyze(ConfigPathArg),

    /// Run the scan loop until stopped
    Run(RunArgs),

    /// Show executed trades from the trade log
    Trades(TradesArgs),

    /// Request a running scan loop to stop
    Stop(ConfigPathArg),

    /// Manage configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

/// Subcommands for `quantamental config`.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Generate a new configuration file from template.
    Init(ConfigInitArgs),
    /// Display the effective configuration with defaults applied.
    Show(ConfigPathArg),
    /// Validate a configuration file for correctness.
    Validate(ConfigPathArg),
}

/// Shared argument struct for commands that require only a configuration path.
#[derive(Parser, Debug)]
pub struct ConfigPathArg {
    /// Path to the configuration file.
    #[arg(short, long, default_value_os_t = paths::default_config())]
    pub config: PathBuf,
}

/// Arguments for `config init`.
#[derive(Parser, Debug)]
pub struct ConfigInitArgs {
    /// Where to write the configuration file.
    #[arg(default_value_os_t = paths::default_config())]
    pub path: PathBuf,

    /// Overwrite an existing file.
    #[arg(long)]
    pub force: bool,
}

/// Arguments for the `evaluate` subcommand.
#[derive(Parser, Debug)]
pub struct EvaluateArgs {
    /// Research-derived probability of YES, 0 to 1.
    #[arg(long, allow_negative_numbers = true)]
    pub fundamental: f64,

    /// Current YES ask in cents.
    #[arg(long)]
    pub price: u32,

    /// 14-period RSI.
    #[arg(long)]
    pub rsi: Option<f64>,

    /// MACD histogram value.
    #[arg(long, allow_negative_numbers = true)]
    pub macd: Option<f64>,

    /// On-balance volume.
    #[arg(long, allow_negative_numbers = true)]
    pub obv: Option<f64>,

    /// 5-period volume moving average.
    #[arg(long)]
    pub volume_sma: Option<f64>,

    /// Hours until the market closes.
    #[arg(long)]
    pub hours: Option<f64>,

    /// Market ticker, for display.
    #[arg(long, default_value = "CLI")]
    pub ticker: String,

    /// Path to the configuration file.
    #[arg(short, long, default_value_os_t = paths::default_config())]
    pub config: PathBuf,
}

/// Arguments for the `run` subcommand.
#[derive(Parser, Debug)]
pub struct RunArgs {
    /// Path to the configuration file.
    #[arg(short, long, default_value_os_t = paths::default_config())]
    pub config: PathBuf,

    /// Stop after this many scan cycles (overrides config).
    #[arg(long)]
    pub max_cycles: Option<u64>,

    /// Market snapshot file (overrides config).
    #[arg(long)]
    pub markets: Option<PathBuf>,
}

/// Arguments for the `trades` subcommand.
#[derive(Parser, Debug)]
pub struct TradesArgs {
    /// Path to the configuration file.
    #[arg(short, long, default_value_os_t = paths::default_config())]
    pub config: PathBuf,

    /// Show only the most recent N trades.
    #[arg(short = 'n', long)]
    pub limit: Option<usize>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn evaluate_parses_feature_flags() {
        let cli = Cli::try_parse_from([
            "quantamental",
            "evaluate",
            "--fundamental",
            "0.65",
            "--price",
            "40",
            "--macd",
            "-0.02",
            "--hours",
            "48",
        ])
        .unwrap();

        let Commands::Evaluate(args) = cli.command else {
            panic!("expected evaluate");
        };
        assert_eq!(args.price, 40);
        assert_eq!(args.macd, Some(-0.02));
        assert_eq!(args.rsi, None);
        assert_eq!(args.ticker, "CLI");
    }

    #[test]
    fn global_flags_follow_subcommand() {
        let cli = Cli::try_parse_from(["quantamental", "trades", "--json", "-n", "5"]).unwrap();
        assert!(cli.json);
        let Commands::Trades(args) = cli.command else {
            panic!("expected trades");
        };
        assert_eq!(args.limit, Some(5));
    }

    #[test]
    fn evaluate_requires_price() {
        assert!(Cli::try_parse_from(["quantamental", "evaluate", "--fundamental", "0.5"]).is_err());
    }
}
