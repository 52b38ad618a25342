use clap::Parser;
use quantamental::adapter::inbound::cli::command::{Cli, ColorChoice, Commands, ConfigCommand};
use quantamental::adapter::inbound::cli::output::{self, OutputConfig};
use quantamental::adapter::inbound::cli::{
    analyze, config, diagnostic, evaluate, run, stop, trades,
};
use quantamental::error::Result;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();

    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {}
    }
    output::configure(OutputConfig::new(cli.json, cli.quiet, cli.verbose));

    // `run` installs the configured subscriber itself.
    if !matches!(cli.command, Commands::Run(_)) {
        init_cli_logging(cli.verbose);
    }

    if let Err(e) = dispatch(cli.command).await {
        eprintln!("{:?}", diagnostic::report(e));
        std::process::exit(1);
    }
}

async fn dispatch(command: Commands) -> Result<()> {
    match command {
        Commands::Evaluate(args) => evaluate::execute(&args),
        Commands::Analyze(args) => analyze::execute(&args),
        Commands::Run(args) => run::execute(&args).await,
        Commands::Trades(args) => trades::execute(&args),
        Commands::Stop(args) => stop::execute(&args),
        Commands::Config(ConfigCommand::Init(args)) => config::execute_init(&args.path, args.force),
        Commands::Config(ConfigCommand::Show(args)) => config::execute_show(&args.config),
        Commands::Config(ConfigCommand::Validate(args)) => config::execute_validate(&args.config),
    }
}

fn init_cli_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
