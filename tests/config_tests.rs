use std::fs;

use quantamental::error::{ConfigError, Error};
use quantamental::infrastructure::config::fusion::FusionStrategy;
use quantamental::infrastructure::config::settings::Config;
use quantamental::infrastructure::factory::{build_engine, build_fuser};
use rust_decimal_macros::dec;

fn load(contents: &str) -> quantamental::error::Result<Config> {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("config.toml");
    fs::write(&path, contents).expect("write temp config");
    Config::load(&path)
}

#[test]
fn full_config_round_trips_every_section() {
    let config = load(
        r#"
kill_switch_path = "/var/run/qm/STOP"
trade_log_path = "/var/log/qm/trades.log"

[logging]
level = "debug"
format = "json"

[signals]
confidence = 0.8

[signals.weights]
fundamental = 0.5
momentum = 0.2
mean_reversion = 0.1
volume = 0.1
time_decay = 0.1

[risk]
max_position_dollars = 250.50
kelly_fraction = 0.5
min_edge_threshold = 0.05

[scan]
markets_path = "/srv/markets.json"
scan_interval_secs = 60
max_cycles = 3
"#,
    )
    .unwrap();

    assert_eq!(config.logging.format, "json");
    assert_eq!(config.signals.confidence, 0.8);
    assert_eq!(config.signals.weights.fundamental, 0.5);
    assert_eq!(config.risk.max_position_dollars, dec!(250.50));
    assert_eq!(config.risk.max_contracts, 1000);
    assert_eq!(config.scan.cycle_limit(), Some(3));
    assert_eq!(config.scan.kill_switch_poll_secs, 10);
}

#[test]
fn config_rejects_weights_off_by_a_cent() {
    let result = load(
        r#"
[signals.weights]
fundamental = 0.41
momentum = 0.25
mean_reversion = 0.15
volume = 0.10
time_decay = 0.10
"#,
    );

    match result {
        Err(Error::Config(ConfigError::InvalidValue {
            field: "weights", ..
        })) => {}
        other => panic!("Expected weights error, got {other:?}"),
    }
}

#[test]
fn config_reports_missing_file_as_read_error() {
    let result = Config::load("/nonexistent/quantamental/config.toml");
    assert!(matches!(
        result,
        Err(Error::Config(ConfigError::ReadFile(_)))
    ));
}

#[test]
fn config_rejects_unknown_strategy() {
    let result = load("[fusion]\nstrategy = \"magic\"\n");
    assert!(matches!(result, Err(Error::Config(ConfigError::Parse(_)))));
}

#[test]
fn classifier_with_missing_model_still_builds() {
    let config = load(
        r#"
[fusion]
strategy = "trained_classifier"
model_path = "/nonexistent/meta_model.json"
"#,
    )
    .unwrap();
    assert_eq!(config.fusion.strategy, FusionStrategy::TrainedClassifier);

    let fuser = build_fuser(&config);
    assert_eq!(fuser.name(), "trained_classifier");
    assert!(fuser.requires_training());

    let engine = build_engine(&config);
    let outcome = engine
        .fuser()
        .fuse(0.9, &quantamental::testkit::domain::reference_features());
    assert!(outcome.is_degraded());
    assert_eq!(*outcome.value(), 0.5);
}

#[test]
fn custom_threshold_flows_into_engine() {
    let config = load("[risk]\nmin_edge_threshold = 0.2\n").unwrap();
    let engine = build_engine(&config);
    assert_eq!(engine.evaluator().threshold(), 0.2);
}
