mod support;

use assert_cmd::Command;
use predicates::prelude::*;
use quantamental::testkit::domain::market;
use support::files::Workspace;

fn quantamental() -> Command {
    let mut cmd = Command::cargo_bin("quantamental").expect("binary built");
    cmd.env_remove("RUST_LOG").arg("--color").arg("never");
    cmd
}

#[test]
fn evaluate_json_reports_a_buy() {
    let workspace = Workspace::new();
    let config = workspace.path().join("absent.toml");

    let output = quantamental()
        .args(["evaluate", "--json", "--fundamental", "0.65", "--price", "40"])
        .args(["--rsi", "45", "--macd", "0.02", "--obv", "5000"])
        .args(["--volume-sma", "1000", "--hours", "48"])
        .arg("--config")
        .arg(&config)
        .output()
        .unwrap();

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["action"], "BUY");
    assert_eq!(value["sizing"]["contracts"], 77);
    assert_eq!(value["submit"], true);
}

#[test]
fn evaluate_without_price_is_a_usage_error() {
    quantamental()
        .args(["evaluate", "--fundamental", "0.65"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--price"));
}

#[test]
fn invalid_config_exits_nonzero_with_field_name() {
    let workspace = Workspace::new();
    let path = workspace.path().join("config.toml");
    std::fs::write(&path, "[risk]\nkelly_fraction = 1.5\n").unwrap();

    quantamental()
        .args(["config", "validate", "--config"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("kelly_fraction"));
}

#[test]
fn config_init_writes_a_valid_template() {
    let workspace = Workspace::new();
    let path = workspace.path().join("nested").join("config.toml");

    quantamental()
        .args(["config", "init"])
        .arg(&path)
        .assert()
        .success();
    assert!(path.exists());

    quantamental()
        .args(["config", "validate", "--config"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("valid"));

    quantamental()
        .args(["config", "init"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("--force"));
}

#[test]
fn run_then_trades_reads_back_the_log() {
    let workspace = Workspace::new();
    workspace.write_markets(&[market("CLI-A", 0.65, 40), market("CLI-B", 0.65, 60)]);
    let config = workspace.write_config(1);

    quantamental()
        .args(["run", "--config"])
        .arg(&config)
        .assert()
        .success();

    let output = quantamental()
        .args(["trades", "--json", "--config"])
        .arg(&config)
        .output()
        .unwrap();
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["total"], 1);
    assert_eq!(value["trades"][0]["ticker"], "CLI-A");
    assert_eq!(value["trades"][0]["count"], 77);
}

#[test]
fn stop_creates_the_sentinel() {
    let workspace = Workspace::new();
    let config = workspace.write_config(1);

    quantamental()
        .args(["stop", "--config"])
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("Stop requested"));
    assert!(workspace.kill_switch_path().exists());
}

#[test]
fn analyze_json_describes_the_strategy() {
    let workspace = Workspace::new();

    let output = quantamental()
        .args(["analyze", "--json", "--config"])
        .arg(workspace.path().join("absent.toml"))
        .output()
        .unwrap();

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["diagnostics"]["strategy_type"], "weighted_ensemble");
    assert_eq!(value["edges"][0]["action"], "BUY");
    assert_eq!(value["edges"][1]["action"], "SKIP");
}
