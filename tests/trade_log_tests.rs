use std::fs;

use quantamental::adapter::outbound::file::trade_log::TradeLog;
use quantamental::domain::trade::{Side, TradeRecord};
use quantamental::port::outbound::recorder::TradeRecorder;
use quantamental::testkit::domain::trade;

#[test]
fn records_use_the_fixed_line_format() {
    let dir = tempfile::tempdir().unwrap();
    let log = TradeLog::new(dir.path().join("trades.log"));

    log.record(&trade("PRES-2028-DEM", 77, 40, 0.1623)).unwrap();

    let content = fs::read_to_string(log.path()).unwrap();
    let line = content.lines().next().unwrap();
    let fields: Vec<&str> = line.split(" | ").collect();
    assert_eq!(fields.len(), 5);
    assert_eq!(fields[1], "PRES-2028-DEM");
    assert_eq!(fields[2], "YES");
    assert_eq!(fields[3], "77 @ 40¢");
    assert_eq!(fields[4], "Edge: +0.162");
    assert!(content.ends_with('\n'));
}

#[test]
fn existing_entries_survive_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("trades.log");

    TradeLog::new(&path).record(&trade("A", 1, 10, 0.2)).unwrap();
    TradeLog::new(&path).record(&trade("B", 2, 20, 0.3)).unwrap();

    let trades = TradeLog::new(&path).read_all().unwrap();
    let tickers: Vec<&str> = trades.iter().map(|t| t.ticker.as_str()).collect();
    assert_eq!(tickers, ["A", "B"]);
}

#[test]
fn read_back_skips_foreign_lines() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("trades.log");
    fs::write(
        &path,
        "2026-03-01T14:05:09.120Z | X | YES | 5 @ 30¢ | Edge: +0.100\n\
         garbage\n\
         2026-03-01T14:06:00.000Z | Y | YES | 6 @ 31¢ | Edge: +0.090\n",
    )
    .unwrap();

    let trades = TradeLog::new(&path).read_all().unwrap();
    assert_eq!(trades.len(), 2);
    assert_eq!(trades[1].count, 6);
    assert_eq!(trades[1].side, Side::Yes);
}

#[test]
fn negative_edge_keeps_its_sign() {
    let record: TradeRecord = "2026-03-01T14:05:09.120Z | X | NO | 5 @ 30¢ | Edge: -0.050"
        .parse()
        .unwrap();
    assert_eq!(record.side, Side::No);
    assert!(record.edge < 0.0);
    assert!(record.to_string().ends_with("Edge: -0.050"));
}

#[test]
fn ticker_with_separator_is_read_back() {
    let dir = tempfile::tempdir().unwrap();
    let log = TradeLog::new(dir.path().join("trades.log"));

    log.record(&trade("WEIRD | NAME", 3, 25, 0.12)).unwrap();

    let trades = log.read_all().unwrap();
    assert_eq!(trades.len(), 1);
    assert_eq!(trades[0].ticker.as_str(), "WEIRD | NAME");
    assert_eq!(trades[0].count, 3);
}
