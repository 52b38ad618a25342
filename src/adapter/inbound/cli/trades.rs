//! Handler for the `trades` command.

use serde_json::json;
use tabled::{Table, Tabled};

use crate::adapter::inbound::cli::command::TradesArgs;
use crate::adapter::inbound::cli::{config, output};
use crate::adapter::outbound::file::trade_log::TradeLog;
use crate::domain::trade::TradeRecord;
use crate::error::Result;

#[derive(Tabled)]
struct TradeRow {
    #[tabled(rename = "Time")]
    time: String,
    #[tabled(rename = "Ticker")]
    ticker: String,
    #[tabled(rename = "Side")]
    side: String,
    #[tabled(rename = "Count")]
    count: u32,
    #[tabled(rename = "Price")]
    price: String,
    #[tabled(rename = "Edge")]
    edge: String,
}

impl From<&TradeRecord> for TradeRow {
    fn from(trade: &TradeRecord) -> Self {
        Self {
            time: trade.timestamp.format("%Y-%m-%d %H:%M:%S").to_string(),
            ticker: trade.ticker.to_string(),
            side: trade.side.to_string(),
            count: trade.count,
            price: format!("{}¢", trade.price_cents),
            edge: format!("{:+.3}", trade.edge),
        }
    }
}

/// The most recent `limit` trades, oldest first.
fn tail(trades: &[TradeRecord], limit: Option<usize>) -> &[TradeRecord] {
    match limit {
        Some(limit) => &trades[trades.len().saturating_sub(limit)..],
        None => trades,
    }
}

/// Execute the trades command.
pub fn execute(args: &TradesArgs) -> Result<()> {
    let config = config::load_or_default(&args.config)?;
    let log = TradeLog::new(&config.trade_log_path);
    let trades = log.read_all()?;
    let shown = tail(&trades, args.limit);

    if output::is_json() {
        output::json_output(json!({
            "command": "trades",
            "path": log.path(),
            "total": trades.len(),
            "trades": shown,
        }));
        return Ok(());
    }

    if shown.is_empty() {
        output::note(&format!("No trades in {}", log.path().display()));
        return Ok(());
    }

    output::section(&format!("Trades ({} of {})", shown.len(), trades.len()));
    let rows: Vec<TradeRow> = shown.iter().map(TradeRow::from).collect();
    output::lines(&Table::new(rows).to_string());

    let contracts: u64 = shown.iter().map(|trade| u64::from(trade.count)).sum();
    output::field("Contracts", contracts);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{id::Ticker, trade::Side};

    fn trade(ticker: &str) -> TradeRecord {
        TradeRecord::now(Ticker::new(ticker), Side::Yes, 10, 40, 0.1)
    }

    #[test]
    fn tail_keeps_most_recent() {
        let trades = vec![trade("A"), trade("B"), trade("C")];
        let shown = tail(&trades, Some(2));
        assert_eq!(shown.len(), 2);
        assert_eq!(shown[0].ticker.as_str(), "B");
        assert_eq!(tail(&trades, Some(10)).len(), 3);
        assert_eq!(tail(&trades, None).len(), 3);
    }

    #[test]
    fn row_formats_price_and_edge() {
        let row = TradeRow::from(&trade("A"));
        assert_eq!(row.price, "40¢");
        assert_eq!(row.edge, "+0.100");
        assert_eq!(row.side, "YES");
    }
}
