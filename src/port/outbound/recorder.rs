//! Trade recording port.

use crate::domain::trade::TradeRecord;
use crate::error::Result;

/// Durable, append-only sink for executed trades.
///
/// Callers treat a failed write as an observability gap: it is logged and
/// never blocks or unwinds the trade it describes.
pub trait TradeRecorder: Send + Sync {
    /// Append one executed trade.
    fn record(&self, trade: &TradeRecord) -> Result<()>;
}
