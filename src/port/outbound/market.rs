//! Market source port.

use async_trait::async_trait;

use crate::domain::market::MarketSnapshot;
use crate::error::Result;

/// Supplier of market snapshots for a scan cycle.
///
/// Implementations bundle the exchange listing with the fundamental
/// probability and technical features computed by external collaborators.
#[async_trait]
pub trait MarketSource: Send + Sync {
    /// Fetch the markets to analyze in this cycle.
    async fn fetch_markets(&self) -> Result<Vec<MarketSnapshot>>;

    /// Source name for logging.
    fn source_name(&self) -> &'static str;
}
