//! Executed trade records and their persisted line format.
//!
//! Each executed order is persisted as one line:
//!
//! ```text
//! 2026-03-01T14:05:09.120Z | PRES-2028-DEM | YES | 77 @ 40¢ | Edge: +0.162
//! ```
//!
//! # Examples
//!
//! ```
//! use quantamental::domain::trade::{Side, TradeRecord};
//!
//! let line = "2026-03-01T14:05:09.120Z | PRES-2028-DEM | YES | 77 @ 40¢ | Edge: +0.162";
//! let record: TradeRecord = line.parse().unwrap();
//!
//! assert_eq!(record.side, Side::Yes);
//! assert_eq!(record.count, 77);
//! assert_eq!(record.to_string(), line);
//! ```

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use super::error::DomainError;
use super::id::Ticker;

const FIELD_SEPARATOR: &str = " | ";

/// Contract side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Yes,
    No,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Yes => f.write_str("YES"),
            Self::No => f.write_str("NO"),
        }
    }
}

impl FromStr for Side {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "YES" => Ok(Self::Yes),
            "NO" => Ok(Self::No),
            _ => Err(DomainError::UnknownSide(s.to_string())),
        }
    }
}

/// One executed order. Append-only once written.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradeRecord {
    pub timestamp: DateTime<Utc>,
    pub ticker: Ticker,
    pub side: Side,
    pub count: u32,
    pub price_cents: u32,
    pub edge: f64,
}

impl TradeRecord {
    /// Record a trade executed now.
    pub fn now(ticker: Ticker, side: Side, count: u32, price_cents: u32, edge: f64) -> Self {
        Self {
            timestamp: Utc::now(),
            ticker,
            side,
            count,
            price_cents,
            edge,
        }
    }
}

impl fmt::Display for TradeRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} | {} | {} | {} @ {}¢ | Edge: {:+.3}",
            self.timestamp.to_rfc3339_opts(SecondsFormat::Millis, true),
            self.ticker,
            self.side,
            self.count,
            self.price_cents,
            self.edge
        )
    }
}

impl FromStr for TradeRecord {
    type Err = DomainError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let malformed = |reason: &str| DomainError::MalformedTradeRecord {
            line: line.to_string(),
            reason: reason.to_string(),
        };

        // The ticker is free text; it is whatever sits between the timestamp
        // and the last three fields.
        let (timestamp, rest) = line
            .trim_end()
            .split_once(FIELD_SEPARATOR)
            .ok_or_else(|| malformed("expected 5 fields"))?;
        let mut tail = rest.rsplitn(4, FIELD_SEPARATOR);
        let (Some(edge), Some(fill), Some(side), Some(ticker)) =
            (tail.next(), tail.next(), tail.next(), tail.next())
        else {
            return Err(malformed("expected 5 fields"));
        };

        let timestamp = DateTime::parse_from_rfc3339(timestamp)
            .map_err(|_| malformed("invalid timestamp"))?
            .with_timezone(&Utc);

        if ticker.is_empty() {
            return Err(malformed("empty ticker"));
        }

        let side = side.parse::<Side>()?;

        let (count, price) = fill
            .split_once(" @ ")
            .ok_or_else(|| malformed("expected '<count> @ <price>¢'"))?;
        let count = count
            .parse::<u32>()
            .map_err(|_| malformed("invalid count"))?;
        let price_cents = price
            .strip_suffix('¢')
            .and_then(|cents| cents.parse::<u32>().ok())
            .ok_or_else(|| malformed("invalid price"))?;

        let edge = edge
            .strip_prefix("Edge: ")
            .and_then(|value| value.parse::<f64>().ok())
            .ok_or_else(|| malformed("invalid edge"))?;

        Ok(Self {
            timestamp,
            ticker: Ticker::new(ticker),
            side,
            count,
            price_cents,
            edge,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn record(edge: f64) -> TradeRecord {
        TradeRecord {
            timestamp: Utc.with_ymd_and_hms(2026, 3, 1, 14, 5, 9).unwrap(),
            ticker: Ticker::from("PRES-2028-DEM"),
            side: Side::Yes,
            count: 77,
            price_cents: 40,
            edge,
        }
    }

    #[test]
    fn formats_fixed_line() {
        assert_eq!(
            record(0.16227).to_string(),
            "2026-03-01T14:05:09.000Z | PRES-2028-DEM | YES | 77 @ 40¢ | Edge: +0.162"
        );
    }

    #[test]
    fn negative_edge_keeps_sign() {
        assert!(record(-0.0421).to_string().ends_with("Edge: -0.042"));
    }

    #[test]
    fn parses_own_output() {
        let original = record(0.162);
        let parsed: TradeRecord = original.to_string().parse().unwrap();
        assert_eq!(parsed, original);
    }

    #[test]
    fn ticker_containing_separator_survives() {
        let mut original = record(0.1);
        original.ticker = Ticker::from("ODD | TICKER");
        let parsed: TradeRecord = original.to_string().parse().unwrap();
        assert_eq!(parsed.ticker.as_str(), "ODD | TICKER");
        assert_eq!(parsed, original);
    }

    #[test]
    fn rejects_missing_fields() {
        let result = "2026-03-01T14:05:09Z | X | YES".parse::<TradeRecord>();
        assert!(matches!(
            result,
            Err(DomainError::MalformedTradeRecord { .. })
        ));
    }

    #[test]
    fn rejects_unknown_side() {
        let result =
            "2026-03-01T14:05:09Z | X | MAYBE | 1 @ 40¢ | Edge: +0.100".parse::<TradeRecord>();
        assert!(matches!(result, Err(DomainError::UnknownSide(_))));
    }

    #[test]
    fn side_parses_case_insensitively() {
        assert_eq!("yes".parse::<Side>().unwrap(), Side::Yes);
        assert_eq!("NO".parse::<Side>().unwrap(), Side::No);
    }
}
