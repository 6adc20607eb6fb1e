//! Shared newtypes and utilities used across the pipeline.
//!
//! These types are serialization-transparent: they serialize/deserialize as the
//! plain strings the provider and callers exchange, so they can be used directly
//! in query parameters and cache keys.

pub mod clock;
pub mod decimal;

pub use clock::{Clock, FixedClock, SystemClock};
pub use decimal::round2;

use crate::error::CandleError;
use crate::network::NSE_SUFFIX;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;

/// Range used when the caller does not pass one.
pub const DEFAULT_RANGE: &str = "2y";

/// Interval used when the caller does not pass one.
pub const DEFAULT_INTERVAL: &str = "1d";

// ─── Symbol ──────────────────────────────────────────────────────────────────

/// Provider symbol with the exchange suffix applied (e.g. `"RELIANCE.NS"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Symbol(String);

impl Symbol {
    /// Normalize a bare NSE ticker: trim it, upper-case it and append `.NS`
    /// unless it already carries the suffix. A ticker that is only the suffix
    /// counts as missing.
    pub fn nse(raw: &str) -> Result<Self, CandleError> {
        let ticker = raw.trim().to_ascii_uppercase();
        let base = ticker.strip_suffix(NSE_SUFFIX).unwrap_or(ticker.as_str());
        if base.is_empty() {
            return Err(CandleError::MissingSymbol);
        }
        Ok(Self(format!("{}{}", base, NSE_SUFFIX)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for Symbol {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

// ─── Range ───────────────────────────────────────────────────────────────────

/// Lookback range (`1y`, `5y`, `max`, ...). Opaque: forwarded to the provider
/// without interpretation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Range(String);

impl Range {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Range {
    fn default() -> Self {
        Self(DEFAULT_RANGE.to_string())
    }
}

impl std::fmt::Display for Range {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Range {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for Range {
    fn from(s: String) -> Self {
        Self(s)
    }
}

// ─── Interval ────────────────────────────────────────────────────────────────

/// Candle interval requested from the provider.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum Interval {
    #[default]
    Daily,
    Weekly,
    Monthly,
    /// Any other provider interval. Passed through with no re-anchoring or
    /// trailing reconciliation.
    Other(String),
}

impl Interval {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Daily => "1d",
            Self::Weekly => "1wk",
            Self::Monthly => "1mo",
            Self::Other(s) => s,
        }
    }

    /// Calendar period whose boundaries this interval is anchored to.
    pub fn period(&self) -> Option<Period> {
        match self {
            Self::Weekly => Some(Period::Week),
            Self::Monthly => Some(Period::Month),
            Self::Daily | Self::Other(_) => None,
        }
    }
}

impl FromStr for Interval {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "1d" => Self::Daily,
            "1wk" => Self::Weekly,
            "1mo" => Self::Monthly,
            other => Self::Other(other.to_string()),
        })
    }
}

impl From<&str> for Interval {
    fn from(s: &str) -> Self {
        match s.parse() {
            Ok(interval) => interval,
            Err(never) => match never {},
        }
    }
}

impl std::fmt::Display for Interval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Serialize for Interval {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Interval {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Interval::from(s.as_str()))
    }
}

/// Calendar period a weekly/monthly candle is anchored to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Period {
    /// Monday-start week.
    Week,
    /// Calendar month.
    Month,
}

// ─── Request / cache key ─────────────────────────────────────────────────────

/// A fully-resolved candle request.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CandleRequest {
    pub symbol: Symbol,
    pub range: Range,
    pub interval: Interval,
}

impl CandleRequest {
    pub fn new(symbol: &str, range: &str, interval: &str) -> Result<Self, CandleError> {
        Ok(Self {
            symbol: Symbol::nse(symbol)?,
            range: Range::from(range),
            interval: Interval::from(interval),
        })
    }

    /// Build from optional query parameters, applying the `2y`/`1d` defaults.
    /// A missing symbol fails before anything else is looked at.
    pub fn from_query(
        symbol: Option<&str>,
        range: Option<&str>,
        interval: Option<&str>,
    ) -> Result<Self, CandleError> {
        let symbol = symbol.ok_or(CandleError::MissingSymbol)?;
        Self::new(
            symbol,
            range.unwrap_or(DEFAULT_RANGE),
            interval.unwrap_or(DEFAULT_INTERVAL),
        )
    }

    pub fn cache_key(&self) -> CacheKey {
        CacheKey {
            symbol: self.symbol.clone(),
            range: self.range.clone(),
            interval: self.interval.clone(),
        }
    }
}

/// Cache key for a candle series: `symbol|range|interval`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    pub symbol: Symbol,
    pub range: Range,
    pub interval: Interval,
}

impl std::fmt::Display for CacheKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}|{}|{}", self.symbol, self.range, self.interval)
    }
}
