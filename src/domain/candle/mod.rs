//! Candle domain — provider quotes to a chart-ready, period-aligned series.
//!
//! Data flows Provider → [`normalize`] → [`anchor`] → [`reconcile`] → cache.
//! Each stage is a pure function; "today" is passed in, never read here.

pub mod anchor;
pub mod client;
mod convert;
pub mod reconcile;
pub mod state;
pub mod wire;

use crate::shared::Interval;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub use convert::normalize;
pub use state::CandleCache;

/// One chart bar.
///
/// `time` is the period anchor (Monday for weekly, the 1st for monthly), not
/// necessarily the raw provider timestamp's date. Serializes as
/// `{"time": "YYYY-MM-DD", "open": .., "high": .., "low": .., "close": .., "volume": ..}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candle {
    pub time: NaiveDate,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: u64,
}

/// Parallel-array quote block extracted from `chart.result[0]`.
///
/// All arrays are index-aligned with `timestamp`; a shorter array is treated
/// as `null` past its end.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawQuoteBlock {
    pub timestamp: Vec<i64>,
    pub open: Vec<Option<f64>>,
    pub high: Vec<Option<f64>>,
    pub low: Vec<Option<f64>>,
    pub close: Vec<Option<f64>>,
    pub volume: Vec<Option<f64>>,
    /// Adjusted close; falls back to `close` when the provider omits it.
    pub adj_close: Vec<Option<f64>>,
}

/// Run the full pipeline for one provider block.
///
/// Intervals other than `1d`/`1wk`/`1mo` only go through normalization.
pub fn build_candles(block: &RawQuoteBlock, interval: &Interval, today: NaiveDate) -> Vec<Candle> {
    let mut candles = normalize(block);
    if matches!(interval, Interval::Other(_)) {
        return candles;
    }
    anchor::reanchor(&mut candles, interval);
    let mut candles = anchor::merge_same_anchor(candles);
    if let Some(period) = interval.period() {
        reconcile::reconcile_trailing(&mut candles, period, today);
    }
    candles
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn scenario_block() -> RawQuoteBlock {
        RawQuoteBlock {
            timestamp: vec![1700000000, 1700086400],
            open: vec![Some(100.0), Some(102.0)],
            high: vec![Some(105.0), Some(106.0)],
            low: vec![Some(99.0), Some(101.0)],
            close: vec![Some(104.0), Some(103.0)],
            volume: vec![Some(1000.0), Some(1100.0)],
            adj_close: vec![],
        }
    }

    #[test]
    fn test_daily_scenario() {
        let candles = build_candles(&scenario_block(), &Interval::Daily, date(2026, 10, 14));
        assert_eq!(candles.len(), 2);
        assert_eq!(candles[0].time, date(2023, 11, 14));
        assert_eq!(candles[1].time, date(2023, 11, 15));
        assert_eq!(candles[0].open, 100.0);
        assert_eq!(candles[0].high, 105.0);
        assert_eq!(candles[0].low, 99.0);
        assert_eq!(candles[0].close, 104.0);
        assert_eq!(candles[0].volume, 1000);
        assert_eq!(candles[1].volume, 1100);
    }

    #[test]
    fn test_weekly_scenario_same_week_merges() {
        // Tue 2023-11-14 and Wed 2023-11-15 share the Monday 2023-11-13 anchor.
        // "Today" is within that week, so the trailing candle is amended.
        let candles = build_candles(&scenario_block(), &Interval::Weekly, date(2023, 11, 16));
        assert_eq!(candles.len(), 1);
        let c = &candles[0];
        assert_eq!(c.time, date(2023, 11, 13));
        assert_eq!(c.open, 100.0);
        assert_eq!(c.high, 106.0);
        assert_eq!(c.low, 99.0);
        assert_eq!(c.close, 103.0);
        assert_eq!(c.volume, 2100);
    }

    #[test]
    fn test_other_interval_is_passthrough() {
        // Three hourly rows; the first two share a UTC date.
        let block = RawQuoteBlock {
            timestamp: vec![1700000000, 1700003600, 1700007200],
            open: vec![Some(100.0), Some(101.0), Some(102.0)],
            high: vec![Some(105.0), Some(106.0), Some(107.0)],
            low: vec![Some(99.0), Some(100.0), Some(101.0)],
            close: vec![Some(104.0), Some(103.0), Some(105.0)],
            volume: vec![Some(10.0), Some(20.0), Some(30.0)],
            adj_close: vec![],
        };
        let candles = build_candles(&block, &Interval::Other("1h".into()), date(2026, 10, 14));
        assert_eq!(candles.len(), 3);
        assert_eq!(candles[0].time, date(2023, 11, 14));
        assert_eq!(candles[1].time, date(2023, 11, 14));
        assert_eq!(candles[2].time, date(2023, 11, 15));
        assert_eq!(candles[1].volume, 20);
    }

    #[test]
    fn test_weekly_stale_series_gets_current_week() {
        let candles = build_candles(&scenario_block(), &Interval::Weekly, date(2026, 10, 14));
        assert_eq!(candles.len(), 2);
        let trailing = &candles[1];
        assert_eq!(trailing.time, date(2026, 10, 12));
        assert_eq!(trailing.open, 103.0);
        assert_eq!(trailing.close, 103.0);
        assert_eq!(trailing.volume, 0);
    }

    #[test]
    fn test_monthly_anchor_and_trailing() {
        let candles = build_candles(&scenario_block(), &Interval::Monthly, date(2023, 12, 5));
        assert_eq!(candles.len(), 2);
        assert_eq!(candles[0].time, date(2023, 11, 1));
        assert_eq!(candles[1].time, date(2023, 12, 1));
        assert_eq!(candles[1].open, candles[0].close);
    }

    #[test]
    fn test_other_interval_passes_through() {
        let candles = build_candles(
            &scenario_block(),
            &Interval::Other("5d".into()),
            date(2026, 10, 14),
        );
        assert_eq!(candles.len(), 2);
        assert_eq!(candles[0].time, date(2023, 11, 14));
    }

    #[test]
    fn test_candle_json_shape() {
        let c = Candle {
            time: date(2024, 1, 1),
            open: 1.5,
            high: 2.0,
            low: 1.0,
            close: 1.75,
            volume: 42,
        };
        let json = serde_json::to_string(&c).unwrap();
        assert_eq!(
            json,
            r#"{"time":"2024-01-01","open":1.5,"high":2.0,"low":1.0,"close":1.75,"volume":42}"#
        );
    }
}
