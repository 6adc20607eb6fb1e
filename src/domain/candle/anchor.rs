//! Period anchoring — relabel weekly/monthly candles to their period start.

use super::Candle;
use crate::shared::{Interval, Period};
use chrono::{Datelike, Duration, NaiveDate};

/// Canonical start of the period containing `date`: Monday of its week, or
/// the 1st of its month.
pub fn period_start(date: NaiveDate, period: Period) -> NaiveDate {
    match period {
        Period::Week => {
            let days_since_monday = date.weekday().num_days_from_monday();
            date - Duration::days(i64::from(days_since_monday))
        }
        Period::Month => date.with_day(1).unwrap_or(date),
    }
}

/// Rewrite each candle's `time` to its period anchor. Daily and other
/// intervals are left untouched.
pub fn reanchor(candles: &mut [Candle], interval: &Interval) {
    let Some(period) = interval.period() else {
        return;
    };
    for candle in candles.iter_mut() {
        candle.time = period_start(candle.time, period);
    }
}

/// Fold candles sharing a `time` label into one bar.
///
/// The provider is expected to deliver one row per requested period, but it
/// sometimes returns an extra partial row for the open period. Rows are
/// stable-sorted by `time`, then each run keeps the first open, max high,
/// min low, last close and summed volume.
pub fn merge_same_anchor(mut candles: Vec<Candle>) -> Vec<Candle> {
    candles.sort_by_key(|c| c.time);

    let mut merged: Vec<Candle> = Vec::with_capacity(candles.len());
    for candle in candles {
        match merged.last_mut() {
            Some(agg) if agg.time == candle.time => {
                agg.high = agg.high.max(candle.high);
                agg.low = agg.low.min(candle.low);
                agg.close = candle.close;
                agg.volume += candle.volume;
            }
            _ => merged.push(candle),
        }
    }
    merged
}
