//! Trailing-period reconciliation for weekly/monthly series.
//!
//! The last bar of a weekly/monthly chart must describe the period that
//! contains "today". When the provider's last row closes an earlier period, a
//! carry-forward bar is appended; when it already is the open period, that bar
//! is amended in place with any other rows of the same period.

use super::anchor::period_start;
use super::Candle;
use crate::shared::Period;
use chrono::NaiveDate;

/// Outcome of [`reconcile_trailing`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trailing {
    /// The series was empty.
    Empty,
    /// A candle for the current period was appended.
    Synthesized,
    /// The last candle already covered the current period and was amended.
    Amended,
}

/// Make the trailing candle reflect the period containing `today`.
pub fn reconcile_trailing(candles: &mut Vec<Candle>, period: Period, today: NaiveDate) -> Trailing {
    let current = period_start(today, period);

    let Some(last) = candles.last() else {
        return Trailing::Empty;
    };

    if last.time < current {
        let carried = last.close;
        let mut bar = Candle {
            time: current,
            open: carried,
            high: carried,
            low: carried,
            close: carried,
            volume: 0,
        };
        for c in candles.iter().filter(|c| c.time >= current) {
            bar.high = bar.high.max(c.high);
            bar.low = bar.low.min(c.low);
            bar.volume += c.volume;
        }
        tracing::debug!(period_start = %current, open = bar.open, "Synthesized trailing candle");
        candles.push(bar);
        return Trailing::Synthesized;
    }

    let last_idx = candles.len() - 1;
    let (earlier, tail) = candles.split_at_mut(last_idx);
    let last = &mut tail[0];
    for c in earlier.iter().filter(|c| c.time >= current) {
        last.high = last.high.max(c.high);
        last.low = last.low.min(c.low);
        last.volume += c.volume;
    }
    tracing::debug!(period_start = %current, close = last.close, "Amended trailing candle");
    Trailing::Amended
}
