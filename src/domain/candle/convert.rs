//! Conversions from wire types to candles.

use super::wire::ChartEnvelope;
use super::{Candle, RawQuoteBlock};
use crate::error::CandleError;
use crate::shared::round2;
use chrono::DateTime;

impl TryFrom<ChartEnvelope> for RawQuoteBlock {
    type Error = CandleError;

    /// Extract `chart.result[0]`. A body without it, or without
    /// `indicators.quote[0]`, is reported as [`CandleError::NoData`].
    fn try_from(env: ChartEnvelope) -> Result<Self, Self::Error> {
        let result = env
            .chart
            .and_then(|c| c.result)
            .and_then(|r| r.into_iter().next())
            .ok_or(CandleError::NoData)?;

        let indicators = result.indicators.ok_or(CandleError::NoData)?;
        let quote = indicators
            .quote
            .into_iter()
            .next()
            .ok_or(CandleError::NoData)?;

        let adj_close = indicators
            .adjclose
            .and_then(|a| a.into_iter().next())
            .map(|a| a.adjclose)
            .filter(|a| !a.is_empty())
            .unwrap_or_else(|| quote.close.clone());

        Ok(Self {
            timestamp: result.timestamp,
            open: quote.open,
            high: quote.high,
            low: quote.low,
            close: quote.close,
            volume: quote.volume,
            adj_close,
        })
    }
}

/// A usable raw value: present, finite, strictly positive.
fn present(values: &[Option<f64>], i: usize) -> Option<f64> {
    values
        .get(i)
        .copied()
        .flatten()
        .filter(|v| v.is_finite() && *v > 0.0)
}

/// Reshape a raw block into candles dated by each timestamp's UTC day.
///
/// An index missing any of open/high/low/close/volume (null, zero, or past
/// the end of its array) is skipped. Skips are not errors.
pub fn normalize(block: &RawQuoteBlock) -> Vec<Candle> {
    let candles: Vec<Candle> = block
        .timestamp
        .iter()
        .enumerate()
        .filter_map(|(i, &ts)| candle_at(block, i, ts))
        .collect();

    let dropped = block.timestamp.len() - candles.len();
    if dropped > 0 {
        tracing::debug!(
            dropped,
            kept = candles.len(),
            "Skipped incomplete quote rows"
        );
    }
    candles
}

fn candle_at(block: &RawQuoteBlock, i: usize, ts: i64) -> Option<Candle> {
    let open = round2(present(&block.open, i)?)?;
    let high = round2(present(&block.high, i)?)?;
    let low = round2(present(&block.low, i)?)?;
    let close = round2(present(&block.close, i)?)?;
    let volume = present(&block.volume, i)?.trunc() as u64;
    let time = DateTime::from_timestamp(ts, 0)?.date_naive();

    Some(Candle {
        time,
        open,
        high,
        low,
        close,
        volume,
    })
}
