//! Quote-fetch capability consumed by the client.

use crate::domain::candle::wire::ChartEnvelope;
use crate::error::HttpError;
use crate::shared::{Interval, Range, Symbol};
use std::future::Future;
use std::sync::Arc;

/// Anything that can fetch a chart envelope for `(symbol, range, interval)`.
///
/// [`crate::http::QuoteHttp`] is the production implementation; tests plug in
/// doubles.
pub trait QuoteSource: Send + Sync {
    fn fetch_chart(
        &self,
        symbol: &Symbol,
        range: &Range,
        interval: &Interval,
    ) -> impl Future<Output = Result<ChartEnvelope, HttpError>> + Send;
}

impl<T: QuoteSource> QuoteSource for Arc<T> {
    fn fetch_chart(
        &self,
        symbol: &Symbol,
        range: &Range,
        interval: &Interval,
    ) -> impl Future<Output = Result<ChartEnvelope, HttpError>> + Send {
        (**self).fetch_chart(symbol, range, interval)
    }
}
