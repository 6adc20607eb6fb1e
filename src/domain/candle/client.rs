//! Candles sub-client — fetch, reshape, cache.

use crate::client::CandleClient;
use crate::domain::candle::{build_candles, Candle, RawQuoteBlock};
use crate::error::CandleError;
use crate::shared::{CacheKey, CandleRequest};
use crate::source::QuoteSource;
use std::sync::Arc;

/// Sub-client for candle operations.
pub struct Candles<'a, S> {
    pub(crate) client: &'a CandleClient<S>,
}

impl<'a, S: QuoteSource> Candles<'a, S> {
    /// Get a chart-ready series. Uses the FIFO response cache.
    pub async fn get(
        &self,
        symbol: &str,
        range: &str,
        interval: &str,
    ) -> Result<Arc<[Candle]>, CandleError> {
        let request = CandleRequest::new(symbol, range, interval)?;
        self.get_request(&request).await
    }

    /// Same as [`Self::get`] for an already-resolved request.
    ///
    /// The lock is released while the provider is queried, so two concurrent
    /// misses for one key both fetch and the later write wins.
    pub async fn get_request(&self, request: &CandleRequest) -> Result<Arc<[Candle]>, CandleError> {
        let key = request.cache_key();
        {
            let cache = self.client.cache.read().await;
            if let Some(hit) = cache.get(&key) {
                tracing::debug!(key = %key, "Candle cache hit");
                return Ok(hit);
            }
        }
        tracing::debug!(key = %key, "Candle cache miss");

        let candles = self.fetch(request).await.inspect_err(|e| {
            tracing::warn!(key = %key, status = e.status(), error = %e, "Candle request failed");
        })?;

        self.client.cache.write().await.set(key, candles.clone());
        Ok(candles)
    }

    /// Invalidate one cached series.
    pub async fn invalidate(&self, key: &CacheKey) -> bool {
        self.client.cache.write().await.remove(key).is_some()
    }

    /// Clear all cached series.
    pub async fn clear_cache(&self) {
        self.client.cache.write().await.clear();
    }

    pub async fn cached_len(&self) -> usize {
        self.client.cache.read().await.len()
    }

    async fn fetch(&self, request: &CandleRequest) -> Result<Arc<[Candle]>, CandleError> {
        let envelope = self
            .client
            .source
            .fetch_chart(&request.symbol, &request.range, &request.interval)
            .await?;
        let block = RawQuoteBlock::try_from(envelope)?;
        let today = self.client.clock.today();
        Ok(build_candles(&block, &request.interval, today).into())
    }
}
