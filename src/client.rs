//! High-level client — `CandleClient` with the candle sub-client.
//!
//! Holds the quote source, the clock and the process-lifetime response
//! cache. The cache is created here and shared by every clone of the client.

use crate::domain::candle::client::Candles;
use crate::domain::candle::{Candle, CandleCache};
use crate::error::CandleError;
use crate::network::{DEFAULT_CACHE_CAPACITY, ENV_CACHE_CAPACITY, ENV_QUOTE_URL};
use crate::shared::{Clock, SystemClock};
use crate::source::QuoteSource;

#[cfg(feature = "http")]
use crate::http::{QuoteHttp, RetryPolicy};

use async_lock::RwLock;
use std::sync::Arc;

// Re-export sub-client type for convenience.
pub use crate::domain::candle::client::Candles as CandlesClient;

/// The primary entry point.
///
/// ```rust,ignore
/// let client = CandleClient::builder().build()?;
/// let candles = client.get_candles("RELIANCE", "5y", "1wk").await?;
/// ```
pub struct CandleClient<S> {
    pub(crate) source: S,
    pub(crate) clock: Arc<dyn Clock>,
    /// `symbol|range|interval` → finished series.
    pub(crate) cache: Arc<RwLock<CandleCache>>,
}

#[cfg(feature = "http")]
impl CandleClient<QuoteHttp> {
    pub fn builder() -> CandleClientBuilder {
        CandleClientBuilder::default()
    }
}

impl<S: QuoteSource> CandleClient<S> {
    /// Wrap an arbitrary quote source with default cache and clock.
    pub fn with_source(source: S) -> Self {
        CandleClientBuilder::default().build_with_source(source)
    }

    pub fn candles(&self) -> Candles<'_, S> {
        Candles { client: self }
    }

    /// Fetch a chart-ready series for a bare NSE ticker.
    pub async fn get_candles(
        &self,
        symbol: &str,
        range: &str,
        interval: &str,
    ) -> Result<Arc<[Candle]>, CandleError> {
        self.candles().get(symbol, range, interval).await
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Clear all cached series.
    pub async fn clear_all_caches(&self) {
        self.cache.write().await.clear();
    }
}

impl<S: Clone> Clone for CandleClient<S> {
    fn clone(&self) -> Self {
        Self {
            source: self.source.clone(),
            clock: self.clock.clone(),
            cache: self.cache.clone(),
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct CandleClientBuilder {
    #[cfg(feature = "http")]
    base_url: String,
    #[cfg(feature = "http")]
    retry: RetryPolicy,
    cache_capacity: usize,
    clock: Arc<dyn Clock>,
}

impl Default for CandleClientBuilder {
    fn default() -> Self {
        Self {
            #[cfg(feature = "http")]
            base_url: crate::network::DEFAULT_QUOTE_URL.to_string(),
            #[cfg(feature = "http")]
            retry: RetryPolicy::None,
            cache_capacity: DEFAULT_CACHE_CAPACITY,
            clock: Arc::new(SystemClock),
        }
    }
}

impl CandleClientBuilder {
    /// Defaults overlaid with `NSE_CANDLES_QUOTE_URL` and
    /// `NSE_CANDLES_CACHE_CAPACITY` when set. An unparsable capacity is
    /// ignored with a warning.
    pub fn from_env() -> Self {
        let mut builder = Self::default();

        #[cfg(feature = "http")]
        {
            if let Ok(url) = std::env::var(ENV_QUOTE_URL) {
                if !url.trim().is_empty() {
                    builder.base_url = url;
                }
            }
        }
        #[cfg(not(feature = "http"))]
        {
            if std::env::var(ENV_QUOTE_URL).is_ok() {
                tracing::warn!("{} is set but the `http` feature is disabled", ENV_QUOTE_URL);
            }
        }

        if let Ok(raw) = std::env::var(ENV_CACHE_CAPACITY) {
            match raw.trim().parse::<usize>() {
                Ok(n) => builder.cache_capacity = n,
                Err(e) => tracing::warn!(value = %raw, error = %e, "Ignoring invalid {}", ENV_CACHE_CAPACITY),
            }
        }
        builder
    }

    #[cfg(feature = "http")]
    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = url.to_string();
        self
    }

    #[cfg(feature = "http")]
    pub fn retry_policy(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    pub fn cache_capacity(mut self, capacity: usize) -> Self {
        self.cache_capacity = capacity;
        self
    }

    /// Replace the wall clock (e.g. with [`crate::shared::FixedClock`]).
    pub fn clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Arc::new(clock);
        self
    }

    /// Build a client backed by the HTTP quote provider.
    #[cfg(feature = "http")]
    pub fn build(self) -> Result<CandleClient<QuoteHttp>, CandleError> {
        let http = QuoteHttp::with_retry(&self.base_url, self.retry.clone())?;
        Ok(self.build_with_source(http))
    }

    pub fn build_with_source<S: QuoteSource>(self, source: S) -> CandleClient<S> {
        CandleClient {
            source,
            clock: self.clock,
            cache: Arc::new(RwLock::new(CandleCache::new(self.cache_capacity))),
        }
    }
}
