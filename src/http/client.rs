//! Low-level HTTP client — `QuoteHttp`.
//!
//! Fetches the provider's chart document and returns wire types. Conversion to
//! candles happens in the client layer.

use crate::domain::candle::wire::ChartEnvelope;
use crate::error::HttpError;
use crate::http::retry::{RetryConfig, RetryPolicy};
use crate::network::USER_AGENT;
use crate::shared::{Interval, Range, Symbol};
use crate::source::QuoteSource;

use reqwest::Client;
use serde::de::DeserializeOwned;
use std::future::Future;
use std::time::Duration;

/// Low-level HTTP client for the chart endpoint.
#[derive(Clone)]
pub struct QuoteHttp {
    base_url: String,
    client: Client,
    retry: RetryPolicy,
}

impl QuoteHttp {
    pub fn new(base_url: &str) -> Result<Self, HttpError> {
        Self::with_retry(base_url, RetryPolicy::None)
    }

    pub fn with_retry(base_url: &str, retry: RetryPolicy) -> Result<Self, HttpError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .pool_max_idle_per_host(10)
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
            retry,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // ── Chart ────────────────────────────────────────────────────────────

    pub async fn get_chart(
        &self,
        symbol: &Symbol,
        range: &Range,
        interval: &Interval,
    ) -> Result<ChartEnvelope, HttpError> {
        let url = format!(
            "{}/v8/finance/chart/{}?range={}&interval={}&events=history&includeAdjustedClose=true",
            self.base_url,
            urlencoding::encode(symbol.as_str()),
            urlencoding::encode(range.as_str()),
            urlencoding::encode(interval.as_str()),
        );
        self.get(&url, self.retry.clone()).await
    }

    // ── Internal HTTP methods ────────────────────────────────────────────

    async fn get<T: DeserializeOwned>(&self, url: &str, retry: RetryPolicy) -> Result<T, HttpError> {
        let config = match &retry {
            RetryPolicy::None => {
                return self.do_get(url).await;
            }
            RetryPolicy::Idempotent => RetryConfig::idempotent(),
            RetryPolicy::Custom(c) => c.clone(),
        };

        let mut attempt = 0;
        loop {
            let err = match self.do_get::<T>(url).await {
                Ok(resp) => return Ok(resp),
                Err(e) => e,
            };

            let should_retry = match &err {
                HttpError::ServerError { status, .. } => config.retryable_statuses.contains(status),
                HttpError::RateLimited { .. } => config.retryable_statuses.contains(&429),
                HttpError::Reqwest(re) => re.is_connect() || re.is_timeout(),
                _ => false,
            };

            // The last attempt's error is returned as-is.
            if !should_retry || attempt >= config.max_retries {
                return Err(err);
            }

            let delay = match &err {
                HttpError::RateLimited {
                    retry_after_ms: Some(ms),
                } => Duration::from_millis(*ms),
                _ => config.delay_for_attempt(attempt),
            };
            tracing::debug!(
                attempt = attempt + 1,
                max = config.max_retries,
                delay_ms = delay.as_millis() as u64,
                "Retrying request to {}",
                url
            );
            futures_timer::Delay::new(delay).await;
            attempt += 1;
        }
    }

    async fn do_get<T: DeserializeOwned>(&self, url: &str) -> Result<T, HttpError> {
        let resp = self.client.get(url).send().await?;
        let status = resp.status();

        if status.is_success() {
            let bytes = resp.bytes().await?;
            return serde_json::from_slice::<T>(&bytes).map_err(|e| HttpError::Decode(e.to_string()));
        }

        let status_code = status.as_u16();
        let retry_after_ms = resp
            .headers()
            .get(reqwest::header::RETRY_AFTER)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.trim().parse::<u64>().ok())
            .map(|secs| secs * 1000);
        let body_text = resp.text().await.unwrap_or_default();

        match status_code {
            404 => Err(HttpError::NotFound(body_text)),
            429 => Err(HttpError::RateLimited { retry_after_ms }),
            400..=499 => Err(HttpError::BadRequest(body_text)),
            _ => Err(HttpError::ServerError {
                status: status_code,
                body: body_text,
            }),
        }
    }
}

impl QuoteSource for QuoteHttp {
    fn fetch_chart(
        &self,
        symbol: &Symbol,
        range: &Range,
        interval: &Interval,
    ) -> impl Future<Output = Result<ChartEnvelope, HttpError>> + Send {
        self.get_chart(symbol, range, interval)
    }
}
