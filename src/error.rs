//! Unified error types.

use serde::Serialize;
use thiserror::Error;

/// Top-level error returned by `get_candles`.
///
/// Every variant is terminal for the request: no partial candle series is
/// ever returned alongside an error.
#[derive(Error, Debug)]
pub enum CandleError {
    #[error("Symbol is required.")]
    MissingSymbol,

    /// The provider answered 404 at the transport level.
    #[error("Stock symbol not found: {0}")]
    NotFound(String),

    /// The provider answered, but the body had no `chart.result[0]`.
    #[error("No data available for this symbol")]
    NoData,

    #[error("Too many requests. Please try again later.")]
    RateLimited,

    #[error("Error fetching stock data: {0}")]
    Upstream(String),
}

impl CandleError {
    /// HTTP-style status code for this error.
    pub fn status(&self) -> u16 {
        match self {
            Self::MissingSymbol => 400,
            Self::NotFound(_) | Self::NoData => 404,
            Self::RateLimited => 429,
            Self::Upstream(_) => 500,
        }
    }

    /// Short human-readable message suitable for a response body.
    pub fn details(&self) -> &'static str {
        match self {
            Self::MissingSymbol => "Symbol is required.",
            Self::NotFound(_) => "Stock symbol not found",
            Self::NoData => "No data available for this symbol",
            Self::RateLimited => "Too many requests. Please try again later.",
            Self::Upstream(_) => "Error fetching stock data",
        }
    }

    /// Build the JSON error body. Only server-side failures carry the
    /// underlying message.
    pub fn to_body(&self) -> ErrorBody {
        let error = match self {
            Self::Upstream(msg) => Some(msg.clone()),
            _ => None,
        };
        ErrorBody {
            details: self.details().to_string(),
            error,
        }
    }
}

impl From<HttpError> for CandleError {
    fn from(e: HttpError) -> Self {
        match e {
            HttpError::NotFound(body) => Self::NotFound(body),
            HttpError::RateLimited { .. } => Self::RateLimited,
            other => Self::Upstream(other.to_string()),
        }
    }
}

/// Serializable error payload: `{"details": "...", "error": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorBody {
    pub details: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// HTTP-layer errors.
#[derive(Error, Debug)]
pub enum HttpError {
    #[cfg(feature = "http")]
    #[error("Request failed: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Server error {status}: {body}")]
    ServerError { status: u16, body: String },

    #[error("Rate limited (retry after {retry_after_ms:?}ms)")]
    RateLimited { retry_after_ms: Option<u64> },

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Failed to decode response body: {0}")]
    Decode(String),
}
