//! # nse-candles
//!
//! Chart-ready OHLCV candles for NSE-listed equities.
//!
//! ## Architecture
//!
//! The crate is organized in layers:
//!
//! 1. **Core** — Shared newtypes, the candle pipeline, the response cache (always available)
//! 2. **Source** — `QuoteSource`, the quote-fetch capability the client consumes
//! 3. **HTTP** — `QuoteHttp`, the provider chart endpoint with an optional retry policy
//! 4. **High-Level Client** — `CandleClient` with the candle sub-client and caching
//!
//! The pipeline runs Normalizer → Re-anchorer → Trailing-period reconciler on
//! every cache miss:
//!
//! - rows missing any OHLCV field are dropped
//! - weekly/monthly candles are relabelled to Monday / the 1st
//! - the last weekly/monthly bar always describes the period containing today
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use nse_candles::prelude::*;
//!
//! let client = CandleClient::builder().build()?;
//! let weekly = client.get_candles("RELIANCE", "5y", "1wk").await?;
//! println!("{}", serde_json::to_string(&*weekly)?);
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Shared newtypes used across the pipeline.
pub mod shared;

/// Domain modules (vertical slices): types, wire types, conversions, state.
pub mod domain;

/// Unified error types.
pub mod error;

/// Network constants.
pub mod network;

/// Named interval/range presets.
pub mod presets;

// ── Layer 2: Source ──────────────────────────────────────────────────────────

/// Quote-fetch capability.
pub mod source;

// ── Layer 3: HTTP ────────────────────────────────────────────────────────────

/// HTTP client with retry policies.
#[cfg(feature = "http")]
pub mod http;

// ── Layer 4: High-Level Client ───────────────────────────────────────────────

/// `CandleClient` — the primary entry point.
pub mod client;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Shared newtypes
    pub use crate::shared::{
        CacheKey, CandleRequest, Clock, FixedClock, Interval, Period, Range, Symbol, SystemClock,
    };

    // Domain types
    pub use crate::domain::candle::reconcile::Trailing;
    pub use crate::domain::candle::wire::ChartEnvelope;
    pub use crate::domain::candle::{build_candles, Candle, CandleCache, RawQuoteBlock};

    // Errors
    pub use crate::error::{CandleError, ErrorBody, HttpError};

    // Source + client
    pub use crate::client::{CandleClient, CandleClientBuilder, CandlesClient};
    pub use crate::source::QuoteSource;

    #[cfg(feature = "http")]
    pub use crate::http::{QuoteHttp, RetryConfig, RetryPolicy};

    // Presets
    pub use crate::presets::Preset;
}
