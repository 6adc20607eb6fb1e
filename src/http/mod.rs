//! HTTP layer — `QuoteHttp` with an optional retry policy.

pub mod client;
pub mod retry;

pub use client::QuoteHttp;
pub use retry::{RetryConfig, RetryPolicy};
