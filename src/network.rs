//! Network constants for the quote provider.

/// Default quote provider base URL.
pub const DEFAULT_QUOTE_URL: &str = "https://query1.finance.yahoo.com";

/// Browser-like User-Agent; the provider rejects bare client agents.
pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Exchange suffix appended to bare NSE tickers.
pub const NSE_SUFFIX: &str = ".NS";

/// Default number of cached candle series.
pub const DEFAULT_CACHE_CAPACITY: usize = 100;

/// Environment variable overriding [`DEFAULT_QUOTE_URL`].
pub const ENV_QUOTE_URL: &str = "NSE_CANDLES_QUOTE_URL";

/// Environment variable overriding [`DEFAULT_CACHE_CAPACITY`].
pub const ENV_CACHE_CAPACITY: &str = "NSE_CANDLES_CACHE_CAPACITY";
