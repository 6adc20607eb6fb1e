//! Wire types for the provider's chart endpoint.
//!
//! Shape: `{"chart": {"result": [{"timestamp": [...], "indicators": {"quote": [{...}],
//! "adjclose": [{"adjclose": [...]}]}}], "error": null}}`.

use serde::{Deserialize, Serialize};

/// Top-level chart response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartEnvelope {
    #[serde(default)]
    pub chart: Option<Chart>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Chart {
    #[serde(default)]
    pub result: Option<Vec<ChartResult>>,
    #[serde(default)]
    pub error: Option<ChartFault>,
}

/// Provider-side error object (`{"code": "Not Found", "description": "..."}`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartFault {
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartResult {
    /// Unix seconds, index-aligned with every indicator array.
    #[serde(default)]
    pub timestamp: Vec<i64>,
    #[serde(default)]
    pub indicators: Option<Indicators>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Indicators {
    #[serde(default)]
    pub quote: Vec<QuoteArrays>,
    #[serde(default)]
    pub adjclose: Option<Vec<AdjCloseArrays>>,
}

/// Parallel OHLCV arrays. Entries are `null` where the provider has a gap.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QuoteArrays {
    #[serde(default)]
    pub open: Vec<Option<f64>>,
    #[serde(default)]
    pub high: Vec<Option<f64>>,
    #[serde(default)]
    pub low: Vec<Option<f64>>,
    #[serde(default)]
    pub close: Vec<Option<f64>>,
    #[serde(default)]
    pub volume: Vec<Option<f64>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AdjCloseArrays {
    #[serde(default)]
    pub adjclose: Vec<Option<f64>>,
}
