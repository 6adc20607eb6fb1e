//! Chart presets: button label → (interval, range) pairs used by chart UIs.

use crate::shared::{Interval, Range};

/// A named interval/range combination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Preset {
    pub label: &'static str,
    pub interval: &'static str,
    pub range: &'static str,
}

impl Preset {
    pub fn interval(&self) -> Interval {
        Interval::from(self.interval)
    }

    pub fn range(&self) -> Range {
        Range::from(self.range)
    }
}

/// Lookback presets on the stock chart.
pub const CHART_PRESETS: &[Preset] = &[
    Preset { label: "6M", interval: "1d", range: "6mo" },
    Preset { label: "1Y", interval: "1d", range: "1y" },
    Preset { label: "2Y", interval: "1wk", range: "2y" },
    Preset { label: "XY", interval: "1mo", range: "10y" },
];

/// Interval presets: one per candle granularity.
pub const INTERVAL_PRESETS: &[Preset] = &[
    Preset { label: "1D", interval: "1d", range: "1y" },
    Preset { label: "1W", interval: "1wk", range: "5y" },
    Preset { label: "1M", interval: "1mo", range: "max" },
];

/// Find a preset by label (case-insensitive) across both tables.
pub fn find(label: &str) -> Option<&'static Preset> {
    CHART_PRESETS
        .iter()
        .chain(INTERVAL_PRESETS)
        .find(|p| p.label.eq_ignore_ascii_case(label))
}
