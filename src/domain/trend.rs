// Trend query domain models
use super::sample::Bucket;
use serde::{Deserialize, Serialize};

/// Requested bucketing resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Granularity {
    #[default]
    Auto,
    Daily,
    Weekly,
}

/// Bucketing resolution after `auto` has been decided
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ResolvedGranularity {
    Daily,
    Weekly,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SummaryMode {
    #[default]
    Sum,
    Average,
    Last,
}

/// Whether a rising summary is good news for the metric
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Polarity {
    #[default]
    HigherIsBetter,
    LowerIsBetter,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Sparsity {
    Empty,
    Sparse,
    Complete,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendOptions {
    pub granularity: Granularity,
    pub summary_mode: SummaryMode,
    pub polarity: Polarity,
    pub comparison_enabled: bool,
}

impl Default for TrendOptions {
    fn default() -> Self {
        Self {
            granularity: Granularity::Auto,
            summary_mode: SummaryMode::Sum,
            polarity: Polarity::HigherIsBetter,
            comparison_enabled: true,
        }
    }
}

/// Request-side options; unset fields fall back to configured defaults
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartialTrendOptions {
    pub granularity: Option<Granularity>,
    pub summary_mode: Option<SummaryMode>,
    pub polarity: Option<Polarity>,
    pub comparison_enabled: Option<bool>,
}

impl PartialTrendOptions {
    pub fn resolve(self, defaults: &TrendOptions) -> TrendOptions {
        TrendOptions {
            granularity: self.granularity.unwrap_or(defaults.granularity),
            summary_mode: self.summary_mode.unwrap_or(defaults.summary_mode),
            polarity: self.polarity.unwrap_or(defaults.polarity),
            comparison_enabled: self.comparison_enabled.unwrap_or(defaults.comparison_enabled),
        }
    }
}

/// Period-over-period delta between two summaries
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Comparison {
    pub delta_absolute: Option<f64>,
    pub delta_percent: Option<f64>,
    pub improved: Option<bool>,
}

/// Everything a renderer needs for one metric widget.
///
/// Every field is always present; absent statistics are `null`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendResult {
    pub resolved_granularity: ResolvedGranularity,
    pub current_buckets: Vec<Bucket>,
    pub previous_buckets: Vec<Bucket>,
    pub current_summary: Option<f64>,
    pub previous_summary: Option<f64>,
    pub delta_absolute: Option<f64>,
    pub delta_percent: Option<f64>,
    pub improved: Option<bool>,
    pub sparsity: Sparsity,
}
