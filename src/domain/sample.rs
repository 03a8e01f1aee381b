// Sample and bucket domain models
use serde::{Deserialize, Serialize};

/// One raw observation of a metric.
///
/// `value: None` is an observed absence: the instant was measured but carried no
/// number. A sample whose timestamp cannot be parsed is dropped entirely.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    #[serde(alias = "ts")]
    pub timestamp: String,
    #[serde(default)]
    pub value: Option<f64>,
}

impl Sample {
    pub fn new(timestamp: impl Into<String>, value: Option<f64>) -> Self {
        Self {
            timestamp: timestamp.into(),
            value,
        }
    }

    /// Numeric value, with non-finite numbers treated as null
    pub fn numeric_value(&self) -> Option<f64> {
        self.value.filter(|v| v.is_finite())
    }
}

/// Samples for one metric over one logical period, in no particular order
pub type Series = Vec<Sample>;

/// One aggregation slot of a bucketed series.
///
/// `key` is a `YYYY-MM-DD` day, or the Monday that starts the week.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bucket {
    pub key: String,
    pub value: Option<f64>,
}

impl Bucket {
    pub fn new(key: String, value: Option<f64>) -> Self {
        Self { key, value }
    }

    pub fn is_null(&self) -> bool {
        self.value.is_none()
    }
}
