// Summarizer - Reduces a bucketed series to one scalar
use crate::domain::sample::Bucket;
use crate::domain::trend::SummaryMode;

/// Clamp an arithmetic result that overflowed to +/-inf back to the largest finite value
pub(crate) fn saturate(value: f64) -> f64 {
    value.clamp(f64::MIN, f64::MAX)
}

/// Summarize the non-null buckets. `None` when there are none.
///
/// `Last` is the last non-null bucket, not the last bucket. Sums that overflow
/// saturate at the largest finite value.
pub fn summarize(buckets: &[Bucket], mode: SummaryMode) -> Option<f64> {
    let values: Vec<f64> = buckets
        .iter()
        .filter_map(|b| b.value)
        .filter(|v| v.is_finite())
        .collect();
    let last = *values.last()?;
    let count = values.len() as f64;

    let summary: f64 = match mode {
        SummaryMode::Sum => values.iter().fold(0.0, |acc, v| saturate(acc + v)),
        SummaryMode::Average => {
            let total: f64 = values.iter().sum();
            if total.is_finite() {
                total / count
            } else {
                saturate(values.iter().map(|v| v / count).sum())
            }
        }
        SummaryMode::Last => last,
    };

    Some(summary)
}
