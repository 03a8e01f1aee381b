// Trend service - Single entry point composing the trend engine
use crate::application::bucketer::bucket;
use crate::application::calendar::Calendar;
use crate::application::comparator::compare;
use crate::application::granularity::resolve;
use crate::application::quality::classify;
use crate::application::summarizer::summarize;
use crate::domain::sample::Sample;
use crate::domain::trend::{TrendOptions, TrendResult};

/// Stateless trend evaluation. Holds only the calendar zone, so one instance can
/// be shared freely across threads and requests.
#[derive(Debug, Clone, Copy, Default)]
pub struct TrendService {
    calendar: Calendar,
}

impl TrendService {
    pub fn new(calendar: Calendar) -> Self {
        Self { calendar }
    }

    pub fn calendar(&self) -> &Calendar {
        &self.calendar
    }

    /// Evaluate one metric.
    ///
    /// Granularity is resolved from `current` alone and reused for `previous`.
    /// Without a comparison (disabled, or no previous samples) every previous-side
    /// field is empty or `None`.
    pub fn evaluate(&self, current: &[Sample], previous: Option<&[Sample]>, options: &TrendOptions) -> TrendResult {
        let granularity = resolve(&self.calendar, current, options.granularity);

        let current_buckets = bucket(&self.calendar, current, granularity);
        let previous_buckets = match previous {
            Some(previous) if options.comparison_enabled && !previous.is_empty() => {
                bucket(&self.calendar, previous, granularity)
            }
            _ => Vec::new(),
        };

        let current_summary = summarize(&current_buckets, options.summary_mode);
        let previous_summary = summarize(&previous_buckets, options.summary_mode);
        let comparison = compare(current_summary, previous_summary, options.polarity);
        let sparsity = classify(&current_buckets);

        tracing::debug!(
            granularity = ?granularity,
            current_buckets = current_buckets.len(),
            previous_buckets = previous_buckets.len(),
            sparsity = ?sparsity,
            "evaluated trend"
        );

        TrendResult {
            resolved_granularity: granularity,
            current_buckets,
            previous_buckets,
            current_summary,
            previous_summary,
            delta_absolute: comparison.delta_absolute,
            delta_percent: comparison.delta_percent,
            improved: comparison.improved,
            sparsity,
        }
    }
}
