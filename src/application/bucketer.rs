// Bucketer - Groups raw samples into ordered day or week buckets
use crate::application::calendar::{format_key, Calendar};
use crate::application::summarizer::saturate;
use crate::domain::sample::{Bucket, Sample};
use crate::domain::trend::ResolvedGranularity;
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// Bucket a series at the given granularity.
///
/// Samples landing on the same key are summed, saturating at the largest finite
/// value. A bucket stays null only when every sample that reached it was null.
/// Samples with unparseable timestamps are dropped before bucketing, and no buckets
/// are synthesized for calendar gaps.
pub fn bucket(calendar: &Calendar, series: &[Sample], granularity: ResolvedGranularity) -> Vec<Bucket> {
    // NaiveDate ordering is calendar ordering, so the map yields ascending keys
    let mut slots: BTreeMap<NaiveDate, Option<f64>> = BTreeMap::new();

    for sample in series {
        let Some(instant) = calendar.parse(&sample.timestamp) else {
            tracing::trace!(timestamp = %sample.timestamp, "dropping sample with unparseable timestamp");
            continue;
        };

        let key = match granularity {
            ResolvedGranularity::Daily => Some(calendar.day(&instant)),
            ResolvedGranularity::Weekly => calendar.week_start(&instant),
        };
        let Some(key) = key else {
            tracing::trace!(timestamp = %sample.timestamp, "dropping sample with no representable week start");
            continue;
        };

        let slot = slots.entry(key).or_insert(None);
        if let Some(value) = sample.numeric_value() {
            *slot = Some(saturate(slot.unwrap_or(0.0) + value));
        }
    }

    slots
        .into_iter()
        .map(|(date, value)| Bucket::new(format_key(date), value))
        .collect()
}
