// Granularity selector - Resolves `auto` from the observed date span
use crate::application::calendar::Calendar;
use crate::domain::sample::Sample;
use crate::domain::trend::{Granularity, ResolvedGranularity};

/// Longest span, in days, still shown as daily buckets under `auto`
pub const AUTO_DAILY_MAX_SPAN_DAYS: i64 = 45;

const MILLIS_PER_DAY: i64 = 86_400_000;

/// Pick daily or weekly buckets. An explicit request always wins.
pub fn resolve(calendar: &Calendar, series: &[Sample], requested: Granularity) -> ResolvedGranularity {
    match requested {
        Granularity::Daily => ResolvedGranularity::Daily,
        Granularity::Weekly => ResolvedGranularity::Weekly,
        Granularity::Auto => match span_days(calendar, series) {
            Some(days) if days > AUTO_DAILY_MAX_SPAN_DAYS => ResolvedGranularity::Weekly,
            _ => ResolvedGranularity::Daily,
        },
    }
}

/// Whole days between the earliest and latest valid timestamps, inclusive.
/// `None` when no timestamp parses.
pub fn span_days(calendar: &Calendar, series: &[Sample]) -> Option<i64> {
    let (min, max) = series
        .iter()
        .filter_map(|sample| calendar.parse(&sample.timestamp))
        .map(|instant| instant.timestamp_millis())
        .fold(None, |bounds, ms| match bounds {
            None => Some((ms, ms)),
            Some((lo, hi)) => Some((lo.min(ms), hi.max(ms))),
        })?;

    Some(((max - min).div_euclid(MILLIS_PER_DAY) + 1).max(1))
}
