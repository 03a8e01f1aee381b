// Calendar normalizer - Timestamp parsing and day/week keys
use chrono::{
    DateTime, Datelike, Duration, FixedOffset, NaiveDate, NaiveDateTime, Offset, TimeZone, Utc,
};

pub type Instant = DateTime<FixedOffset>;

const NAIVE_DATE_TIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Interprets timestamps in one fixed local zone.
///
/// Weeks always start on Monday (ISO convention); a Sunday belongs to the week of
/// the Monday six days before it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Calendar {
    zone: FixedOffset,
}

impl Default for Calendar {
    fn default() -> Self {
        Self::utc()
    }
}

impl Calendar {
    pub fn new(zone: FixedOffset) -> Self {
        Self { zone }
    }

    pub fn utc() -> Self {
        Self::new(Utc.fix())
    }

    /// Returns `None` when the offset is a full day or more
    pub fn from_offset_minutes(minutes: i32) -> Option<Self> {
        minutes
            .checked_mul(60)
            .and_then(FixedOffset::east_opt)
            .map(Self::new)
    }

    pub fn zone(&self) -> FixedOffset {
        self.zone
    }

    /// Parse a timestamp into an instant in the local zone.
    /// Strings with an explicit offset are converted; naive ones are read as local
    /// wall-clock time, and a bare date is local midnight. Instants whose week start
    /// falls before the earliest representable date are invalid.
    pub fn parse(&self, timestamp: &str) -> Option<Instant> {
        self.parse_instant(timestamp)
            .filter(|instant| self.week_start(instant).is_some())
    }

    fn parse_instant(&self, timestamp: &str) -> Option<Instant> {
        let raw = timestamp.trim();
        if raw.is_empty() {
            return None;
        }

        if let Ok(instant) = DateTime::parse_from_rfc3339(raw) {
            return Some(instant.with_timezone(&self.zone));
        }

        let naive = NAIVE_DATE_TIME_FORMATS
            .iter()
            .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
            .or_else(|| {
                NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                    .ok()
                    .and_then(|date| date.and_hms_opt(0, 0, 0))
            })?;

        self.zone.from_local_datetime(&naive).single()
    }

    pub fn day(&self, instant: &Instant) -> NaiveDate {
        instant.with_timezone(&self.zone).date_naive()
    }

    /// Monday on or before the instant's local day
    pub fn week_start(&self, instant: &Instant) -> Option<NaiveDate> {
        let day = self.day(instant);
        day.checked_sub_signed(Duration::days(i64::from(day.weekday().num_days_from_monday())))
    }

    pub fn day_key(&self, instant: &Instant) -> String {
        format_key(self.day(instant))
    }

    pub fn week_start_key(&self, instant: &Instant) -> Option<String> {
        self.week_start(instant).map(format_key)
    }
}

pub fn format_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key_of(calendar: &Calendar, timestamp: &str) -> (String, String) {
        let instant = calendar.parse(timestamp).unwrap();
        (calendar.day_key(&instant), calendar.week_start_key(&instant).unwrap())
    }

    #[test]
    fn test_parse_accepted_forms() {
        let calendar = Calendar::utc();
        for timestamp in [
            "2024-01-07",
            "2024-01-07T10:15:00Z",
            "2024-01-07T10:15:00.250+00:00",
            "2024-01-07T10:15:00",
            "2024-01-07 10:15:00.5",
            "2024-01-07T10:15",
            "  2024-01-07 10:15  ",
        ] {
            let instant = calendar.parse(timestamp);
            assert!(instant.is_some(), "expected {timestamp:?} to parse");
            assert_eq!(calendar.day_key(&instant.unwrap()), "2024-01-07");
        }
    }

    #[test]
    fn test_parse_rejects_garbage() {
        let calendar = Calendar::utc();
        for timestamp in ["", "   ", "yesterday", "2024-13-01", "2024-02-30", "07/01/2024"] {
            assert!(calendar.parse(timestamp).is_none(), "expected {timestamp:?} to be invalid");
        }
    }

    #[test]
    fn test_sunday_belongs_to_previous_monday() {
        let calendar = Calendar::utc();
        assert_eq!(key_of(&calendar, "2024-01-07"), ("2024-01-07".into(), "2024-01-01".into()));
        assert_eq!(key_of(&calendar, "2024-01-08"), ("2024-01-08".into(), "2024-01-08".into()));
        assert_eq!(key_of(&calendar, "2024-01-01"), ("2024-01-01".into(), "2024-01-01".into()));
    }

    #[test]
    fn test_week_start_crosses_year_boundary() {
        let calendar = Calendar::utc();
        // 2025-01-01 is a Wednesday
        assert_eq!(key_of(&calendar, "2025-01-01").1, "2024-12-30");
    }

    #[test]
    fn test_explicit_offsets_convert_into_local_zone() {
        let calendar = Calendar::from_offset_minutes(-5 * 60).unwrap();

        // 03:00 UTC Monday is still Sunday evening at UTC-5
        let (day, week) = key_of(&calendar, "2024-01-08T03:00:00Z");
        assert_eq!(day, "2024-01-07");
        assert_eq!(week, "2024-01-01");

        // Naive strings are already local
        assert_eq!(key_of(&calendar, "2024-01-08T03:00:00").0, "2024-01-08");
        assert_eq!(key_of(&calendar, "2024-01-08").0, "2024-01-08");
    }

    #[test]
    fn test_earliest_dates_without_a_monday_are_invalid() {
        let calendar = Calendar::utc();
        // The minimum date's Monday would fall before the minimum date
        assert!(calendar.parse("-262143-01-01").is_none());
        assert!(calendar.parse("-262143-01-01T12:00:00").is_none());

        let first_monday = (0..7)
            .map(|offset| NaiveDate::MIN + Duration::days(offset))
            .find(|date| date.weekday() == chrono::Weekday::Mon)
            .unwrap();
        let instant = calendar.parse(&format_key(first_monday)).unwrap();
        assert_eq!(calendar.week_start(&instant), Some(first_monday));
    }

    #[test]
    fn test_offset_bounds() {
        assert!(Calendar::from_offset_minutes(14 * 60).is_some());
        assert!(Calendar::from_offset_minutes(24 * 60).is_none());
        assert!(Calendar::from_offset_minutes(i32::MAX).is_none());
    }
}
