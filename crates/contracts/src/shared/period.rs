use chrono::{Datelike, Duration, Months, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Named date range preset.
///
/// Unknown identifiers parse to `None`, which callers must treat as
/// "no date filter" — never as an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RangePreset {
    Yesterday,
    Today,
    Tomorrow,
    ThisWeek,
    ThisMonth,
    ThisYear,
    Custom,
}

impl RangePreset {
    /// Parse a range identifier. Unrecognized values resolve to no-filter.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "yesterday" => Some(Self::Yesterday),
            "today" => Some(Self::Today),
            "tomorrow" => Some(Self::Tomorrow),
            "this-week" => Some(Self::ThisWeek),
            "this-month" => Some(Self::ThisMonth),
            "this-year" => Some(Self::ThisYear),
            "custom" => Some(Self::Custom),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Yesterday => "yesterday",
            Self::Today => "today",
            Self::Tomorrow => "tomorrow",
            Self::ThisWeek => "this-week",
            Self::ThisMonth => "this-month",
            Self::ThisYear => "this-year",
            Self::Custom => "custom",
        }
    }

    /// Display name for period labels in report headers.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Yesterday => "Yesterday",
            Self::Today => "Today",
            Self::Tomorrow => "Tomorrow",
            Self::ThisWeek => "This Week",
            Self::ThisMonth => "This Month",
            Self::ThisYear => "This Year",
            Self::Custom => "Custom Period",
        }
    }
}

/// Concrete closed interval: `[start 00:00:00, end 23:59:59]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl DateRange {
    pub fn new(from: NaiveDate, to: NaiveDate) -> Self {
        Self {
            start: from.and_hms_opt(0, 0, 0).expect("Invalid range start"),
            end: to.and_hms_opt(23, 59, 59).expect("Invalid range end"),
        }
    }

    /// Inclusive on both ends.
    pub fn contains(&self, ts: NaiveDateTime) -> bool {
        self.start <= ts && ts <= self.end
    }

    /// Composite date filter parameter for the record store endpoint:
    /// `"<start>T00:00:00,<end>T23:59:59"`.
    pub fn to_query_param(&self) -> String {
        format!(
            "{},{}",
            self.start.format("%Y-%m-%dT%H:%M:%S"),
            self.end.format("%Y-%m-%dT%H:%M:%S")
        )
    }
}

/// Resolve a preset and optional custom bounds against an injectable
/// reference date. `Custom` with either bound missing yields `None`
/// (no date filter), not an error.
pub fn resolve_range(
    preset: Option<RangePreset>,
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
    today: NaiveDate,
) -> Option<DateRange> {
    match preset? {
        RangePreset::Yesterday => {
            let d = today - Duration::days(1);
            Some(DateRange::new(d, d))
        }
        RangePreset::Today => Some(DateRange::new(today, today)),
        RangePreset::Tomorrow => {
            let d = today + Duration::days(1);
            Some(DateRange::new(d, d))
        }
        RangePreset::ThisWeek => {
            // ISO week: Monday .. Sunday
            let monday = today - Duration::days(today.weekday().num_days_from_monday() as i64);
            Some(DateRange::new(monday, monday + Duration::days(6)))
        }
        RangePreset::ThisMonth => {
            let first = NaiveDate::from_ymd_opt(today.year(), today.month(), 1)
                .expect("Invalid month start date");
            let last = first
                .checked_add_months(Months::new(1))
                .map(|d| d - Duration::days(1))
                .expect("Invalid month end date");
            Some(DateRange::new(first, last))
        }
        RangePreset::ThisYear => {
            let first =
                NaiveDate::from_ymd_opt(today.year(), 1, 1).expect("Invalid year start date");
            let last =
                NaiveDate::from_ymd_opt(today.year(), 12, 31).expect("Invalid year end date");
            Some(DateRange::new(first, last))
        }
        RangePreset::Custom => match (from, to) {
            (Some(f), Some(t)) => Some(DateRange::new(f, t)),
            // Incomplete custom range degrades to no-filter.
            _ => None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_this_week_is_iso_monday_to_sunday() {
        // 2025-01-06 is a Monday
        let r = resolve_range(Some(RangePreset::ThisWeek), None, None, date(2025, 1, 6)).unwrap();
        assert_eq!(r.start.date(), date(2025, 1, 6));
        assert_eq!(r.end.date(), date(2025, 1, 12));

        // Mid-week reference resolves to the same week
        let r = resolve_range(Some(RangePreset::ThisWeek), None, None, date(2025, 1, 9)).unwrap();
        assert_eq!(r.start.date(), date(2025, 1, 6));
        assert_eq!(r.end.date(), date(2025, 1, 12));
    }

    #[test]
    fn test_this_month_covers_calendar_month() {
        let r = resolve_range(Some(RangePreset::ThisMonth), None, None, date(2024, 2, 15)).unwrap();
        assert_eq!(r.start.date(), date(2024, 2, 1));
        assert_eq!(r.end.date(), date(2024, 2, 29));

        let r = resolve_range(Some(RangePreset::ThisMonth), None, None, date(2025, 12, 3)).unwrap();
        assert_eq!(r.end.date(), date(2025, 12, 31));
    }

    #[test]
    fn test_this_year() {
        let r = resolve_range(Some(RangePreset::ThisYear), None, None, date(2025, 7, 20)).unwrap();
        assert_eq!(r.start.date(), date(2025, 1, 1));
        assert_eq!(r.end.date(), date(2025, 12, 31));
    }

    #[test]
    fn test_single_day_presets() {
        let today = date(2025, 3, 1);
        let y = resolve_range(Some(RangePreset::Yesterday), None, None, today).unwrap();
        assert_eq!(y.start.date(), date(2025, 2, 28));
        assert_eq!(y.end.date(), date(2025, 2, 28));

        let t = resolve_range(Some(RangePreset::Tomorrow), None, None, today).unwrap();
        assert_eq!(t.start.date(), date(2025, 3, 2));
    }

    #[test]
    fn test_custom_with_missing_bound_is_no_filter() {
        let today = date(2025, 1, 6);
        assert!(resolve_range(Some(RangePreset::Custom), Some(today), None, today).is_none());
        assert!(resolve_range(Some(RangePreset::Custom), None, Some(today), today).is_none());
        assert!(
            resolve_range(Some(RangePreset::Custom), Some(today), Some(today), today).is_some()
        );
    }

    #[test]
    fn test_unknown_identifier_is_no_filter() {
        assert!(RangePreset::parse("last-fortnight").is_none());
        assert!(resolve_range(None, None, None, date(2025, 1, 6)).is_none());
    }

    #[test]
    fn test_interval_bounds_inclusive() {
        let r = DateRange::new(date(2025, 1, 6), date(2025, 1, 12));
        assert!(r.contains(date(2025, 1, 6).and_hms_opt(0, 0, 0).unwrap()));
        assert!(r.contains(date(2025, 1, 12).and_hms_opt(23, 59, 59).unwrap()));
        assert!(!r.contains(date(2025, 1, 13).and_hms_opt(0, 0, 0).unwrap()));
    }

    #[test]
    fn test_query_param_format() {
        let r = DateRange::new(date(2025, 1, 6), date(2025, 1, 12));
        assert_eq!(
            r.to_query_param(),
            "2025-01-06T00:00:00,2025-01-12T23:59:59"
        );
    }
}
