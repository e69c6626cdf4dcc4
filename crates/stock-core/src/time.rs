//! Timestamp display helpers.
//!
//! Item timestamps are milliseconds since the Unix epoch.

use chrono::format::{Item as FormatItem, StrftimeItems};
use chrono::{DateTime, Local, TimeZone};

/// Default display format (`dd.MM.yyyy`).
pub const DEFAULT_DATE_FORMAT: &str = "%d.%m.%Y";

/// Shown when a timestamp is outside the representable range.
pub const INVALID_DATE: &str = "--.--.----";

/// Format a millisecond timestamp as `dd.MM.yyyy` in the local time zone.
#[must_use]
pub fn format_date(millis: i64) -> String {
    format_date_in(millis, &Local, DEFAULT_DATE_FORMAT)
}

/// Format a millisecond timestamp in `tz` using a chrono format string.
#[must_use]
pub fn format_date_in<Tz>(millis: i64, tz: &Tz, format: &str) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    DateTime::from_timestamp_millis(millis).map_or_else(
        || INVALID_DATE.to_string(),
        |utc| utc.with_timezone(tz).format(format).to_string(),
    )
}

/// Whether `format` is a chrono format string that renders without error.
#[must_use]
pub fn is_valid_format(format: &str) -> bool {
    !format.trim().is_empty()
        && StrftimeItems::new(format).all(|item| !matches!(item, FormatItem::Error))
}

#[cfg(test)]
mod tests {
    use chrono::{FixedOffset, Utc};

    use super::*;

    #[test]
    fn formats_day_month_year() {
        // 2021-10-01T00:00:00Z
        assert_eq!(
            format_date_in(1_633_046_400_000, &Utc, DEFAULT_DATE_FORMAT),
            "01.10.2021"
        );
    }

    #[test]
    fn respects_time_zone() {
        let minus_one = FixedOffset::west_opt(3600).unwrap();
        assert_eq!(
            format_date_in(1_633_046_400_000, &minus_one, DEFAULT_DATE_FORMAT),
            "30.09.2021"
        );
    }

    #[test]
    fn out_of_range_timestamp_is_placeholder() {
        assert_eq!(format_date_in(i64::MAX, &Utc, DEFAULT_DATE_FORMAT), INVALID_DATE);
    }

    #[test]
    fn format_validation() {
        assert!(is_valid_format(DEFAULT_DATE_FORMAT));
        assert!(is_valid_format("%Y-%m-%d"));
        assert!(!is_valid_format("   "));
        assert!(!is_valid_format("%Q"));
    }

    #[test]
    fn custom_format() {
        assert_eq!(format_date_in(0, &Utc, "%Y-%m-%d"), "1970-01-01");
    }
}
