/// Utilities for date and time formatting
///
/// Provides consistent date/time formatting across the application
use chrono::{DateTime, Local, NaiveDate, NaiveTime, Utc};

/// Format a date as DD/MM/YYYY
/// Example: 2026-03-15 -> "15/03/2026"
pub fn format_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// Format a time of day as 12-hour clock
/// Example: 15:45 -> "03:45 PM"
pub fn format_time(time: NaiveTime) -> String {
    time.format("%I:%M %p").to_string()
}

/// Format a UTC instant as DD/MM/YYYY HH:MM
pub fn format_timestamp(instant: DateTime<Utc>) -> String {
    instant.format("%d/%m/%Y %H:%M").to_string()
}

/// Parse a `YYYY-MM-DD` value from a date input.
pub fn parse_input_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

/// Value for a date input.
pub fn input_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Browser-local calendar date.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_date() {
        let date = NaiveDate::from_ymd_opt(2026, 3, 5).unwrap();
        assert_eq!(format_date(date), "05/03/2026");
    }

    #[test]
    fn test_format_time() {
        assert_eq!(format_time(NaiveTime::from_hms_opt(15, 45, 0).unwrap()), "03:45 PM");
        assert_eq!(format_time(NaiveTime::from_hms_opt(7, 5, 0).unwrap()), "07:05 AM");
    }

    #[test]
    fn test_format_timestamp() {
        let instant = Utc.with_ymd_and_hms(2026, 10, 17, 16, 20, 0).unwrap();
        assert_eq!(format_timestamp(instant), "17/10/2026 16:20");
    }

    #[test]
    fn test_input_date_round_trip() {
        let date = NaiveDate::from_ymd_opt(2026, 12, 7).unwrap();
        assert_eq!(parse_input_date(&input_date(date)), Some(date));
        assert_eq!(parse_input_date("07/12/2026"), None);
    }
}
