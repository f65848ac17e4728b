/// Utilities for date and time formatting
use chrono::{DateTime, Local, NaiveDateTime, Utc};

/// Format a server timestamp as `YYYY-MM-DD HH:MM`.
/// Accepts RFC 3339 (`2024-03-15T14:02:26Z`) and naive ISO
/// (`2024-03-15T14:02:26.123456`, as the API emits). Anything else is
/// returned unchanged.
pub fn format_datetime(datetime_str: &str) -> String {
    if let Ok(dt) = DateTime::parse_from_rfc3339(datetime_str) {
        return dt.format("%Y-%m-%d %H:%M").to_string();
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(datetime_str, "%Y-%m-%dT%H:%M:%S%.f") {
        return dt.format("%Y-%m-%d %H:%M").to_string();
    }
    datetime_str.to_string()
}

/// Date part only. Example: "2024-03-15T14:02:26Z" -> "2024-03-15"
pub fn format_date(date_str: &str) -> String {
    let formatted = format_datetime(date_str);
    match formatted.split_once(' ') {
        Some((date, _)) if formatted != date_str => date.to_string(),
        _ => date_str.to_string(),
    }
}

/// Wall-clock time in the browser's zone, for toasts and debug entries.
pub fn format_time(timestamp: &DateTime<Utc>) -> String {
    timestamp.with_timezone(&Local).format("%H:%M:%S").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_datetime() {
        assert_eq!(format_datetime("2024-03-15T14:02:26Z"), "2024-03-15 14:02");
        assert_eq!(
            format_datetime("2024-03-15T14:02:26.123456"),
            "2024-03-15 14:02"
        );
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2024-03-15T14:02:26.123Z"), "2024-03-15");
    }

    #[test]
    fn test_invalid_format() {
        assert_eq!(format_datetime("invalid"), "invalid");
        assert_eq!(format_date("invalid"), "invalid");
    }

    #[test]
    fn test_format_time_shape() {
        let ts = Utc.with_ymd_and_hms(2024, 3, 15, 14, 2, 26).unwrap();
        let formatted = format_time(&ts);
        assert_eq!(formatted.len(), 8);
        assert_eq!(&formatted[2..3], ":");
    }
}
