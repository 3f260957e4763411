use chrono::{DateTime, NaiveDate, NaiveDateTime};
use tracing::debug;

// ── Timestamp parsing ─────────────────────────────────────────────────────────

/// Naive formats accepted for usage timestamps, tried in order.
const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
];

/// Parse a usage timestamp into a naive wall-clock date-time.
///
/// No timezone conversion is performed. RFC 3339 strings carrying an offset
/// (or a trailing `Z`) keep their written wall-clock time and drop the offset,
/// so `"2024-01-15T08:00:00-05:00"` lands in hour 8. A bare date is read as
/// midnight.
///
/// Returns `None` for empty or unrecognised input.
pub fn parse_naive_timestamp(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.naive_local());
    }

    for fmt in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(naive);
        }
    }

    for fmt in ["%Y-%m-%d", "%m/%d/%Y"] {
        if let Ok(date) = NaiveDate::parse_from_str(s, fmt) {
            return date.and_hms_opt(0, 0, 0);
        }
    }

    debug!("could not parse timestamp \"{}\"", s);
    None
}

// ── 12-hour labels ────────────────────────────────────────────────────────────

/// Label an hour of the day (0–23) on the 12-hour clock.
///
/// Hours outside the range wrap modulo 24.
///
/// # Examples
///
/// ```
/// use water_core::time_utils::hour_label;
///
/// assert_eq!(hour_label(0), "12 AM");
/// assert_eq!(hour_label(13), "1 PM");
/// ```
pub fn hour_label(hour: u32) -> String {
    let hour = hour % 24;
    let twelve = match hour % 12 {
        0 => 12,
        h => h,
    };
    let suffix = if hour < 12 { "AM" } else { "PM" };
    format!("{} {}", twelve, suffix)
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    #[test]
    fn test_parse_space_separated_seconds() {
        let dt = parse_naive_timestamp("2024-01-15 08:30:15").unwrap();
        assert_eq!(dt.hour(), 8);
        assert_eq!(dt.minute(), 30);
        assert_eq!(dt.second(), 15);
    }

    #[test]
    fn test_parse_without_seconds() {
        let dt = parse_naive_timestamp("2024-01-15 21:05").unwrap();
        assert_eq!(dt.hour(), 21);
    }

    #[test]
    fn test_parse_t_separated_fractional() {
        let dt = parse_naive_timestamp("2024-01-15T08:30:15.250").unwrap();
        assert_eq!(dt.hour(), 8);
    }

    #[test]
    fn test_parse_rfc3339_keeps_wall_clock() {
        let dt = parse_naive_timestamp("2024-01-15T08:00:00-05:00").unwrap();
        assert_eq!(dt.hour(), 8);
        let z = parse_naive_timestamp("2024-01-15T23:10:00Z").unwrap();
        assert_eq!(z.hour(), 23);
    }

    #[test]
    fn test_parse_us_style() {
        let dt = parse_naive_timestamp("01/15/2024 14:00").unwrap();
        assert_eq!(dt.hour(), 14);
    }

    #[test]
    fn test_parse_bare_date_is_midnight() {
        let dt = parse_naive_timestamp("2024-01-15").unwrap();
        assert_eq!(dt.hour(), 0);
    }

    #[test]
    fn test_parse_trims_whitespace() {
        assert!(parse_naive_timestamp("  2024-01-15 08:00:00 ").is_some());
    }

    #[test]
    fn test_parse_empty_returns_none() {
        assert!(parse_naive_timestamp("").is_none());
        assert!(parse_naive_timestamp("   ").is_none());
    }

    #[test]
    fn test_parse_garbage_returns_none() {
        assert!(parse_naive_timestamp("yesterday at noon").is_none());
        assert!(parse_naive_timestamp("2024-13-45 99:00").is_none());
    }

    #[test]
    fn test_hour_label_table() {
        assert_eq!(hour_label(0), "12 AM");
        assert_eq!(hour_label(1), "1 AM");
        assert_eq!(hour_label(11), "11 AM");
        assert_eq!(hour_label(12), "12 PM");
        assert_eq!(hour_label(13), "1 PM");
        assert_eq!(hour_label(23), "11 PM");
    }

    #[test]
    fn test_hour_label_is_distinct_over_day() {
        let labels: std::collections::HashSet<String> = (0..24).map(hour_label).collect();
        assert_eq!(labels.len(), 24);
    }
}
