//! Publication date parsing.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};

const DATETIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"];

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%B %d, %Y", "%b %d, %Y"];

/// Parse a header date.
///
/// Accepts RFC 3339 (converted to UTC), `YYYY-MM-DD`, `YYYY-MM-DDTHH:MM:SS`,
/// `YYYY-MM-DD HH:MM:SS`, `YYYY/MM/DD`, `March 1, 2024` and `Mar 1, 2024`.
/// Dates without a time are taken at midnight.
///
/// # Example
///
/// ```
/// use folio_index::date::parse_date;
///
/// let a = parse_date("2024-03-01").unwrap();
/// let b = parse_date("March 1, 2024").unwrap();
/// assert_eq!(a, b);
/// assert!(parse_date("someday").is_none());
/// ```
pub fn parse_date(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.naive_utc());
    }

    DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
        .or_else(|| {
            DATE_FORMATS
                .iter()
                .find_map(|fmt| NaiveDate::parse_from_str(value, fmt).ok())
                .map(|d| d.and_time(NaiveTime::MIN))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_time(NaiveTime::MIN)
    }

    #[test]
    fn test_iso_date() {
        assert_eq!(parse_date("2024-03-01"), Some(ymd(2024, 3, 1)));
        assert_eq!(parse_date("  2024-03-01 "), Some(ymd(2024, 3, 1)));
    }

    #[test]
    fn test_slash_date() {
        assert_eq!(parse_date("2024/03/01"), Some(ymd(2024, 3, 1)));
    }

    #[test]
    fn test_long_and_short_month() {
        assert_eq!(parse_date("January 15, 2025"), Some(ymd(2025, 1, 15)));
        assert_eq!(parse_date("Jan 15, 2025"), Some(ymd(2025, 1, 15)));
    }

    #[test]
    fn test_datetime_forms() {
        let expected = NaiveDate::from_ymd_opt(2024, 3, 1)
            .unwrap()
            .and_hms_opt(9, 30, 0)
            .unwrap();
        assert_eq!(parse_date("2024-03-01T09:30:00"), Some(expected));
        assert_eq!(parse_date("2024-03-01 09:30:00"), Some(expected));
    }

    #[test]
    fn test_rfc3339_normalized_to_utc() {
        let expected = NaiveDate::from_ymd_opt(2024, 3, 1)
            .unwrap()
            .and_hms_opt(7, 30, 0)
            .unwrap();
        assert_eq!(parse_date("2024-03-01T09:30:00+02:00"), Some(expected));
        assert_eq!(parse_date("2024-03-01T07:30:00Z"), Some(expected));
    }

    #[test]
    fn test_unparsable() {
        assert_eq!(parse_date(""), None);
        assert_eq!(parse_date("soon"), None);
        assert_eq!(parse_date("2024-13-01"), None);
        assert_eq!(parse_date("2024-02-30"), None);
    }
}
