//! Admission-date parsing and formatting.
//!
//! Records store the admission date as a display string. Two shapes are
//! accepted:
//!
//! - `D-MMM, YYYY` with an English three-letter month, e.g. `8-Dec, 2021`.
//!   Detected by the presence of both `-` and `,`.
//! - Anything the generic parser understands: ISO `YYYY-MM-DD` (what date
//!   inputs produce), RFC 3339 and RFC 2822 timestamps.
//!
//! Dates that cannot be parsed order as the Unix epoch.

use chrono::{DateTime, NaiveDate};

const DISPLAY_FORMAT: &str = "%-d-%b, %Y";

/// Parses an admission-date string in either supported shape.
pub fn parse_display_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    if value.contains('-') && value.contains(',') {
        if let Some(date) = parse_day_month_year(value) {
            return Some(date);
        }
    }

    parse_generic(value)
}

fn parse_day_month_year(value: &str) -> Option<NaiveDate> {
    let (day, rest) = value.split_once('-')?;
    let (month, year) = rest.split_once(',')?;

    let day: u32 = day.trim().parse().ok()?;
    let year: i32 = year.trim().parse().ok()?;
    let month = month_from_abbreviation(month.trim())?;

    NaiveDate::from_ymd_opt(year, month, day)
}

fn month_from_abbreviation(value: &str) -> Option<u32> {
    const MONTHS: [&str; 12] = [
        "jan", "feb", "mar", "apr", "may", "jun", "jul", "aug", "sep", "oct", "nov", "dec",
    ];
    let lower = value.to_ascii_lowercase();
    MONTHS
        .iter()
        .position(|m| *m == lower)
        .map(|idx| idx as u32 + 1)
}

fn parse_generic(value: &str) -> Option<NaiveDate> {
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.date_naive());
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(value) {
        return Some(dt.date_naive());
    }
    None
}

/// Formats a date the way records store it, e.g. `8-Dec, 2021`.
pub fn format_display_date(date: NaiveDate) -> String {
    date.format(DISPLAY_FORMAT).to_string()
}

/// Formats a date for a date input, e.g. `2021-12-08`.
pub fn format_iso_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Milliseconds since the Unix epoch at midnight UTC of the parsed date.
///
/// Missing or unparseable values map to `0`.
pub fn date_timestamp(value: &str) -> i64 {
    parse_display_date(value)
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc().timestamp_millis())
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_display_shape() {
        assert_eq!(parse_display_date("8-Dec, 2021"), Some(ymd(2021, 12, 8)));
        assert_eq!(parse_display_date("15-jan, 2020"), Some(ymd(2020, 1, 15)));
        assert_eq!(parse_display_date(" 1-Mar,2019 "), Some(ymd(2019, 3, 1)));
    }

    #[test]
    fn test_parse_iso_fallback() {
        assert_eq!(parse_display_date("2021-12-08"), Some(ymd(2021, 12, 8)));
        assert_eq!(
            parse_display_date("2021-12-08T10:30:00Z"),
            Some(ymd(2021, 12, 8))
        );
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(parse_display_date(""), None);
        assert_eq!(parse_display_date("yesterday"), None);
        assert_eq!(parse_display_date("31-Feb, 2021"), None);
        assert_eq!(parse_display_date("8-Foo, 2021"), None);
        assert_eq!(parse_display_date("2021-13-01"), None);
    }

    #[test]
    fn test_format_display_date() {
        assert_eq!(format_display_date(ymd(2021, 12, 8)), "8-Dec, 2021");
        assert_eq!(format_display_date(ymd(2020, 1, 15)), "15-Jan, 2020");
    }

    #[test]
    fn test_format_then_parse_is_stable() {
        let date = ymd(2018, 7, 4);
        assert_eq!(parse_display_date(&format_display_date(date)), Some(date));
        assert_eq!(format_iso_date(date), "2018-07-04");
    }

    #[test]
    fn test_timestamp_missing_is_epoch() {
        assert_eq!(date_timestamp(""), 0);
        assert_eq!(date_timestamp("not a date"), 0);
        assert_eq!(date_timestamp("1-Jan, 1970"), 0);
        assert!(date_timestamp("2-Jan, 1970") > 0);
    }

    #[test]
    fn test_timestamp_orders_dates() {
        assert!(date_timestamp("8-Dec, 2021") > date_timestamp("2021-12-07"));
    }
}
