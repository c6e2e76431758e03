//! Permissive calendar date parsing for the `date` column.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Date-only layouts, tried in order. `%B` also accepts abbreviated month
/// names when parsing, so "1 May 2023" and "1 Mar 2023" share a layout.
const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%Y.%m.%d",
    "%m/%d/%Y",
    "%m-%d-%Y",
    // Day-first, reached only when the month-first reading is impossible
    "%d/%m/%Y",
    "%d-%m-%Y",
    // Two-digit year first: `%Y` would read "23" as year 23
    "%d-%b-%y",
    "%d-%b-%Y",
    "%d %B %Y",
    "%B %d, %Y",
    "%B %d %Y",
];

/// Date-time layouts without an offset; only the date part is kept.
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
];

/// Date-time layouts carrying a UTC offset; the local calendar date is kept.
const OFFSET_DATETIME_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S%:z", "%Y-%m-%d %H:%M:%S%z"];

/// Parse a date cell, returning `None` for empty or unrecognized text.
///
/// Accepts ISO-like dates (`2023-05-01`, `2023/05/01`, `20230501`), RFC 3339
/// and other ISO date-times, US month-first dates (`05/01/2023`) falling back
/// to day-first (`31/12/2022`), spreadsheet exports (`01-May-23`) and written
/// month names (`1 May 2023`, `May 1, 2023`).
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use content_search::loader::parse_date;
///
/// assert_eq!(parse_date("2023-05-01"), NaiveDate::from_ymd_opt(2023, 5, 1));
/// assert_eq!(parse_date("May 1, 2023"), NaiveDate::from_ymd_opt(2023, 5, 1));
/// assert_eq!(parse_date("not-a-date"), None);
/// ```
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }

    if let Some(date) = parse_compact(s) {
        return Some(date);
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.date_naive());
    }

    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
        .or_else(|| {
            DATETIME_FORMATS
                .iter()
                .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
                .map(|dt| dt.date())
        })
        .or_else(|| {
            OFFSET_DATETIME_FORMATS
                .iter()
                .find_map(|fmt| DateTime::parse_from_str(s, fmt).ok())
                .map(|dt| dt.date_naive())
        })
}

/// `YYYYMMDD` with no separators
fn parse_compact(s: &str) -> Option<NaiveDate> {
    if s.len() != 8 || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let year = s[..4].parse().ok()?;
    let month = s[4..6].parse().ok()?;
    let day = s[6..].parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}
