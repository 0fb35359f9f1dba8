//! Best-effort timestamp parsing for the `Date of change` column.
//!
//! Issue-history exports are wildly inconsistent about date encodings, so
//! parsing never fails hard: a cell that cannot be interpreted yields
//! `None` and the caller drops the row.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::dataset::Cell;

/// Textual formats tried in order. First match wins.
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
    "%d.%m.%Y %H:%M:%S",
    "%d.%m.%Y %H:%M",
    // Jira CSV exports: "29/Feb/24 1:05 PM"
    "%d/%b/%y %I:%M %p",
    "%d/%b/%Y %H:%M",
];

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y", "%d.%m.%Y", "%d/%b/%y"];

/// Attempt to interpret a cell as a point in time. Returns `None` for
/// anything unparseable; callers treat that as "discard this row".
pub fn parse_timestamp(cell: &Cell) -> Option<NaiveDateTime> {
    match cell {
        Cell::DateTime(dt) => Some(*dt),
        Cell::Text(s) => parse_text(s.trim()),
        Cell::Number(n) => parse_epoch(*n),
        Cell::Bool(_) | Cell::Empty => None,
    }
}

fn parse_text(s: &str) -> Option<NaiveDateTime> {
    if s.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.naive_local());
    }

    for format in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, format) {
            return Some(dt);
        }
    }

    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(s, format) {
            return date.and_hms_opt(0, 0, 0);
        }
    }

    // All-digit text is treated as a Unix epoch.
    if s.chars().all(|c| c.is_ascii_digit()) {
        if let Ok(n) = s.parse::<f64>() {
            return parse_epoch(n);
        }
    }

    None
}

/// Numeric cells as Unix epoch seconds; 13+ digit values as milliseconds.
fn parse_epoch(n: f64) -> Option<NaiveDateTime> {
    if !n.is_finite() || n <= 0.0 {
        return None;
    }
    let n = n as i64;
    let utc = if n >= 1_000_000_000_000 {
        DateTime::from_timestamp_millis(n)?
    } else {
        DateTime::from_timestamp(n, 0)?
    };
    Some(utc.naive_utc())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn text(s: &str) -> Cell {
        Cell::Text(s.to_string())
    }

    #[test]
    fn test_parse_iso_date_and_datetime() {
        assert_eq!(
            parse_timestamp(&text("2024-01-05")).unwrap().date(),
            date(2024, 1, 5)
        );
        assert_eq!(
            parse_timestamp(&text("2024-01-05 13:45:00")).unwrap().date(),
            date(2024, 1, 5)
        );
        assert_eq!(
            parse_timestamp(&text("2024-01-05T13:45:00.123")).unwrap().date(),
            date(2024, 1, 5)
        );
    }

    #[test]
    fn test_parse_rfc3339() {
        let dt = parse_timestamp(&text("2024-03-01T09:30:00+02:00")).unwrap();
        assert_eq!(dt.date(), date(2024, 3, 1));
    }

    #[test]
    fn test_parse_us_and_european_formats() {
        assert_eq!(
            parse_timestamp(&text("01/05/2024")).unwrap().date(),
            date(2024, 1, 5) // month-first
        );
        assert_eq!(
            parse_timestamp(&text("05.01.2024 08:00")).unwrap().date(),
            date(2024, 1, 5) // day-first
        );
    }

    #[test]
    fn test_parse_jira_export_format() {
        let dt = parse_timestamp(&text("29/Feb/24 1:05 PM")).unwrap();
        assert_eq!(dt.date(), date(2024, 2, 29));
        assert_eq!(dt.time().to_string(), "13:05:00");
    }

    #[test]
    fn test_parse_epoch_seconds_and_millis() {
        // 2024-01-05T00:00:00Z
        let dt = parse_timestamp(&Cell::Number(1_704_412_800.0)).unwrap();
        assert_eq!(dt.date(), date(2024, 1, 5));

        let dt = parse_timestamp(&Cell::Number(1_704_412_800_000.0)).unwrap();
        assert_eq!(dt.date(), date(2024, 1, 5));

        let dt = parse_timestamp(&text("1704412800")).unwrap();
        assert_eq!(dt.date(), date(2024, 1, 5));
    }

    #[test]
    fn test_native_datetime_cell_passes_through() {
        let native = date(2024, 6, 1).and_hms_opt(10, 0, 0).unwrap();
        assert_eq!(parse_timestamp(&Cell::DateTime(native)), Some(native));
    }

    #[test]
    fn test_unparseable_values_yield_none() {
        assert_eq!(parse_timestamp(&text("not a date")), None);
        assert_eq!(parse_timestamp(&text("")), None);
        assert_eq!(parse_timestamp(&text("2024-13-40")), None);
        assert_eq!(parse_timestamp(&Cell::Number(-5.0)), None);
        assert_eq!(parse_timestamp(&Cell::Empty), None);
        assert_eq!(parse_timestamp(&Cell::Bool(true)), None);
    }
}
