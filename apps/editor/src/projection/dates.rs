//! Month and date-range formatting for the preview.
//!
//! Stored dates are "YYYY-MM" strings from a month picker. Anything that does not
//! parse into that shape is shown exactly as typed; formatting never fails.

use chrono::{Datelike, NaiveDate};

/// Separator between the two bounds of a date range.
pub const RANGE_SEPARATOR: &str = " — ";

/// Formats "YYYY-MM" as "MM/YYYY". Empty stays empty; malformed input passes through.
pub fn format_month(value: &str) -> String {
    match parse_year_month(value) {
        Some(date) => format!("{:02}/{:04}", date.month(), date.year()),
        None => value.to_string(),
    }
}

/// Formats a start/end pair.
///
/// Both present → "start — end"; one present → that bound alone; neither → `None`.
/// A bound is present when it is non-blank after trimming.
pub fn format_range(start: &str, end: &str) -> Option<String> {
    let start = present(start).map(format_month);
    let end = present(end).map(format_month);

    match (start, end) {
        (Some(s), Some(e)) => Some(format!("{s}{RANGE_SEPARATOR}{e}")),
        (Some(s), None) => Some(s),
        (None, Some(e)) => Some(e),
        (None, None) => None,
    }
}

fn present(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

/// Parses exactly four year digits, a hyphen, and two month digits (01–12).
fn parse_year_month(value: &str) -> Option<NaiveDate> {
    let (year, month) = value.split_once('-')?;
    if year.len() != 4 || month.len() != 2 {
        return None;
    }
    if !year.bytes().chain(month.bytes()).all(|b| b.is_ascii_digit()) {
        return None;
    }
    NaiveDate::from_ymd_opt(year.parse().ok()?, month.parse().ok()?, 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_month_valid() {
        assert_eq!(format_month("2024-03"), "03/2024");
        assert_eq!(format_month("1999-12"), "12/1999");
    }

    #[test]
    fn test_format_month_empty() {
        assert_eq!(format_month(""), "");
    }

    #[test]
    fn test_format_month_passes_malformed_through() {
        assert_eq!(format_month("not-a-date"), "not-a-date");
        assert_eq!(format_month("2024-13"), "2024-13");
        assert_eq!(format_month("2024-3"), "2024-3");
        assert_eq!(format_month("2024-03-15"), "2024-03-15");
        assert_eq!(format_month("atual"), "atual");
    }

    #[test]
    fn test_format_range_both_bounds() {
        assert_eq!(
            format_range("2020-01", "2024-03").as_deref(),
            Some("01/2020 — 03/2024")
        );
    }

    #[test]
    fn test_format_range_single_bound() {
        assert_eq!(format_range("2020-01", "").as_deref(), Some("01/2020"));
        assert_eq!(format_range("", "2024-03").as_deref(), Some("03/2024"));
        assert_eq!(format_range("  ", "Atual").as_deref(), Some("Atual"));
    }

    #[test]
    fn test_format_range_neither_bound() {
        assert_eq!(format_range("", ""), None);
        assert_eq!(format_range(" ", "\t"), None);
    }
}
