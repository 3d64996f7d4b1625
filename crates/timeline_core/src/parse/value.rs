//! Numeric-or-calendar value parser.
//!
//! # Responsibility
//! - Parse one axis value: plain number first, calendar date second.
//! - Parse increment text with a `0` fallback.
//!
//! # Invariants
//! - Returned values are always finite.
//! - Calendar parsing does not depend on the host locale or time zone; naive
//!   date-times are read as UTC.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use once_cell::sync::Lazy;
use regex::Regex;

static YEAR_MONTH_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(-?\d{4,6})-(\d{2})$").expect("valid year-month regex"));

const NAIVE_DATE_TIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

const NAIVE_DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d"];

/// Parses an axis value from raw text.
///
/// Tries a strict signed-decimal parse of the whole trimmed text, then a
/// calendar parse returning epoch milliseconds. Returns `None` when both fail.
pub fn parse_value(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    parse_number(trimmed).or_else(|| parse_calendar_millis(trimmed))
}

/// Parses an increment, defaulting to `0` for blank, invalid, negative or
/// non-finite input.
pub fn parse_increment(raw: &str) -> f64 {
    match parse_number(raw.trim()) {
        Some(value) if value > 0.0 => value,
        _ => 0.0,
    }
}

fn parse_number(text: &str) -> Option<f64> {
    // Rust accepts `inf`/`NaN` spellings; those are not axis values.
    if !text
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E'))
    {
        return None;
    }
    text.parse::<f64>().ok().filter(|value| value.is_finite())
}

fn parse_calendar_millis(text: &str) -> Option<f64> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(text) {
        return Some(parsed.timestamp_millis() as f64);
    }
    if let Ok(parsed) = DateTime::parse_from_rfc2822(text) {
        return Some(parsed.timestamp_millis() as f64);
    }
    for format in NAIVE_DATE_TIME_FORMATS {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(text, format) {
            return Some(parsed.and_utc().timestamp_millis() as f64);
        }
    }
    for format in NAIVE_DATE_FORMATS {
        if let Ok(parsed) = NaiveDate::parse_from_str(text, format) {
            return date_millis(parsed);
        }
    }
    parse_year_month(text)
}

fn parse_year_month(text: &str) -> Option<f64> {
    let captures = YEAR_MONTH_RE.captures(text)?;
    let year = captures[1].parse::<i32>().ok()?;
    let month = captures[2].parse::<u32>().ok()?;
    date_millis(NaiveDate::from_ymd_opt(year, month, 1)?)
}

fn date_millis(date: NaiveDate) -> Option<f64> {
    date.and_hms_opt(0, 0, 0)
        .map(|midnight| midnight.and_utc().timestamp_millis() as f64)
}
