//! Display formatting for record timestamps

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime};

/// Long human-readable date, e.g. "January 5, 2024".
///
/// Plain dates are calendar dates and are never shifted. Timestamps with
/// an offset are shown in local time; naive timestamps as written.
/// Anything unparseable is returned unchanged.
pub fn format_date(value: &str) -> String {
    let value = value.trim();
    match parse_date(value) {
        Some(date) => date.format("%B %-d, %Y").to_string(),
        None => value.to_string(),
    }
}

fn parse_date(value: &str) -> Option<NaiveDate> {
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(datetime) = DateTime::parse_from_rfc3339(value) {
        return Some(datetime.with_timezone(&Local).date_naive());
    }
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S%.f"))
        .ok()
        .map(|datetime| datetime.date())
}

/// Metric reading without a trailing ".0" for whole numbers
pub fn format_reading(value: f64) -> String {
    format!("{value}")
}
