//! Date-only ↔ timestamp convention at the API boundary.
//!
//! The server stores every date as a full RFC 3339 timestamp. Forms and
//! filters work with bare `YYYY-MM-DD` dates, so outgoing values get a
//! fixed midnight-UTC time-of-day appended and incoming values are cut back
//! to the date portion for display.

use chrono::NaiveDate;

use crate::{Error, Result};

/// Time-of-day suffix appended to date-only values.
const MIDNIGHT_UTC: &str = "T00:00:00Z";

/// Normalizes a date-only string into a timestamp.
///
/// Returns `None` for an empty input. Values that already carry a time
/// separator are passed through untouched.
#[must_use]
pub fn to_timestamp(date: &str) -> Option<String> {
    if date.is_empty() {
        return None;
    }
    if date.contains('T') {
        return Some(date.to_string());
    }
    Some(format!("{date}{MIDNIGHT_UTC}"))
}

/// Extracts the date portion (everything before the first `T`).
#[must_use]
pub fn from_timestamp(ts: &str) -> String {
    ts.split('T').next().unwrap_or_default().to_string()
}

/// Formats a typed date as a midnight-UTC timestamp.
#[must_use]
pub fn date_to_timestamp(date: NaiveDate) -> String {
    format!("{}{MIDNIGHT_UTC}", date.format("%Y-%m-%d"))
}

/// Parses either a bare date or a timestamp into a calendar date.
pub fn parse_date(value: &str) -> Result<NaiveDate> {
    let date = from_timestamp(value);
    NaiveDate::parse_from_str(&date, "%Y-%m-%d").map_err(|e| Error::InvalidDate(format!("{value}: {e}")))
}

/// Applies [`to_timestamp`] to an optional field in place.
pub(crate) fn normalize_field(field: &mut Option<String>) {
    if let Some(value) = field.take() {
        *field = to_timestamp(&value);
    }
}
