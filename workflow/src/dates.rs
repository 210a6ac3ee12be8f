//! Lenient parsing of the backend's date strings.
//!
//! Records keep dates as strings; these helpers turn them into `time` values
//! where ordering or grouping needs them. Unparseable input yields `None` and
//! the caller treats the record as undated.

#[cfg(test)]
#[path = "dates_test.rs"]
mod dates_test;

use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{Date, OffsetDateTime};

/// Parse a calendar date. Accepts `YYYY-MM-DD` or a full RFC 3339 timestamp
/// (its date part is used).
#[must_use]
pub fn parse_date(raw: &str) -> Option<Date> {
    let raw = raw.trim();
    let day = raw.get(..10)?;
    Date::parse(day, format_description!("[year]-[month]-[day]")).ok()
}

/// Parse an RFC 3339 timestamp.
#[must_use]
pub fn parse_timestamp(raw: &str) -> Option<OffsetDateTime> {
    OffsetDateTime::parse(raw.trim(), &Rfc3339).ok()
}

/// Format a date as `YYYY-MM-DD`.
#[must_use]
pub fn format_date(date: Date) -> String {
    date.format(format_description!("[year]-[month]-[day]")).unwrap_or_default()
}

/// Format a date as `DD.MM.YYYY`, the display form used in German UI text.
#[must_use]
pub fn format_date_de(date: Date) -> String {
    date.format(format_description!("[day].[month].[year]")).unwrap_or_default()
}
