//! ISO date arithmetic anchored to UTC midnight.
//!
//! Two API shapes run through the whole engine:
//! - strict `Result` variants (`parse_day`, `add_days`, `day_difference`)
//!   for call sites whose input is already validated
//! - lenient `Option` variants (`try_parse_day`, `try_add_days`,
//!   `try_day_difference`) for batch pipelines where one bad record must
//!   not abort the rest
//!
//! All values are calendar days; there is no time-of-day component, so
//! daylight-saving shifts cannot move an evaluation across a boundary.

use chrono::{Duration, NaiveDate};
use permtrack_core::EngineError;

/// Wire format for every date the engine touches.
pub const ISO_FORMAT: &str = "%Y-%m-%d";

/// Whether `s` parses as a `YYYY-MM-DD` calendar date.
pub fn is_valid_iso_date(s: &str) -> bool {
    NaiveDate::parse_from_str(s, ISO_FORMAT).is_ok()
}

/// Strict parse of a `YYYY-MM-DD` string.
pub fn parse_day(s: &str) -> Result<NaiveDate, EngineError> {
    NaiveDate::parse_from_str(s, ISO_FORMAT).map_err(|_| EngineError::InvalidDate(s.to_string()))
}

/// Lenient parse; `None` on malformed input.
pub fn try_parse_day(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, ISO_FORMAT).ok()
}

/// Day index since the Unix epoch at UTC midnight.
pub fn parse_utc_day(s: &str) -> Result<i64, EngineError> {
    let day = parse_day(s)?;
    // `NaiveDate::default()` is 1970-01-01.
    Ok(day.signed_duration_since(NaiveDate::default()).num_days())
}

/// Render a parsed day back to `YYYY-MM-DD`.
pub fn format_day(day: NaiveDate) -> String {
    day.format(ISO_FORMAT).to_string()
}

/// Shift an ISO date by a signed number of days.
pub fn add_days(iso: &str, n: i64) -> Result<String, EngineError> {
    let out_of_range = || EngineError::DateOutOfRange {
        base: iso.to_string(),
        offset: n,
    };
    let day = parse_day(iso)?;
    let delta = Duration::try_days(n).ok_or_else(out_of_range)?;
    let shifted = day.checked_add_signed(delta).ok_or_else(out_of_range)?;
    Ok(format_day(shifted))
}

/// Lenient [`add_days`]; `None` on malformed input or overflow.
pub fn try_add_days(iso: &str, n: i64) -> Option<String> {
    add_days(iso, n).ok()
}

/// Signed day count from `from` to `to`; positive when `to` is later.
pub fn day_difference(from: &str, to: &str) -> Result<i64, EngineError> {
    let from_day = parse_day(from)?;
    let to_day = parse_day(to)?;
    Ok(to_day.signed_duration_since(from_day).num_days())
}

/// Lenient [`day_difference`]; `None` if either side is malformed.
pub fn try_day_difference(from: &str, to: &str) -> Option<i64> {
    day_difference(from, to).ok()
}

/// Earliest valid date among `dates`, ignoring missing and malformed
/// entries. `None` when no valid entries remain.
pub fn min_date<'a, I>(dates: I) -> Option<String>
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    dates
        .into_iter()
        .flatten()
        .filter_map(try_parse_day)
        .min()
        .map(format_day)
}

/// Latest valid date among `dates`, ignoring missing and malformed entries.
pub fn max_date<'a, I>(dates: I) -> Option<String>
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    dates
        .into_iter()
        .flatten()
        .filter_map(try_parse_day)
        .max()
        .map(format_day)
}

// ── Tests ───────────────────────────────────────────────────────────
