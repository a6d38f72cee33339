//! Creation-date normalization, including the ambiguous-date heuristic.
//!
//! The upstream emits dates as epoch milliseconds, `YYYY[-/]MM[-/]DD`, or a
//! two-digit/two-digit/four-digit form where either leading group could be
//! the month. Every successful parse comes out as a UTC ISO-8601 string with
//! millisecond precision.

use crate::resolver::shape::DateValue;
use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};

/// Normalize a classified date value.
///
/// Returns `None` when the value's shape is unusable, leaving the field at
/// its default. The ambiguous form always resolves to *something*: an
/// impossible month/day pair logs a warning (with the identity observed so
/// far, for triage) and substitutes `now`.
pub(crate) fn normalize_created_at(
    value: &DateValue,
    raw: &str,
    observed: (&str, &str),
    now: DateTime<Utc>,
) -> Option<String> {
    match *value {
        DateValue::EpochMillis(millis) => {
            DateTime::<Utc>::from_timestamp_millis(millis).map(format_utc)
        }
        DateValue::Ymd { year, month, day } => from_calendar(year, month, day),
        DateValue::Ambiguous { p1, p2, year } => {
            Some(disambiguate(p1, p2, year, raw, observed, now))
        }
        DateValue::Unsupported => None,
    }
}

/// Month-first unless the first group cannot be a month; both ≥13 is not a
/// calendar date at all and falls back to `now`.
fn disambiguate(
    p1: u32,
    p2: u32,
    year: i32,
    raw: &str,
    observed: (&str, &str),
    now: DateTime<Utc>,
) -> String {
    let parsed = if p1 < 13 {
        from_calendar(year, p1, p2)
    } else if p2 < 13 {
        from_calendar(year, p2, p1)
    } else {
        None
    };

    parsed.unwrap_or_else(|| {
        let (id, full_name) = observed;
        tracing::warn!(
            raw = %raw,
            id = %id,
            full_name = %full_name,
            "invalid date format, falling back to current time"
        );
        format_utc(now)
    })
}

fn from_calendar(year: i32, month: u32, day: u32) -> Option<String> {
    let date = NaiveDate::from_ymd_opt(year, month, day)?;
    let datetime = date.and_hms_opt(0, 0, 0)?.and_utc();
    Some(format_utc(datetime))
}

fn format_utc(datetime: DateTime<Utc>) -> String {
    datetime.to_rfc3339_opts(SecondsFormat::Millis, true)
}
