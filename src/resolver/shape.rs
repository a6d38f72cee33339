//! Tagged value-shape variants, resolved once at the ingestion boundary.
//!
//! The legacy upstream represents the same logical field with varying JSON
//! types (string vs. array vs. object). Each multi-shape field gets its shape
//! decided exactly once here; the resolution logic downstream matches on the
//! variant instead of re-probing `Value` types.

use crate::resolver::patterns::{ambiguous_date_re, iso_date_re};
use serde_json::{Map, Value};

/// Render a legacy scalar the way the upstream's consumers stringify it.
///
/// Nulls become empty strings so a degenerate value degrades to the field
/// default instead of the literal text `null`.
pub(crate) fn stringify(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

// ─── Full name ──────────────────────────────────────────────────────────────

/// Shape of a value carried by a name-classified key.
#[derive(Debug)]
pub(crate) enum NameValue<'a> {
    /// Already a display name; copied verbatim.
    Flat(&'a str),
    /// Sub-object holding first/last halves.
    Nested(&'a Map<String, Value>),
    Unsupported,
}

impl<'a> NameValue<'a> {
    pub(crate) fn classify(value: &'a Value) -> Self {
        match value {
            Value::String(s) => Self::Flat(s),
            Value::Object(map) => Self::Nested(map),
            _ => Self::Unsupported,
        }
    }
}

// ─── Creation date ──────────────────────────────────────────────────────────

/// Shape of a value carried by a created/joined-classified key.
#[derive(Debug, PartialEq)]
pub(crate) enum DateValue {
    /// Numeric epoch milliseconds.
    EpochMillis(i64),
    /// Unambiguous `YYYY[-/]MM[-/]DD`.
    Ymd { year: i32, month: u32, day: u32 },
    /// `NN[-/]NN[-/]YYYY`: either leading group could be the month.
    Ambiguous { p1: u32, p2: u32, year: i32 },
    Unsupported,
}

impl DateValue {
    pub(crate) fn classify(value: &Value) -> Self {
        match value {
            Value::Number(n) => n
                .as_i64()
                .or_else(|| n.as_f64().map(|f| f as i64))
                .map_or(Self::Unsupported, Self::EpochMillis),
            Value::String(s) => Self::classify_str(s),
            _ => Self::Unsupported,
        }
    }

    fn classify_str(s: &str) -> Self {
        if let Some(caps) = iso_date_re().captures(s) {
            let (Some(year), Some(month), Some(day)) = (
                capture_num::<i32>(&caps, 1),
                capture_num::<u32>(&caps, 2),
                capture_num::<u32>(&caps, 3),
            ) else {
                return Self::Unsupported;
            };
            return Self::Ymd { year, month, day };
        }
        if let Some(caps) = ambiguous_date_re().captures(s) {
            let (Some(p1), Some(p2), Some(year)) = (
                capture_num::<u32>(&caps, 1),
                capture_num::<u32>(&caps, 2),
                capture_num::<i32>(&caps, 3),
            ) else {
                return Self::Unsupported;
            };
            return Self::Ambiguous { p1, p2, year };
        }
        Self::Unsupported
    }
}

fn capture_num<T: std::str::FromStr>(caps: &regex::Captures<'_>, index: usize) -> Option<T> {
    caps.get(index)?.as_str().parse().ok()
}

// ─── Contact block ──────────────────────────────────────────────────────────

/// Shape of a value carried by a contact/phone-classified key.
#[derive(Debug)]
pub(crate) enum ContactValue<'a> {
    /// Bare phone number.
    Flat(&'a str),
    /// Sub-object with phone-like and preference-marker sub-keys.
    Object(&'a Map<String, Value>),
    /// Array-shaped contact block; the first element stands in for a phone.
    Array(&'a [Value]),
    Unsupported,
}

impl<'a> ContactValue<'a> {
    pub(crate) fn classify(value: &'a Value) -> Self {
        match value {
            Value::String(s) => Self::Flat(s),
            Value::Object(map) => Self::Object(map),
            Value::Array(items) => Self::Array(items),
            _ => Self::Unsupported,
        }
    }
}
