//! The field resolver: heuristic key classification and value normalization.
//!
//! One pass over the legacy bag's keys, in upstream order. Each key is
//! classified against the ordered pattern table, its value's shape is
//! resolved once into a tagged variant, and the matched rule returns field
//! patches that a pure fold merges into the accumulating record. If two keys
//! patch the same canonical field, the later one wins.

mod contact;
mod date;
mod patterns;
mod record;
mod shape;

pub use record::{CanonicalUserRecord, ContactMethod};

use chrono::{DateTime, Utc};
use contact::{declared_method, resolve_contact};
use date::normalize_created_at;
use patterns::{CanonicalField, active_truth_re, classify_key, email_format_re};
use record::{Accumulator, Patch};
use serde_json::{Map, Value};
use shape::{ContactValue, DateValue, NameValue, stringify};

/// Resolve a legacy key/value bag into the canonical record.
///
/// Never fails: a key matching no known pattern is skipped (logged for
/// later triage), and every per-field anomaly degrades to that field's
/// default. The input is never mutated.
#[must_use]
pub fn resolve(bag: &Map<String, Value>) -> CanonicalUserRecord {
    resolve_at(bag, Utc::now())
}

/// [`resolve`] with an explicit "now", which the ambiguous-date fallback
/// substitutes for unparseable dates. Split out so tests stay deterministic.
#[must_use]
pub fn resolve_at(bag: &Map<String, Value>, now: DateTime<Utc>) -> CanonicalUserRecord {
    let mut acc = Accumulator::default();

    for (key, value) in bag {
        let Some(field) = classify_key(key) else {
            tracing::debug!(key = %key, "no canonical field for key, deferring to manual review");
            continue;
        };
        for patch in resolve_field(field, value, &acc, now) {
            acc.apply(patch);
        }
    }

    acc.finish()
}

/// Dispatch one classified key/value pair to its field rule.
fn resolve_field(
    field: CanonicalField,
    value: &Value,
    acc: &Accumulator,
    now: DateTime<Utc>,
) -> Vec<Patch> {
    match field {
        CanonicalField::Identity => vec![Patch::Id(stringify(value))],
        CanonicalField::FullName => resolve_full_name(value).into_iter().collect(),
        CanonicalField::Email => {
            let address = stringify(value);
            let valid = email_format_re().is_match(&address);
            vec![Patch::Email { address, valid }]
        }
        CanonicalField::ActiveStatus => {
            let active = value
                .as_str()
                .is_some_and(|s| active_truth_re().is_match(s));
            vec![Patch::IsActive(active)]
        }
        CanonicalField::CreatedAt => {
            let raw = stringify(value);
            normalize_created_at(&DateValue::classify(value), &raw, acc.observed(), now)
                .map(Patch::CreatedAt)
                .into_iter()
                .collect()
        }
        CanonicalField::Contact => resolve_contact(&ContactValue::classify(value)),
        CanonicalField::Roles => vec![resolve_roles(value)],
        CanonicalField::PreferredContact => vec![Patch::Preferred {
            method: declared_method(value),
            nested: false,
        }],
    }
}

fn resolve_full_name(value: &Value) -> Option<Patch> {
    match NameValue::classify(value) {
        NameValue::Flat(name) => Some(Patch::FullName(name.to_string())),
        NameValue::Nested(map) => Some(Patch::FullName(assemble_name(map))),
        NameValue::Unsupported => None,
    }
}

/// Concatenate first/last halves with a single space. A missing half leaves
/// its side empty, yielding a leading or trailing space; the upstream's
/// consumers rely on that exact shape, so it is not trimmed.
fn assemble_name(map: &Map<String, Value>) -> String {
    let mut first = String::new();
    let mut last = String::new();

    for (sub_key, sub_value) in map {
        if patterns::first_half_re().is_match(sub_key) {
            first = stringify(sub_value);
        } else if patterns::last_half_re().is_match(sub_key) {
            last = stringify(sub_value);
        }
    }

    format!("{first} {last}")
}

fn resolve_roles(value: &Value) -> Patch {
    match value {
        Value::Array(items) => Patch::Roles(items.iter().map(stringify).collect()),
        other => Patch::Roles(vec![stringify(other)]),
    }
}
