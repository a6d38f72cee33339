//! Nested contact-block resolution.
//!
//! A contact-classified key can carry a bare phone string, a sub-object with
//! phone-like and preference-marker sub-keys, or an array of phone numbers.
//! Sub-keys get their own second-level pattern matching; the phone test runs
//! before the preference test, so a sub-key like `preferredPhone` lands on
//! the phone branch.

use crate::resolver::patterns::{
    email_method_re, phone_method_re, phone_sub_re, preferred_sub_re,
};
use crate::resolver::record::{ContactMethod, Patch};
use crate::resolver::shape::{ContactValue, stringify};
use serde_json::Value;

/// Resolve a classified contact value into field patches.
pub(crate) fn resolve_contact(value: &ContactValue<'_>) -> Vec<Patch> {
    match value {
        ContactValue::Flat(phone) => vec![Patch::PrimaryPhone((*phone).to_string())],
        ContactValue::Object(map) => {
            let mut patches = Vec::new();
            for (sub_key, sub_value) in *map {
                if phone_sub_re().is_match(sub_key) {
                    patches.push(Patch::PrimaryPhone(stringify(sub_value)));
                } else if preferred_sub_re().is_match(sub_key) {
                    patches.push(Patch::Preferred {
                        method: declared_method(sub_value),
                        nested: true,
                    });
                } else {
                    tracing::debug!(sub_key = %sub_key, "unrecognized contact sub-key, skipped");
                }
            }
            patches
        }
        // Array-shaped contact blocks carry phones; the first element stands
        // in for the primary number.
        ContactValue::Array(items) => items
            .first()
            .map(|first| Patch::PrimaryPhone(stringify(first)))
            .into_iter()
            .collect(),
        ContactValue::Unsupported => Vec::new(),
    }
}

/// Test a declared-preference value against the phone/email channel patterns.
pub(crate) fn declared_method(value: &Value) -> ContactMethod {
    let rendered = stringify(value);
    if phone_method_re().is_match(&rendered) {
        ContactMethod::Phone
    } else if email_method_re().is_match(&rendered) {
        ContactMethod::Email
    } else {
        ContactMethod::None
    }
}
