use serde::{Deserialize, Serialize};

// ─── Canonical output shape ─────────────────────────────────────────────────

/// How the entity prefers to be reached.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ContactMethod {
    Phone,
    Email,
    #[default]
    None,
}

/// The one canonical, strongly-shaped record this crate produces.
///
/// Every required field is seeded with an empty-string / `false` / empty-vec
/// default so downstream consumers never observe a missing member, even when
/// zero input keys matched any pattern.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CanonicalUserRecord {
    pub id: String,
    pub full_name: String,
    pub email: String,
    pub is_active: bool,
    /// UTC ISO-8601 with millisecond precision, or empty when no date key matched.
    pub created_at: String,
    pub primary_phone: String,
    pub roles: Vec<String>,
    pub preferred_contact_method: ContactMethod,
    /// Set only when an email key was matched; never retroactively validated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_valid_email_format: Option<bool>,
    /// Reserved: phone-number validation is explicitly deferred upstream.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_valid_phone_number: Option<bool>,
}

// ─── Field patches ──────────────────────────────────────────────────────────

/// One field update produced by a matched resolution rule.
///
/// Rules never touch the accumulating record directly; they return patches
/// which [`Accumulator::apply`] merges in source-key order, making the
/// last-write-wins semantics explicit rather than incidental.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Patch {
    Id(String),
    FullName(String),
    Email { address: String, valid: bool },
    IsActive(bool),
    CreatedAt(String),
    PrimaryPhone(String),
    Roles(Vec<String>),
    Preferred { method: ContactMethod, nested: bool },
}

/// Private per-invocation accumulator for the resolution fold.
#[derive(Debug, Default)]
pub(crate) struct Accumulator {
    record: CanonicalUserRecord,
    /// A nested preferred-contact marker pins the method against later flat
    /// matches; among markers of the same provenance, last write wins.
    preferred_pinned: bool,
}

impl Accumulator {
    pub(crate) fn apply(&mut self, patch: Patch) {
        match patch {
            Patch::Id(id) => self.record.id = id,
            Patch::FullName(name) => self.record.full_name = name,
            Patch::Email { address, valid } => {
                self.record.email = address;
                self.record.is_valid_email_format = Some(valid);
            }
            Patch::IsActive(active) => self.record.is_active = active,
            Patch::CreatedAt(timestamp) => self.record.created_at = timestamp,
            Patch::PrimaryPhone(phone) => self.record.primary_phone = phone,
            Patch::Roles(roles) => self.record.roles = roles,
            Patch::Preferred { method, nested } => {
                if nested {
                    self.record.preferred_contact_method = method;
                    self.preferred_pinned = true;
                } else if !self.preferred_pinned {
                    self.record.preferred_contact_method = method;
                }
            }
        }
    }

    /// Identity observed so far, for diagnostics emitted mid-fold.
    pub(crate) fn observed(&self) -> (&str, &str) {
        (&self.record.id, &self.record.full_name)
    }

    pub(crate) fn finish(self) -> CanonicalUserRecord {
        self.record
    }
}
