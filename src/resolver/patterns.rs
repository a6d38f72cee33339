//! Key- and value-pattern tables for the resolution rules.
//!
//! Every pattern the legacy upstream is known to emit is compiled once and
//! cached in a `OnceLock`. Key classification runs against an explicit
//! ordered table so the precedence between rules stays auditable: the first
//! matching entry wins, and the table order is the documented rule order.

use regex::Regex;
use std::sync::OnceLock;

/// Canonical target field a legacy key can classify into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CanonicalField {
    Identity,
    FullName,
    Email,
    ActiveStatus,
    CreatedAt,
    Contact,
    Roles,
    PreferredContact,
}

/// Ordered (field, key-pattern) table. First match wins.
fn classification_table() -> &'static [(CanonicalField, Regex)] {
    static TABLE: OnceLock<Vec<(CanonicalField, Regex)>> = OnceLock::new();
    TABLE.get_or_init(|| {
        vec![
            (CanonicalField::Identity, key_pattern(r"(?i)user|id")),
            (CanonicalField::FullName, key_pattern(r"(?i)full|name")),
            (CanonicalField::Email, key_pattern(r"(?i)email|e-mail")),
            (CanonicalField::ActiveStatus, key_pattern(r"(?i)account|status")),
            (CanonicalField::CreatedAt, key_pattern(r"(?i)created|joined")),
            (CanonicalField::Contact, key_pattern(r"(?i)\bcontact\b|phone")),
            (CanonicalField::Roles, key_pattern(r"(?i)role")),
            (
                CanonicalField::PreferredContact,
                key_pattern(r"(?i)preferred|prefcontact"),
            ),
        ]
    })
}

fn key_pattern(pattern: &str) -> Regex {
    Regex::new(pattern).expect("valid key classification pattern")
}

/// Classify a legacy key into its canonical field, if any pattern matches.
pub(crate) fn classify_key(key: &str) -> Option<CanonicalField> {
    classification_table()
        .iter()
        .find(|(_, pattern)| pattern.is_match(key))
        .map(|(field, _)| *field)
}

// ─── Value patterns ─────────────────────────────────────────────────────────

/// Standard `local@domain.tld` shape; recorded, never enforced.
pub(crate) fn email_format_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$")
            .expect("valid email format pattern")
    })
}

/// Values the upstream uses to mean "this account is live".
pub(crate) fn active_truth_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)^(a|ok|active)$").expect("valid active truth pattern"))
}

/// Unambiguous `YYYY[-/]MM[-/]DD` date.
pub(crate) fn iso_date_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^(\d{4})[-/](\d{2})[-/](\d{2})$").expect("valid iso date pattern")
    })
}

/// Ambiguous `NN[-/]NN[-/]YYYY` date; either leading group could be the month.
pub(crate) fn ambiguous_date_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^(\d{2})[-/](\d{2})[-/](\d{4})$").expect("valid ambiguous date pattern")
    })
}

/// First-name half of a nested name object. Case-sensitive: the upstream has
/// only ever been observed emitting a lowercase `first`, and `First`-shaped
/// keys collide with unrelated fields.
pub(crate) fn first_half_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new("first").expect("valid first-name pattern"))
}

/// Last-name half of a nested name object.
pub(crate) fn last_half_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)last").expect("valid last-name pattern"))
}

/// Phone-bearing sub-key inside a nested contact block.
pub(crate) fn phone_sub_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)phone").expect("valid phone sub-key pattern"))
}

/// Preferred-contact marker sub-key inside a nested contact block.
pub(crate) fn preferred_sub_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)preferred").expect("valid preferred sub-key pattern"))
}

/// Declared-preference value naming the phone channel.
pub(crate) fn phone_method_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)phone").expect("valid phone method pattern"))
}

/// Declared-preference value naming the email channel.
pub(crate) fn email_method_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)email").expect("valid email method pattern"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_identity_spellings() {
        for key in ["userId", "uid", "account_id", "ID", "user"] {
            assert_eq!(classify_key(key), Some(CanonicalField::Identity), "{key}");
        }
    }

    #[test]
    fn identity_outranks_status_for_account_id() {
        // "account_id" matches both the identity and the status patterns;
        // table order resolves it to identity.
        assert_eq!(classify_key("account_id"), Some(CanonicalField::Identity));
        assert_eq!(classify_key("accountStatus"), Some(CanonicalField::ActiveStatus));
    }

    #[test]
    fn classifies_name_keys() {
        assert_eq!(classify_key("fullName"), Some(CanonicalField::FullName));
        assert_eq!(classify_key("name"), Some(CanonicalField::FullName));
    }

    #[test]
    fn classifies_email_spellings() {
        assert_eq!(classify_key("emailAddress"), Some(CanonicalField::Email));
        assert_eq!(classify_key("e-mail"), Some(CanonicalField::Email));
    }

    #[test]
    fn classifies_date_keys() {
        assert_eq!(classify_key("createdAt"), Some(CanonicalField::CreatedAt));
        assert_eq!(classify_key("joinedDate"), Some(CanonicalField::CreatedAt));
    }

    #[test]
    fn contact_requires_word_boundary() {
        assert_eq!(classify_key("contact"), Some(CanonicalField::Contact));
        assert_eq!(classify_key("phoneNumber"), Some(CanonicalField::Contact));
        // No word boundary before "Contact", so this falls through to the
        // preferred-contact rule.
        assert_eq!(
            classify_key("preferredContact"),
            Some(CanonicalField::PreferredContact)
        );
        assert_eq!(
            classify_key("prefContact"),
            Some(CanonicalField::PreferredContact)
        );
    }

    #[test]
    fn classifies_roles() {
        assert_eq!(classify_key("roles"), Some(CanonicalField::Roles));
        assert_eq!(classify_key("userRole"), Some(CanonicalField::Identity)); // "user" wins
        assert_eq!(classify_key("role"), Some(CanonicalField::Roles));
    }

    #[test]
    fn unknown_keys_classify_to_nothing() {
        assert_eq!(classify_key("favouriteColour"), None);
        assert_eq!(classify_key(""), None);
    }

    #[test]
    fn email_format_accepts_standard_addresses() {
        assert!(email_format_re().is_match("john.doe@example.com"));
        assert!(email_format_re().is_match("a+b@sub.domain.co"));
        assert!(!email_format_re().is_match("not-an-email"));
        assert!(!email_format_re().is_match("missing@tld"));
    }

    #[test]
    fn active_truth_is_exact_and_case_insensitive() {
        for value in ["a", "OK", "Active", "ACTIVE"] {
            assert!(active_truth_re().is_match(value), "{value}");
        }
        for value in ["inactive", "activated", "yes", ""] {
            assert!(!active_truth_re().is_match(value), "{value}");
        }
    }

    #[test]
    fn first_half_is_case_sensitive() {
        assert!(first_half_re().is_match("firstName"));
        assert!(!first_half_re().is_match("FirstName"));
        assert!(last_half_re().is_match("LastName"));
    }

    #[test]
    fn date_patterns_accept_both_separators() {
        assert!(iso_date_re().is_match("2023-01-15"));
        assert!(iso_date_re().is_match("2023/01/15"));
        assert!(!iso_date_re().is_match("2023-1-15"));
        assert!(ambiguous_date_re().is_match("13-01-2023"));
        assert!(ambiguous_date_re().is_match("05/03/2023"));
        assert!(!ambiguous_date_re().is_match("5-3-2023"));
    }
}
