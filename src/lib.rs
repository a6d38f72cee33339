#![warn(clippy::all, clippy::pedantic)]
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions,
    clippy::must_use_candidate
)]

//! Recanon — heuristic canonicalizer for ragged legacy user records.
//!
//! One legacy key/value bag in, one [`CanonicalUserRecord`] out. The core is
//! the [`resolver`]: an ordered key-classification table, per-field value
//! normalization (including ambiguous-date disambiguation and nested
//! contact-block traversal), and an explicit last-write-wins fold.

pub mod config;
pub mod error;
pub mod provider;
pub mod resolver;
pub mod service;

pub use config::Config;
pub use error::{ConfigError, NormalizeError, ProviderError, RecanonError, Result};
pub use provider::{HttpLegacyProvider, LegacyDataProvider};
pub use resolver::{CanonicalUserRecord, ContactMethod, resolve, resolve_at};
pub use service::normalize_next_record;
