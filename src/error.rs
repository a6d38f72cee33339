use thiserror::Error;

// ─── Top-level error hierarchy ───────────────────────────────────────────────

/// Structured error hierarchy for `recanon`.
///
/// Each subsystem defines its own error variant. Library callers can match on
/// these to decide recovery strategy; internal code continues to use
/// `anyhow::Result` for ad-hoc context chains.
#[derive(Debug, Error)]
pub enum RecanonError {
    // ── Config ───────────────────────────────────────────────────────────
    #[error("config: {0}")]
    Config(#[from] ConfigError),

    // ── Legacy data provider ────────────────────────────────────────────
    #[error("provider: {0}")]
    Provider(#[from] ProviderError),

    // ── Normalization ───────────────────────────────────────────────────
    #[error("normalize: {0}")]
    Normalize(#[from] NormalizeError),

    // ── Generic fallthrough (wraps anyhow for interop) ──────────────────
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

// ─── Config errors ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {variable}: {message}")]
    Invalid { variable: String, message: String },
}

// ─── Provider errors ─────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("legacy upstream request failed: {message}")]
    Request { message: String },

    #[error("legacy upstream returned an undecodable body: {message}")]
    Decode { message: String },
}

// ─── Normalization errors ────────────────────────────────────────────────────

/// Failures that abort a whole normalization run.
///
/// Per-field anomalies never land here: every classification branch degrades
/// to a safe default instead of failing the record. Only the two
/// upstream-shape checks reject the invocation outright.
#[derive(Debug, Error)]
pub enum NormalizeError {
    #[error("legacy response is null/undefined")]
    UpstreamUnavailable,

    #[error("legacy response data is null/undefined")]
    EmptyPayload,

    #[error(transparent)]
    Provider(#[from] ProviderError),
}

// ─── Convenience re-exports ─────────────────────────────────────────────────

/// Shorthand result type for the crate.
pub type Result<T> = std::result::Result<T, RecanonError>;
