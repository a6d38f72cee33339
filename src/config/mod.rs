use serde::{Deserialize, Serialize};

/// Upstream the legacy records are served from when no override is given.
pub const DEFAULT_ENDPOINT: &str =
    "https://us-central1-txtsmarter-dev.cloudfunctions.net/codeassessment/user";

// ─── Process-wide configuration ─────────────────────────────────────────────

/// Process-wide configuration for one normalization run.
///
/// The bearer credential is forwarded to the legacy upstream as-is; its
/// presence and format are not validated here (the upstream owns auth).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Bearer credential for the legacy upstream.
    pub auth_token: Option<String>,
    /// Full URL of the legacy record endpoint.
    pub endpoint: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            auth_token: None,
            endpoint: DEFAULT_ENDPOINT.to_string(),
        }
    }
}

impl Config {
    /// Build a config from the process environment.
    ///
    /// `RECANON_AUTH_TOKEN` wins over the legacy `AUTH_TOKEN` variable;
    /// `RECANON_ENDPOINT` overrides the default upstream URL. Blank values
    /// are treated as unset.
    #[must_use]
    pub fn from_env() -> Self {
        let auth_token = std::env::var("RECANON_AUTH_TOKEN")
            .or_else(|_| std::env::var("AUTH_TOKEN"))
            .ok()
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty());

        let endpoint = std::env::var("RECANON_ENDPOINT")
            .ok()
            .map(|e| e.trim().to_string())
            .filter(|e| !e.is_empty())
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());

        Self {
            auth_token,
            endpoint,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_legacy_upstream() {
        let config = Config::default();
        assert!(config.auth_token.is_none());
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
    }

    #[test]
    fn config_round_trips_through_serde() {
        let config = Config {
            auth_token: Some("tok".into()),
            endpoint: "https://example.com/user".into(),
        };
        let json = serde_json::to_string(&config).unwrap();
        let back: Config = serde_json::from_str(&json).unwrap();
        assert_eq!(back.auth_token.as_deref(), Some("tok"));
        assert_eq!(back.endpoint, "https://example.com/user");
    }
}
