//! Legacy data provider: the upstream collaborator that serves one raw
//! record per call.
//!
//! The transport is deliberately dumb — one GET behind an optional bearer
//! credential, no retries, no pagination, no caching. The trait is the seam
//! service tests mock.

use crate::error::ProviderError;
use reqwest::Client;
use serde_json::Value;
use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Supplies one opaque legacy envelope per call.
///
/// Resolving to `None` models the upstream handing back nothing at all (a
/// null body); distinguishing that from a missing `data` member is the
/// service's job, not the transport's.
pub trait LegacyDataProvider: Send + Sync {
    fn fetch_record(
        &self,
    ) -> Pin<Box<dyn Future<Output = Result<Option<Value>, ProviderError>> + Send + '_>>;
}

/// HTTP implementation over the legacy upstream.
pub struct HttpLegacyProvider {
    /// Pre-computed `"Bearer <token>"` header value (avoids `format!` per request).
    cached_auth_header: Option<String>,
    endpoint: String,
    client: Client,
}

impl HttpLegacyProvider {
    /// Build a provider for `endpoint`. A blank or whitespace-only token is
    /// treated as absent; a trailing slash on the endpoint is trimmed.
    pub fn new(auth_token: Option<&str>, endpoint: &str) -> Self {
        let token = auth_token.map(str::trim).filter(|t| !t.is_empty());
        Self {
            cached_auth_header: token.map(|t| format!("Bearer {t}")),
            endpoint: endpoint.trim_end_matches('/').to_string(),
            client: build_client(),
        }
    }

    async fn fetch(&self) -> Result<Option<Value>, ProviderError> {
        let mut request = self.client.get(&self.endpoint);
        if let Some(auth_header) = self.cached_auth_header.as_ref() {
            request = request.header("Authorization", auth_header);
        }

        let response = request
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(|e| ProviderError::Request {
                message: e.to_string(),
            })?;

        let body: Value = response.json().await.map_err(|e| ProviderError::Decode {
            message: e.to_string(),
        })?;

        Ok(if body.is_null() { None } else { Some(body) })
    }
}

impl LegacyDataProvider for HttpLegacyProvider {
    fn fetch_record(
        &self,
    ) -> Pin<Box<dyn Future<Output = Result<Option<Value>, ProviderError>> + Send + '_>> {
        Box::pin(self.fetch())
    }
}

fn build_client() -> Client {
    Client::builder()
        .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
        .build()
        .unwrap_or_default()
}
