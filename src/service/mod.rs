//! The one outbound operation: normalize the next available legacy record.

use crate::error::NormalizeError;
use crate::provider::LegacyDataProvider;
use crate::resolver::{self, CanonicalUserRecord};
use serde_json::{Map, Value};

/// Fetch one legacy envelope and resolve it into the canonical record.
///
/// The provider is awaited exactly once, before normalization begins; the
/// fold itself never suspends. The two upstream-shape checks are the only
/// failures — a bag that matches zero patterns still yields a (default-heavy)
/// record.
pub async fn normalize_next_record(
    provider: &dyn LegacyDataProvider,
) -> Result<CanonicalUserRecord, NormalizeError> {
    let Some(envelope) = provider.fetch_record().await? else {
        return Err(NormalizeError::UpstreamUnavailable);
    };

    let data = match envelope.get("data") {
        None | Some(Value::Null) => return Err(NormalizeError::EmptyPayload),
        Some(data) => data,
    };

    tracing::debug!(payload = %data, "raw legacy payload");

    let record = match data.as_object() {
        Some(bag) => resolver::resolve(bag),
        None => {
            // Non-object payloads carry no keys to classify; degrade to the
            // all-default record rather than failing the invocation.
            tracing::debug!("legacy payload is not an object, producing default record");
            resolver::resolve(&Map::new())
        }
    };

    tracing::debug!(
        id = %record.id,
        preferred = %record.preferred_contact_method,
        "resolved canonical record"
    );

    Ok(record)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ProviderError;
    use crate::resolver::ContactMethod;
    use serde_json::json;
    use std::future::Future;
    use std::pin::Pin;

    /// In-memory provider returning a canned envelope.
    struct StaticProvider {
        envelope: Option<Value>,
    }

    impl LegacyDataProvider for StaticProvider {
        fn fetch_record(
            &self,
        ) -> Pin<Box<dyn Future<Output = Result<Option<Value>, ProviderError>> + Send + '_>>
        {
            let envelope = self.envelope.clone();
            Box::pin(async move { Ok(envelope) })
        }
    }

    struct FailingProvider;

    impl LegacyDataProvider for FailingProvider {
        fn fetch_record(
            &self,
        ) -> Pin<Box<dyn Future<Output = Result<Option<Value>, ProviderError>> + Send + '_>>
        {
            Box::pin(async {
                Err(ProviderError::Request {
                    message: "connection refused".into(),
                })
            })
        }
    }

    #[tokio::test]
    async fn null_envelope_is_upstream_unavailable() {
        let provider = StaticProvider { envelope: None };
        let err = normalize_next_record(&provider).await.unwrap_err();
        assert!(matches!(err, NormalizeError::UpstreamUnavailable));
        assert_eq!(err.to_string(), "legacy response is null/undefined");
    }

    #[tokio::test]
    async fn null_data_is_empty_payload() {
        let provider = StaticProvider {
            envelope: Some(json!({"data": null})),
        };
        let err = normalize_next_record(&provider).await.unwrap_err();
        assert!(matches!(err, NormalizeError::EmptyPayload));
        assert_eq!(err.to_string(), "legacy response data is null/undefined");
    }

    #[tokio::test]
    async fn missing_data_member_is_empty_payload() {
        let provider = StaticProvider {
            envelope: Some(json!({"status": "ok"})),
        };
        let err = normalize_next_record(&provider).await.unwrap_err();
        assert!(matches!(err, NormalizeError::EmptyPayload));
    }

    #[tokio::test]
    async fn transport_failure_propagates() {
        let err = normalize_next_record(&FailingProvider).await.unwrap_err();
        assert!(matches!(err, NormalizeError::Provider(_)));
        assert!(err.to_string().contains("connection refused"));
    }

    #[tokio::test]
    async fn object_payload_is_resolved() {
        let provider = StaticProvider {
            envelope: Some(json!({"data": {
                "userId": "1007",
                "contact": {"phoneNumber": "+1-123", "preferred": "phone"},
            }})),
        };
        let record = normalize_next_record(&provider).await.unwrap();
        assert_eq!(record.id, "1007");
        assert_eq!(record.primary_phone, "+1-123");
        assert_eq!(record.preferred_contact_method, ContactMethod::Phone);
    }

    #[tokio::test]
    async fn non_object_payload_degrades_to_default_record() {
        let provider = StaticProvider {
            envelope: Some(json!({"data": "not an object"})),
        };
        let record = normalize_next_record(&provider).await.unwrap();
        assert_eq!(record, CanonicalUserRecord::default());
    }
}
