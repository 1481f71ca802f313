//! Upsell recommendation client
//!
//! Sends the current order's item names to the recommendation service and
//! returns a structured suggestion. The call is fire-and-forget per user
//! action: no retry, no caching. Any failure collapses into a fixed
//! fallback payload with `should_suggest: false`, never a hard error.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Request payload sent to the recommendation service
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpsellRequest {
    pub items_ordered: Vec<String>,
}

/// Structured suggestion returned to the caller
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UpsellSuggestion {
    pub recommendation: String,
    pub reason: String,
    pub should_suggest: bool,
}

impl UpsellSuggestion {
    /// The fixed fallback payload used on any failure
    pub fn fallback() -> Self {
        Self {
            recommendation: String::new(),
            reason: "Recommendation not available".to_string(),
            should_suggest: false,
        }
    }
}

/// Recommendation provider seam
///
/// Infallible by contract: implementations must map every failure to the
/// fallback payload.
#[async_trait]
pub trait UpsellProvider: Send + Sync {
    async fn recommend(&self, items_ordered: &[String]) -> UpsellSuggestion;
}

/// HTTP implementation of [`UpsellProvider`]
pub struct HttpUpsellClient {
    client: reqwest::Client,
    url: String,
}

impl HttpUpsellClient {
    pub fn new(client: reqwest::Client, url: String) -> Self {
        Self { client, url }
    }
}

#[async_trait]
impl UpsellProvider for HttpUpsellClient {
    async fn recommend(&self, items_ordered: &[String]) -> UpsellSuggestion {
        // An empty order has nothing to suggest from
        if items_ordered.is_empty() {
            return UpsellSuggestion::fallback();
        }

        let request = UpsellRequest {
            items_ordered: items_ordered.to_vec(),
        };

        let resp = match self.client.post(&self.url).json(&request).send().await {
            Ok(r) => r,
            Err(e) => {
                tracing::warn!(error = %e, "Upsell request failed");
                return UpsellSuggestion::fallback();
            }
        };

        if !resp.status().is_success() {
            tracing::warn!(status = %resp.status(), "Upsell service returned non-success status");
            return UpsellSuggestion::fallback();
        }

        match resp.json::<UpsellSuggestion>().await {
            Ok(suggestion) => suggestion,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to parse upsell response");
                UpsellSuggestion::fallback()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_shape() {
        let fallback = UpsellSuggestion::fallback();
        assert!(!fallback.should_suggest);
        assert!(fallback.recommendation.is_empty());
        assert!(!fallback.reason.is_empty());
    }

    #[test]
    fn test_wire_field_names_are_camel_case() {
        let json = serde_json::to_value(UpsellRequest {
            items_ordered: vec!["Ribeye Steak".into()],
        })
        .unwrap();
        assert!(json.get("itemsOrdered").is_some());

        let suggestion: UpsellSuggestion = serde_json::from_value(serde_json::json!({
            "recommendation": "Tiramisu",
            "reason": "Popular after steak",
            "shouldSuggest": true
        }))
        .unwrap();
        assert!(suggestion.should_suggest);
    }

    #[tokio::test]
    async fn test_empty_items_short_circuits_to_fallback() {
        // Bogus URL: the empty-list branch must not touch the network
        let client = HttpUpsellClient::new(reqwest::Client::new(), "http://invalid.".into());
        let suggestion = client.recommend(&[]).await;
        assert_eq!(suggestion, UpsellSuggestion::fallback());
    }

    #[tokio::test]
    async fn test_unreachable_service_yields_fallback() {
        // Port 1 is never listening
        let client =
            HttpUpsellClient::new(reqwest::Client::new(), "http://127.0.0.1:1/recommend".into());
        let suggestion = client.recommend(&["Bruschetta".into()]).await;
        assert_eq!(suggestion, UpsellSuggestion::fallback());
    }
}
