//! Address lookup client
//!
//! Forward-geocodes a free-text query through the configured third-party
//! service. The provider's response is loosely structured; parsing is
//! best-effort and skips candidates missing coordinates.

use serde::{Deserialize, Serialize};

use crate::utils::{AppError, AppResult};

/// One parsed address candidate
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct AddressCandidate {
    pub place_name: String,
    pub locality: Option<String>,
    pub postcode: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
}

/// Raw feature as returned by the geocoding provider
#[derive(Debug, Deserialize)]
pub(crate) struct GeoFeature {
    #[serde(default)]
    place_name: Option<String>,
    #[serde(default)]
    text: Option<String>,
    /// `[longitude, latitude]`
    #[serde(default)]
    center: Vec<f64>,
    #[serde(default)]
    context: Vec<GeoContext>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct GeoContext {
    #[serde(default)]
    id: String,
    #[serde(default)]
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct GeoResponse {
    #[serde(default)]
    features: Vec<GeoFeature>,
}

/// Best-effort conversion of provider features into address candidates
///
/// Features without a usable `[lon, lat]` pair are dropped; locality and
/// postcode come from the context entries when present.
pub(crate) fn parse_features(response: GeoResponse) -> Vec<AddressCandidate> {
    response
        .features
        .into_iter()
        .filter_map(|feature| {
            let (&longitude, &latitude) = match (feature.center.first(), feature.center.get(1)) {
                (Some(lon), Some(lat)) => (lon, lat),
                _ => return None,
            };

            let mut locality = None;
            let mut postcode = None;
            for ctx in &feature.context {
                if ctx.id.starts_with("place.") || ctx.id.starts_with("locality.") {
                    locality = locality.or_else(|| ctx.text.clone());
                } else if ctx.id.starts_with("postcode.") {
                    postcode = postcode.or_else(|| ctx.text.clone());
                }
            }

            let place_name = feature
                .place_name
                .or(feature.text)
                .unwrap_or_default();
            if place_name.is_empty() {
                return None;
            }

            Some(AddressCandidate {
                place_name,
                locality,
                postcode,
                latitude,
                longitude,
            })
        })
        .collect()
}

/// HTTP geocoding client
pub struct GeocodeClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl GeocodeClient {
    pub fn new(client: reqwest::Client, base_url: String, api_key: String) -> Self {
        Self {
            client,
            base_url,
            api_key,
        }
    }

    /// Search address candidates for a free-text query
    pub async fn search(&self, query: &str) -> AppResult<Vec<AddressCandidate>> {
        let resp = self
            .client
            .get(&self.base_url)
            .query(&[
                ("q", query),
                ("access_token", self.api_key.as_str()),
                ("limit", "5"),
            ])
            .send()
            .await
            .map_err(|e| AppError::Upstream(format!("Geocode request failed: {e}")))?;

        if !resp.status().is_success() {
            return Err(AppError::Upstream(format!(
                "Geocode service returned {}",
                resp.status()
            )));
        }

        let body: GeoResponse = resp
            .json()
            .await
            .map_err(|e| AppError::Upstream(format!("Geocode response parse failed: {e}")))?;

        Ok(parse_features(body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(value: serde_json::Value) -> GeoResponse {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_parse_full_feature() {
        let candidates = parse_features(response(serde_json::json!({
            "features": [{
                "place_name": "12 Borough High St, London SE1 1LB",
                "text": "Borough High St",
                "center": [-0.0900, 51.5050],
                "context": [
                    {"id": "postcode.123", "text": "SE1 1LB"},
                    {"id": "place.456", "text": "London"}
                ]
            }]
        })));

        assert_eq!(candidates.len(), 1);
        let c = &candidates[0];
        assert_eq!(c.place_name, "12 Borough High St, London SE1 1LB");
        assert_eq!(c.locality.as_deref(), Some("London"));
        assert_eq!(c.postcode.as_deref(), Some("SE1 1LB"));
        assert_eq!(c.latitude, 51.5050);
        assert_eq!(c.longitude, -0.0900);
    }

    #[test]
    fn test_feature_without_center_is_dropped() {
        let candidates = parse_features(response(serde_json::json!({
            "features": [{"place_name": "Nowhere", "center": []}]
        })));
        assert!(candidates.is_empty());
    }

    #[test]
    fn test_text_falls_back_when_place_name_missing() {
        let candidates = parse_features(response(serde_json::json!({
            "features": [{"text": "High Street", "center": [0.1, 52.2]}]
        })));
        assert_eq!(candidates[0].place_name, "High Street");
    }

    #[test]
    fn test_empty_response_parses_to_no_candidates() {
        let candidates = parse_features(response(serde_json::json!({})));
        assert!(candidates.is_empty());
    }
}
