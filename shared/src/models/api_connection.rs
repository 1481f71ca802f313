//! API Connection Settings Model
//!
//! Persisted per-service connection toggles and keys (service name →
//! enabled/apiKey/apiUrl). Stored in the settings store, never in memory
//! fixtures.

use serde::{Deserialize, Serialize};

/// One external service connection entry
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct ApiConnection {
    pub enabled: bool,
    pub api_key: Option<String>,
    pub api_url: Option<String>,
}

/// Update connection payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConnectionUpdate {
    pub enabled: Option<bool>,
    pub api_key: Option<String>,
    pub api_url: Option<String>,
}

impl ApiConnection {
    /// Apply a partial update
    pub fn apply(&mut self, update: ApiConnectionUpdate) {
        if let Some(enabled) = update.enabled {
            self.enabled = enabled;
        }
        if let Some(key) = update.api_key {
            self.api_key = Some(key);
        }
        if let Some(url) = update.api_url {
            self.api_url = Some(url);
        }
    }
}
