//! Firestore storage configuration

use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;
use crate::adapters::document_store::FirestoreConfig;

/// Firestore REST configuration
#[derive(Debug, Clone, Deserialize)]
pub struct FirestoreSettings {
    /// Google Cloud project id
    pub project_id: String,

    /// Web API key
    pub api_key: Secret<String>,

    /// Database id
    #[serde(default = "default_database")]
    pub database: String,

    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl FirestoreSettings {
    /// Get timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Adapter configuration for the document store
    pub fn to_store_config(&self) -> FirestoreConfig {
        FirestoreConfig::new(&self.project_id, self.api_key.expose_secret().as_str())
            .with_database(&self.database)
            .with_base_url(&self.base_url)
            .with_timeout(self.timeout())
    }

    /// Validate Firestore configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.project_id.trim().is_empty() {
            return Err(ValidationError::MissingRequired("FIRESTORE__PROJECT_ID"));
        }
        if self.api_key.expose_secret().trim().is_empty() {
            return Err(ValidationError::MissingRequired("FIRESTORE__API_KEY"));
        }
        if !self.base_url.starts_with("https://") && !self.base_url.starts_with("http://") {
            return Err(ValidationError::InvalidFirestoreUrl);
        }
        if self.timeout_secs == 0 {
            return Err(ValidationError::InvalidTimeout);
        }
        Ok(())
    }
}

fn default_database() -> String {
    "(default)".to_string()
}

fn default_base_url() -> String {
    "https://firestore.googleapis.com/v1".to_string()
}

fn default_timeout() -> u64 {
    30
}
