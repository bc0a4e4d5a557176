//! Storage backend selection

use serde::Deserialize;

use super::error::ValidationError;

/// Where survey records are kept
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// Process-local, lost on restart
    #[default]
    Memory,
    Postgres,
    Firestore,
}

/// Storage configuration
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    #[serde(default)]
    pub backend: StorageBackend,

    /// Collection that holds survey records
    #[serde(default = "default_collection")]
    pub collection: String,

    /// Path prefix of the result view returned after a submission
    #[serde(default = "default_result_path")]
    pub result_path: String,
}

impl StorageConfig {
    /// Validate storage configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        let collection = self.collection.trim();
        if collection.is_empty() || collection.contains('/') {
            return Err(ValidationError::InvalidCollection);
        }
        if !self.result_path.starts_with('/') {
            return Err(ValidationError::InvalidResultPath);
        }
        Ok(())
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackend::default(),
            collection: default_collection(),
            result_path: default_result_path(),
        }
    }
}

fn default_collection() -> String {
    "surveyData".to_string()
}

fn default_result_path() -> String {
    "/graph".to_string()
}
