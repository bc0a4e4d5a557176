//! Application configuration module
//!
//! Type-safe configuration loaded from environment variables using the
//! `config` and `dotenvy` crates. Variables carry the `FIBER_SURVEY` prefix
//! and nested values are separated by double underscores.
//!
//! # Example
//!
//! ```no_run
//! use fiber_survey::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Server running on {:?}", config.server.socket_addr());
//! ```

mod database;
mod error;
mod firestore;
mod server;
mod storage;

pub use database::DatabaseConfig;
pub use error::{ConfigError, ValidationError};
pub use firestore::FirestoreSettings;
pub use server::{Environment, ServerConfig};
pub use storage::{StorageBackend, StorageConfig};

use serde::Deserialize;

/// Root application configuration
///
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    /// Server configuration (host, port, environment, logging)
    #[serde(default)]
    pub server: ServerConfig,

    /// Backend selection and collection naming
    #[serde(default)]
    pub storage: StorageConfig,

    /// PostgreSQL connection, required for the `postgres` backend
    pub database: Option<DatabaseConfig>,

    /// Firestore REST access, required for the `firestore` backend
    pub firestore: Option<FirestoreSettings>,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `FIBER_SURVEY` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    ///
    /// - `FIBER_SURVEY__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `FIBER_SURVEY__STORAGE__BACKEND=postgres` -> `storage.backend = postgres`
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("FIBER_SURVEY")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// The selected backend must have its section, and production must not
    /// run on the in-memory store.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.storage.validate()?;

        match self.storage.backend {
            StorageBackend::Memory => {
                if self.is_production() {
                    return Err(ValidationError::MemoryStorageInProduction);
                }
            }
            StorageBackend::Postgres => self
                .database
                .as_ref()
                .ok_or(ValidationError::MissingRequired("DATABASE__URL"))?
                .validate()?,
            StorageBackend::Firestore => self
                .firestore
                .as_ref()
                .ok_or(ValidationError::MissingRequired("FIRESTORE__PROJECT_ID"))?
                .validate()?,
        }
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    // env vars are process-global
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    const VARS: &[&str] = &[
        "FIBER_SURVEY__SERVER__PORT",
        "FIBER_SURVEY__SERVER__ENVIRONMENT",
        "FIBER_SURVEY__SERVER__LOG_JSON",
        "FIBER_SURVEY__STORAGE__BACKEND",
        "FIBER_SURVEY__STORAGE__COLLECTION",
        "FIBER_SURVEY__DATABASE__URL",
        "FIBER_SURVEY__FIRESTORE__PROJECT_ID",
        "FIBER_SURVEY__FIRESTORE__API_KEY",
    ];

    fn load_with(vars: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let _guard = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
        for (key, value) in vars {
            env::set_var(key, value);
        }
        let result = AppConfig::load();
        for key in VARS {
            env::remove_var(key);
        }
        result
    }

    #[test]
    fn test_defaults_without_environment() {
        let config = load_with(&[]).unwrap();

        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.environment, Environment::Development);
        assert_eq!(config.storage.backend, StorageBackend::Memory);
        assert_eq!(config.storage.collection, "surveyData");
        assert!(config.database.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_custom_server_settings() {
        let config = load_with(&[
            ("FIBER_SURVEY__SERVER__PORT", "3000"),
            ("FIBER_SURVEY__SERVER__LOG_JSON", "true"),
        ])
        .unwrap();

        assert_eq!(config.server.port, 3000);
        assert!(config.server.log_json);
    }

    #[test]
    fn test_postgres_backend_from_environment() {
        let config = load_with(&[
            ("FIBER_SURVEY__STORAGE__BACKEND", "postgres"),
            ("FIBER_SURVEY__DATABASE__URL", "postgres://survey@localhost/surveys"),
        ])
        .unwrap();

        assert_eq!(config.storage.backend, StorageBackend::Postgres);
        assert_eq!(
            config.database.as_ref().map(|d| d.url.as_str()),
            Some("postgres://survey@localhost/surveys")
        );
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_firestore_backend_from_environment() {
        let config = load_with(&[
            ("FIBER_SURVEY__STORAGE__BACKEND", "firestore"),
            ("FIBER_SURVEY__FIRESTORE__PROJECT_ID", "voluntary-test"),
            ("FIBER_SURVEY__FIRESTORE__API_KEY", "AIzaSyTest"),
        ])
        .unwrap();

        let firestore = config.firestore.as_ref().unwrap();
        assert_eq!(firestore.project_id, "voluntary-test");
        assert_eq!(firestore.database, "(default)");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_backend_requires_its_section() {
        let config = AppConfig {
            storage: StorageConfig {
                backend: StorageBackend::Postgres,
                ..Default::default()
            },
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ValidationError::MissingRequired("DATABASE__URL"))
        );

        let config = AppConfig {
            storage: StorageConfig {
                backend: StorageBackend::Firestore,
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_production_rejects_memory_backend() {
        let config = load_with(&[("FIBER_SURVEY__SERVER__ENVIRONMENT", "production")]).unwrap();

        assert!(config.is_production());
        assert_eq!(
            config.validate(),
            Err(ValidationError::MemoryStorageInProduction)
        );
    }
}
