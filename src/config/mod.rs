//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `AHP_ADVISOR` prefix and nested values use double underscores as separators.
//!
//! Every section has defaults, so an empty environment yields a working
//! in-memory setup.
//!
//! # Example
//!
//! ```no_run
//! use ahp_advisor::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Votes stored in {:?}", config.storage.backend);
//! ```

mod analysis;
mod error;
mod logging;
mod storage;

pub use analysis::AnalysisConfig;
pub use error::{ConfigError, ValidationError};
pub use logging::LoggingConfig;
pub use storage::{StorageBackend, StorageConfig};

use serde::Deserialize;

/// Root application configuration
///
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Vote storage backend and its connection settings
    #[serde(default)]
    pub storage: StorageConfig,

    /// Consistency threshold, rating range, judgment policy
    #[serde(default)]
    pub analysis: AnalysisConfig,

    /// Log filter and output format
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `AHP_ADVISOR` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `AHP_ADVISOR__STORAGE__BACKEND=file` -> `storage.backend = file`
    /// - `AHP_ADVISOR__ANALYSIS__CONSISTENCY_THRESHOLD=0.2` -> `analysis.consistency_threshold = 0.2`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("AHP_ADVISOR")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Load and validate in one step
    pub fn load_validated() -> Result<Self, ConfigError> {
        let config = Self::load()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.storage.validate()?;
        self.analysis.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::path::PathBuf;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    const VARS: [&str; 7] = [
        "AHP_ADVISOR__STORAGE__BACKEND",
        "AHP_ADVISOR__STORAGE__PATH",
        "AHP_ADVISOR__STORAGE__DATABASE_URL",
        "AHP_ADVISOR__ANALYSIS__CONSISTENCY_THRESHOLD",
        "AHP_ADVISOR__ANALYSIS__REQUIRE_COMPLETE_JUDGMENTS",
        "AHP_ADVISOR__LOGGING__FILTER",
        "AHP_ADVISOR__LOGGING__JSON",
    ];

    /// Helper to clear environment variables after testing
    fn clear_env() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    #[test]
    fn test_load_with_empty_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let result = AppConfig::load();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config.storage.backend, StorageBackend::Memory);
        assert_eq!(config.analysis.consistency_threshold, 0.10);
        assert!(config.analysis.require_complete_judgments);
        assert_eq!(config.logging.filter, "info");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_file_backend() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("AHP_ADVISOR__STORAGE__BACKEND", "file");
        env::set_var("AHP_ADVISOR__STORAGE__PATH", "/tmp/ahp-votes");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.storage.backend, StorageBackend::File);
        assert_eq!(config.storage.path, PathBuf::from("/tmp/ahp-votes"));
    }

    #[test]
    fn test_load_analysis_overrides() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("AHP_ADVISOR__ANALYSIS__CONSISTENCY_THRESHOLD", "0.2");
        env::set_var("AHP_ADVISOR__ANALYSIS__REQUIRE_COMPLETE_JUDGMENTS", "false");
        env::set_var("AHP_ADVISOR__LOGGING__JSON", "true");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.analysis.consistency_threshold, 0.2);
        assert!(!config.analysis.require_complete_judgments);
        assert!(config.logging.json);
    }

    #[test]
    fn test_postgres_without_url_fails_validation() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("AHP_ADVISOR__STORAGE__BACKEND", "postgres");
        let result = AppConfig::load_validated();
        clear_env();

        assert!(matches!(
            result,
            Err(ConfigError::ValidationFailed(ValidationError::MissingRequired(_)))
        ));
    }

    #[test]
    fn test_unknown_backend_fails_to_load() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("AHP_ADVISOR__STORAGE__BACKEND", "redis");
        let result = AppConfig::load();
        clear_env();

        assert!(matches!(result, Err(ConfigError::LoadError(_))));
    }
}
