//! CLI configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `DRIFTWOOD_DATA_FILE` - path of the JSON store file (default: `driftwood.json`)
//! - `RUST_LOG` - tracing filter, e.g. `driftwood_store=debug`

use std::path::PathBuf;

use thiserror::Error;

/// Default store file, relative to the working directory.
const DEFAULT_DATA_FILE: &str = "driftwood.json";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// CLI configuration.
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// Path of the backing store file.
    pub data_file: PathBuf,
}

impl CliConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from a `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `DRIFTWOOD_DATA_FILE` is set but empty.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_var(std::env::var("DRIFTWOOD_DATA_FILE").ok())
    }

    fn from_var(data_file: Option<String>) -> Result<Self, ConfigError> {
        let data_file = match data_file {
            Some(value) if value.trim().is_empty() => {
                return Err(ConfigError::InvalidEnvVar(
                    "DRIFTWOOD_DATA_FILE".to_owned(),
                    "must not be empty".to_owned(),
                ));
            }
            Some(value) => PathBuf::from(value),
            None => PathBuf::from(DEFAULT_DATA_FILE),
        };
        Ok(Self { data_file })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_default_when_unset() {
        let config = CliConfig::from_var(None).unwrap();
        assert_eq!(config.data_file, PathBuf::from("driftwood.json"));
    }

    #[test]
    fn test_explicit_path() {
        let config = CliConfig::from_var(Some("/tmp/shop.json".to_owned())).unwrap();
        assert_eq!(config.data_file, PathBuf::from("/tmp/shop.json"));
    }

    #[test]
    fn test_empty_value_rejected() {
        assert!(matches!(
            CliConfig::from_var(Some("  ".to_owned())),
            Err(ConfigError::InvalidEnvVar(..))
        ));
    }
}
