//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All optional:
//! - `MARIGOLD_DATA_DIR` - Directory for the persistent store
//!   (default: `.marigold`)
//! - `MARIGOLD_FIXTURES_DIR` - Directory of fixture overrides; unset means
//!   the shipped fixtures are used as-is
//! - `MARIGOLD_ROTATION_SECS` - Hero rotation period in seconds
//!   (default: 5, must be positive)

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// Directory the persistent store writes into.
    pub data_dir: PathBuf,
    /// Optional directory of fixture override files.
    pub fixtures_dir: Option<PathBuf>,
    /// Hero slideshow rotation period.
    pub rotation_period: Duration,
}

impl StorefrontConfig {
    /// Default hero rotation period in seconds.
    pub const DEFAULT_ROTATION_SECS: u64 = 5;

    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a set variable fails to parse or is out of
    /// range (a zero rotation period would spin the timer).
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let data_dir = PathBuf::from(get_env_or_default("MARIGOLD_DATA_DIR", ".marigold"));
        let fixtures_dir = get_optional_env("MARIGOLD_FIXTURES_DIR").map(PathBuf::from);

        let rotation_secs = match get_optional_env("MARIGOLD_ROTATION_SECS") {
            None => Self::DEFAULT_ROTATION_SECS,
            Some(raw) => raw.parse::<u64>().map_err(|e| {
                ConfigError::InvalidEnvVar("MARIGOLD_ROTATION_SECS".to_owned(), e.to_string())
            })?,
        };
        if rotation_secs == 0 {
            return Err(ConfigError::InvalidEnvVar(
                "MARIGOLD_ROTATION_SECS".to_owned(),
                "must be positive".to_owned(),
            ));
        }

        Ok(Self {
            data_dir,
            fixtures_dir,
            rotation_period: Duration::from_secs(rotation_secs),
        })
    }
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(".marigold"),
            fixtures_dir: None,
            rotation_period: Duration::from_secs(Self::DEFAULT_ROTATION_SECS),
        }
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_owned())
}
