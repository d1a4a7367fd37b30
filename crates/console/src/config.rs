//! Console configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `RECORD_STORE_URL` - Base URL of the remote record store
//! - `RECORD_STORE_ANON_KEY` - Publishable API key for the record store
//!
//! ## Optional
//! - `VISUALIZA_LOCAL_QUOTA_BYTES` - Byte budget for local storage
//!   (unset means unlimited; browsers typically grant ~5 MB)

use secrecy::SecretString;
use thiserror::Error;
use url::Url;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Console application configuration.
///
/// Implements `Debug` manually to redact the record-store key.
#[derive(Clone)]
pub struct ConsoleConfig {
    /// Base URL of the remote record store.
    pub record_store_url: Url,
    /// Publishable API key sent with every record-store request.
    pub record_store_anon_key: SecretString,
    /// Total byte budget for the local storage backend, if bounded.
    pub local_quota_bytes: Option<usize>,
}

impl std::fmt::Debug for ConsoleConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConsoleConfig")
            .field("record_store_url", &self.record_store_url.as_str())
            .field("record_store_anon_key", &"[REDACTED]")
            .field("local_quota_bytes", &self.local_quota_bytes)
            .finish()
    }
}

impl ConsoleConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let record_store_url = get_required_env("RECORD_STORE_URL")?
            .parse::<Url>()
            .map_err(|e| {
                ConfigError::InvalidEnvVar("RECORD_STORE_URL".to_string(), e.to_string())
            })?;
        let record_store_anon_key = SecretString::from(get_required_env("RECORD_STORE_ANON_KEY")?);
        let local_quota_bytes = match get_optional_env("VISUALIZA_LOCAL_QUOTA_BYTES") {
            Some(raw) => Some(raw.parse::<usize>().map_err(|e| {
                ConfigError::InvalidEnvVar("VISUALIZA_LOCAL_QUOTA_BYTES".to_string(), e.to_string())
            })?),
            None => None,
        };

        Ok(Self {
            record_store_url,
            record_store_anon_key,
            local_quota_bytes,
        })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get a required environment variable.
fn get_required_env(key: &str) -> Result<String, ConfigError> {
    std::env::var(key).map_err(|_| ConfigError::MissingEnvVar(key.to_string()))
}

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}
