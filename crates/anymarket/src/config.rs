//! AnyMarket configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `ANYMARKET_TOKEN` - AnyMarket API token (sent as the `gumgaToken` header)
//!
//! ## Optional
//! - `ANYMARKET_BASE_URL` - API base URL (default: `https://api.anymarket.com.br/v2`)

use secrecy::SecretString;
use thiserror::Error;

/// Production AnyMarket API base URL.
pub const DEFAULT_BASE_URL: &str = "https://api.anymarket.com.br/v2";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
}

/// AnyMarket API configuration.
///
/// Implements `Debug` manually to redact the API token. The token's shape is
/// not validated beyond presence - the remote side rejects bad tokens with
/// a 401.
#[derive(Clone)]
pub struct AnyMarketConfig {
    /// API token, sent on every request as the `gumgaToken` header.
    pub token: SecretString,
    /// API base URL.
    pub base_url: String,
}

impl std::fmt::Debug for AnyMarketConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnyMarketConfig")
            .field("token", &"[REDACTED]")
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl AnyMarketConfig {
    /// Create a configuration against the production API.
    #[must_use]
    pub fn new(token: SecretString) -> Self {
        Self {
            token,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Override the API base URL (sandbox environments, local stubs).
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Load configuration from environment variables.
    ///
    /// Callers that want `.env` support should run `dotenvy::dotenv()` first;
    /// the CLI binary does.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingEnvVar`] if `ANYMARKET_TOKEN` is not set.
    pub fn from_env() -> Result<Self, ConfigError> {
        let token = get_required_env("ANYMARKET_TOKEN")?;
        let base_url = get_env_or_default("ANYMARKET_BASE_URL", DEFAULT_BASE_URL);

        Ok(Self {
            token: SecretString::from(token),
            base_url,
        })
    }
}

/// Get a required environment variable.
fn get_required_env(key: &str) -> Result<String, ConfigError> {
    std::env::var(key).map_err(|_| ConfigError::MissingEnvVar(key.to_string()))
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_redacts_token() {
        let config = AnyMarketConfig::new(SecretString::from("super-secret-token"));
        let debug = format!("{config:?}");
        assert!(debug.contains("[REDACTED]"));
        assert!(!debug.contains("super-secret-token"));
    }

    #[test]
    fn test_base_url_override() {
        let config = AnyMarketConfig::new(SecretString::from("t"))
            .with_base_url("http://localhost:8080/v2");
        assert_eq!(config.base_url, "http://localhost:8080/v2");
    }

    #[test]
    fn test_default_base_url() {
        let config = AnyMarketConfig::new(SecretString::from("t"));
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_missing_env_var_error_display() {
        let err = ConfigError::MissingEnvVar("ANYMARKET_TOKEN".to_string());
        assert_eq!(
            err.to_string(),
            "Missing environment variable: ANYMARKET_TOKEN"
        );
    }
}
