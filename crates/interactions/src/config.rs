//! Interaction layer configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `STOREFRONT_BASE_URL` - Base URL of the storefront backend
//!
//! ## Optional
//! - `STOREFRONT_CSRF_COOKIE` - Anti-forgery cookie name (default: csrftoken)
//! - `STOREFRONT_CURRENCY` - ISO 4217 display currency (default: KES)
//! - `STOREFRONT_SEARCH_MIN_QUERY` - Minimum query length (default: 2)
//! - `STOREFRONT_SEARCH_DEBOUNCE_MS` - Search debounce wait (default: 300)
//! - `STOREFRONT_SEARCH_LIMIT` - Suggestion result limit (default: 5)
//! - `STOREFRONT_NOTIFICATION_TTL_SECS` - Notification lifetime (default: 5)

use std::time::Duration;

use thiserror::Error;

use kenya_commerce_core::CurrencyCode;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Search suggestion tuning.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Minimum trimmed query length before a lookup is issued
    pub min_query_len: usize,
    /// Quiet period after the last keystroke before the request fires
    pub debounce: Duration,
    /// Maximum number of suggestions requested per lookup
    pub suggestion_limit: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            min_query_len: 2,
            debounce: Duration::from_millis(300),
            suggestion_limit: 5,
        }
    }
}

/// Storefront interaction layer configuration.
#[derive(Debug, Clone)]
pub struct UiConfig {
    /// Base URL of the storefront backend
    pub base_url: String,
    /// Name of the cookie carrying the anti-forgery token
    pub csrf_cookie: String,
    /// Currency used when rendering amounts
    pub currency: CurrencyCode,
    /// Search suggestion tuning
    pub search: SearchConfig,
    /// How long a notification stays visible
    pub notification_ttl: Duration,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8000".to_string(),
            csrf_cookie: "csrftoken".to_string(),
            currency: CurrencyCode::KES,
            search: SearchConfig::default(),
            notification_ttl: Duration::from_secs(5),
        }
    }
}

impl UiConfig {
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

        let base_url = get_required_env("STOREFRONT_BASE_URL")?;
        let csrf_cookie = get_env_or_default("STOREFRONT_CSRF_COOKIE", "csrftoken");
        let currency = get_env_or_default("STOREFRONT_CURRENCY", "KES")
            .parse::<CurrencyCode>()
            .map_err(|e| {
                ConfigError::InvalidEnvVar("STOREFRONT_CURRENCY".to_string(), e.to_string())
            })?;

        let search = SearchConfig {
            min_query_len: parse_env("STOREFRONT_SEARCH_MIN_QUERY", "2")?,
            debounce: Duration::from_millis(parse_env("STOREFRONT_SEARCH_DEBOUNCE_MS", "300")?),
            suggestion_limit: parse_env("STOREFRONT_SEARCH_LIMIT", "5")?,
        };
        let notification_ttl =
            Duration::from_secs(parse_env("STOREFRONT_NOTIFICATION_TTL_SECS", "5")?);

        Ok(Self {
            base_url,
            csrf_cookie,
            currency,
            search,
            notification_ttl,
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

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Parse an environment variable with a default value.
fn parse_env<T>(key: &str, default: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    get_env_or_default(key, default)
        .parse::<T>()
        .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))
}
