//! Unified error handling for the interaction layer.
//!
//! Individual flows recover at the UI boundary (notifications,
//! placeholders); this type covers the wiring surface the embedding
//! application sees when constructing the layer.

use thiserror::Error;

use crate::api::ApiError;
use crate::config::ConfigError;

/// Top-level error for the interaction layer.
#[derive(Debug, Error)]
pub enum UiError {
    /// Configuration could not be loaded.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// The backend client could not be constructed or a request failed.
    #[error("Api error: {0}")]
    Api(#[from] ApiError),
}

/// Result type alias for `UiError`.
pub type Result<T> = std::result::Result<T, UiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ui_error_display() {
        let err = UiError::Config(ConfigError::MissingEnvVar("STOREFRONT_BASE_URL".to_string()));
        assert_eq!(
            err.to_string(),
            "Config error: Missing environment variable: STOREFRONT_BASE_URL"
        );
    }

    #[test]
    fn test_api_error_converts() {
        let api = ApiError::Status(reqwest::StatusCode::BAD_GATEWAY);
        let err = UiError::from(api);
        assert!(matches!(err, UiError::Api(_)));
    }
}
