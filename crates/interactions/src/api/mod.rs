//! HTTP client for the storefront backend.
//!
//! Two endpoints are consumed and their wire shapes must be preserved
//! exactly: the form-encoded cart mutations under `/products/cart/` and the
//! JSON search endpoint under `/products/api/search/`. Components reach the
//! client through the [`CartApi`] and [`SearchApi`] traits so tests can
//! substitute fakes.

mod types;

pub use types::{CartUpdate, ProductSummary, SearchResponse};

use std::sync::Arc;

use async_trait::async_trait;
use tracing::instrument;
use url::Url;

use kenya_commerce_core::{CartItemId, ProductId};

use crate::config::UiConfig;
use crate::cookies::CsrfToken;

/// Errors from the storefront backend boundary.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The configured base URL could not be parsed.
    #[error("invalid base url: {0}")]
    BaseUrl(#[from] url::ParseError),

    /// The request could not be sent or the body could not be read.
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The backend answered with a non-success status code.
    #[error("unexpected status: {0}")]
    Status(reqwest::StatusCode),

    /// The response body was not the expected JSON.
    #[error("invalid response body: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Cart mutation operations.
#[async_trait]
pub trait CartApi: Send + Sync {
    /// Set the quantity of an existing cart item.
    ///
    /// The quantity is passed verbatim as the form value; the backend parses
    /// the integer.
    async fn update_item(
        &self,
        item: CartItemId,
        quantity: &str,
        csrf: &CsrfToken,
    ) -> Result<CartUpdate, ApiError>;

    /// Add a product to the cart.
    async fn add_item(
        &self,
        product: ProductId,
        quantity: u32,
        csrf: &CsrfToken,
    ) -> Result<CartUpdate, ApiError>;
}

/// Search suggestion lookup.
#[async_trait]
pub trait SearchApi: Send + Sync {
    async fn search(&self, query: &str, limit: usize) -> Result<Vec<ProductSummary>, ApiError>;
}

/// The page-relative location of a product detail page.
#[must_use]
pub fn product_location(product: ProductId) -> String {
    format!("/products/product/{product}/")
}

// =============================================================================
// CommerceClient
// =============================================================================

/// HTTP client for the storefront backend.
#[derive(Clone)]
pub struct CommerceClient {
    inner: Arc<CommerceClientInner>,
}

struct CommerceClientInner {
    client: reqwest::Client,
    /// Base URL without a trailing slash.
    base: String,
}

impl CommerceClient {
    /// Create a new client for the configured backend.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured base URL is not a valid URL.
    pub fn new(config: &UiConfig) -> Result<Self, ApiError> {
        let base = Url::parse(&config.base_url)?;
        Ok(Self {
            inner: Arc::new(CommerceClientInner {
                client: reqwest::Client::new(),
                base: base.as_str().trim_end_matches('/').to_string(),
            }),
        })
    }

    /// POST a cart mutation and parse the JSON payload.
    async fn post_cart(
        &self,
        url: String,
        quantity: &str,
        csrf: &CsrfToken,
    ) -> Result<CartUpdate, ApiError> {
        let form = [
            ("quantity", quantity),
            ("csrfmiddlewaretoken", csrf.expose()),
        ];
        let response = self.inner.client.post(&url).form(&form).send().await?;

        let status = response.status();
        // Read the body as text first for better error diagnostics
        let body = response.text().await?;

        if !status.is_success() {
            tracing::error!(
                status = %status,
                body = %body.chars().take(200).collect::<String>(),
                "cart endpoint returned non-success status"
            );
            return Err(ApiError::Status(status));
        }

        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl CartApi for CommerceClient {
    #[instrument(skip(self, csrf), fields(item = %item))]
    async fn update_item(
        &self,
        item: CartItemId,
        quantity: &str,
        csrf: &CsrfToken,
    ) -> Result<CartUpdate, ApiError> {
        let url = format!("{}/products/cart/update/{item}/", self.inner.base);
        self.post_cart(url, quantity, csrf).await
    }

    #[instrument(skip(self, csrf), fields(product = %product))]
    async fn add_item(
        &self,
        product: ProductId,
        quantity: u32,
        csrf: &CsrfToken,
    ) -> Result<CartUpdate, ApiError> {
        let url = format!("{}/products/cart/add/{product}/", self.inner.base);
        self.post_cart(url, &quantity.to_string(), csrf).await
    }
}

#[async_trait]
impl SearchApi for CommerceClient {
    #[instrument(skip(self))]
    async fn search(&self, query: &str, limit: usize) -> Result<Vec<ProductSummary>, ApiError> {
        let url = format!("{}/products/api/search/", self.inner.base);
        let response = self
            .inner
            .client
            .get(&url)
            .query(&[("q", query), ("limit", &limit.to_string())])
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            tracing::error!(
                status = %status,
                body = %body.chars().take(200).collect::<String>(),
                "search endpoint returned non-success status"
            );
            return Err(ApiError::Status(status));
        }

        let parsed: SearchResponse = serde_json::from_str(&body)?;
        Ok(parsed.results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_location() {
        assert_eq!(product_location(ProductId::new(42)), "/products/product/42/");
    }

    #[test]
    fn test_client_normalizes_trailing_slash() {
        let config = UiConfig {
            base_url: "https://shop.example.com/".to_string(),
            ..UiConfig::default()
        };
        let client = CommerceClient::new(&config).expect("valid url");
        assert_eq!(client.inner.base, "https://shop.example.com");
    }

    #[test]
    fn test_client_rejects_invalid_base_url() {
        let config = UiConfig {
            base_url: "not a url".to_string(),
            ..UiConfig::default()
        };
        assert!(matches!(
            CommerceClient::new(&config),
            Err(ApiError::BaseUrl(_))
        ));
    }
}
