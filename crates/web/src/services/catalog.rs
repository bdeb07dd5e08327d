//! Product catalog client.
//!
//! ```text
//! GET {base}/api/product/{id}  ->  { "product": { _id, name, image, price, description } }
//! ```
//!
//! Nothing is cached: every product page view fetches fresh data.

use reqwest::StatusCode;
use serde::Deserialize;
use store_builder_core::{Product, ProductId};
use thiserror::Error;
use tracing::{debug, instrument};
use url::Url;

use crate::config::CatalogConfig;

/// Errors that can occur when fetching a product.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Catalog returned a non-success status other than 404.
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    /// No product with this id.
    #[error("Product not found: {0}")]
    NotFound(String),

    /// Response body did not contain a product.
    #[error("Parse error: {0}")]
    Parse(String),

    /// The configured base URL cannot carry a path.
    #[error("Invalid product URL for {0}")]
    InvalidUrl(String),
}

#[derive(Debug, Deserialize)]
struct ProductEnvelope {
    #[serde(default)]
    product: Option<Product>,
}

/// Client for the product catalog API.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    client: reqwest::Client,
    base_url: Url,
}

impl CatalogClient {
    /// Create a new client sharing `client`'s connection pool.
    #[must_use]
    pub fn new(client: reqwest::Client, config: &CatalogConfig) -> Self {
        Self {
            client,
            base_url: config.base_url.clone(),
        }
    }

    fn product_url(&self, id: &ProductId) -> Result<Url, CatalogError> {
        super::join_segments(&self.base_url, &["api", "product", id.as_str()])
            .ok_or_else(|| CatalogError::InvalidUrl(id.to_string()))
    }

    /// Fetch a product by id.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::NotFound` if the catalog answers 404 or with
    /// `product: null`, and other variants for transport, status or body
    /// failures.
    #[instrument(skip(self), fields(product_id = %id))]
    pub async fn product(&self, id: &ProductId) -> Result<Product, CatalogError> {
        let url = self.product_url(id)?;

        let response = self.client.get(url).send().await?;
        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            return Err(CatalogError::NotFound(id.to_string()));
        }

        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(CatalogError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let envelope: ProductEnvelope = response
            .json()
            .await
            .map_err(|e| CatalogError::Parse(e.to_string()))?;

        let product = envelope
            .product
            .ok_or_else(|| CatalogError::NotFound(id.to_string()))?;

        debug!(name = %product.name, "Product fetched");
        Ok(product)
    }
}
