//! Product lookup command.
//!
//! # Usage
//!
//! ```bash
//! sb-cli product 6642f1c0a1b2c3d4e5f60718
//! CATALOG_BASE_URL=http://localhost:9000 sb-cli product abc123
//! ```

use store_builder_core::{ProductId, ProductIdError};
use store_builder_web::services::CatalogError;
use thiserror::Error;

use super::SetupError;

/// Errors that can occur when fetching a product.
#[derive(Debug, Error)]
pub enum ProductCommandError {
    #[error(transparent)]
    Setup(#[from] SetupError),

    /// The id cannot be used in a catalog URL.
    #[error("Invalid product id: {0}")]
    InvalidId(#[from] ProductIdError),

    /// The catalog request failed.
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// The product could not be rendered as JSON.
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Fetch product `id` and print it as pretty JSON.
///
/// # Errors
///
/// Returns an error if the id is invalid or the catalog request fails.
#[allow(clippy::print_stdout)]
pub async fn show(id: &str) -> Result<(), ProductCommandError> {
    let id = ProductId::parse(id)?;

    let state = super::app_state()?;
    let product = state.catalog().product(&id).await?;

    tracing::info!("Fetched {} ({})", product.name, product.price);
    println!("{}", serde_json::to_string_pretty(&product)?);

    Ok(())
}
