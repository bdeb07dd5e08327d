//! Product route handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Path, State},
    response::{IntoResponse, Redirect, Response},
};
use store_builder_core::{Product, ProductId};
use tracing::{error, instrument, warn};

use crate::services::CatalogError;
use crate::state::AppState;

/// Product display data for templates.
#[derive(Clone)]
pub struct ProductView {
    pub name: String,
    pub image: String,
    pub price: String,
    pub description: String,
}

impl From<Product> for ProductView {
    fn from(product: Product) -> Self {
        Self {
            price: product.price.to_string(),
            name: product.name,
            image: product.image,
            description: product.description,
        }
    }
}

/// Product detail page template.
#[derive(Template, WebTemplate)]
#[template(path = "products/show.html")]
pub struct ProductShowTemplate {
    pub product: ProductView,
}

/// Placeholder shown while product data is unavailable.
#[derive(Template, WebTemplate)]
#[template(path = "products/loading.html")]
pub struct ProductLoadingTemplate;

/// Confirmation shown at `/product` when no default product is configured.
#[derive(Template, WebTemplate)]
#[template(path = "products/created.html")]
pub struct StoreCreatedTemplate;

/// Landing page after a store is created.
///
/// Redirects to the configured default product, if any.
pub async fn landing(State(state): State<AppState>) -> Response {
    match &state.config().catalog.default_product_id {
        Some(id) => Redirect::to(&format!("/product/{id}")).into_response(),
        None => StoreCreatedTemplate.into_response(),
    }
}

/// Display product detail page.
///
/// Any failure (unusable id, unknown product, catalog error) is logged and
/// the page renders its loading placeholder with no error shown.
#[instrument(skip(state))]
pub async fn show(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    let id = match ProductId::parse(&id) {
        Ok(id) => id,
        Err(e) => {
            warn!(error = %e, product_id = %id, "Rejected product id");
            return ProductLoadingTemplate.into_response();
        }
    };

    match state.catalog().product(&id).await {
        Ok(product) => ProductShowTemplate {
            product: product.into(),
        }
        .into_response(),
        Err(e @ CatalogError::NotFound(_)) => {
            warn!(error = %e, product_id = %id, "Product missing from catalog");
            ProductLoadingTemplate.into_response()
        }
        Err(e) => {
            error!(error = %e, product_id = %id, "Failed to fetch product");
            ProductLoadingTemplate.into_response()
        }
    }
}
