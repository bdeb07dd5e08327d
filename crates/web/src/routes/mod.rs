//! HTTP route handlers.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                          - Welcome page
//! GET  /health                    - Health check
//!
//! # Store creation
//! GET  /createstore               - Creation form
//! POST /createstore               - Validate, re-check the subdomain, redirect to /product
//! GET  /createstore/domain        - Availability fragment (HTMX, debounced by the input)
//!
//! # Products
//! GET  /product                   - Post-creation landing
//! GET  /product/{id}              - Product detail
//!
//! # JSON API
//! GET  /api/domains/{subdomain}   - Availability as JSON
//! ```

pub mod api;
pub mod home;
pub mod products;
pub mod stores;

use axum::{Router, routing::get};

use crate::middleware::domain_check_rate_limiter;
use crate::state::AppState;

/// Create the store creation routes router.
pub fn store_routes() -> Router<AppState> {
    Router::new().route("/", get(stores::new).post(stores::create))
}

/// Create the product routes router.
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(products::landing))
        .route("/{id}", get(products::show))
}

/// Routes that call the availability service, behind the rate limiter.
pub fn domain_check_routes() -> Router<AppState> {
    Router::new()
        .route("/createstore/domain", get(stores::domain_status))
        .route("/api/domains/{subdomain}", get(api::check_domain))
        .layer(domain_check_rate_limiter())
}

/// Create all routes for the web server.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home::home))
        .nest("/createstore", store_routes())
        .nest("/product", product_routes())
        .merge(domain_check_routes())
}
