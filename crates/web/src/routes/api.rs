//! JSON API handlers.

use axum::{
    Json,
    extract::{Path, State},
};
use serde::Serialize;
use store_builder_core::Subdomain;
use tracing::instrument;

use crate::error::{AppError, Result};
use crate::state::AppState;

/// Availability of one subdomain.
#[derive(Debug, Serialize)]
pub struct DomainCheckResponse {
    pub subdomain: String,
    pub hostname: String,
    pub available: bool,
    pub taken: bool,
}

/// Check a subdomain and answer with JSON.
///
/// GET /api/domains/{subdomain}
///
/// Unlike the form fragment, a failed upstream call surfaces as `502`.
#[instrument(skip(state))]
pub async fn check_domain(
    State(state): State<AppState>,
    Path(subdomain): Path<String>,
) -> Result<Json<DomainCheckResponse>> {
    let subdomain =
        Subdomain::parse(&subdomain).map_err(|e| AppError::BadRequest(e.to_string()))?;

    let availability = state.domains().check(&subdomain).await?;

    Ok(Json(DomainCheckResponse {
        hostname: state.domains().hostname(&subdomain),
        subdomain: subdomain.to_string(),
        available: availability.is_available(),
        taken: availability.is_taken(),
    }))
}
