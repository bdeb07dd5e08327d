//! Store creation route handlers.
//!
//! The form posts back to itself. Field problems re-render the form with the
//! user's input preserved. The subdomain is checked twice: while typing
//! (debounced by the browser, see [`domain_status`]) and again on submit,
//! since availability can change between the two.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Extension, Form,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use store_builder_core::availability::{
    CHECK_FAILED_MESSAGE, CHECKING_MESSAGE, SUBMIT_FAILED_MESSAGE, TAKEN_MESSAGE,
};
use store_builder_core::{
    Category, Country, Currency, DomainAvailability, Field, FieldErrors, StoreDraft, Subdomain,
};
use tracing::{debug, error, info, instrument, warn};

use crate::config::WebConfig;
use crate::error::add_breadcrumb;
use crate::middleware::RequestId;
use crate::state::AppState;

/// Where a successful submission goes.
pub const CREATED_REDIRECT: &str = "/product";

// =============================================================================
// View Types
// =============================================================================

/// A text input with its current value and error.
#[derive(Debug, Clone, Default)]
pub struct FieldView {
    pub value: String,
    pub error: Option<String>,
}

impl FieldView {
    fn new(draft: &StoreDraft, errors: &FieldErrors, field: Field) -> Self {
        Self {
            value: draft.value(field).to_string(),
            error: errors.get(field).map(String::from),
        }
    }
}

/// One `<option>` of a select.
#[derive(Debug, Clone)]
pub struct OptionView {
    pub value: &'static str,
    pub selected: bool,
}

/// A select with its options and error.
#[derive(Debug, Clone)]
pub struct SelectView {
    pub error: Option<String>,
    pub options: Vec<OptionView>,
}

impl SelectView {
    fn new(draft: &StoreDraft, errors: &FieldErrors, field: Field, options: &[&'static str]) -> Self {
        let current = draft.value(field);
        Self {
            error: errors.get(field).map(String::from),
            options: options
                .iter()
                .map(|&value| OptionView {
                    value,
                    selected: value == current,
                })
                .collect(),
        }
    }
}

/// Feedback line under the domain input.
///
/// `tone` selects the styling: `error`, `success`, or `none` when there is
/// nothing to say.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainStatusView {
    pub tone: &'static str,
    pub message: String,
}

impl DomainStatusView {
    /// Nothing to show.
    #[must_use]
    pub fn idle() -> Self {
        Self {
            tone: "none",
            message: String::new(),
        }
    }

    /// Error line under the domain input.
    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            tone: "error",
            message: message.into(),
        }
    }

    /// Combine a validation error (which wins) with the known availability.
    #[must_use]
    pub fn from_parts(error: Option<&str>, availability: DomainAvailability) -> Self {
        if let Some(message) = error {
            return Self::error(message);
        }
        match (availability, availability.message()) {
            (DomainAvailability::Taken, Some(message)) => Self::error(message),
            (DomainAvailability::Available, Some(message)) => Self {
                tone: "success",
                message: message.to_string(),
            },
            _ => Self::idle(),
        }
    }
}

fn option_values<T: Copy>(all: &[T], as_str: fn(T) -> &'static str) -> Vec<&'static str> {
    all.iter().copied().map(as_str).collect()
}

// =============================================================================
// Templates
// =============================================================================

/// Store creation form template.
#[derive(Template, WebTemplate)]
#[template(path = "createstore/form.html")]
pub struct CreateStoreTemplate {
    pub name: FieldView,
    pub domain: FieldView,
    pub status: DomainStatusView,
    pub country: SelectView,
    pub category: SelectView,
    pub currency: SelectView,
    pub email: FieldView,
    pub alert: Option<&'static str>,
    pub debounce_ms: u128,
    pub parent_domain: String,
    pub checking_message: &'static str,
    pub check_failed_message: &'static str,
}

impl CreateStoreTemplate {
    /// Build the form from submitted values, errors and what is known about
    /// the subdomain.
    #[must_use]
    pub fn new(
        config: &WebConfig,
        draft: &StoreDraft,
        errors: &FieldErrors,
        availability: DomainAvailability,
        alert: Option<&'static str>,
    ) -> Self {
        Self {
            name: FieldView::new(draft, errors, Field::Name),
            domain: FieldView::new(draft, errors, Field::Domain),
            status: DomainStatusView::from_parts(errors.get(Field::Domain), availability),
            country: SelectView::new(
                draft,
                errors,
                Field::Country,
                &option_values(Country::ALL, Country::as_str),
            ),
            category: SelectView::new(
                draft,
                errors,
                Field::Category,
                &option_values(Category::ALL, Category::as_str),
            ),
            currency: SelectView::new(
                draft,
                errors,
                Field::Currency,
                &option_values(Currency::ALL, Currency::as_str),
            ),
            email: FieldView::new(draft, errors, Field::Email),
            alert,
            debounce_ms: config.debounce_ms(),
            parent_domain: config.domain_check.parent_domain.clone(),
            checking_message: CHECKING_MESSAGE,
            check_failed_message: CHECK_FAILED_MESSAGE,
        }
    }

    /// Empty form.
    #[must_use]
    pub fn blank(config: &WebConfig) -> Self {
        Self::new(
            config,
            &StoreDraft::default(),
            &FieldErrors::default(),
            DomainAvailability::Unknown,
            None,
        )
    }
}

/// Domain feedback fragment (swapped in by HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "createstore/domain_status.html")]
pub struct DomainStatusTemplate {
    pub status: DomainStatusView,
}

// =============================================================================
// Handlers
// =============================================================================

/// Display the empty creation form.
pub async fn new(State(state): State<AppState>) -> CreateStoreTemplate {
    CreateStoreTemplate::blank(state.config())
}

/// Submit the creation form.
///
/// POST /createstore
///
/// - invalid fields: `422` with every message
/// - subdomain taken: `409` with "Domain is already taken"
/// - re-check failed: `502` with the retry alert
/// - otherwise: `303` to `/product`
#[instrument(skip(state, request_id, draft), fields(domain = %draft.domain))]
pub async fn create(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Form(draft): Form<StoreDraft>,
) -> Response {
    let config = state.config();

    let store = match draft.validate() {
        Ok(store) => store,
        Err(errors) => {
            debug!(invalid_fields = errors.len(), "Store form rejected");
            return (
                StatusCode::UNPROCESSABLE_ENTITY,
                CreateStoreTemplate::new(config, &draft, &errors, DomainAvailability::Unknown, None),
            )
                .into_response();
        }
    };

    add_breadcrumb(
        "store",
        "Submitted store form",
        Some(&[
            ("domain", store.domain.as_str()),
            ("request_id", request_id.0.as_str()),
        ]),
    );

    match state.domains().check(&store.domain).await {
        Ok(availability) if availability.is_taken() => {
            info!("Store form blocked, subdomain taken");
            let mut errors = FieldErrors::default();
            errors.set(Field::Domain, TAKEN_MESSAGE);
            (
                StatusCode::CONFLICT,
                CreateStoreTemplate::new(config, &draft, &errors, availability, None),
            )
                .into_response()
        }
        Ok(_) => {
            info!(
                request_id = %request_id.0,
                hostname = %state.domains().hostname(&store.domain),
                country = %store.country,
                category = %store.category,
                currency = %store.currency,
                "Store form accepted"
            );
            Redirect::to(CREATED_REDIRECT).into_response()
        }
        Err(e) => {
            error!(error = %e, request_id = %request_id.0, "Domain re-check failed on submit");
            (
                StatusCode::BAD_GATEWAY,
                CreateStoreTemplate::new(
                    config,
                    &draft,
                    &FieldErrors::default(),
                    DomainAvailability::Unknown,
                    Some(SUBMIT_FAILED_MESSAGE),
                ),
            )
                .into_response()
        }
    }
}

/// Query string of the availability fragment.
#[derive(Debug, Deserialize)]
pub struct DomainQuery {
    #[serde(default)]
    pub domain: String,
}

/// Render availability feedback for the domain input.
///
/// GET /createstore/domain?domain=...
///
/// The input fires this only after it has been idle for the configured
/// debounce interval, and `hx-sync="this:replace"` aborts a pending request
/// when a newer one starts, so a stale answer never overwrites a fresh one.
#[instrument(skip(state))]
pub async fn domain_status(
    State(state): State<AppState>,
    Query(query): Query<DomainQuery>,
) -> DomainStatusTemplate {
    if query.domain.is_empty() {
        return DomainStatusTemplate {
            status: DomainStatusView::idle(),
        };
    }

    let subdomain = match Subdomain::parse(&query.domain) {
        Ok(subdomain) => subdomain,
        Err(e) => {
            return DomainStatusTemplate {
                status: DomainStatusView::error(e.to_string()),
            };
        }
    };

    let status = match state.domains().check(&subdomain).await {
        Ok(availability) => DomainStatusView::from_parts(None, availability),
        Err(e) => {
            warn!(error = %e, "Domain check failed");
            DomainStatusView::error(CHECK_FAILED_MESSAGE)
        }
    };

    DomainStatusTemplate { status }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_validation_error_wins() {
        let status = DomainStatusView::from_parts(
            Some("Domain is required"),
            DomainAvailability::Available,
        );
        assert_eq!(status, DomainStatusView::error("Domain is required"));
    }

    #[test]
    fn test_status_from_availability() {
        assert_eq!(
            DomainStatusView::from_parts(None, DomainAvailability::Taken),
            DomainStatusView::error("Domain is already taken")
        );

        let available = DomainStatusView::from_parts(None, DomainAvailability::Available);
        assert_eq!(available.tone, "success");
        assert_eq!(available.message, "Domain is available!");

        assert_eq!(
            DomainStatusView::from_parts(None, DomainAvailability::Unknown),
            DomainStatusView::idle()
        );
    }

    #[test]
    fn test_select_marks_current_value() {
        let draft = StoreDraft {
            currency: "CAD".to_string(),
            ..StoreDraft::default()
        };
        let select = SelectView::new(
            &draft,
            &FieldErrors::default(),
            Field::Currency,
            &option_values(Currency::ALL, Currency::as_str),
        );

        let selected: Vec<_> = select
            .options
            .iter()
            .filter(|o| o.selected)
            .map(|o| o.value)
            .collect();
        assert_eq!(selected, ["CAD"]);
        assert!(select.error.is_none());
    }
}
