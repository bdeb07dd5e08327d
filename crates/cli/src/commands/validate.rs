//! Store form validation command.
//!
//! Runs the same checks as `POST /createstore` without calling the
//! availability service.

use clap::Args;
use store_builder_core::{FieldErrors, StoreDraft};
use thiserror::Error;

/// Store form values. Omitted flags are submitted as empty.
#[derive(Debug, Default, Args)]
pub struct ValidateArgs {
    /// Store name
    #[arg(long, default_value = "")]
    pub name: String,

    /// Subdomain
    #[arg(long, default_value = "")]
    pub domain: String,

    /// Country (Bangladesh, USA, Canada, UK)
    #[arg(long, default_value = "")]
    pub country: String,

    /// Category (Fashion, Electronics, Food, Books, Any)
    #[arg(long, default_value = "")]
    pub category: String,

    /// Currency (BDT, USD, CAD, GBP)
    #[arg(long, default_value = "")]
    pub currency: String,

    /// Contact email
    #[arg(long, default_value = "")]
    pub email: String,
}

impl From<&ValidateArgs> for StoreDraft {
    fn from(args: &ValidateArgs) -> Self {
        Self {
            name: args.name.clone(),
            domain: args.domain.clone(),
            country: args.country.clone(),
            category: args.category.clone(),
            currency: args.currency.clone(),
            email: args.email.clone(),
        }
    }
}

/// Validation failed; every field error has been logged.
#[derive(Debug, Error)]
#[error("{} field(s) failed validation", .0.len())]
pub struct ValidationFailed(pub FieldErrors);

/// Validate the given values, logging each failing field.
///
/// # Errors
///
/// Returns [`ValidationFailed`] if any field is invalid.
pub fn run(args: &ValidateArgs) -> Result<(), ValidationFailed> {
    match StoreDraft::from(args).validate() {
        Ok(store) => {
            tracing::info!(
                "Valid: {} ({}) in {}, {} / {}, contact {}",
                store.name,
                store.domain,
                store.country,
                store.category,
                store.currency,
                store.email
            );
            Ok(())
        }
        Err(errors) => {
            for (field, message) in errors.iter() {
                tracing::error!("{}: {}", field.as_str(), message);
            }
            Err(ValidationFailed(errors))
        }
    }
}
