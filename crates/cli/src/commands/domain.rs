//! Subdomain availability command.
//!
//! # Usage
//!
//! ```bash
//! sb-cli check-domain myshop
//! DOMAIN_PARENT=shops.example.com sb-cli check-domain myshop
//! ```

use store_builder_core::{DomainAvailability, Subdomain, SubdomainError};
use store_builder_web::services::DomainCheckError;
use thiserror::Error;

use super::SetupError;

/// Errors that can occur when checking a subdomain.
#[derive(Debug, Error)]
pub enum DomainCommandError {
    #[error(transparent)]
    Setup(#[from] SetupError),

    /// The subdomain fails local validation; the service is not called.
    #[error("{0}")]
    Invalid(#[from] SubdomainError),

    /// The availability service could not answer.
    #[error("Domain check failed: {0}")]
    Check(#[from] DomainCheckError),

    /// The subdomain is registered already.
    #[error("{0} is already taken")]
    Taken(String),
}

/// Check `subdomain` and fail if it is taken.
///
/// # Errors
///
/// Returns an error if the subdomain is invalid, the service fails, or the
/// subdomain is taken.
pub async fn check(subdomain: &str) -> Result<(), DomainCommandError> {
    let subdomain = Subdomain::parse(subdomain)?;

    let state = super::app_state()?;
    let hostname = state.domains().hostname(&subdomain);

    tracing::info!("Checking {}...", hostname);

    match state.domains().check(&subdomain).await? {
        DomainAvailability::Taken => Err(DomainCommandError::Taken(hostname)),
        availability => {
            tracing::info!(
                "{}: {}",
                hostname,
                availability.message().unwrap_or_default()
            );
            Ok(())
        }
    }
}
