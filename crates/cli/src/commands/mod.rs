//! CLI command implementations.

pub mod domain;
pub mod product;
pub mod validate;

use store_builder_web::config::{ConfigError, WebConfig};
use store_builder_web::state::AppState;
use thiserror::Error;

/// Errors that can occur while preparing the API clients.
#[derive(Debug, Error)]
pub enum SetupError {
    /// Environment configuration is invalid.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// HTTP client could not be built.
    #[error("HTTP client error: {0}")]
    Client(#[from] reqwest::Error),
}

/// Load configuration and build the API clients the same way the server does.
pub fn app_state() -> Result<AppState, SetupError> {
    let config = WebConfig::from_env()?;
    Ok(AppState::new(config)?)
}
