//! Application state shared across handlers.

use std::sync::Arc;

use crate::config::WebConfig;
use crate::services::{self, CatalogClient, DomainCheckClient};

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc`. Everything inside is
/// read-only after start-up; handlers share no mutable state.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: WebConfig,
    domains: DomainCheckClient,
    catalog: CatalogClient,
}

impl AppState {
    /// Create a new application state.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(config: WebConfig) -> Result<Self, reqwest::Error> {
        let http = services::http_client(config.http_timeout)?;
        let domains = DomainCheckClient::new(http.clone(), &config.domain_check);
        let catalog = CatalogClient::new(http, &config.catalog);

        Ok(Self {
            inner: Arc::new(AppStateInner {
                config,
                domains,
                catalog,
            }),
        })
    }

    /// Get a reference to the web configuration.
    #[must_use]
    pub fn config(&self) -> &WebConfig {
        &self.inner.config
    }

    /// Get a reference to the subdomain availability client.
    #[must_use]
    pub fn domains(&self) -> &DomainCheckClient {
        &self.inner.domains
    }

    /// Get a reference to the product catalog client.
    #[must_use]
    pub fn catalog(&self) -> &CatalogClient {
        &self.inner.catalog
    }
}
