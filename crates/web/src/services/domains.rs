//! Subdomain availability client.
//!
//! Asks the checker whether `{subdomain}.{parent}` is already registered:
//!
//! ```text
//! GET {base}/task/domains/check/{subdomain}.{parent}  ->  { "taken": bool }
//! ```
//!
//! There is no retry or backoff. Callers decide how a failure is shown.

use serde::Deserialize;
use store_builder_core::{DomainAvailability, Subdomain};
use thiserror::Error;
use tracing::{debug, instrument};
use url::Url;

use crate::config::DomainCheckConfig;

/// Errors that can occur when checking a subdomain.
#[derive(Debug, Error)]
pub enum DomainCheckError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Checker returned a non-success status.
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    /// Response body was not `{ "taken": bool }`.
    #[error("Parse error: {0}")]
    Parse(String),

    /// The configured base URL cannot carry a path.
    #[error("Invalid check URL for {0}")]
    InvalidUrl(String),
}

#[derive(Debug, Deserialize)]
struct CheckResponse {
    taken: bool,
}

/// Client for the subdomain availability service.
#[derive(Debug, Clone)]
pub struct DomainCheckClient {
    client: reqwest::Client,
    base_url: Url,
    parent_domain: String,
}

impl DomainCheckClient {
    /// Create a new client sharing `client`'s connection pool.
    #[must_use]
    pub fn new(client: reqwest::Client, config: &DomainCheckConfig) -> Self {
        Self {
            client,
            base_url: config.base_url.clone(),
            parent_domain: config.parent_domain.clone(),
        }
    }

    /// Parent domain appended to checked subdomains.
    #[must_use]
    pub fn parent_domain(&self) -> &str {
        &self.parent_domain
    }

    /// Full hostname that `subdomain` would be served from.
    #[must_use]
    pub fn hostname(&self, subdomain: &Subdomain) -> String {
        subdomain.hostname(&self.parent_domain)
    }

    /// URL queried for `subdomain`.
    fn check_url(&self, subdomain: &Subdomain) -> Result<Url, DomainCheckError> {
        let hostname = self.hostname(subdomain);
        let url = super::join_segments(&self.base_url, &["task", "domains", "check", &hostname]);
        url.ok_or(DomainCheckError::InvalidUrl(hostname))
    }

    /// Ask the checker whether `subdomain` is free.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails, the checker answers with a
    /// non-success status, or the body is not `{ "taken": bool }`.
    #[instrument(skip(self), fields(subdomain = %subdomain))]
    pub async fn check(&self, subdomain: &Subdomain) -> Result<DomainAvailability, DomainCheckError> {
        let url = self.check_url(subdomain)?;

        let response = self.client.get(url).send().await?;
        let status = response.status();

        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(DomainCheckError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body: CheckResponse = response
            .json()
            .await
            .map_err(|e| DomainCheckError::Parse(e.to_string()))?;

        debug!(taken = body.taken, "Domain check completed");
        Ok(DomainAvailability::from_taken(body.taken))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::time::Duration;

    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    fn client_for(base: &str) -> DomainCheckClient {
        let config = DomainCheckConfig {
            base_url: Url::parse(base).unwrap(),
            parent_domain: "expressitbd.com".to_string(),
            debounce: Duration::from_millis(500),
        };
        DomainCheckClient::new(reqwest::Client::new(), &config)
    }

    fn subdomain(s: &str) -> Subdomain {
        Subdomain::parse(s).unwrap()
    }

    #[test]
    fn test_check_url() {
        let client = client_for("https://interview-task-green.vercel.app");
        let url = client.check_url(&subdomain("myshop")).unwrap();
        assert_eq!(
            url.as_str(),
            "https://interview-task-green.vercel.app/task/domains/check/myshop.expressitbd.com"
        );
    }

    #[tokio::test]
    async fn test_check_taken() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/task/domains/check/taken.expressitbd.com"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({"taken": true})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let result = client_for(&server.uri()).check(&subdomain("taken")).await;
        assert_eq!(result.unwrap(), DomainAvailability::Taken);
    }

    #[tokio::test]
    async fn test_check_available() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/task/domains/check/fresh.expressitbd.com"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({"taken": false})),
            )
            .mount(&server)
            .await;

        let result = client_for(&server.uri()).check(&subdomain("fresh")).await;
        assert_eq!(result.unwrap(), DomainAvailability::Available);
    }

    #[tokio::test]
    async fn test_check_server_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503).set_body_string("down"))
            .mount(&server)
            .await;

        let err = client_for(&server.uri())
            .check(&subdomain("shop"))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainCheckError::Api { status: 503, ref message } if message == "down"));
    }

    #[tokio::test]
    async fn test_check_malformed_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({"available": true})),
            )
            .mount(&server)
            .await;

        let err = client_for(&server.uri())
            .check(&subdomain("shop"))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainCheckError::Parse(_)));
    }

    #[tokio::test]
    async fn test_check_unreachable() {
        // Nothing listens on port 9 (discard) on test machines
        let err = client_for("http://127.0.0.1:9")
            .check(&subdomain("shop"))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainCheckError::Http(_)));
    }
}
