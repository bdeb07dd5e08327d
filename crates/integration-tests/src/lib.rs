//! Integration tests for Store Builder.
//!
//! Each [`TestContext`] starts the real router on an ephemeral port with
//! both remote APIs (subdomain checker and product catalog) replaced by one
//! `wiremock` server. Tests then drive it over HTTP like a browser would.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p store-builder-integration-tests
//! ```

use std::collections::HashMap;
use std::net::SocketAddr;

use reqwest::Client;
use serde_json::{Value, json};
use store_builder_web::config::WebConfig;
use store_builder_web::state::AppState;
use tokio::net::TcpListener;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// A running server plus the stub standing in for its remote APIs.
pub struct TestContext {
    /// Client that does not follow redirects, so `303`s can be asserted.
    pub client: Client,
    /// Root URL of the server under test, without a trailing slash.
    pub base_url: String,
    /// Stub for both remote APIs.
    pub upstream: MockServer,
}

impl TestContext {
    /// Start a server with default settings.
    ///
    /// # Panics
    ///
    /// Panics if the server cannot be started.
    pub async fn new() -> Self {
        Self::with_env(&[]).await
    }

    /// Start a server with extra environment variables.
    ///
    /// # Panics
    ///
    /// Panics if the configuration is invalid or the server cannot be
    /// started.
    pub async fn with_env(extra: &[(&str, &str)]) -> Self {
        let upstream = MockServer::start().await;

        let mut vars: HashMap<String, String> = HashMap::from([
            ("DOMAIN_CHECK_BASE_URL".to_string(), upstream.uri()),
            ("CATALOG_BASE_URL".to_string(), upstream.uri()),
            ("HTTP_TIMEOUT_SECS".to_string(), "5".to_string()),
        ]);
        vars.extend(
            extra
                .iter()
                .map(|(k, v)| ((*k).to_string(), (*v).to_string())),
        );

        let config = WebConfig::from_lookup(|key| vars.get(key).cloned())
            .expect("Invalid test configuration");
        let state = AppState::new(config).expect("Failed to create application state");
        let app = store_builder_web::app(state);

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind test listener");
        let addr = listener.local_addr().expect("Listener has no address");

        tokio::spawn(async move {
            axum::serve(
                listener,
                app.into_make_service_with_connect_info::<SocketAddr>(),
            )
            .await
            .expect("Test server error");
        });

        let client = Client::builder()
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url: format!("http://{addr}"),
            upstream,
        }
    }

    /// Absolute URL for `path` on the server under test.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Stub the checker's answer for `hostname`.
    pub async fn stub_domain(&self, hostname: &str, taken: bool) {
        Mock::given(method("GET"))
            .and(path(format!("/task/domains/check/{hostname}")))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "taken": taken })))
            .mount(&self.upstream)
            .await;
    }

    /// Make the checker fail for `hostname`.
    pub async fn stub_domain_failure(&self, hostname: &str) {
        Mock::given(method("GET"))
            .and(path(format!("/task/domains/check/{hostname}")))
            .respond_with(ResponseTemplate::new(500).set_body_string("checker down"))
            .mount(&self.upstream)
            .await;
    }

    /// Stub the catalog's answer for product `id`.
    pub async fn stub_product(&self, id: &str, status: u16, body: Value) {
        Mock::given(method("GET"))
            .and(path(format!("/api/product/{id}")))
            .respond_with(ResponseTemplate::new(status).set_body_json(body))
            .mount(&self.upstream)
            .await;
    }

    /// Number of requests the stub has received.
    ///
    /// # Panics
    ///
    /// Panics if request recording is disabled on the stub.
    pub async fn upstream_calls(&self) -> usize {
        self.upstream
            .received_requests()
            .await
            .expect("Request recording is disabled")
            .len()
    }
}

/// Form body of a store that passes every field check.
#[must_use]
pub fn valid_store_form(domain: &str) -> Vec<(&'static str, String)> {
    vec![
        ("name", "Corner Shop".to_string()),
        ("domain", domain.to_string()),
        ("country", "Bangladesh".to_string()),
        ("category", "Fashion".to_string()),
        ("currency", "BDT".to_string()),
        ("email", "owner@cornershop.com".to_string()),
    ]
}
