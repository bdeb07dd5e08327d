//! Web server configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All variables are optional.
//!
//! - `STORE_BUILDER_HOST` - Bind address (default: 127.0.0.1)
//! - `STORE_BUILDER_PORT` - Listen port (default: 3000)
//! - `DOMAIN_CHECK_BASE_URL` - Subdomain availability service
//!   (default: <https://interview-task-green.vercel.app>)
//! - `DOMAIN_PARENT` - Parent domain stores are created under (default: expressitbd.com)
//! - `DOMAIN_CHECK_DEBOUNCE_MS` - Quiet period before the form checks a subdomain (default: 500)
//! - `CATALOG_BASE_URL` - Product catalog API
//!   (default: <https://glore-bd-backend-node-mongo.vercel.app>)
//! - `DEFAULT_PRODUCT_ID` - Product shown after a store is created
//! - `HTTP_TIMEOUT_SECS` - Timeout for outbound API calls (default: 10)
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment name
//! - `SENTRY_SAMPLE_RATE` - Error event sample rate (default: 1.0)
//! - `SENTRY_TRACES_SAMPLE_RATE` - Performance trace sample rate (default: 0.1)

use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;
use std::time::Duration;

use store_builder_core::{ProductId, Subdomain};
use thiserror::Error;
use url::Url;

pub const DEFAULT_DOMAIN_CHECK_BASE_URL: &str = "https://interview-task-green.vercel.app";
pub const DEFAULT_CATALOG_BASE_URL: &str = "https://glore-bd-backend-node-mongo.vercel.app";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Web server configuration.
#[derive(Debug, Clone)]
pub struct WebConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Subdomain availability service
    pub domain_check: DomainCheckConfig,
    /// Product catalog API
    pub catalog: CatalogConfig,
    /// Timeout applied to every outbound API call
    pub http_timeout: Duration,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment name
    pub sentry_environment: Option<String>,
    /// Fraction of error events sent to Sentry
    pub sentry_sample_rate: f32,
    /// Fraction of transactions traced
    pub sentry_traces_sample_rate: f32,
}

/// Subdomain availability service configuration.
#[derive(Debug, Clone)]
pub struct DomainCheckConfig {
    /// Service root, e.g. `https://interview-task-green.vercel.app`
    pub base_url: Url,
    /// Parent domain appended to every subdomain
    pub parent_domain: String,
    /// How long the domain input must be idle before a check fires
    pub debounce: Duration,
}

/// Product catalog API configuration.
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// API root, e.g. `https://glore-bd-backend-node-mongo.vercel.app`
    pub base_url: Url,
    /// Product `/product` redirects to after a store is created
    pub default_product_id: Option<ProductId>,
}

impl WebConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set but cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable source.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set but cannot be parsed.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let env = Lookup(&lookup);

        let host = env.parse_or("STORE_BUILDER_HOST", IpAddr::from([127, 0, 0, 1]))?;
        let port = env.parse_or("STORE_BUILDER_PORT", 3000_u16)?;

        let domain_check = DomainCheckConfig {
            base_url: env.url_or("DOMAIN_CHECK_BASE_URL", DEFAULT_DOMAIN_CHECK_BASE_URL)?,
            parent_domain: env.parent_domain("DOMAIN_PARENT")?,
            debounce: Duration::from_millis(env.parse_or("DOMAIN_CHECK_DEBOUNCE_MS", 500_u64)?),
        };

        let default_product_id = env
            .get("DEFAULT_PRODUCT_ID")
            .map(|value| {
                ProductId::parse(&value).map_err(|e| {
                    ConfigError::InvalidEnvVar("DEFAULT_PRODUCT_ID".to_string(), e.to_string())
                })
            })
            .transpose()?;

        let catalog = CatalogConfig {
            base_url: env.url_or("CATALOG_BASE_URL", DEFAULT_CATALOG_BASE_URL)?,
            default_product_id,
        };

        let timeout_secs = env.parse_or("HTTP_TIMEOUT_SECS", 10_u64)?;
        if timeout_secs == 0 {
            return Err(ConfigError::InvalidEnvVar(
                "HTTP_TIMEOUT_SECS".to_string(),
                "must be greater than zero".to_string(),
            ));
        }

        Ok(Self {
            host,
            port,
            domain_check,
            catalog,
            http_timeout: Duration::from_secs(timeout_secs),
            sentry_dsn: env.get("SENTRY_DSN"),
            sentry_environment: env.get("SENTRY_ENVIRONMENT"),
            sentry_sample_rate: env.sample_rate_or("SENTRY_SAMPLE_RATE", 1.0)?,
            sentry_traces_sample_rate: env.sample_rate_or("SENTRY_TRACES_SAMPLE_RATE", 0.1)?,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Debounce interval in whole milliseconds, as written into the form.
    #[must_use]
    pub fn debounce_ms(&self) -> u128 {
        self.domain_check.debounce.as_millis()
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Typed accessors over a variable lookup function.
struct Lookup<'a, F>(&'a F);

impl<F: Fn(&str) -> Option<String>> Lookup<'_, F> {
    /// Get an optional variable, treating an empty value as unset.
    fn get(&self, key: &str) -> Option<String> {
        (self.0)(key).filter(|value| !value.trim().is_empty())
    }

    /// Parse a variable, falling back to `default` when unset.
    fn parse_or<T>(&self, key: &str, default: T) -> Result<T, ConfigError>
    where
        T: FromStr,
        T::Err: std::fmt::Display,
    {
        self.get(key).map_or(Ok(default), |value| {
            value
                .trim()
                .parse::<T>()
                .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))
        })
    }

    /// Parse an absolute http(s) URL usable as a base for path segments.
    fn url_or(&self, key: &str, default: &str) -> Result<Url, ConfigError> {
        let raw = self.get(key).unwrap_or_else(|| default.to_string());
        let url = Url::parse(raw.trim())
            .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))?;

        if !matches!(url.scheme(), "http" | "https") || url.cannot_be_a_base() {
            return Err(ConfigError::InvalidEnvVar(
                key.to_string(),
                format!("{url} is not an http(s) base URL"),
            ));
        }

        Ok(url)
    }

    /// Parent domain: dot-separated labels of letters, digits and hyphens.
    fn parent_domain(&self, key: &str) -> Result<String, ConfigError> {
        let value = self
            .get(key)
            .map_or_else(|| Subdomain::DEFAULT_PARENT.to_string(), |v| v.trim().to_lowercase());

        let valid = value.split('.').all(|label| {
            !label.is_empty()
                && !label.starts_with('-')
                && !label.ends_with('-')
                && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
        });

        if valid {
            Ok(value)
        } else {
            Err(ConfigError::InvalidEnvVar(
                key.to_string(),
                format!("'{value}' is not a domain name"),
            ))
        }
    }

    /// Parse a sample rate in `0.0..=1.0`.
    fn sample_rate_or(&self, key: &str, default: f32) -> Result<f32, ConfigError> {
        let rate = self.parse_or(key, default)?;
        if (0.0..=1.0).contains(&rate) {
            Ok(rate)
        } else {
            Err(ConfigError::InvalidEnvVar(
                key.to_string(),
                format!("{rate} is outside 0.0..=1.0"),
            ))
        }
    }
}
