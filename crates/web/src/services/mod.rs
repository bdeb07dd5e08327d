//! Clients for the remote APIs the web pages depend on.
//!
//! # Services
//!
//! - `domains` - Subdomain availability checks
//! - `catalog` - Product lookups for the detail page
//!
//! Both clients share one `reqwest::Client` so connection pooling and the
//! request timeout apply to every outbound call.

pub mod catalog;
pub mod domains;

use std::time::Duration;

pub use catalog::{CatalogClient, CatalogError};
pub use domains::{DomainCheckClient, DomainCheckError};

/// `User-Agent` sent on every outbound request.
const USER_AGENT: &str = concat!("store-builder/", env!("CARGO_PKG_VERSION"));

/// Build the shared HTTP client.
///
/// # Errors
///
/// Returns error if the TLS backend cannot be initialised.
pub fn http_client(timeout: Duration) -> Result<reqwest::Client, reqwest::Error> {
    reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .timeout(timeout)
        .build()
}

/// Append `segments` to the path of `base`.
///
/// Returns `None` for URLs that cannot carry a path (`mailto:` and similar).
fn join_segments(base: &url::Url, segments: &[&str]) -> Option<url::Url> {
    let mut url = base.clone();
    url.path_segments_mut()
        .ok()?
        .pop_if_empty()
        .extend(segments);
    Some(url)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use url::Url;

    use super::*;

    #[test]
    fn test_join_segments_on_bare_host() {
        let base = Url::parse("https://api.example.com").unwrap();
        let url = join_segments(&base, &["api", "product", "42"]).unwrap();
        assert_eq!(url.as_str(), "https://api.example.com/api/product/42");
    }

    #[test]
    fn test_join_segments_keeps_base_path() {
        let base = Url::parse("http://127.0.0.1:8080/proxy/").unwrap();
        let url = join_segments(&base, &["task", "domains"]).unwrap();
        assert_eq!(url.as_str(), "http://127.0.0.1:8080/proxy/task/domains");
    }

    #[test]
    fn test_join_segments_escapes_segment_content() {
        let base = Url::parse("https://api.example.com").unwrap();
        let url = join_segments(&base, &["a b"]).unwrap();
        assert_eq!(url.path(), "/a%20b");
    }

    #[test]
    fn test_join_segments_rejects_opaque_urls() {
        let base = Url::parse("mailto:ops@example.com").unwrap();
        assert!(join_segments(&base, &["x"]).is_none());
    }
}
