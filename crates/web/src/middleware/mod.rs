//! HTTP middleware stack for the web server.
//!
//! # Middleware Order (outermost first)
//!
//! 1. Sentry layers (capture errors, added in `main`)
//! 2. `TraceLayer` (request span with an empty `request_id` field)
//! 3. Request ID (fills the span field, tags Sentry, echoes the header)
//! 4. Security headers (CSP, frame and referrer policy)
//! 5. Rate limiting (governor, domain check endpoints only)

pub mod rate_limit;
pub mod request_id;
pub mod security_headers;

pub use rate_limit::domain_check_rate_limiter;
pub use request_id::{REQUEST_ID_HEADER, RequestId, request_id_middleware};
pub use security_headers::security_headers_middleware;
