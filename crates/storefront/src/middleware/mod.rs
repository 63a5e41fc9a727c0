//! HTTP middleware stack for storefront.
//!
//! # Middleware Order (outermost first)
//!
//! 1. Sentry layer (capture errors, `main` only)
//! 2. `TraceLayer` (request span with a `request_id` field)
//! 3. Request ID (fill the span field, echo `x-request-id`)
//! 4. Security headers (CSP, frame denial, no-store)
//! 5. Session layer (tower-sessions, signed cookie, bounded in-memory store)

pub mod request_id;
pub mod security_headers;
pub mod session;
pub mod session_cache;

pub use request_id::{REQUEST_ID_HEADER, request_id_middleware};
pub use security_headers::security_headers_middleware;
pub use session::{SESSION_COOKIE_NAME, SessionKeyError, create_session_layer, session_key};
pub use session_cache::SessionCache;
