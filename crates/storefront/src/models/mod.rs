//! Domain models for storefront.
//!
//! The catalog and cart types themselves live in `dogshop-core`; this module
//! only holds what is specific to how the storefront keeps them in a session.

pub mod session;

pub use session::keys as session_keys;
