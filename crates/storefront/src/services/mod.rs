//! Business logic services for storefront.
//!
//! # Services
//!
//! - `cart` - Session-scoped cart operations (add, view, clear)
//! - `session_store` - Key-value interface over the client session

pub mod cart;
pub mod session_store;

pub use cart::{CartError, CartService};
pub use session_store::{SessionKv, SessionStoreError};
