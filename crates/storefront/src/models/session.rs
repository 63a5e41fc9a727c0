//! Session-related types.

/// Session keys for storefront data.
pub mod keys {
    /// Key for storing the shopping cart.
    pub const CART: &str = "cart";
}
