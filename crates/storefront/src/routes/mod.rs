//! HTTP route handlers for storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                   - Product catalog
//! GET  /health             - Liveness check
//!
//! # Cart
//! GET  /add_to_cart/{id}   - Add one unit, redirect to /cart (404 if unknown)
//! GET  /cart               - Cart page with line items and total
//! GET  /clear_cart         - Empty the cart, redirect to /cart
//!
//! # Assets
//! GET  /static/*           - Stylesheet and product images
//! ```

pub mod cart;
pub mod home;

use axum::{Router, routing::get};

use crate::error::AppError;
use crate::state::AppState;

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home::home))
        .route("/health", get(health))
        .route("/add_to_cart/{id}", get(cart::add))
        .route("/cart", get(cart::show))
        .route("/clear_cart", get(cart::clear))
        .fallback(not_found)
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running.
async fn health() -> &'static str {
    "ok"
}

async fn not_found() -> AppError {
    AppError::NotFound("page".to_string())
}
