//! Unified error handling with Sentry integration.
//!
//! Provides a unified `AppError` type that captures errors to Sentry before
//! responding to the client. All route handlers should return `Result<T, AppError>`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::services::CartError;

/// Application-level error type for the storefront.
#[derive(Debug, Error)]
pub enum AppError {
    /// Cart operation failed.
    #[error("Cart error: {0}")]
    Cart(#[from] CartError),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),
}

impl AppError {
    const fn is_server_error(&self) -> bool {
        matches!(self, Self::Cart(CartError::Session(_) | CartError::Encode(_)))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Capture server errors to Sentry
        if self.is_server_error() {
            let event_id = sentry::capture_error(&self);
            tracing::error!(
                error = %self,
                sentry_event_id = %event_id,
                "Request error"
            );
        }

        let status = match &self {
            Self::Cart(err) => match err {
                CartError::ProductNotFound(_) => StatusCode::NOT_FOUND,
                CartError::Limit(_) => StatusCode::CONFLICT,
                CartError::Session(_) | CartError::Encode(_) => StatusCode::INTERNAL_SERVER_ERROR,
            },
            Self::NotFound(_) => StatusCode::NOT_FOUND,
        };

        // Don't expose internal error details to clients
        let message = match &self {
            Self::Cart(err) => match err {
                CartError::ProductNotFound(_) | CartError::Limit(_) => err.to_string(),
                CartError::Session(_) | CartError::Encode(_) => {
                    "Internal server error".to_string()
                }
            },
            Self::NotFound(_) => self.to_string(),
        };

        (status, message).into_response()
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

/// Add a breadcrumb for user actions.
///
/// Breadcrumbs appear in Sentry error reports to show the trail of user actions
/// leading up to an error.
///
/// # Example
///
/// ```rust,ignore
/// add_breadcrumb("cart", "Added item", Some(&[("product_id", "1")]));
/// ```
pub fn add_breadcrumb(category: &str, message: &str, data: Option<&[(&str, &str)]>) {
    let mut breadcrumb = sentry::Breadcrumb {
        category: Some(category.to_string()),
        message: Some(message.to_string()),
        level: sentry::Level::Info,
        ..Default::default()
    };

    if let Some(pairs) = data {
        for (key, value) in pairs {
            breadcrumb.data.insert(
                (*key).to_string(),
                serde_json::Value::String((*value).to_string()),
            );
        }
    }

    sentry::add_breadcrumb(breadcrumb);
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use dogshop_core::{CartLimitError, ProductId};

    use super::*;

    async fn body_text(err: AppError) -> (StatusCode, String) {
        let response = err.into_response();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap_or_default();
        (status, String::from_utf8_lossy(&bytes).into_owned())
    }

    #[test]
    fn test_app_error_display() {
        let err = AppError::NotFound("page".to_string());
        assert_eq!(err.to_string(), "Not found: page");

        let err = AppError::Cart(CartError::ProductNotFound(ProductId::new(9)));
        assert_eq!(err.to_string(), "Cart error: Product not found");
    }

    #[tokio::test]
    async fn test_product_not_found_is_404_with_short_message() {
        let (status, body) =
            body_text(AppError::Cart(CartError::ProductNotFound(ProductId::new(9)))).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, "Product not found");
    }

    #[tokio::test]
    async fn test_quantity_limit_is_conflict() {
        let (status, _) =
            body_text(AppError::Cart(CartError::Limit(CartLimitError(ProductId::new(1))))).await;
        assert_eq!(status, StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn test_server_error_hides_details() {
        let encode = serde_json::from_str::<u32>("not json").unwrap_err();
        let (status, body) = body_text(AppError::Cart(CartError::Encode(encode))).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, "Internal server error");
    }

    #[test]
    fn test_not_found_status() {
        let response = AppError::NotFound("page".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
