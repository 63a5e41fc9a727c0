//! Session-backed cart operations.
//!
//! The cart lives in the client's session under [`session_keys::CART`] as a
//! JSON object keyed by product id. Every operation is a single
//! read-modify-write against that one key.
//!
//! Two concurrent requests from the same session can interleave their
//! read-modify-write; the last write wins.

use dogshop_core::{Cart, CartLimitError, Catalog, Price, ProductId};
use thiserror::Error;
use tracing::instrument;

use super::session_store::{SessionKv, SessionStoreError};
use crate::models::session_keys;

/// Cart operation errors.
#[derive(Debug, Error)]
pub enum CartError {
    /// The product id is not in the catalog.
    #[error("Product not found")]
    ProductNotFound(ProductId),

    /// The line is already at its maximum quantity.
    #[error(transparent)]
    Limit(#[from] CartLimitError),

    /// Reading or writing the session failed.
    #[error(transparent)]
    Session(#[from] SessionStoreError),

    /// The cart could not be encoded for the session.
    #[error("failed to encode cart: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Cart operations scoped to one session.
pub struct CartService<'a, S> {
    session: &'a S,
    catalog: &'a Catalog,
}

impl<'a, S: SessionKv> CartService<'a, S> {
    #[must_use]
    pub const fn new(session: &'a S, catalog: &'a Catalog) -> Self {
        Self { session, catalog }
    }

    /// Add one unit of a catalog product to the cart.
    ///
    /// Returns the line's quantity after the add. On any error the stored
    /// cart is left as it was.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::ProductNotFound`] for ids missing from the
    /// catalog, [`CartError::Limit`] if the line cannot grow, or a session
    /// error.
    #[instrument(skip(self))]
    pub async fn add_item(&self, product_id: ProductId) -> Result<u32, CartError> {
        let product = self
            .catalog
            .find(product_id)
            .ok_or(CartError::ProductNotFound(product_id))?;

        let mut cart = self.load().await?;
        let quantity = cart.add(product)?;
        self.session
            .put(session_keys::CART, serde_json::to_value(&cart)?)
            .await?;

        tracing::debug!(%product_id, quantity, "added item to cart");
        Ok(quantity)
    }

    /// Current cart and its total.
    ///
    /// # Errors
    ///
    /// Returns a session error if the session cannot be read.
    pub async fn get_cart(&self) -> Result<(Cart, Price), CartError> {
        let cart = self.load().await?;
        let total = cart.total();
        Ok((cart, total))
    }

    /// Drop the cart from the session. Clearing an empty cart is a no-op.
    ///
    /// # Errors
    ///
    /// Returns a session error if the session cannot be written.
    #[instrument(skip(self))]
    pub async fn clear(&self) -> Result<(), CartError> {
        self.session.delete(session_keys::CART).await?;
        Ok(())
    }

    /// Read the stored cart, starting empty when none exists.
    ///
    /// Data that no longer decodes as a cart is discarded.
    async fn load(&self) -> Result<Cart, CartError> {
        let Some(value) = self.session.get(session_keys::CART).await? else {
            return Ok(Cart::new());
        };

        match serde_json::from_value::<Cart>(value) {
            Ok(mut cart) => {
                let dropped = cart.normalize();
                if dropped > 0 {
                    tracing::warn!(dropped, "dropped cart lines with zero quantity");
                }
                Ok(cart)
            }
            Err(e) => {
                tracing::warn!("Discarding undecodable cart in session: {e}");
                Ok(Cart::new())
            }
        }
    }
}
