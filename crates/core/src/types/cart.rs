//! Shopping cart and line items.
//!
//! A [`Cart`] maps product ids to [`LineItem`]s. Each line item is a snapshot
//! of the product taken when it was first added: later catalog changes do not
//! touch lines that are already in a cart.
//!
//! # State machine
//!
//! ```text
//! EMPTY    --add--> NONEMPTY
//! NONEMPTY --add--> NONEMPTY   (new line, or quantity + 1)
//! NONEMPTY --clear--> EMPTY
//! EMPTY    --clear--> EMPTY
//! ```
//!
//! Serialized as a JSON object keyed by the product id string, e.g.
//! `{"1": {"name": "dog1", "price": 8000, "quantity": 2}}`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{Price, Product, ProductId};

/// A line's quantity cannot be increased any further.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("quantity limit reached for product {0}")]
pub struct CartLimitError(pub ProductId);

/// Whether a cart holds anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CartState {
    Empty,
    NonEmpty,
}

/// One product's entry in a cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    /// Product name at the time the line was created.
    pub name: String,
    /// Unit price at the time the line was created.
    pub price: Price,
    /// Number of units, always at least 1.
    pub quantity: u32,
    /// Product image at the time the line was created.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl LineItem {
    /// Snapshot a product into a fresh line with quantity 1.
    #[must_use]
    pub fn snapshot(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            price: product.price,
            quantity: 1,
            image: product.image.clone(),
        }
    }

    /// Price times quantity.
    #[must_use]
    pub fn subtotal(&self) -> Price {
        self.price.times(self.quantity)
    }
}

/// A session's shopping cart.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    lines: BTreeMap<ProductId, LineItem>,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            lines: BTreeMap::new(),
        }
    }

    /// Add one unit of `product`.
    ///
    /// An existing line keeps its snapshot and gains one unit; otherwise a new
    /// line is created from the product as it is now. Returns the line's new
    /// quantity.
    ///
    /// # Errors
    ///
    /// Returns [`CartLimitError`] if the line is already at `u32::MAX`. The
    /// cart is left unchanged in that case.
    pub fn add(&mut self, product: &Product) -> Result<u32, CartLimitError> {
        if let Some(line) = self.lines.get_mut(&product.id) {
            line.quantity = line
                .quantity
                .checked_add(1)
                .ok_or(CartLimitError(product.id))?;
            return Ok(line.quantity);
        }

        self.lines.insert(product.id, LineItem::snapshot(product));
        Ok(1)
    }

    /// Remove every line.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Drop lines that violate the quantity invariant.
    ///
    /// Used after decoding a cart from untrusted session data. Returns the
    /// number of lines removed.
    pub fn normalize(&mut self) -> usize {
        let before = self.lines.len();
        self.lines.retain(|_, line| line.quantity > 0);
        before - self.lines.len()
    }

    /// Get the line for a product.
    #[must_use]
    pub fn get(&self, id: ProductId) -> Option<&LineItem> {
        self.lines.get(&id)
    }

    /// Iterate lines in product id order.
    pub fn iter(&self) -> impl Iterator<Item = (ProductId, &LineItem)> {
        self.lines.iter().map(|(id, line)| (*id, line))
    }

    /// Number of distinct products.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    #[must_use]
    pub fn state(&self) -> CartState {
        if self.is_empty() {
            CartState::Empty
        } else {
            CartState::NonEmpty
        }
    }

    /// Total number of units across all lines.
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.lines
            .values()
            .fold(0u32, |acc, line| acc.saturating_add(line.quantity))
    }

    /// Sum of price times quantity over all lines; zero when empty.
    #[must_use]
    pub fn total(&self) -> Price {
        self.lines.values().map(LineItem::subtotal).sum()
    }
}
