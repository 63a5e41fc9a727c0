//! Catalog product record.

use serde::{Deserialize, Serialize};

use super::{Price, ProductId};

/// A product offered in the catalog.
///
/// Products are defined once at startup and never change while the process
/// runs. Carts copy what they need out of a product instead of pointing at it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Unique, strictly positive identifier.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Unit price.
    pub price: Price,
    /// Image file name, relative to the static images directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl Product {
    /// Create a product without an image.
    #[must_use]
    pub fn new(id: ProductId, name: impl Into<String>, price: Price) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            image: None,
        }
    }

    /// Attach an image reference.
    #[must_use]
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }
}
