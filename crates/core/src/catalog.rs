//! The product catalog.
//!
//! A [`Catalog`] is an ordered, validated, immutable list of products. It is
//! built once at startup, either from a [`CatalogPreset`] or from a YAML
//! document, and shared read-only for the life of the process.
//!
//! # YAML format
//!
//! ```yaml
//! products:
//!   - id: 1
//!     name: dog1
//!     price: 8000
//!     image: dog1.jpg   # optional
//! ```

use std::collections::HashSet;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::{Price, Product, ProductId};

/// Reasons a catalog definition is rejected.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("product ids must be positive (got {0})")]
    InvalidId(ProductId),

    #[error("duplicate product id {0}")]
    DuplicateId(ProductId),

    #[error("product {0} has an empty name")]
    EmptyName(ProductId),

    #[error("product {0} must have a positive price")]
    InvalidPrice(ProductId),

    #[error("invalid catalog document: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("unknown catalog preset: {0} (expected classic or gallery)")]
    UnknownPreset(String),
}

/// Built-in catalogs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CatalogPreset {
    /// Three dogs, no images.
    #[default]
    Classic,
    /// Five dogs with images.
    Gallery,
}

impl CatalogPreset {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Classic => "classic",
            Self::Gallery => "gallery",
        }
    }
}

impl FromStr for CatalogPreset {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "classic" => Ok(Self::Classic),
            "gallery" => Ok(Self::Gallery),
            other => Err(CatalogError::UnknownPreset(other.to_owned())),
        }
    }
}

impl std::fmt::Display for CatalogPreset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct CatalogDocument {
    products: Vec<Product>,
}

/// Immutable, ordered product catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Build a catalog, validating every product.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] if an id is not positive or repeats, a name is
    /// blank, or a price is zero.
    pub fn new(products: Vec<Product>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(products.len());

        for product in &products {
            if !product.id.is_positive() {
                return Err(CatalogError::InvalidId(product.id));
            }
            if !seen.insert(product.id) {
                return Err(CatalogError::DuplicateId(product.id));
            }
            if product.name.trim().is_empty() {
                return Err(CatalogError::EmptyName(product.id));
            }
            if product.price.is_zero() {
                return Err(CatalogError::InvalidPrice(product.id));
            }
        }

        Ok(Self { products })
    }

    /// Parse and validate a YAML catalog document.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Parse`] for malformed YAML, or any validation
    /// error from [`Catalog::new`].
    pub fn from_yaml(document: &str) -> Result<Self, CatalogError> {
        let doc: CatalogDocument = serde_yaml::from_str(document)?;
        Self::new(doc.products)
    }

    /// Render the catalog as a YAML document accepted by [`Catalog::from_yaml`].
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Parse`] if serialization fails.
    pub fn to_yaml(&self) -> Result<String, CatalogError> {
        let doc = CatalogDocument {
            products: self.products.clone(),
        };
        Ok(serde_yaml::to_string(&doc)?)
    }

    /// Build one of the built-in catalogs.
    #[must_use]
    pub fn preset(preset: CatalogPreset) -> Self {
        let products = match preset {
            CatalogPreset::Classic => vec![dog(1, 8000), dog(2, 15000), dog(3, 10000)],
            CatalogPreset::Gallery => [(1, 10000), (2, 12000), (3, 20000), (4, 15000), (5, 18000)]
                .into_iter()
                .map(|(id, price)| dog(id, price).with_image(format!("dog{id}.svg")))
                .collect(),
        };

        Self { products }
    }

    /// All products in display order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Look up a product by id.
    #[must_use]
    pub fn find(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::preset(CatalogPreset::default())
    }
}

fn dog(id: i32, price: u64) -> Product {
    Product::new(ProductId::new(id), format!("dog{id}"), Price::new(price))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_presets_pass_validation() {
        for preset in [CatalogPreset::Classic, CatalogPreset::Gallery] {
            let catalog = Catalog::preset(preset);
            let validated = Catalog::new(catalog.products().to_vec()).unwrap();
            assert_eq!(validated, catalog);
        }
    }

    #[test]
    fn test_classic_preset() {
        let catalog = Catalog::preset(CatalogPreset::Classic);
        assert_eq!(catalog.len(), 3);

        let dog1 = catalog.find(ProductId::new(1)).unwrap();
        assert_eq!(dog1.name, "dog1");
        assert_eq!(dog1.price, Price::new(8000));
        assert!(dog1.image.is_none());

        assert_eq!(
            catalog.find(ProductId::new(2)).unwrap().price,
            Price::new(15000)
        );
    }

    #[test]
    fn test_gallery_preset_has_images() {
        let catalog = Catalog::preset(CatalogPreset::Gallery);
        assert_eq!(catalog.len(), 5);
        assert!(catalog.products().iter().all(|p| p.image.is_some()));
        assert_eq!(
            catalog.find(ProductId::new(3)).unwrap().image.as_deref(),
            Some("dog3.svg")
        );
    }

    #[test]
    fn test_find_missing_returns_none() {
        let catalog = Catalog::default();
        assert!(catalog.find(ProductId::new(99)).is_none());
        assert!(catalog.find(ProductId::new(0)).is_none());
    }

    #[test]
    fn test_products_keep_order() {
        let catalog = Catalog::preset(CatalogPreset::Gallery);
        let ids: Vec<i32> = catalog.products().iter().map(|p| p.id.as_i32()).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_rejects_duplicate_ids() {
        let err = Catalog::new(vec![dog(1, 10), dog(1, 20)]).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateId(id) if id == ProductId::new(1)));
    }

    #[test]
    fn test_rejects_non_positive_id() {
        let err = Catalog::new(vec![dog(0, 10)]).unwrap_err();
        assert!(matches!(err, CatalogError::InvalidId(_)));
    }

    #[test]
    fn test_rejects_zero_price() {
        let err = Catalog::new(vec![dog(1, 0)]).unwrap_err();
        assert!(matches!(err, CatalogError::InvalidPrice(_)));
    }

    #[test]
    fn test_rejects_blank_name() {
        let product = Product::new(ProductId::new(1), "  ", Price::new(5));
        let err = Catalog::new(vec![product]).unwrap_err();
        assert!(matches!(err, CatalogError::EmptyName(_)));
    }

    #[test]
    fn test_from_yaml() {
        let yaml = "products:\n  - id: 7\n    name: corgi\n    price: 4200\n    image: corgi.jpg\n  - id: 8\n    name: husky\n    price: 9900\n";
        let catalog = Catalog::from_yaml(yaml).unwrap();

        assert_eq!(catalog.len(), 2);
        let corgi = catalog.find(ProductId::new(7)).unwrap();
        assert_eq!(corgi.price, Price::new(4200));
        assert_eq!(corgi.image.as_deref(), Some("corgi.jpg"));
        assert!(catalog.find(ProductId::new(8)).unwrap().image.is_none());
    }

    #[test]
    fn test_from_yaml_malformed() {
        let err = Catalog::from_yaml("products: nope").unwrap_err();
        assert!(matches!(err, CatalogError::Parse(_)));
    }

    #[test]
    fn test_yaml_round_trip_of_preset() {
        let catalog = Catalog::preset(CatalogPreset::Gallery);
        let yaml = catalog.to_yaml().unwrap();
        assert_eq!(Catalog::from_yaml(&yaml).unwrap(), catalog);
    }

    #[test]
    fn test_preset_from_str() {
        assert_eq!(
            "gallery".parse::<CatalogPreset>().unwrap(),
            CatalogPreset::Gallery
        );
        assert_eq!(
            " Classic ".parse::<CatalogPreset>().unwrap(),
            CatalogPreset::Classic
        );
        assert!("deluxe".parse::<CatalogPreset>().is_err());
    }
}
