//! Core types for Dog Shop.
//!
//! This module provides type-safe wrappers for the catalog and cart domain.

pub mod cart;
pub mod id;
pub mod price;
pub mod product;

pub use cart::{Cart, CartLimitError, CartState, LineItem};
pub use id::*;
pub use price::Price;
pub use product::Product;
