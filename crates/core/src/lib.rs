//! Dog Shop Core - Shared types library.
//!
//! This crate provides the domain types used across all Dog Shop components:
//! - `storefront` - Public-facing catalog and cart site
//! - `cli` - Command-line tools for catalog inspection and secrets
//!
//! # Architecture
//!
//! The core crate contains only types and pure logic - no I/O, no sessions,
//! no HTTP. Loading a catalog from disk and persisting a cart are the
//! storefront's job; this crate only knows what a valid catalog and cart are.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for ids and prices, products, carts
//! - [`catalog`] - The immutable product catalog and its built-in presets

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod catalog;
pub mod types;

pub use catalog::{Catalog, CatalogError, CatalogPreset};
pub use types::*;
