//! Application state shared across handlers.

use std::sync::Arc;

use dogshop_core::Catalog;

use crate::catalog::CatalogLoadError;
use crate::config::StorefrontConfig;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides read-only access
/// to the configuration and the product catalog.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    catalog: Catalog,
}

impl AppState {
    /// Create application state, loading the configured catalog.
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog cannot be loaded or is invalid.
    pub fn new(config: StorefrontConfig) -> Result<Self, CatalogLoadError> {
        let catalog = config.catalog.load()?;
        Ok(Self::with_catalog(config, catalog))
    }

    /// Create application state around an already-built catalog.
    #[must_use]
    pub fn with_catalog(config: StorefrontConfig, catalog: Catalog) -> Self {
        Self {
            inner: Arc::new(AppStateInner { config, catalog }),
        }
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a reference to the product catalog.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.inner.catalog
    }
}
