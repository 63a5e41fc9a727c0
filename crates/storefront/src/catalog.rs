//! Catalog loading.
//!
//! The catalog is resolved once at startup from [`CatalogSource`] and then
//! shared read-only through [`crate::state::AppState`].

use std::path::PathBuf;

use dogshop_core::{Catalog, CatalogError, CatalogPreset};
use thiserror::Error;

/// Errors loading the configured catalog.
#[derive(Debug, Error)]
pub enum CatalogLoadError {
    #[error("failed to read catalog file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid catalog in {}: {source}", .path.display())]
    Invalid {
        path: PathBuf,
        #[source]
        source: CatalogError,
    },
}

/// Where the catalog is defined.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    /// One of the built-in catalogs.
    Preset(CatalogPreset),
    /// A YAML catalog document on disk.
    File(PathBuf),
}

impl Default for CatalogSource {
    fn default() -> Self {
        Self::Preset(CatalogPreset::default())
    }
}

impl CatalogSource {
    /// Interpret a preset name, or anything else as a file path.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        value
            .parse::<CatalogPreset>()
            .map_or_else(|_| Self::File(PathBuf::from(value)), Self::Preset)
    }

    /// Load and validate the catalog.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogLoadError`] if the file cannot be read or does not
    /// describe a valid catalog.
    pub fn load(&self) -> Result<Catalog, CatalogLoadError> {
        match self {
            Self::Preset(preset) => Ok(Catalog::preset(*preset)),
            Self::File(path) => {
                let document =
                    std::fs::read_to_string(path).map_err(|source| CatalogLoadError::Io {
                        path: path.clone(),
                        source,
                    })?;
                Catalog::from_yaml(&document).map_err(|source| CatalogLoadError::Invalid {
                    path: path.clone(),
                    source,
                })
            }
        }
    }
}

impl std::fmt::Display for CatalogSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Preset(preset) => write!(f, "preset:{preset}"),
            Self::File(path) => write!(f, "file:{}", path.display()),
        }
    }
}
