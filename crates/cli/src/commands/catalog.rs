//! Catalog inspection commands.
//!
//! # Environment Variables
//!
//! - `STOREFRONT_CATALOG` - Catalog used by `show` when `--source` is omitted

use std::path::PathBuf;

use dogshop_core::{Catalog, CatalogError};
use dogshop_storefront::catalog::{CatalogLoadError, CatalogSource};
use thiserror::Error;

/// Errors that can occur during catalog commands.
#[derive(Debug, Error)]
pub enum CatalogCommandError {
    /// The catalog could not be loaded.
    #[error(transparent)]
    Load(#[from] CatalogLoadError),

    /// The catalog could not be written back out.
    #[error("Failed to render catalog: {0}")]
    Render(#[from] CatalogError),
}

/// Print the catalog from `source` (or the configured one) as YAML.
///
/// # Errors
///
/// Returns an error if the catalog cannot be loaded.
pub fn show(source: Option<&str>) -> Result<(), CatalogCommandError> {
    dotenvy::dotenv().ok();

    let source = resolve_source(source, std::env::var("STOREFRONT_CATALOG").ok());
    tracing::info!("Loading catalog from {source}");

    let yaml = render(&source.load()?)?;

    #[allow(clippy::print_stdout)]
    {
        print!("{yaml}");
    }
    Ok(())
}

/// Validate a catalog file and report how many products it defines.
///
/// # Errors
///
/// Returns an error if the file cannot be read or fails validation.
pub fn check(path: &str) -> Result<(), CatalogCommandError> {
    let catalog = CatalogSource::File(PathBuf::from(path)).load()?;

    #[allow(clippy::print_stdout)]
    {
        println!("{path}: ok ({} products)", catalog.len());
    }
    Ok(())
}

fn resolve_source(flag: Option<&str>, env: Option<String>) -> CatalogSource {
    flag.map(str::to_owned)
        .or(env)
        .map_or_else(CatalogSource::default, |value| CatalogSource::parse(&value))
}

fn render(catalog: &Catalog) -> Result<String, CatalogError> {
    catalog.to_yaml()
}
