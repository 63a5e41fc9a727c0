//! Dog Shop CLI - Catalog and deployment tools.
//!
//! # Usage
//!
//! ```bash
//! # Print the catalog the storefront would serve
//! ds-cli catalog show
//!
//! # Print a specific catalog
//! ds-cli catalog show --source gallery
//!
//! # Validate a catalog file before deploying it
//! ds-cli catalog check catalog.yaml
//!
//! # Generate a value for STOREFRONT_SESSION_SECRET
//! ds-cli session-secret generate
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "ds-cli")]
#[command(author, version, about = "Dog Shop CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Inspect and validate catalogs
    Catalog {
        #[command(subcommand)]
        action: CatalogAction,
    },
    /// Manage the session signing secret
    SessionSecret {
        #[command(subcommand)]
        action: SecretAction,
    },
}

#[derive(Subcommand)]
enum CatalogAction {
    /// Print a catalog as YAML
    Show {
        /// Preset name (`classic`, `gallery`) or YAML file path.
        /// Defaults to `STOREFRONT_CATALOG`, then `classic`.
        #[arg(short, long)]
        source: Option<String>,
    },
    /// Validate a YAML catalog file
    Check {
        /// Path to the catalog file
        path: String,
    },
}

#[derive(Subcommand)]
enum SecretAction {
    /// Print a fresh random secret
    Generate,
}

fn main() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Catalog { action } => match action {
            CatalogAction::Show { source } => commands::catalog::show(source.as_deref())?,
            CatalogAction::Check { path } => commands::catalog::check(&path)?,
        },
        Commands::SessionSecret { action } => match action {
            SecretAction::Generate => commands::secret::generate()?,
        },
    }
    Ok(())
}
