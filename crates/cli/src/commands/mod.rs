//! CLI subcommand implementations.

pub mod catalog;
pub mod secret;
