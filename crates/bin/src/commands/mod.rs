//! Subcommand implementations.

pub mod dump;
pub mod import;
pub mod info;
pub mod reconcile;
