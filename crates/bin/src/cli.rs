//! CLI argument definitions for the crdt-scene binary.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::output::OutputFormat;

/// Inspect and reconcile scene documents stored as yrs CRDT state
#[derive(Parser, Debug)]
#[command(name = "crdt-scene")]
#[command(about = "crdt-scene: typed scene AST over CRDT documents")]
#[command(version)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, default_value = "human", env = "CRDT_SCENE_FORMAT")]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build a document from a JSON file and save it
    Import(ImportArgs),
    /// Print the canonical serialization of a scene file
    Dump(DumpArgs),
    /// Reconcile a scene against live body ids
    Reconcile(ReconcileArgs),
    /// Show summary information about a document
    Info(InfoArgs),
}

/// Arguments for the import command
#[derive(clap::Args, Debug)]
pub struct ImportArgs {
    /// JSON input file
    pub json: PathBuf,

    /// Document output file
    pub out: PathBuf,
}

/// Arguments for the dump command
#[derive(clap::Args, Debug)]
pub struct DumpArgs {
    /// Document file
    pub doc: PathBuf,

    /// Path of the File node inside the document
    #[arg(short, long, default_value = "/")]
    pub path: String,

    /// Decimal places for floats
    #[arg(long, default_value_t = crdt_scene::serialize::DEFAULT_PRECISION, env = "CRDT_SCENE_PRECISION")]
    pub precision: usize,
}

/// Arguments for the reconcile command
#[derive(clap::Args, Debug)]
pub struct ReconcileArgs {
    /// Document file
    pub doc: PathBuf,

    /// Path of the File node inside the document
    #[arg(short, long, default_value = "/")]
    pub path: String,

    /// Stable id of a live body; may be repeated
    #[arg(long = "live", value_name = "ID")]
    pub live: Vec<String>,
}

/// Arguments for the info command
#[derive(clap::Args, Debug)]
pub struct InfoArgs {
    /// Document file
    pub doc: PathBuf,
}
