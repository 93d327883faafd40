use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod output;

use cli::{Cli, Commands};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Log to stderr so command output stays machine readable
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("crdt_scene=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match &cli.command {
        Commands::Import(args) => commands::import::run(args, cli.format),
        Commands::Dump(args) => commands::dump::run(args),
        Commands::Reconcile(args) => commands::reconcile::run(args, cli.format),
        Commands::Info(args) => commands::info::run(args, cli.format),
    }
}
