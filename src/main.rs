//! Long Shadow PD CLI
//!
//! Inspect the composite filter's schema, registration keys and wiring.

use anyhow::Context;
use clap::Parser;
use env_logger::Env;
use log::info;

use longshadow_pd::cli::{commands, Cli, Commands};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_filter)).init();

    info!("Long Shadow PD v{}", env!("CARGO_PKG_VERSION"));

    match cli.command {
        Commands::Schema => commands::schema().context("printing schema")?,
        Commands::Info => commands::info().context("printing info")?,
        Commands::Graph { preset, set } => {
            commands::graph(preset.as_deref(), &set).context("building graph")?
        }
        Commands::SavePreset { path, set } => commands::save_preset(&path, &set)
            .with_context(|| format!("saving preset to {}", path.display()))?,
    }
    Ok(())
}
