//! CLI Module
//!
//! Command-line interface for inspecting the long-shadow-pd filter.

pub mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Extrusion via Long Shadow - inspect the filter's schema and wiring
#[derive(Parser, Debug)]
#[command(name = "longshadow-pd")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the parameter schema as JSON
    #[command(name = "schema")]
    Schema,

    /// Print registration keys and the schema fingerprint
    #[command(name = "info")]
    Info,

    /// Attach the filter and print its sub-graph
    #[command(name = "graph")]
    Graph {
        /// JSON preset applied before the overrides
        #[arg(short, long)]
        preset: Option<PathBuf>,

        /// Parameter override, e.g. --set angle=-30 (repeatable)
        #[arg(short, long = "set", value_name = "NAME=VALUE")]
        set: Vec<String>,
    },

    /// Write the current (default or overridden) values as a preset
    #[command(name = "save-preset")]
    SavePreset {
        /// Destination file
        path: PathBuf,

        /// Parameter override, e.g. --set ls2=true (repeatable)
        #[arg(short, long = "set", value_name = "NAME=VALUE")]
        set: Vec<String>,
    },
}
