//! CLI argument parsing for seedweave
//!
//! Supports global flags: --format, --quiet, --verbose, --log-level, --log-json

pub mod args;
pub mod output;
pub mod parse;

use clap::{Parser, Subcommand};

pub use args::{InspectArgs, SampleArgs};
pub use output::OutputFormat;

/// Seedweave - sample the subgraph connecting seed nodes
#[derive(Parser, Debug)]
#[command(name = "seedweave")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, value_enum, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level or filter directive (overrides --verbose)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Sample the subgraph connecting one or more seed nodes
    Sample(SampleArgs),

    /// Show a node's degree, local entropy and priority values
    Inspect(InspectArgs),
}
