use std::path::PathBuf;

use clap::Args;
use seedweave_core::Algorithm;

use super::parse::parse_algorithm;

/// Arguments for the sample command
#[derive(Args, Debug, Clone)]
pub struct SampleArgs {
    /// Graph document (JSON)
    #[arg(long, short)]
    pub graph: PathBuf,

    /// Seed node id (repeat for several seeds)
    #[arg(long = "seed", short = 's', required = true, action = clap::ArgAction::Append)]
    pub seeds: Vec<String>,

    /// Priority strategy: degree, entropy, or path-potential
    #[arg(long, short, value_parser = parse_algorithm)]
    pub algorithm: Option<Algorithm>,

    /// Stop once every seed pair has this many distinct paths (path-potential)
    #[arg(long)]
    pub target_paths_per_pair: Option<usize>,

    /// Sampler configuration file (TOML)
    #[arg(long, short, env = "SEEDWEAVE_CONFIG")]
    pub config: Option<PathBuf>,
}

/// Arguments for the inspect command
#[derive(Args, Debug, Clone)]
pub struct InspectArgs {
    /// Graph document (JSON)
    #[arg(long, short)]
    pub graph: PathBuf,

    /// Node to inspect
    #[arg(long, short)]
    pub node: String,

    /// Epsilon added to local entropy before inverting it
    #[arg(long, default_value_t = seedweave_core::config::DEFAULT_ENTROPY_EPSILON)]
    pub entropy_epsilon: f64,
}
