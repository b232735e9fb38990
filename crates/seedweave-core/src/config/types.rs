//! Configuration type definitions

use serde::{Deserialize, Serialize};

/// Default epsilon added to local entropy before inverting it
pub const DEFAULT_ENTROPY_EPSILON: f64 = 0.001;

/// Priority strategy driving the expansion engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Algorithm {
    /// `ln(deg + 1)`; hubs are deferred
    #[default]
    Degree,
    /// `ln(deg + 1) / (H_local + eps)`
    Entropy,
    /// `deg / (1 + path_potential)`, with optional per-pair path targets
    PathPotential,
}

impl Algorithm {
    pub const ALL: [Algorithm; 3] = [
        Algorithm::Degree,
        Algorithm::Entropy,
        Algorithm::PathPotential,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Algorithm::Degree => "degree",
            Algorithm::Entropy => "entropy",
            Algorithm::PathPotential => "path-potential",
        }
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Algorithm {
    type Err = crate::error::SeedweaveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Algorithm::ALL
            .into_iter()
            .find(|a| a.as_str() == s)
            .ok_or_else(|| {
                crate::error::SeedweaveError::invalid_argument(format!(
                    "unknown algorithm '{}' (expected: degree, entropy, or path-potential)",
                    s
                ))
            })
    }
}

/// Sampler configuration, usually read from a TOML file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SamplerConfig {
    /// Priority strategy
    #[serde(default)]
    pub algorithm: Algorithm,

    /// Stop once every seed pair has this many distinct paths
    /// (path-potential only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_paths_per_pair: Option<usize>,

    /// Added to local entropy before inverting it (entropy only)
    #[serde(default = "default_entropy_epsilon")]
    pub entropy_epsilon: f64,
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self {
            algorithm: Algorithm::default(),
            target_paths_per_pair: None,
            entropy_epsilon: DEFAULT_ENTROPY_EPSILON,
        }
    }
}

fn default_entropy_epsilon() -> f64 {
    DEFAULT_ENTROPY_EPSILON
}
