//! Sampler configuration
//!
//! Configuration is read from a TOML file; every field is optional and
//! command-line flags take precedence over file values.

pub mod types;

use std::fs;
use std::path::Path;

use crate::bail_invalid;
use crate::error::Result;

pub use types::{Algorithm, SamplerConfig, DEFAULT_ENTROPY_EPSILON};

impl SamplerConfig {
    /// Load and validate configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Parse and validate configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: SamplerConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.target_paths_per_pair == Some(0) {
            bail_invalid!("target_paths_per_pair must be at least 1");
        }
        if !self.entropy_epsilon.is_finite() || self.entropy_epsilon <= 0.0 {
            bail_invalid!(format!(
                "entropy_epsilon must be a positive number, got {}",
                self.entropy_epsilon
            ));
        }
        Ok(())
    }

    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    pub fn with_target_paths_per_pair(mut self, target: usize) -> Self {
        self.target_paths_per_pair = Some(target);
        self
    }
}
