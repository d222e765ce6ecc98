//! YAML configuration file for the generate command.
//!
//! Every key is optional; anything left out falls back to the built-in
//! defaults, and command-line flags override the file.
//!
//! ```yaml
//! seed: 42
//! blocks: 100
//! tuples_per_block: 10
//! kinds: [UniqueIntsHash, UniqueGenericTree]
//! generator_name: nightly-index-fuzz
//! ```

use crate::driver::GeneratorConfig;
use crate::error::{GenError, Result};
use crate::kind::TestKind;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Contents of a generator config file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorYamlConfig {
    /// Seed for the random generator
    pub seed: Option<u64>,
    /// Number of blocks to emit (omit to run until killed)
    pub blocks: Option<u64>,
    /// Candidate tuples generated per block before deduplication
    pub tuples_per_block: Option<usize>,
    /// Kinds to draw blocks from
    pub kinds: Vec<TestKind>,
    /// Name written into the leading comment
    pub generator_name: Option<String>,
}

impl GeneratorYamlConfig {
    /// Load configuration from a YAML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        serde_yaml_ng::from_str(&content)
            .map_err(|e| GenError::InvalidConfig(format!("{}: {}", path.display(), e)))
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        serde_yaml_ng::from_str(content).map_err(|e| GenError::InvalidConfig(e.to_string()))
    }

    /// Overlay the values present in this file onto `base`.
    pub fn apply(self, mut base: GeneratorConfig) -> GeneratorConfig {
        if let Some(seed) = self.seed {
            base.seed = seed;
        }
        if self.blocks.is_some() {
            base.blocks = self.blocks;
        }
        if let Some(n) = self.tuples_per_block {
            base.tuples_per_block = n;
        }
        if !self.kinds.is_empty() {
            base.kinds = self.kinds;
        }
        if let Some(name) = self.generator_name {
            base.generator_name = name;
        }
        base
    }
}
