//! Simulation configuration

use anyhow::{bail, Context, Result};
use arena_core::{ArenaRules, ScanOrder};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default population: 2^16 entrants
pub const DEFAULT_POPULATION: usize = 1 << 16;

/// Default ceiling on rounds, as a multiple of the population
pub const DEFAULT_ROUND_LIMIT_FACTOR: u64 = 15;

/// Everything needed to reproduce a simulation run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Number of participants seeded at the zero record
    pub population: usize,
    /// When a participant's run is over
    pub rules: ArenaRules,
    /// Bucket scan order used by the matchmaker
    pub scan_order: ScanOrder,
    /// Abort after `population * round_limit_factor` rounds
    pub round_limit_factor: u64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            population: DEFAULT_POPULATION,
            rules: ArenaRules::default(),
            scan_order: ScanOrder::default(),
            round_limit_factor: DEFAULT_ROUND_LIMIT_FACTOR,
        }
    }
}

impl SimulationConfig {
    /// Load a configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        Self::from_toml(&contents)
            .with_context(|| format!("Failed to parse config {}", path.display()))
    }

    pub fn from_toml(contents: &str) -> Result<Self> {
        let config: Self = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.population == 0 {
            bail!("population must be at least 1");
        }
        if self.round_limit_factor == 0 {
            bail!("round_limit_factor must be at least 1");
        }
        if u32::try_from(self.population).is_err() {
            bail!("population {} is too large", self.population);
        }
        self.rules.validate()?;
        Ok(())
    }

    /// Most rounds a run of this configuration may play
    pub fn round_limit(&self) -> u64 {
        self.population as u64 * self.round_limit_factor
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
