//! Seeding a population and playing the arena out

use anyhow::{Context, Result};
use arena_core::{BucketStore, Distribution, Matchmaker, Participant, RoundEngine};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

use crate::config::SimulationConfig;

/// A configured, not yet played, arena run
#[derive(Debug, Clone)]
pub struct Simulation {
    config: SimulationConfig,
}

impl Simulation {
    pub fn new(config: SimulationConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Fresh store holding the whole population at the zero record
    pub fn seed(&self) -> BucketStore {
        (0..self.config.population as u32)
            .map(Participant::new)
            .collect()
    }

    /// Seed, play every round, and project the final distribution
    pub fn run(&self) -> Result<SimulationResults> {
        info!(
            population = self.config.population,
            max_wins = self.config.rules.max_wins,
            max_losses = self.config.rules.max_losses,
            max_games = self.config.rules.max_games(),
            reachable_records = self.config.rules.reachable_records(),
            scan_order = ?self.config.scan_order,
            "starting simulation"
        );

        let mut store = self.seed();
        let matchmaker = Matchmaker::new(self.config.rules, self.config.scan_order);
        let mut engine = RoundEngine::new(matchmaker).with_round_limit(self.config.round_limit());

        let rounds = engine
            .run(&mut store)
            .context("Simulation aborted")?;
        let distribution =
            Distribution::from_store(&store).context("Failed to build distribution")?;

        info!(
            rounds,
            buckets = distribution.rows().len(),
            mean_wins = distribution.mean_wins(),
            "simulation complete"
        );

        Ok(SimulationResults {
            config: self.config.clone(),
            rounds,
            distribution,
        })
    }
}

/// Complete output of one simulation run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationResults {
    /// Configuration the run used
    pub config: SimulationConfig,
    /// Number of rounds played before no bucket was eligible
    pub rounds: u64,
    /// Final record distribution
    pub distribution: Distribution,
}

impl SimulationResults {
    /// Save results to JSON file
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("Failed to serialize results")?;
        std::fs::write(path, json)
            .with_context(|| format!("Failed to write {}", path.display()))
    }

    /// Load results from JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse {}", path.display()))
    }
}

#[cfg(test)]
#[path = "simulation_tests.rs"]
mod tests;
