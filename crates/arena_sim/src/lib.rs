//! Arena run simulator
//!
//! This crate provides the driver around `arena_core`:
//! - Loading a simulation configuration (TOML file plus CLI overrides)
//! - Seeding a population at the zero record and playing it out
//! - Rendering and saving the final record distribution
//!
//! # Usage
//!
//! ```bash
//! # Full 65536-entrant arena, text report on stdout
//! cargo run -p arena_sim
//!
//! # Smaller run with a shuffled scan order, saved as JSON
//! cargo run -p arena_sim -- run --population 1024 --scan shuffled --seed 7 --json results.json
//! ```

mod config;
mod output;
mod simulation;

pub use config::*;
pub use output::*;
pub use simulation::*;
