//! Arena core for the record distribution simulator
//!
//! This crate provides the pure-computation pieces of an arena run:
//! - Win/loss records and their packed bucket keys
//! - Bucket storage grouping participants by record
//! - Same-record matchmaking and the round transition
//! - The final record distribution with percentiles
//!
//! No IO happens here; seeding and rendering live in `arena_sim`.
//!
//! # Usage
//!
//! ```rust
//! use arena_core::{ArenaRules, BucketStore, Distribution, Matchmaker, Participant, RoundEngine, ScanOrder};
//!
//! let mut store = BucketStore::new();
//! for id in 0..8 {
//!     store.insert(Participant::new(id));
//! }
//!
//! let mut engine = RoundEngine::new(Matchmaker::new(ArenaRules::default(), ScanOrder::Insertion));
//! let rounds = engine.run(&mut store).unwrap();
//! assert_eq!(rounds, 15);
//!
//! let distribution = Distribution::from_store(&store).unwrap();
//! assert_eq!(distribution.population(), 8);
//! ```

mod bucket;
mod error;
mod matchmaker;
mod record;
mod report;
mod round;
mod rules;

pub use bucket::*;
pub use error::*;
pub use matchmaker::*;
pub use record::*;
pub use report::*;
pub use round::*;
pub use rules::*;
