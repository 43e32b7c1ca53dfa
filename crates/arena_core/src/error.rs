//! Error types for the arena engine

use thiserror::Error;

use crate::record::Record;

/// Contract violations raised by the arena engine.
///
/// None of these are expected at runtime; they signal a coordination bug
/// between the matchmaker, the round transition and the store, or an
/// unusable rule set. Callers should propagate them and abort the run.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArenaError {
    #[error("nothing to remove from bucket {record}")]
    EmptyBucket { record: Record },

    #[error("comparing two equal records {record}")]
    EqualRecords { record: Record },

    #[error("invalid arena rules: {0}")]
    InvalidRules(String),

    #[error("simulation did not finish within {limit} rounds")]
    RoundLimitExceeded { limit: u64 },
}

pub type ArenaResult<T> = Result<T, ArenaError>;
