//! The pairing round and the loop that plays rounds until none are left

use tracing::{debug, trace};

use crate::bucket::{BucketStore, Participant};
use crate::error::{ArenaError, ArenaResult};
use crate::matchmaker::Matchmaker;
use crate::record::Record;

/// What a single round did to the store
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundOutcome {
    /// Record both participants held before the round
    pub record: Record,
    /// Participant that left with one more win
    pub winner: Participant,
    /// Participant that left with one more loss
    pub loser: Participant,
}

/// Pair two participants from the bucket at `record`.
///
/// One advances to a win record, the other to a loss record, and both are
/// put back. The store is left untouched if the bucket holds fewer than two.
pub fn run_round(store: &mut BucketStore, record: Record) -> ArenaResult<RoundOutcome> {
    if store.size(record) < 2 {
        return Err(ArenaError::EmptyBucket { record });
    }

    let mut winner = store.remove(record)?;
    let mut loser = store.remove(record)?;

    winner.win();
    loser.lose();

    store.insert(winner);
    store.insert(loser);

    Ok(RoundOutcome {
        record,
        winner,
        loser,
    })
}

/// Lifecycle of a simulation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineState {
    /// Eligible buckets may remain
    Running,
    /// No bucket can be paired anymore; the store is final
    Done,
}

/// Drives rounds until the matchmaker finds no eligible bucket.
#[derive(Debug, Clone)]
pub struct RoundEngine {
    matchmaker: Matchmaker,
    state: EngineState,
    rounds_played: u64,
    round_limit: Option<u64>,
}

impl RoundEngine {
    pub fn new(matchmaker: Matchmaker) -> Self {
        Self {
            matchmaker,
            state: EngineState::Running,
            rounds_played: 0,
            round_limit: None,
        }
    }

    /// Fail with [`ArenaError::RoundLimitExceeded`] instead of playing more
    /// than `limit` rounds.
    pub fn with_round_limit(mut self, limit: u64) -> Self {
        self.round_limit = Some(limit);
        self
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    pub fn rounds_played(&self) -> u64 {
        self.rounds_played
    }

    /// Play one round if possible, otherwise move to `Done`.
    ///
    /// Returns the outcome of the round that was played, if any.
    pub fn step(&mut self, store: &mut BucketStore) -> ArenaResult<Option<RoundOutcome>> {
        if self.state == EngineState::Done {
            return Ok(None);
        }

        let Some(record) = self.matchmaker.find_eligible_bucket(store) else {
            self.state = EngineState::Done;
            debug!(rounds = self.rounds_played, "no eligible bucket left");
            return Ok(None);
        };

        if let Some(limit) = self.round_limit {
            if self.rounds_played >= limit {
                return Err(ArenaError::RoundLimitExceeded { limit });
            }
        }

        let outcome = run_round(store, record)?;
        self.rounds_played += 1;
        trace!(
            round = self.rounds_played,
            record = %outcome.record,
            winner = outcome.winner.id(),
            loser = outcome.loser.id(),
            "round played"
        );

        Ok(Some(outcome))
    }

    /// Play rounds until `Done`; returns the total number of rounds played.
    pub fn run(&mut self, store: &mut BucketStore) -> ArenaResult<u64> {
        while self.state == EngineState::Running {
            self.step(store)?;
        }
        Ok(self.rounds_played)
    }
}

#[cfg(test)]
#[path = "round_tests.rs"]
mod tests;
