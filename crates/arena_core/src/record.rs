//! Win/loss records and their packed bucket keys

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

use crate::error::{ArenaError, ArenaResult};
use crate::rules::ArenaRules;

/// Multiplier separating wins from losses inside a packed [`RecordKey`].
///
/// Losses must stay below this value or keys of different records collide.
pub const KEY_STRIDE: u32 = 1000;

/// A participant's standing: how many games it has won and lost.
///
/// Ordering is wins ascending, then losses ascending.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Record {
    pub wins: u16,
    pub losses: u16,
}

impl Record {
    /// The record every participant starts at.
    pub const ZERO: Record = Record { wins: 0, losses: 0 };

    pub fn new(wins: u16, losses: u16) -> Self {
        Self { wins, losses }
    }

    /// Record after winning one more game
    pub fn win(self) -> Self {
        Self {
            wins: self.wins + 1,
            losses: self.losses,
        }
    }

    /// Record after losing one more game
    pub fn lose(self) -> Self {
        Self {
            wins: self.wins,
            losses: self.losses + 1,
        }
    }

    /// Whether no further rounds apply to a holder of this record.
    pub fn is_terminal(&self, rules: &ArenaRules) -> bool {
        self.losses == rules.max_losses || self.wins == rules.max_wins
    }

    /// Compare two records that are required to be distinct.
    ///
    /// Returns [`ArenaError::EqualRecords`] when both sides are the same record.
    pub fn strict_cmp(&self, other: &Record) -> ArenaResult<Ordering> {
        match self.cmp(other) {
            Ordering::Equal => Err(ArenaError::EqualRecords { record: *self }),
            ordering => Ok(ordering),
        }
    }

    pub fn key(&self) -> RecordKey {
        RecordKey::encode(self.wins, self.losses)
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.wins, self.losses)
    }
}

impl From<RecordKey> for Record {
    fn from(key: RecordKey) -> Self {
        let (wins, losses) = key.decode();
        Record::new(wins, losses)
    }
}

/// A record packed into one integer: `wins * KEY_STRIDE + losses`.
///
/// Integer order on keys matches [`Record`] order as long as losses stay
/// below [`KEY_STRIDE`]. Only used to index buckets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RecordKey(u32);

impl RecordKey {
    pub fn encode(wins: u16, losses: u16) -> Self {
        debug_assert!(
            (losses as u32) < KEY_STRIDE,
            "losses {} overflow the record key stride",
            losses
        );
        Self(wins as u32 * KEY_STRIDE + losses as u32)
    }

    pub fn decode(self) -> (u16, u16) {
        let wins = self.0 / KEY_STRIDE;
        let losses = self.0 - KEY_STRIDE * wins;
        (wins as u16, losses as u16)
    }

    /// Key after one more win
    pub fn win(self) -> Self {
        Self(self.0 + KEY_STRIDE)
    }

    /// Key after one more loss
    pub fn lose(self) -> Self {
        Self(self.0 + 1)
    }

    pub fn raw(self) -> u32 {
        self.0
    }
}

impl From<Record> for RecordKey {
    fn from(record: Record) -> Self {
        record.key()
    }
}

#[cfg(test)]
#[path = "record_tests.rs"]
mod tests;
