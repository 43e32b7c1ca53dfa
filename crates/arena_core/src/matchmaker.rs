//! Same-record matchmaking: choosing the next bucket to play a round from

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use crate::bucket::BucketStore;
use crate::record::Record;
use crate::rules::ArenaRules;

/// Order in which buckets are scanned for the next round.
///
/// Eligibility alone decides the final distribution; the scan order only
/// changes which round happens first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScanOrder {
    /// Order in which each record was first seen by the store
    Insertion,
    /// Lowest record first (wins, then losses), the same as ascending key order
    #[default]
    Ascending,
    /// Highest record first
    Descending,
    /// A fresh seeded permutation on every scan
    Shuffled { seed: u64 },
}

/// Picks eligible buckets: at least two occupants and a non-terminal record.
#[derive(Debug, Clone)]
pub struct Matchmaker {
    rules: ArenaRules,
    order: ScanOrder,
    rng: Option<StdRng>,
}

impl Matchmaker {
    pub fn new(rules: ArenaRules, order: ScanOrder) -> Self {
        let rng = match order {
            ScanOrder::Shuffled { seed } => Some(StdRng::seed_from_u64(seed)),
            _ => None,
        };
        Self { rules, order, rng }
    }

    /// Whether a round can be played from the bucket at `record`
    pub fn is_eligible(&self, store: &BucketStore, record: Record) -> bool {
        store.size(record) >= 2 && !record.is_terminal(&self.rules)
    }

    /// Find the next bucket to pair from, or `None` when the run is over.
    pub fn find_eligible_bucket(&mut self, store: &BucketStore) -> Option<Record> {
        let mut records = store.records();
        match self.order {
            ScanOrder::Insertion => {}
            ScanOrder::Ascending => records.sort(),
            ScanOrder::Descending => records.sort_by(|a, b| b.cmp(a)),
            ScanOrder::Shuffled { .. } => {
                if let Some(rng) = self.rng.as_mut() {
                    records.shuffle(rng);
                }
            }
        }

        records
            .into_iter()
            .find(|&record| self.is_eligible(store, record))
    }
}

#[cfg(test)]
#[path = "matchmaker_tests.rs"]
mod tests;
