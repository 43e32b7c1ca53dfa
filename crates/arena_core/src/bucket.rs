//! Participants and the record-keyed bucket store

use std::collections::HashMap;

use crate::error::{ArenaError, ArenaResult};
use crate::record::{Record, RecordKey};

/// A single entrant in the arena.
///
/// Participants are interchangeable within a bucket; the id only exists so
/// callers can tell two tokens apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Participant {
    id: u32,
    record: Record,
}

impl Participant {
    /// A fresh participant at the zero record
    pub fn new(id: u32) -> Self {
        Self::with_record(id, Record::ZERO)
    }

    pub fn with_record(id: u32, record: Record) -> Self {
        Self { id, record }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn record(&self) -> Record {
        self.record
    }

    pub fn win(&mut self) {
        self.record = self.record.win();
    }

    pub fn lose(&mut self) {
        self.record = self.record.lose();
    }
}

#[derive(Debug, Clone)]
struct Bucket {
    record: Record,
    occupants: Vec<Participant>,
}

/// Every participant of a run, grouped by current record.
///
/// Buckets are kept in the order their record was first seen and are never
/// dropped, even once empty.
#[derive(Debug, Clone, Default)]
pub struct BucketStore {
    buckets: Vec<Bucket>,
    index: HashMap<RecordKey, usize>,
    total: usize,
}

impl BucketStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a participant to the bucket for its current record
    pub fn insert(&mut self, participant: Participant) {
        let record = participant.record();
        let slot = match self.index.get(&record.key()) {
            Some(&slot) => slot,
            None => {
                self.buckets.push(Bucket {
                    record,
                    occupants: Vec::new(),
                });
                let slot = self.buckets.len() - 1;
                self.index.insert(record.key(), slot);
                slot
            }
        };
        self.buckets[slot].occupants.push(participant);
        self.total += 1;
    }

    /// Take an arbitrary participant out of the bucket at `record`.
    pub fn remove(&mut self, record: Record) -> ArenaResult<Participant> {
        let slot = self.index.get(&record.key()).copied();
        let participant = slot
            .and_then(|slot| self.buckets[slot].occupants.pop())
            .ok_or(ArenaError::EmptyBucket { record })?;
        self.total -= 1;
        Ok(participant)
    }

    /// Number of participants currently holding `record`
    pub fn size(&self, record: Record) -> usize {
        self.index
            .get(&record.key())
            .map(|&slot| self.buckets[slot].occupants.len())
            .unwrap_or(0)
    }

    /// Snapshot of all bucket records in first-seen order, empty ones included
    pub fn records(&self) -> Vec<Record> {
        self.buckets.iter().map(|bucket| bucket.record).collect()
    }

    /// Running participant count
    pub fn total(&self) -> usize {
        self.total
    }

    /// Sum of all bucket sizes, recomputed from scratch.
    ///
    /// Always equal to [`BucketStore::total`].
    pub fn occupancy(&self) -> usize {
        self.buckets.iter().map(|bucket| bucket.occupants.len()).sum()
    }

    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Iterate over buckets in first-seen order
    pub fn iter(&self) -> impl Iterator<Item = (Record, &[Participant])> {
        self.buckets
            .iter()
            .map(|bucket| (bucket.record, bucket.occupants.as_slice()))
    }
}

impl Extend<Participant> for BucketStore {
    fn extend<I: IntoIterator<Item = Participant>>(&mut self, iter: I) {
        for participant in iter {
            self.insert(participant);
        }
    }
}

impl FromIterator<Participant> for BucketStore {
    fn from_iter<I: IntoIterator<Item = Participant>>(iter: I) -> Self {
        let mut store = BucketStore::new();
        store.extend(iter);
        store
    }
}

#[cfg(test)]
#[path = "bucket_tests.rs"]
mod tests;
