//! Final record distribution: counts, shares and percentiles

use serde::{Deserialize, Serialize};

use crate::bucket::BucketStore;
use crate::error::ArenaResult;
use crate::record::Record;

/// One non-empty final bucket
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DistributionRow {
    pub wins: u16,
    pub losses: u16,
    /// Participants that finished on this record
    pub count: usize,
    /// Unrounded share of the population, 0.0 to 1.0
    pub fraction: f64,
    /// Share of the population in percent, rounded to two decimals
    pub percent: f64,
    /// Cumulative share up to and including this record, in percent, rounded to two decimals
    pub percentile: f64,
}

impl DistributionRow {
    pub fn record(&self) -> Record {
        Record::new(self.wins, self.losses)
    }
}

/// How a population is spread over records, in ascending record order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Distribution {
    population: usize,
    rows: Vec<DistributionRow>,
}

impl Distribution {
    /// Project a store onto its distribution. The store is only read.
    pub fn from_store(store: &BucketStore) -> ArenaResult<Self> {
        let mut records = store.records();
        records.sort();
        for pair in records.windows(2) {
            pair[0].strict_cmp(&pair[1])?;
        }

        let population = store.total();
        let mut rows = Vec::new();
        let mut cumulative = 0.0;

        for record in records {
            let count = store.size(record);
            if count == 0 {
                continue;
            }

            let fraction = count as f64 / population as f64;
            cumulative += fraction;

            rows.push(DistributionRow {
                wins: record.wins,
                losses: record.losses,
                count,
                fraction,
                percent: round_percent(fraction),
                percentile: round_percent(cumulative),
            });
        }

        Ok(Self { population, rows })
    }

    pub fn population(&self) -> usize {
        self.population
    }

    pub fn rows(&self) -> &[DistributionRow] {
        &self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Row for a specific record, if anyone finished there
    pub fn row(&self, record: Record) -> Option<&DistributionRow> {
        self.rows.iter().find(|row| row.record() == record)
    }

    /// Expected number of wins for a single participant
    pub fn mean_wins(&self) -> f64 {
        if self.population == 0 {
            return 0.0;
        }
        let total_wins: usize = self
            .rows
            .iter()
            .map(|row| row.wins as usize * row.count)
            .sum();
        total_wins as f64 / self.population as f64
    }
}

/// Scale a 0..1 share to percent and round to two decimals.
fn round_percent(fraction: f64) -> f64 {
    (fraction * 10000.0).round() / 100.0
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
