use super::{Axis, EditionName, EditionSet};
use crate::metrics::RunStatus;
use serde::Serialize;
use strum::IntoEnumIterator;

const LOG_TARGET: &str = "   ranking";

/// One edition's position on an axis.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankEntry {
    pub edition: EditionName,
    pub value: f64,
}

/// Sorted rankings for every axis, best entry first.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RankingTable {
    throughput: Vec<RankEntry>,
    startup: Vec<RankEntry>,
    memory: Vec<RankEntry>,
    score: Vec<RankEntry>,
}

impl RankingTable {
    /// Rank every completed edition that has a value on each axis.
    #[must_use]
    pub fn build(editions: &EditionSet) -> Self {
        let mut table = Self::default();
        for axis in Axis::iter() {
            *table.entries_mut(axis) = rank_axis(editions, axis);
        }
        table
    }

    /// The full ranking for `axis`.
    #[must_use]
    pub fn axis(&self, axis: Axis) -> &[RankEntry] {
        match axis {
            Axis::Throughput => &self.throughput,
            Axis::Startup => &self.startup,
            Axis::Memory => &self.memory,
            Axis::Score => &self.score,
        }
    }

    /// The best `n` entries for `axis`, or fewer if the ranking is shorter.
    #[must_use]
    pub fn top(&self, axis: Axis, n: usize) -> &[RankEntry] {
        let entries = self.axis(axis);
        &entries[..n.min(entries.len())]
    }

    /// The best entry for `axis`, if any edition was ranked.
    #[must_use]
    pub fn best(&self, axis: Axis) -> Option<&RankEntry> {
        self.axis(axis).first()
    }

    /// The 0-based position of `edition` on `axis`.
    #[must_use]
    pub fn position(&self, axis: Axis, edition: &str) -> Option<usize> {
        self.axis(axis).iter().position(|entry| entry.edition == edition)
    }

    const fn entries_mut(&mut self, axis: Axis) -> &mut Vec<RankEntry> {
        match axis {
            Axis::Throughput => &mut self.throughput,
            Axis::Startup => &mut self.startup,
            Axis::Memory => &mut self.memory,
            Axis::Score => &mut self.score,
        }
    }
}

fn rank_axis(editions: &EditionSet, axis: Axis) -> Vec<RankEntry> {
    let mut entries: Vec<_> = editions
        .iter()
        .filter(|(_, record)| record.status() == RunStatus::Completed)
        .filter_map(|(name, record)| {
            axis.value(record).map(|value| RankEntry {
                edition: name.to_string(),
                value,
            })
        })
        .collect();

    // sort_by is stable, ties keep encounter order
    entries.sort_by(|a, b| axis.compare(a.value, b.value));

    log::debug!(target: LOG_TARGET, "Ranked {} edition(s) by {axis}", entries.len());
    entries
}
