use super::{EditionName, ordered_map};
use crate::metrics::{MetricsRecord, RunStatus};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Condensed view of an aggregation, as consumed by badge and report generators.
///
/// The serialized shape is a stable contract: `editions` is a map in encounter
/// order and every "none" selection is written as `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub timestamp: NaiveDateTime,

    #[serde(with = "ordered_map")]
    pub editions: Vec<(EditionName, EditionSummary)>,

    pub best: BestOf,
}

impl Summary {
    #[must_use]
    pub fn edition(&self, name: &str) -> Option<&EditionSummary> {
        self.editions.iter().find(|(n, _)| n == name).map(|(_, summary)| summary)
    }

    /// Score of the best overall edition, if there is one and it was scored.
    #[must_use]
    pub fn best_score(&self) -> Option<f64> {
        self.best.overall.as_deref().and_then(|name| self.edition(name)).and_then(|e| e.score)
    }
}

/// Per-edition fields of a [`Summary`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EditionSummary {
    pub score: Option<f64>,
    pub tps: Option<f64>,
    pub memory_mb: Option<u64>,
    pub startup_s: Option<f64>,
    pub status: RunStatus,
}

impl From<&MetricsRecord> for EditionSummary {
    fn from(record: &MetricsRecord) -> Self {
        Self {
            score: record.score(),
            tps: record.tps_1m(),
            memory_mb: record.memory_used_mb(),
            startup_s: record.startup_time_s(),
            status: record.status(),
        }
    }
}

/// The first entry of each axis ranking; `None` when the ranking is empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BestOf {
    pub overall: Option<EditionName>,
    pub tps: Option<EditionName>,
    pub memory: Option<EditionName>,
    pub startup: Option<EditionName>,
}
