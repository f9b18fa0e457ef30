use crate::metrics::MetricsRecord;
use core::cmp::Ordering;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// Direction in which an axis is sorted, best value first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortDirection {
    /// Lower values are better.
    Ascending,

    /// Higher values are better.
    Descending,
}

/// A ranking dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, EnumIter, Display, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Axis {
    /// Ticks per second over the 1-minute window.
    Throughput,

    /// Seconds until the server was ready.
    Startup,

    /// Memory in use, in megabytes.
    Memory,

    /// Overall score.
    Score,
}

impl Axis {
    #[must_use]
    pub const fn direction(self) -> SortDirection {
        match self {
            Self::Throughput | Self::Score => SortDirection::Descending,
            Self::Startup | Self::Memory => SortDirection::Ascending,
        }
    }

    /// The value this axis reads from a record.
    ///
    /// Returns `None` for records without a transcript and for records where
    /// the field is absent; a present zero is a real value.
    #[must_use]
    pub fn value(self, record: &MetricsRecord) -> Option<f64> {
        match self {
            Self::Throughput => record.tps_1m(),
            Self::Startup => record.startup_time_s(),
            #[expect(clippy::cast_precision_loss, reason = "memory figures in MB are far below 2^52")]
            Self::Memory => record.memory_used_mb().map(|mb| mb as f64),
            Self::Score => record.score(),
        }
    }

    /// Order two values so that the better one comes first.
    #[must_use]
    pub fn compare(self, a: f64, b: f64) -> Ordering {
        match self.direction() {
            SortDirection::Ascending => a.total_cmp(&b),
            SortDirection::Descending => b.total_cmp(&a),
        }
    }
}
