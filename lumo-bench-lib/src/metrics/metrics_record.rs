use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display};

/// Terminal state of one benchmark run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, AsRefStr)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum RunStatus {
    /// A transcript was available and has been extracted.
    Completed,

    /// The run produced no transcript.
    NoLogs,
}

/// Structured metrics for one edition's run.
///
/// A record is created once per transcript and never mutated afterwards. The
/// `status` tag decides which fields exist: a `no_logs` record carries nothing
/// but its timestamp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum MetricsRecord {
    Completed(CompletedRun),
    NoLogs { timestamp: NaiveDateTime },
}

/// Metrics extracted from a transcript that was available.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletedRun {
    pub timestamp: NaiveDateTime,

    /// Seconds until the server reported it was ready.
    pub startup_time_s: Option<f64>,

    #[serde(default)]
    pub tps: TpsWindows,

    #[serde(default)]
    pub health: HealthStats,

    #[serde(default)]
    pub tick_times: TickTimes,

    #[serde(default)]
    pub chunks: ChunkStats,

    /// Trimmed error and warning excerpts in transcript order.
    #[serde(default)]
    pub errors: Vec<String>,

    /// Length of `errors`.
    #[serde(default)]
    pub error_count: usize,

    /// Overall score in `[0, 100]`, filled in by the scorer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
}

/// Ticks-per-second averages over the five reporting windows.
///
/// The extractor fills either all five windows or none of them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TpsWindows {
    pub tps_5s: Option<f64>,
    pub tps_10s: Option<f64>,
    pub tps_1m: Option<f64>,
    pub tps_5m: Option<f64>,
    pub tps_15m: Option<f64>,
}

impl TpsWindows {
    /// Build a fully populated set of windows, ordered 5s, 10s, 1m, 5m, 15m.
    #[must_use]
    pub const fn from_array(values: [f64; 5]) -> Self {
        let [tps_5s, tps_10s, tps_1m, tps_5m, tps_15m] = values;
        Self {
            tps_5s: Some(tps_5s),
            tps_10s: Some(tps_10s),
            tps_1m: Some(tps_1m),
            tps_5m: Some(tps_5m),
            tps_15m: Some(tps_15m),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct HealthStats {
    pub cpu_process: Option<f64>,
    pub cpu_system: Option<f64>,
    pub memory_used_mb: Option<u64>,
    pub memory_max_mb: Option<u64>,
    pub gc_avg_ms: Option<f64>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TickTimes {
    pub avg_tick_ms: Option<f64>,
    pub max_tick_ms: Option<f64>,
    pub min_tick_ms: Option<f64>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ChunkStats {
    pub chunks_loaded: Option<u64>,

    /// Number of spawn-area preparation markers; zero is a real count.
    #[serde(default)]
    pub chunks_generated: u64,
}

impl MetricsRecord {
    /// Create a record for a run that produced no transcript.
    #[must_use]
    pub const fn no_logs(timestamp: NaiveDateTime) -> Self {
        Self::NoLogs { timestamp }
    }

    #[must_use]
    pub const fn status(&self) -> RunStatus {
        match self {
            Self::Completed(_) => RunStatus::Completed,
            Self::NoLogs { .. } => RunStatus::NoLogs,
        }
    }

    #[must_use]
    pub const fn timestamp(&self) -> NaiveDateTime {
        match self {
            Self::Completed(run) => run.timestamp,
            Self::NoLogs { timestamp } => *timestamp,
        }
    }

    /// Returns the extracted metrics, or `None` for a run without a transcript.
    #[must_use]
    pub const fn as_completed(&self) -> Option<&CompletedRun> {
        match self {
            Self::Completed(run) => Some(run),
            Self::NoLogs { .. } => None,
        }
    }

    #[must_use]
    pub fn score(&self) -> Option<f64> {
        self.as_completed().and_then(|run| run.score)
    }

    #[must_use]
    pub fn tps_1m(&self) -> Option<f64> {
        self.as_completed().and_then(|run| run.tps.tps_1m)
    }

    #[must_use]
    pub fn startup_time_s(&self) -> Option<f64> {
        self.as_completed().and_then(|run| run.startup_time_s)
    }

    #[must_use]
    pub fn memory_used_mb(&self) -> Option<u64> {
        self.as_completed().and_then(|run| run.health.memory_used_mb)
    }
}
