use crate::metrics::{CompletedRun, MetricsRecord};

const LOG_TARGET: &str = "    scorer";

/// Score of a run with no penalties.
pub const MAX_SCORE: f64 = 100.0;

/// Ticks per second a healthy server sustains.
pub const TPS_TARGET: f64 = 20.0;

/// Points lost per tick per second below [`TPS_TARGET`] over the 1-minute window.
pub const TPS_PENALTY_PER_TICK: f64 = 5.0;

/// Average tick time at which a server still meets [`TPS_TARGET`].
pub const TICK_BUDGET_MS: f64 = 50.0;

/// Points lost per millisecond of average tick time above [`TICK_BUDGET_MS`].
pub const TICK_PENALTY_PER_MS: f64 = 0.5;

/// Points lost per reported error or warning.
pub const ERROR_PENALTY: f64 = 2.0;

/// The individual penalties that make up a score.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScoreBreakdown {
    pub tps_penalty: f64,
    pub tick_penalty: f64,
    pub error_penalty: f64,
}

impl ScoreBreakdown {
    #[must_use]
    pub fn total(&self) -> f64 {
        self.tps_penalty + self.tick_penalty + self.error_penalty
    }

    /// The final score: penalties subtracted from [`MAX_SCORE`], clamped and
    /// rounded to one decimal place.
    ///
    /// Rounding works on the exact binary value and resolves ties to even, so
    /// `97.25` becomes `97.2`.
    #[must_use]
    pub fn score(&self) -> f64 {
        let clamped = (MAX_SCORE - self.total()).clamp(0.0, MAX_SCORE);
        format!("{clamped:.1}").parse().unwrap_or(clamped)
    }
}

/// Compute the penalties for a completed run.
#[must_use]
pub fn penalties(run: &CompletedRun) -> ScoreBreakdown {
    let tps_penalty = run
        .tps
        .tps_1m
        .map_or(0.0, |tps| ((TPS_TARGET - tps) * TPS_PENALTY_PER_TICK).max(0.0));

    let tick_penalty = run
        .tick_times
        .avg_tick_ms
        .filter(|&avg| avg > TICK_BUDGET_MS)
        .map_or(0.0, |avg| (avg - TICK_BUDGET_MS) * TICK_PENALTY_PER_MS);

    #[expect(clippy::cast_precision_loss, reason = "error counts are capped far below f64 precision")]
    let error_penalty = run.error_count as f64 * ERROR_PENALTY;

    ScoreBreakdown {
        tps_penalty,
        tick_penalty,
        error_penalty,
    }
}

/// Score a record, or `None` if the run produced no transcript.
#[must_use]
pub fn score(record: &MetricsRecord) -> Option<f64> {
    record.as_completed().map(|run| penalties(run).score())
}

/// Return `record` with its score filled in.
///
/// Records without a transcript are returned unchanged.
#[must_use]
pub fn apply_score(record: MetricsRecord) -> MetricsRecord {
    match record {
        MetricsRecord::Completed(mut run) => {
            let breakdown = penalties(&run);
            let score = breakdown.score();
            log::debug!(
                target: LOG_TARGET,
                "Scored {score:.1} (tps -{:.2}, ticks -{:.2}, errors -{:.2})",
                breakdown.tps_penalty,
                breakdown.tick_penalty,
                breakdown.error_penalty
            );
            run.score = Some(score);
            MetricsRecord::Completed(run)
        }
        no_logs @ MetricsRecord::NoLogs { .. } => no_logs,
    }
}
