//! Scoring of a single benchmark run
//!
//! A run starts at [`MAX_SCORE`] and loses points through three independent,
//! additive penalties: throughput below the target TPS, average tick time
//! above the tick budget, and every reported error. The sum of the penalties
//! is subtracted, the result is clamped to `[0, 100]` and rounded to one
//! decimal place.
//!
//! Absent metrics never contribute a penalty. Runs without a transcript are
//! not scored at all.

mod scorer;

pub use scorer::{
    ERROR_PENALTY, MAX_SCORE, ScoreBreakdown, TICK_BUDGET_MS, TICK_PENALTY_PER_MS, TPS_PENALTY_PER_TICK, TPS_TARGET, apply_score,
    penalties, score,
};
