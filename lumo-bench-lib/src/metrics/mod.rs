//! Metric extraction from benchmark log transcripts
//!
//! This module turns the raw text captured from one benchmark run into a
//! [`MetricsRecord`], the structured unit that is persisted per edition and
//! consumed by scoring and ranking.
//!
//! # Implementation Model
//!
//! Each metric family is located by its own named [`ExtractionRule`]: a
//! case-insensitive pattern plus a parser that turns the captures into a typed
//! value. Rules are independent of one another, each one reports the first
//! match only, and each yields an `Option` so that "pattern not found" and
//! "pattern found but unparseable" both collapse to an absent field rather than
//! to a zero or an error.
//!
//! Error and warning lines are not pattern-matched as a whole; they are
//! collected by a line scanner (see [`scan_errors`]) that filters out a fixed
//! set of benign notices and caps the result.
//!
//! The [`extract`] function applies every rule to a transcript. A run without
//! a transcript produces a [`MetricsRecord::NoLogs`] record, which carries only
//! a timestamp.

mod error_scan;
mod extraction_rule;
mod extractor;
mod metrics_record;

pub use error_scan::{BENIGN_PATTERNS, MAX_ERROR_LINE_CHARS, MAX_ERRORS, SEVERITY_MARKERS, scan_errors};
pub use extraction_rule::ExtractionRule;
pub use extractor::{extract, extract_at};
pub use metrics_record::{ChunkStats, CompletedRun, HealthStats, MetricsRecord, RunStatus, TickTimes, TpsWindows};
