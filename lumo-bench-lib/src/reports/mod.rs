//! Report generation for aggregated benchmark results
//!
//! This module renders an [`Aggregation`](crate::ranking::Aggregation) and its
//! [`Summary`](crate::ranking::Summary) for people and for other tools.
//!
//! # Implementation Model
//!
//! Four report generators are provided:
//! - **Markdown**: The full comparison report with summary table, medals,
//!   leaderboards, per-edition details and recommendations
//! - **JSON**: The condensed summary and the raw per-edition records
//! - **Badge**: shields.io endpoint badges derived from a summary
//! - **Console**: A short colored summary for the terminal
//!
//! Text generators write into any `core::fmt::Write`, so callers decide where
//! the output ends up. None of them recompute rankings: they only read what
//! the aggregation already decided.
//!
//! Common functionality is centralized in the `common` module:
//! - Number formatting compatible with persisted results
//! - Medal selection from the score ranking
//! - Edition headings and "N/A" fallbacks

mod badge;
mod common;
mod console;
mod json;
mod markdown;

pub use badge::{Badge, BadgeColor, OVERALL_LABEL, edition_badges, overall_badge};
pub use common::format_number;
pub use console::generate as generate_console;
pub use json::{generate_raw as generate_raw_json, generate_summary as generate_summary_json};
pub use markdown::{MarkdownOptions, generate as generate_markdown};
