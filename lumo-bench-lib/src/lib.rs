#![doc(hidden)]
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core library for lumo-bench
//!
//! This library holds all functionality for the lumo-bench tool, which turns the
//! log transcripts of benchmark runs into scored metric records and compares
//! those records across editions.
//!
//! # Module Organization
//!
//! - [`metrics`]: Transcript extraction and the persisted metrics record
//! - [`scoring`]: Penalty-based scoring of a single record
//! - [`ranking`]: Cross-edition rankings, best-of selection and overview rows
//! - [`artifacts`]: Loading and saving persisted records
//! - [`reports`]: Markdown, JSON, badge and console rendering
//! - [`commands`]: Command-line interface and orchestration

pub type Result<T, E = ohno::AppError> = core::result::Result<T, E>;

pub mod artifacts;
pub mod metrics;
pub mod ranking;
pub mod scoring;

#[cfg(any(debug_assertions, test))]
pub mod commands;
#[cfg(not(any(debug_assertions, test)))]
mod commands;

#[cfg(any(debug_assertions, test))]
pub mod reports;
#[cfg(not(any(debug_assertions, test)))]
mod reports;

pub use crate::commands::{Host, run};
