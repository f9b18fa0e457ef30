//! Command-line interface and orchestration for lumo-bench
//!
//! This module implements the CLI commands and wires the extraction, scoring,
//! ranking and reporting modules together. It handles argument parsing,
//! configuration management, logging setup, and the high-level workflows.
//!
//! # Implementation Model
//!
//! ## Commands
//!
//! - **parse**: Extract the metrics of one log transcript, score them and
//!   persist the record as JSON; a missing log file yields a `no_logs` record
//! - **analyze**: Load the persisted record of every edition, rank them and
//!   write the Markdown report, the JSON summary and the raw results
//! - **badge**: Turn a JSON summary into shields.io endpoint badges
//! - **init**: Generate a default configuration file
//! - **validate**: Check a configuration file
//!
//! ## Execution Flow
//!
//! The `run` function parses command-line arguments using clap, sets up
//! logging from the global `--log-level` option and routes to the appropriate
//! command handler. All output goes through a [`Host`], so commands can be
//! driven from tests without touching the real terminal.
//!
//! Configuration is a TOML file (`bench.toml` by default) controlling report
//! presentation, artifact naming and the list of expected editions.

mod analyze;
mod badge;
mod common;
mod config;
mod host;
mod init;
mod parse;
mod run;
mod validate;

#[cfg(debug_assertions)]
pub use config::Config;

pub use analyze::{AnalyzeArgs, RAW_RESULTS_FILE, SUMMARY_JSON_FILE, SUMMARY_MARKDOWN_FILE, analyze_benchmarks};
pub use badge::{BadgeArgs, OVERALL_BADGE_FILE, generate_badges};
pub use common::{ColorMode, LogLevel};
pub use host::Host;
pub use init::{InitArgs, init_config};
pub use parse::{ParseArgs, parse_log};
pub use run::run;
pub use validate::{ValidateArgs, validate_config};
