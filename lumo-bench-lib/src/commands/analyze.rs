use super::Host;
use super::common::ColorMode;
use super::config::Config;
use crate::Result;
use crate::artifacts::{ArtifactLayout, load_editions};
use crate::ranking::{Aggregation, aggregate};
use crate::reports::{MarkdownOptions, generate_console, generate_markdown, generate_raw_json, generate_summary_json};
use camino::{Utf8Path, Utf8PathBuf};
use chrono::Local;
use clap::Parser;
use ohno::{IntoAppError, bail};
use std::fs;
use std::io::Write;

const LOG_TARGET: &str = "   analyze";

/// Markdown comparison report
pub const SUMMARY_MARKDOWN_FILE: &str = "summary.md";

/// Condensed summary consumed by the badge command
pub const SUMMARY_JSON_FILE: &str = "summary.json";

/// Every edition's full record
pub const RAW_RESULTS_FILE: &str = "raw-results.json";

#[derive(Parser, Debug)]
pub struct AnalyzeArgs {
    /// Directory holding one artifact directory per edition
    #[arg(value_name = "BENCHMARKS_DIR")]
    pub benchmarks_dir: Utf8PathBuf,

    /// Directory receiving the reports
    #[arg(value_name = "OUTPUT_DIR")]
    pub output_dir: Utf8PathBuf,

    /// Path to configuration file (default is `bench.toml`)
    #[arg(long, short = 'c', value_name = "PATH")]
    pub config: Option<Utf8PathBuf>,
}

/// Load every edition's results, rank them and write the reports.
pub fn analyze_benchmarks<H: Host>(host: &mut H, args: &AnalyzeArgs, color: ColorMode) -> Result<()> {
    let config = Config::load(Utf8Path::new("."), args.config.as_ref())?;
    let layout = ArtifactLayout {
        prefix: config.artifact_prefix.clone(),
        suffix: config.results_suffix.clone(),
    };

    let _ = writeln!(host.output(), "Loading benchmarks from {}...", args.benchmarks_dir);
    let editions = load_editions(&args.benchmarks_dir, &layout)?;
    if editions.is_empty() {
        bail!("no benchmark results found in '{}'", args.benchmarks_dir);
    }
    let _ = writeln!(host.output(), "Found {} edition results", editions.len());

    let aggregation = aggregate(editions, &config.expected_editions);
    if !aggregation.has_usable_results() {
        log::warn!(target: LOG_TARGET, "None of the editions completed with a score");
    }

    fs::create_dir_all(&args.output_dir).into_app_err_with(|| format!("unable to create output directory '{}'", args.output_dir))?;
    let written = write_reports(&aggregation, &config, &args.output_dir)?;
    for (label, path) in written {
        let _ = writeln!(host.output(), "{label}: {path}");
    }

    let mut console_output = String::new();
    generate_console(&aggregation, color.use_colors(), &mut console_output)?;
    let _ = write!(host.output(), "{console_output}");

    Ok(())
}

fn write_reports(aggregation: &Aggregation, config: &Config, output_dir: &Utf8Path) -> Result<Vec<(&'static str, Utf8PathBuf)>> {
    let generated_at = Local::now().naive_local();
    let options = MarkdownOptions {
        title: &config.report_title,
        footer: &config.report_footer,
        medal_count: config.medal_count,
        leaderboard_size: config.leaderboard_size,
        error_detail_limit: config.error_detail_limit,
    };

    let mut markdown = String::new();
    generate_markdown(aggregation, &options, generated_at, &mut markdown)?;

    let mut summary = String::new();
    generate_summary_json(&aggregation.summary(generated_at), &mut summary)?;

    let mut raw = String::new();
    generate_raw_json(aggregation.editions(), &mut raw)?;

    let reports = [
        ("Markdown report", SUMMARY_MARKDOWN_FILE, markdown),
        ("JSON summary", SUMMARY_JSON_FILE, summary),
        ("Raw results", RAW_RESULTS_FILE, raw),
    ];

    let mut written = Vec::with_capacity(reports.len());
    for (label, file_name, contents) in reports {
        let path = output_dir.join(file_name);
        fs::write(&path, contents).into_app_err_with(|| format!("unable to write '{path}'"))?;
        log::debug!(target: LOG_TARGET, "Wrote {label} to '{path}'");
        written.push((label, path));
    }

    Ok(written)
}
