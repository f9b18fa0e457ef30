use super::common::{self, NOT_AVAILABLE};
use crate::Result;
use crate::metrics::CompletedRun;
use crate::ranking::{Aggregation, Axis, EditionStatus, OverviewRow, RankEntry};
use chrono::NaiveDateTime;
use core::fmt::Write;

/// Presentation settings for the Markdown report.
#[derive(Debug, Clone)]
pub struct MarkdownOptions<'a> {
    pub title: &'a str,
    pub footer: &'a str,
    pub medal_count: usize,
    pub leaderboard_size: usize,
    pub error_detail_limit: usize,
}

pub fn generate<W: Write>(aggregation: &Aggregation, options: &MarkdownOptions<'_>, generated_at: NaiveDateTime, writer: &mut W) -> Result<()> {
    let overview = aggregation.overview();

    writeln!(writer, "# {}", options.title)?;
    writeln!(writer)?;
    writeln!(writer, "*Generated: {}*", generated_at.format("%Y-%m-%d %H:%M:%S"))?;
    writeln!(writer)?;

    write_summary_table(aggregation, &overview, options, writer)?;

    if aggregation.has_usable_results() {
        write_leaderboards(aggregation, options, writer)?;
    } else {
        writeln!(writer, "> **No usable results**: no edition completed with a score.")?;
        writeln!(writer)?;
    }

    writeln!(writer, "## Edition Details")?;
    writeln!(writer)?;
    for row in &overview {
        write_details(row, options, writer)?;
    }

    if aggregation.has_usable_results() {
        write_recommendations(aggregation, writer)?;
    }

    writeln!(writer, "---")?;
    writeln!(writer, "*{}*", options.footer)?;
    Ok(())
}

fn write_summary_table<W: Write>(aggregation: &Aggregation, overview: &[OverviewRow<'_>], options: &MarkdownOptions<'_>, writer: &mut W) -> Result<()> {
    writeln!(writer, "## Summary")?;
    writeln!(writer)?;
    writeln!(writer, "| Edition | Score | TPS (1m) | Startup | Memory | Errors |")?;
    writeln!(writer, "|---------|-------|----------|---------|--------|--------|")?;

    for row in overview {
        let Some(run) = row.completed() else {
            writeln!(writer, "| {} | {NOT_AVAILABLE} | {NOT_AVAILABLE} | {NOT_AVAILABLE} | {NOT_AVAILABLE} | - |", row.edition)?;
            continue;
        };

        let edition = match common::medal(aggregation.rankings(), row.edition, options.medal_count) {
            Some(medal) => format!("{medal} {}", row.edition),
            None => row.edition.to_string(),
        };

        writeln!(
            writer,
            "| {edition} | {} | {} | {} | {} | {} |",
            common::number_or_na(run.score),
            common::or_na(run.tps.tps_1m.map(|tps| format!("{tps:.1}"))),
            common::or_na(run.startup_time_s.map(|s| format!("{s:.1}s"))),
            common::or_na_with_unit(run.health.memory_used_mb, "MB"),
            run.error_count
        )?;
    }

    writeln!(writer)?;
    Ok(())
}

fn write_leaderboards<W: Write>(aggregation: &Aggregation, options: &MarkdownOptions<'_>, writer: &mut W) -> Result<()> {
    writeln!(writer, "## Rankings")?;
    writeln!(writer)?;

    let rankings = aggregation.rankings();
    let boards: [(&str, Axis, fn(&RankEntry) -> String); 3] = [
        ("Best TPS (Server Performance)", Axis::Throughput, |e| format!("{:.1} TPS", e.value)),
        ("Fastest Startup", Axis::Startup, |e| format!("{:.1}s", e.value)),
        ("Lowest Memory Usage", Axis::Memory, |e| format!("{}MB", e.value)),
    ];

    for (heading, axis, format_value) in boards {
        writeln!(writer, "### {heading}")?;
        writeln!(writer)?;

        let top = rankings.top(axis, options.leaderboard_size);
        if top.is_empty() {
            writeln!(writer, "*No data.*")?;
        }
        for (index, entry) in top.iter().enumerate() {
            writeln!(writer, "{}. **{}**: {}", index + 1, entry.edition, format_value(entry))?;
        }
        writeln!(writer)?;
    }

    Ok(())
}

fn write_details<W: Write>(row: &OverviewRow<'_>, options: &MarkdownOptions<'_>, writer: &mut W) -> Result<()> {
    writeln!(writer, "### {}", common::edition_title(row.edition))?;
    writeln!(writer)?;

    let Some(run) = row.completed() else {
        if row.status() == EditionStatus::Missing {
            writeln!(writer, "*No results were found for this edition.*")?;
        } else {
            writeln!(writer, "*Benchmark did not complete successfully.*")?;
        }
        writeln!(writer)?;
        return Ok(());
    };

    write_metric_table(run, writer)?;

    if !run.errors.is_empty() && options.error_detail_limit > 0 {
        writeln!(writer, "<details>")?;
        writeln!(writer, "<summary>Errors/Warnings</summary>")?;
        writeln!(writer)?;
        writeln!(writer, "```")?;
        for error in run.errors.iter().take(options.error_detail_limit) {
            writeln!(writer, "{error}")?;
        }
        writeln!(writer, "```")?;
        writeln!(writer)?;
        writeln!(writer, "</details>")?;
        writeln!(writer)?;
    }

    Ok(())
}

fn write_metric_table<W: Write>(run: &CompletedRun, writer: &mut W) -> Result<()> {
    let number_with_unit = |value: Option<f64>, unit: &str| common::or_na_with_unit(value.map(common::format_number), unit);

    writeln!(writer, "| Metric | Value |")?;
    writeln!(writer, "|--------|-------|")?;
    writeln!(writer, "| Score | {} |", number_with_unit(run.score, "/100"))?;
    writeln!(writer, "| Startup Time | {} |", number_with_unit(run.startup_time_s, "s"))?;
    writeln!(writer, "| TPS (5s) | {} |", common::number_or_na(run.tps.tps_5s))?;
    writeln!(writer, "| TPS (1m) | {} |", common::number_or_na(run.tps.tps_1m))?;
    writeln!(writer, "| TPS (5m) | {} |", common::number_or_na(run.tps.tps_5m))?;
    writeln!(writer, "| CPU (Process) | {} |", number_with_unit(run.health.cpu_process, "%"))?;
    writeln!(writer, "| Memory Used | {} |", common::or_na_with_unit(run.health.memory_used_mb, "MB"))?;
    writeln!(writer, "| Avg Tick | {} |", number_with_unit(run.tick_times.avg_tick_ms, "ms"))?;
    writeln!(writer, "| Max Tick | {} |", number_with_unit(run.tick_times.max_tick_ms, "ms"))?;
    writeln!(writer, "| Errors | {} |", run.error_count)?;
    writeln!(writer)?;
    Ok(())
}

fn write_recommendations<W: Write>(aggregation: &Aggregation, writer: &mut W) -> Result<()> {
    let best = aggregation.best();

    writeln!(writer, "## Recommendations")?;
    writeln!(writer)?;

    if let Some(edition) = &best.overall {
        writeln!(writer, "- **Best Overall**: {edition} edition provides the best balance of performance and stability.")?;
    }
    if let Some(edition) = &best.memory {
        writeln!(writer, "- **Low Memory Systems**: {edition} edition uses the least memory.")?;
    }
    if let Some(edition) = &best.startup {
        writeln!(writer, "- **Quick Loading**: {edition} edition has the fastest startup time.")?;
    }

    writeln!(writer)?;
    Ok(())
}
