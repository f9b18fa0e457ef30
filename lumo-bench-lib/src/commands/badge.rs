use super::Host;
use crate::Result;
use crate::artifacts::{read_json, write_json};
use crate::ranking::Summary;
use crate::reports::{edition_badges, overall_badge};
use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use ohno::app_err;
use std::io::Write;

/// File name of the overall badge
pub const OVERALL_BADGE_FILE: &str = "badge.json";

#[derive(Parser, Debug)]
pub struct BadgeArgs {
    /// Summary written by the analyze command
    #[arg(value_name = "SUMMARY_JSON")]
    pub summary: Utf8PathBuf,
}

/// Write shields.io badges for a summary, next to the summary file.
pub fn generate_badges<H: Host>(host: &mut H, args: &BadgeArgs) -> Result<()> {
    if !args.summary.is_file() {
        return Err(app_err!("summary not found: {}", args.summary));
    }

    let summary: Summary = read_json(&args.summary)?;
    let output_dir = args.summary.parent().map(Utf8Path::to_path_buf).unwrap_or_default();

    let badge_path = output_dir.join(OVERALL_BADGE_FILE);
    write_json(&badge_path, &overall_badge(&summary))?;
    let _ = writeln!(host.output(), "Badge JSON written to {badge_path}");

    let badges = edition_badges(&summary);
    for (edition, badge) in &badges {
        write_json(&output_dir.join(format!("badge-{edition}.json")), badge)?;
    }
    let _ = writeln!(host.output(), "Generated badges for {} editions", badges.len());

    Ok(())
}
