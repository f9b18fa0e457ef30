use super::badge::BadgeColor;
use super::common;
use crate::Result;
use crate::ranking::{Aggregation, Axis};
use core::fmt::Write;
use owo_colors::OwoColorize;

const RULE: &str = "============================================================";

pub fn generate<W: Write>(aggregation: &Aggregation, use_colors: bool, writer: &mut W) -> Result<()> {
    writeln!(writer)?;
    writeln!(writer, "{RULE}")?;
    if use_colors {
        writeln!(writer, "{}", "BENCHMARK SUMMARY".bold())?;
    } else {
        writeln!(writer, "BENCHMARK SUMMARY")?;
    }
    writeln!(writer, "{RULE}")?;

    let scores = aggregation.rankings().axis(Axis::Score);
    let Some(best) = scores.first() else {
        writeln!(writer)?;
        writeln!(writer, "No usable results: no edition completed with a score.")?;
        return Ok(());
    };

    writeln!(writer)?;
    let best_line = format!("Best Overall: {} (Score: {})", best.edition, common::format_number(best.value));
    if use_colors {
        writeln!(writer, "🏆 {}", best_line.green().bold())?;
    } else {
        writeln!(writer, "🏆 {best_line}")?;
    }

    writeln!(writer)?;
    writeln!(writer, "All Scores:")?;
    for entry in scores {
        let score = format!("{}/100", common::format_number(entry.value));
        if use_colors {
            let colored = match BadgeColor::for_score(entry.value) {
                BadgeColor::BrightGreen | BadgeColor::Green => score.green().to_string(),
                BadgeColor::YellowGreen | BadgeColor::Yellow | BadgeColor::Orange => score.yellow().to_string(),
                BadgeColor::Red => score.red().to_string(),
            };
            writeln!(writer, "  {}: {colored}", entry.edition)?;
        } else {
            writeln!(writer, "  {}: {score}", entry.edition)?;
        }
    }

    Ok(())
}
