use super::common;
use crate::ranking::Summary;
use serde::{Deserialize, Serialize};
use strum::Display;

/// Label of the badge advertising the best overall edition.
pub const OVERALL_LABEL: &str = "benchmark";

/// Badge color, by score band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum BadgeColor {
    BrightGreen,
    Green,
    YellowGreen,
    Yellow,
    Orange,
    Red,
}

impl BadgeColor {
    #[must_use]
    pub fn for_score(score: f64) -> Self {
        match score {
            s if s >= 90.0 => Self::BrightGreen,
            s if s >= 80.0 => Self::Green,
            s if s >= 70.0 => Self::YellowGreen,
            s if s >= 60.0 => Self::Yellow,
            s if s >= 50.0 => Self::Orange,
            _ => Self::Red,
        }
    }
}

/// A shields.io endpoint badge (schema version 1).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Badge {
    pub schema_version: u8,
    pub label: String,
    pub message: String,
    pub color: BadgeColor,
}

impl Badge {
    fn new(label: impl Into<String>, message: String, score: Option<f64>) -> Self {
        Self {
            schema_version: 1,
            label: label.into(),
            message,
            color: BadgeColor::for_score(score.unwrap_or(0.0)),
        }
    }
}

/// The badge for the best overall edition, or a `none: N/A` badge when there is none.
#[must_use]
pub fn overall_badge(summary: &Summary) -> Badge {
    let score = summary.best_score();
    let message = match (&summary.best.overall, score) {
        (Some(best), Some(score)) => format!("{best}: {}/100", common::format_number(score)),
        (Some(best), None) => format!("{best}: {}", common::NOT_AVAILABLE),
        (None, _) => format!("none: {}", common::NOT_AVAILABLE),
    };
    Badge::new(OVERALL_LABEL, message, score)
}

/// One badge per edition in the summary, in summary order.
#[must_use]
pub fn edition_badges(summary: &Summary) -> Vec<(&str, Badge)> {
    summary
        .editions
        .iter()
        .map(|(edition, entry)| {
            let message = common::or_na_with_unit(entry.score.map(common::format_number), "/100");
            (edition.as_str(), Badge::new(edition.as_str(), message, entry.score))
        })
        .collect()
}
