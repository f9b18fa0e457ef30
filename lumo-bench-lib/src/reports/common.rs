//! Common utilities shared across report generators.

use crate::ranking::{Axis, RankingTable};
use core::fmt::Display;

/// Medals awarded to the top of the score ranking, best first.
pub const MEDALS: [&str; 3] = ["🥇", "🥈", "🥉"];

/// Placeholder for a value that is not available.
pub const NOT_AVAILABLE: &str = "N/A";

/// The medal for `edition`, if it is among the first `medal_count` entries of the score ranking.
pub fn medal(rankings: &RankingTable, edition: &str, medal_count: usize) -> Option<&'static str> {
    rankings
        .top(Axis::Score, medal_count.min(MEDALS.len()))
        .iter()
        .position(|entry| entry.edition == edition)
        .map(|index| MEDALS[index])
}

/// Format a real number the way persisted results show it.
///
/// Whole numbers keep one decimal place (`100.0`); everything else uses the
/// shortest representation that reads back to the same value.
pub fn format_number(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e16 {
        format!("{value:.1}")
    } else {
        format!("{value}")
    }
}

/// Format an optional value, falling back to [`NOT_AVAILABLE`].
pub fn or_na<T: Display>(value: Option<T>) -> String {
    value.map_or_else(|| NOT_AVAILABLE.to_string(), |v| v.to_string())
}

/// Format an optional value with a unit suffix, falling back to [`NOT_AVAILABLE`] without a unit.
pub fn or_na_with_unit<T: Display>(value: Option<T>, unit: &str) -> String {
    value.map_or_else(|| NOT_AVAILABLE.to_string(), |v| format!("{v}{unit}"))
}

/// Format an optional real number with [`format_number`], falling back to [`NOT_AVAILABLE`].
pub fn number_or_na(value: Option<f64>) -> String {
    value.map_or_else(|| NOT_AVAILABLE.to_string(), format_number)
}

/// Turn an edition name into a heading: dashes become spaces and every word is capitalized.
pub fn edition_title(edition: &str) -> String {
    let mut title = String::with_capacity(edition.len());
    let mut previous_is_alpha = false;

    for c in edition.chars() {
        let c = if c == '-' { ' ' } else { c };
        if c.is_alphabetic() {
            if previous_is_alpha {
                title.extend(c.to_lowercase());
            } else {
                title.extend(c.to_uppercase());
            }
        } else {
            title.push(c);
        }
        previous_is_alpha = c.is_alphabetic();
    }

    title
}
