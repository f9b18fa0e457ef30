use regex::{Captures, Regex};
use std::sync::OnceLock;

const LOG_TARGET: &str = " extractor";

/// A named pattern that locates one metric family in a transcript.
///
/// The pattern is compiled on first use. `parse` turns the captures of the
/// first match into a typed value; returning `None` makes the whole family
/// absent, which is how partial or unparseable matches are handled.
#[derive(Debug)]
pub struct ExtractionRule<T> {
    pub name: &'static str,
    pub pattern: &'static str,
    parse: fn(&Captures<'_>) -> Option<T>,
    regex: OnceLock<Regex>,
}

impl<T> ExtractionRule<T> {
    #[must_use]
    pub const fn new(name: &'static str, pattern: &'static str, parse: fn(&Captures<'_>) -> Option<T>) -> Self {
        Self {
            name,
            pattern,
            parse,
            regex: OnceLock::new(),
        }
    }

    fn regex(&self) -> &Regex {
        self.regex
            .get_or_init(|| Regex::new(self.pattern).expect("extraction rule patterns are static and must compile"))
    }

    /// Apply the rule to `text`, returning the value parsed from the first match.
    pub fn find(&self, text: &str) -> Option<T> {
        let Some(caps) = self.regex().captures(text) else {
            log::debug!(target: LOG_TARGET, "Rule '{}' did not match", self.name);
            return None;
        };

        let value = (self.parse)(&caps);
        if value.is_none() {
            log::debug!(target: LOG_TARGET, "Rule '{}' matched '{}' but could not be parsed", self.name, &caps[0]);
        }

        value
    }

    /// Count every non-overlapping occurrence of the pattern in `text`.
    pub fn count(&self, text: &str) -> usize {
        let count = self.regex().find_iter(text).count();
        log::debug!(target: LOG_TARGET, "Rule '{}' matched {count} time(s)", self.name);
        count
    }
}

/// Parse capture group `index` as a number of type `N`.
pub(super) fn capture<N: core::str::FromStr>(caps: &Captures<'_>, index: usize) -> Option<N> {
    caps.get(index)?.as_str().parse().ok()
}
