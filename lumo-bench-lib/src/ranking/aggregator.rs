use super::{Axis, BestOf, EditionName, EditionSet, EditionSummary, OverviewRow, RankingTable, Summary};
use chrono::NaiveDateTime;

const LOG_TARGET: &str = "aggregator";

/// An immutable snapshot of edition records together with everything derived from it.
#[derive(Debug, Clone, PartialEq)]
pub struct Aggregation {
    editions: EditionSet,
    rankings: RankingTable,
    expected: Vec<EditionName>,
}

/// Rank a set of records.
///
/// `expected` lists editions that should be present; any of them missing from
/// `editions` shows up as a placeholder row in [`Aggregation::overview`].
#[must_use]
pub fn aggregate(editions: EditionSet, expected: &[EditionName]) -> Aggregation {
    let rankings = RankingTable::build(&editions);

    let missing: Vec<_> = expected.iter().filter(|name| !editions.contains(name)).cloned().collect();
    if !missing.is_empty() {
        log::info!(target: LOG_TARGET, "No results for expected edition(s): {}", missing.join(", "));
    }

    log::debug!(
        target: LOG_TARGET,
        "Aggregated {} edition(s), {} scored",
        editions.len(),
        rankings.axis(Axis::Score).len()
    );

    Aggregation {
        editions,
        rankings,
        expected: missing,
    }
}

impl Aggregation {
    #[must_use]
    pub const fn editions(&self) -> &EditionSet {
        &self.editions
    }

    #[must_use]
    pub const fn rankings(&self) -> &RankingTable {
        &self.rankings
    }

    /// Expected editions that had no record.
    #[must_use]
    pub fn missing(&self) -> &[EditionName] {
        &self.expected
    }

    /// False when no edition was scored, i.e. there is nothing to compare.
    #[must_use]
    pub fn has_usable_results(&self) -> bool {
        !self.rankings.axis(Axis::Score).is_empty()
    }

    #[must_use]
    pub fn best(&self) -> BestOf {
        let best = |axis| self.rankings.best(axis).map(|entry| entry.edition.clone());
        BestOf {
            overall: best(Axis::Score),
            tps: best(Axis::Throughput),
            memory: best(Axis::Memory),
            startup: best(Axis::Startup),
        }
    }

    #[must_use]
    pub fn summary(&self, timestamp: NaiveDateTime) -> Summary {
        Summary {
            timestamp,
            editions: self
                .editions
                .iter()
                .map(|(name, record)| (name.to_string(), EditionSummary::from(record)))
                .collect(),
            best: self.best(),
        }
    }

    /// Rows for listings: every recorded edition by score, best first, then
    /// placeholders for expected editions without a record.
    ///
    /// Editions without a score sort as if they scored zero; ties keep their
    /// encounter order.
    #[must_use]
    pub fn overview(&self) -> Vec<OverviewRow<'_>> {
        let mut rows: Vec<_> = self
            .editions
            .iter()
            .map(|(edition, record)| OverviewRow {
                edition,
                record: Some(record),
            })
            .collect();

        rows.sort_by(|a, b| Axis::Score.compare(a.score().unwrap_or(0.0), b.score().unwrap_or(0.0)));

        rows.extend(self.expected.iter().map(|edition| OverviewRow {
            edition: edition.as_str(),
            record: None,
        }));
        rows
    }
}
