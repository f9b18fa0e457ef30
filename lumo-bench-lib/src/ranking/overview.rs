use crate::metrics::{CompletedRun, MetricsRecord, RunStatus};
use strum::Display;

/// How an edition appears in an overview listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[strum(serialize_all = "snake_case")]
pub enum EditionStatus {
    /// The run completed and its metrics are available.
    Completed,

    /// The run produced no transcript.
    NoLogs,

    /// The edition was expected but no record exists for it.
    Missing,
}

impl From<RunStatus> for EditionStatus {
    fn from(status: RunStatus) -> Self {
        match status {
            RunStatus::Completed => Self::Completed,
            RunStatus::NoLogs => Self::NoLogs,
        }
    }
}

/// One row of an overview listing.
///
/// Rows for editions without usable metrics are placeholders: every metric
/// accessor resolves to `None`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverviewRow<'a> {
    pub edition: &'a str,
    pub record: Option<&'a MetricsRecord>,
}

impl<'a> OverviewRow<'a> {
    #[must_use]
    pub fn status(&self) -> EditionStatus {
        self.record.map_or(EditionStatus::Missing, |record| record.status().into())
    }

    /// The completed run behind this row, or `None` for a placeholder.
    #[must_use]
    pub fn completed(&self) -> Option<&'a CompletedRun> {
        self.record.and_then(MetricsRecord::as_completed)
    }

    #[must_use]
    pub fn is_placeholder(&self) -> bool {
        self.completed().is_none()
    }

    #[must_use]
    pub fn score(&self) -> Option<f64> {
        self.record.and_then(MetricsRecord::score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_missing_row_is_placeholder() {
        let row = OverviewRow {
            edition: "ghost",
            record: None,
        };
        assert_eq!(row.status(), EditionStatus::Missing);
        assert!(row.is_placeholder());
        assert!(row.score().is_none());
    }

    #[test]
    fn test_no_logs_row_is_placeholder() {
        let timestamp = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap().and_hms_opt(0, 0, 0).unwrap();
        let record = MetricsRecord::no_logs(timestamp);
        let row = OverviewRow {
            edition: "c",
            record: Some(&record),
        };
        assert_eq!(row.status(), EditionStatus::NoLogs);
        assert!(row.is_placeholder());
        assert!(row.completed().is_none());
    }

    #[test]
    fn test_status_display() {
        assert_eq!(EditionStatus::NoLogs.to_string(), "no_logs");
        assert_eq!(EditionStatus::Missing.to_string(), "missing");
    }
}
