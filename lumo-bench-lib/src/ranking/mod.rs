//! Cross-edition rankings and summaries
//!
//! This module compares the scored records of many editions. It never
//! modifies a record: [`aggregate`] takes an immutable snapshot of the records
//! as an [`EditionSet`] and derives everything else from it in one pass.
//!
//! # Implementation Model
//!
//! - An [`Axis`] is one ranking dimension (throughput, startup, memory, score)
//!   together with the record field it reads and its sort direction.
//! - The [`RankingTable`] holds one sorted sequence per axis. Only completed
//!   records with the axis field present take part; sorting is stable, so
//!   editions with equal values keep their encounter order.
//! - The [`Aggregation`] bundles the snapshot with its rankings and derives
//!   the best-of selections ([`BestOf`]), the condensed [`Summary`] consumed by
//!   badge and report generators, and the [`OverviewRow`]s used for listings,
//!   which also carry placeholder rows for editions that are expected but were
//!   never recorded.
//!
//! Top-N views are plain slices of the sorted rankings, so they are always
//! consistent with the best-of selections of the same aggregation.

mod aggregator;
mod axis;
mod edition_set;
mod ordered_map;
mod overview;
mod ranking_table;
mod summary;

pub use aggregator::{Aggregation, aggregate};
pub use axis::{Axis, SortDirection};
pub use edition_set::{EditionName, EditionSet};
pub use overview::{EditionStatus, OverviewRow};
pub use ranking_table::{RankEntry, RankingTable};
pub use summary::{BestOf, EditionSummary, Summary};
