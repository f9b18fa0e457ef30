use super::ordered_map;
use crate::metrics::MetricsRecord;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Name of one benchmark configuration, used as the join key across records.
pub type EditionName = String;

/// Records keyed by edition name, in encounter order.
///
/// Encounter order is what breaks ties in rankings, so it is preserved exactly.
/// Inserting a name that is already present replaces its record in place.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EditionSet {
    entries: Vec<(EditionName, MetricsRecord)>,
}

impl EditionSet {
    #[must_use]
    pub const fn new() -> Self {
        Self { entries: Vec::new() }
    }

    /// Insert or replace the record for `name`, returning the previous record if any.
    pub fn insert(&mut self, name: impl Into<EditionName>, record: MetricsRecord) -> Option<MetricsRecord> {
        let name = name.into();
        if let Some((_, existing)) = self.entries.iter_mut().find(|(n, _)| *n == name) {
            return Some(core::mem::replace(existing, record));
        }

        self.entries.push((name, record));
        None
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&MetricsRecord> {
        self.entries.iter().find(|(n, _)| n == name).map(|(_, record)| record)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &MetricsRecord)> {
        self.entries.iter().map(|(name, record)| (name.as_str(), record))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<N: Into<EditionName>> FromIterator<(N, MetricsRecord)> for EditionSet {
    fn from_iter<I: IntoIterator<Item = (N, MetricsRecord)>>(iter: I) -> Self {
        let mut set = Self::new();
        for (name, record) in iter {
            let _ = set.insert(name, record);
        }
        set
    }
}

impl Serialize for EditionSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        ordered_map::serialize(&self.entries, serializer)
    }
}

impl<'de> Deserialize<'de> for EditionSet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let entries: Vec<(EditionName, MetricsRecord)> = ordered_map::deserialize(deserializer)?;
        Ok(entries.into_iter().collect())
    }
}
