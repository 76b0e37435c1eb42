//! Sort-key indexed country table.

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

use isocodes_model::{CodeEntry, Record, SortKey};

use crate::name::normalize_name;

/// Counters collected while building a [`CodeTable`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildStats {
    /// Records inserted.
    pub rows: usize,
    /// Inserts that replaced an existing entry with the same key.
    pub overwritten: usize,
}

/// Normalized country names keyed by `(name length, code)`.
///
/// Each key holds the normalized name of the last record that produced it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodeTable {
    entries: BTreeMap<SortKey, String>,
}

impl CodeTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a table from records in input order.
    pub fn from_records<I>(records: I) -> (Self, BuildStats)
    where
        I: IntoIterator<Item = Record>,
    {
        let mut table = Self::new();
        let mut stats = BuildStats::default();
        for record in records {
            stats.rows += 1;
            if table.insert(&record.name, record.code).is_some() {
                stats.overwritten += 1;
            }
        }
        (table, stats)
    }

    /// Normalizes `name` and upserts it under its sort key.
    ///
    /// Returns the name previously stored under the same key, if any.
    pub fn insert(&mut self, name: &str, code: impl Into<String>) -> Option<String> {
        let name = normalize_name(name).into_owned();
        let key = SortKey::for_name(&name, code);
        match self.entries.entry(key) {
            Entry::Vacant(slot) => {
                slot.insert(name);
                None
            }
            Entry::Occupied(mut slot) => {
                tracing::debug!(
                    key = %slot.key(),
                    previous = %slot.get(),
                    replacement = %name,
                    "overwriting duplicate key"
                );
                Some(slot.insert(name))
            }
        }
    }

    pub fn get(&self, key: &SortKey) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &SortKey) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in ascending key order.
    pub fn iter(&self) -> impl Iterator<Item = CodeEntry<'_>> {
        self.entries
            .iter()
            .map(|(key, name)| CodeEntry { key, name })
    }
}

impl FromIterator<Record> for CodeTable {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        Self::from_records(iter).0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_keys_from_normalized_names() {
        let (table, stats) = CodeTable::from_records(vec![
            Record::new("Italy", "IT"),
            Record::new("Korea, Republic Of", "KR"),
        ]);

        assert_eq!(stats, BuildStats { rows: 2, overwritten: 0 });
        assert_eq!(table.get(&SortKey::new(5, "IT")), Some("Italy"));
        assert_eq!(
            table.get(&SortKey::new(17, "KR")),
            Some("Republic Of Korea")
        );
    }

    #[test]
    fn last_write_wins() {
        let mut table = CodeTable::new();
        assert_eq!(table.insert("Peru", "PE"), None);
        assert_eq!(table.insert("PERU", "PE"), Some("Peru".to_string()));

        assert_eq!(table.len(), 1);
        assert_eq!(table.get(&SortKey::new(4, "PE")), Some("PERU"));
    }

    #[test]
    fn same_code_different_length_is_distinct() {
        let mut table = CodeTable::new();
        table.insert("Peru", "PE");
        table.insert("Republic of Peru", "PE");

        assert_eq!(table.len(), 2);
        assert!(table.contains_key(&SortKey::new(4, "PE")));
        assert!(table.contains_key(&SortKey::new(16, "PE")));
    }

    #[test]
    fn counts_overwrites() {
        let (table, stats) = CodeTable::from_records(vec![
            Record::new("Peru", "PE"),
            Record::new("PERU", "PE"),
            Record::new("peru", "PE"),
        ]);

        assert_eq!(table.len(), 1);
        assert_eq!(stats, BuildStats { rows: 3, overwritten: 2 });
    }
}
