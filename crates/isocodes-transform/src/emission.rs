//! Ordered emission with exclusion rules.

use isocodes_model::{CodeEntry, ExclusionRules, SortKey};

use crate::table::CodeTable;

/// Entries selected for output, in ascending key order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Emission<'a> {
    pub entries: Vec<CodeEntry<'a>>,
    /// Keys present in the table but dropped by an exclusion rule.
    pub skipped: Vec<SortKey>,
}

impl CodeTable {
    /// Walks the table in ascending `(length, code)` order, dropping every key
    /// matched by `rules`. Each dropped entry is reported before it is discarded.
    pub fn ordered_entries(&self, rules: &ExclusionRules) -> Emission<'_> {
        let mut emission = Emission::default();
        for entry in self.iter() {
            if rules.is_excluded(entry.key) {
                tracing::info!(
                    key = %entry.key,
                    name = entry.name,
                    "skipping excluded entry"
                );
                emission.skipped.push(entry.key.clone());
                continue;
            }
            emission.entries.push(entry);
        }
        emission
    }
}
