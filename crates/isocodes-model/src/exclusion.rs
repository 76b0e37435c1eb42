//! Keys that are dropped at emission time.

use std::collections::BTreeSet;

use crate::key::SortKey;

/// The Holy See is listed twice under differently punctuated official names.
/// The 29-character spelling normalizes to this key and is the one dropped.
pub const HOLY_SEE_DUPLICATE: (usize, &str) = (29, "VA");

/// Set of keys that are never emitted.
///
/// `Default` holds the known duplicates of the ISO country list; use
/// [`ExclusionRules::none`] to emit every key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExclusionRules {
    keys: BTreeSet<SortKey>,
}

impl Default for ExclusionRules {
    fn default() -> Self {
        let (length, code) = HOLY_SEE_DUPLICATE;
        Self::none().with_key(SortKey::new(length, code))
    }
}

impl ExclusionRules {
    pub fn none() -> Self {
        Self {
            keys: BTreeSet::new(),
        }
    }

    #[must_use]
    pub fn with_key(mut self, key: SortKey) -> Self {
        self.keys.insert(key);
        self
    }

    pub fn insert(&mut self, key: SortKey) -> bool {
        self.keys.insert(key)
    }

    pub fn is_excluded(&self, key: &SortKey) -> bool {
        self.keys.contains(key)
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SortKey> {
        self.keys.iter()
    }
}

impl FromIterator<SortKey> for ExclusionRules {
    fn from_iter<I: IntoIterator<Item = SortKey>>(iter: I) -> Self {
        Self {
            keys: iter.into_iter().collect(),
        }
    }
}

impl Extend<SortKey> for ExclusionRules {
    fn extend<I: IntoIterator<Item = SortKey>>(&mut self, iter: I) {
        self.keys.extend(iter);
    }
}
