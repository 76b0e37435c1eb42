//! Sort key over `(name length, code)`.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;

/// Index and ordering key for a country entry.
///
/// Ordering compares `length` first and breaks ties on `code` using plain
/// string comparison. Both levels are compared explicitly rather than folded
/// into a single derived key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SortKey {
    /// Number of characters in the normalized name.
    pub length: usize,
    /// Raw ISO code field, unmodified.
    pub code: String,
}

impl SortKey {
    pub fn new(length: usize, code: impl Into<String>) -> Self {
        Self {
            length,
            code: code.into(),
        }
    }

    /// Builds the key for a normalized name. Length counts characters, not bytes.
    pub fn for_name(name: &str, code: impl Into<String>) -> Self {
        Self::new(name.chars().count(), code)
    }
}

impl Ord for SortKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.length
            .cmp(&other.length)
            .then_with(|| self.code.cmp(&other.code))
    }
}

impl PartialOrd for SortKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.length, self.code)
    }
}

impl FromStr for SortKey {
    type Err = ModelError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let Some((length, code)) = value.split_once(':') else {
            return Err(ModelError::InvalidSortKey {
                value: value.to_string(),
            });
        };
        if code.is_empty() {
            return Err(ModelError::InvalidSortKey {
                value: value.to_string(),
            });
        }
        let length = length
            .trim()
            .parse::<usize>()
            .map_err(|_| ModelError::InvalidLength {
                value: length.to_string(),
            })?;
        Ok(Self::new(length, code))
    }
}

/// Borrowed view of one table entry, in emission order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodeEntry<'a> {
    pub key: &'a SortKey,
    pub name: &'a str,
}

impl<'a> CodeEntry<'a> {
    pub fn length(&self) -> usize {
        self.key.length
    }

    pub fn code(&self) -> &'a str {
        &self.key.code
    }
}
