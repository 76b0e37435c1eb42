use serde::{Deserialize, Serialize};

/// A single country row from the source CSV.
///
/// In header mode the `name` field is read from the `country` column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    #[serde(rename = "country")]
    pub name: String,
    pub code: String,
}

impl Record {
    pub fn new(name: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            code: code.into(),
        }
    }
}
