// file: src/models/record.rs
// description: flattened dataset row used as the unit of search
// reference: internal data structures

use serde::{Deserialize, Serialize};
use std::fmt;

/// Separator placed between the fields of a source row.
pub const FIELD_SEPARATOR: &str = " ";

/// One source row with its fields joined into a single searchable string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record(String);

impl Record {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// Joins `fields` in order with a single space.
    pub fn from_fields<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut text = String::new();
        for (idx, field) in fields.into_iter().enumerate() {
            if idx > 0 {
                text.push_str(FIELD_SEPARATOR);
            }
            text.push_str(field.as_ref());
        }
        Self(text)
    }

    pub fn text(&self) -> &str {
        &self.0
    }

    /// `needle` must already be lower-cased.
    pub fn contains_lowercase(&self, needle: &str) -> bool {
        self.0.to_lowercase().contains(needle)
    }

    pub fn into_text(self) -> String {
        self.0
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Record {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}
