// file: src/models/result_set.rs
// description: capped, order-preserving collection of matching records

use super::record::Record;
use serde::Serialize;

/// Hard cap on the number of records returned for one query.
pub const MAX_RESULTS: usize = 15;

/// Matches for a single query, in corpus order. Never holds more than [`MAX_RESULTS`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ResultSet {
    records: Vec<Record>,
}

impl ResultSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a match. Returns `false` once the set is full, leaving it unchanged.
    pub fn push(&mut self, record: Record) -> bool {
        if self.is_full() {
            return false;
        }
        self.records.push(record);
        true
    }

    pub fn is_full(&self) -> bool {
        self.records.len() >= MAX_RESULTS
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.iter()
    }

    pub fn into_texts(self) -> Vec<String> {
        self.records.into_iter().map(Record::into_text).collect()
    }
}
