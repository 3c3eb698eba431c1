// file: src/search/query.rs
// description: normalized search query

/// A lower-cased query. An empty query matches nothing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchQuery {
    needle: String,
}

impl SearchQuery {
    pub fn new(raw: &str) -> Self {
        Self {
            needle: raw.to_lowercase(),
        }
    }

    pub fn needle(&self) -> &str {
        &self.needle
    }

    pub fn is_empty(&self) -> bool {
        self.needle.is_empty()
    }
}

impl From<Option<&str>> for SearchQuery {
    fn from(raw: Option<&str>) -> Self {
        Self::new(raw.unwrap_or_default())
    }
}
