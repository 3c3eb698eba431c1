// file: src/search/corpus.rs
// description: immutable in-memory record list and bounded substring scan

use super::query::SearchQuery;
use crate::models::{Record, ResultSet};
use std::sync::Arc;

/// All records loaded at startup, in source order.
///
/// Cloning shares the same backing slice, so the corpus can be handed to every
/// request handler without copying or locking.
#[derive(Debug, Clone)]
pub struct Corpus {
    records: Arc<[Record]>,
}

impl Corpus {
    pub fn new(records: Vec<Record>) -> Self {
        Self {
            records: records.into(),
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Record> {
        self.records.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.iter()
    }

    pub fn search(&self, raw_query: &str) -> ResultSet {
        scan(self.records.iter(), &SearchQuery::new(raw_query))
    }
}

impl FromIterator<Record> for Corpus {
    fn from_iter<T: IntoIterator<Item = Record>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Collects case-insensitive substring matches in iteration order.
///
/// Pulls no further records once the result set is full, and none at all for an
/// empty query.
pub fn scan<'a, I>(records: I, query: &SearchQuery) -> ResultSet
where
    I: IntoIterator<Item = &'a Record>,
{
    let mut results = ResultSet::new();
    if query.is_empty() {
        return results;
    }

    for record in records {
        if record.contains_lowercase(query.needle()) {
            results.push(record.clone());
            if results.is_full() {
                break;
            }
        }
    }

    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MAX_RESULTS;
    use pretty_assertions::assert_eq;
    use std::cell::Cell;

    fn sample_corpus() -> Corpus {
        [
            "neutral company reports earnings",
            "positive stock price up sharply",
            "negative company stock price down",
        ]
        .into_iter()
        .map(Record::from)
        .collect()
    }

    fn texts(results: &ResultSet) -> Vec<&str> {
        results.iter().map(Record::text).collect()
    }

    #[test]
    fn test_matches_in_corpus_order() {
        let corpus = sample_corpus();
        assert_eq!(
            texts(&corpus.search("company")),
            vec![
                "neutral company reports earnings",
                "negative company stock price down",
            ]
        );
    }

    #[test]
    fn test_no_match_and_empty_query() {
        let corpus = sample_corpus();
        assert!(corpus.search("xyz").is_empty());
        assert!(corpus.search("").is_empty());
    }

    #[test]
    fn test_case_insensitive() {
        let corpus: Corpus = vec![Record::new("The Cat sat")].into_iter().collect();
        assert_eq!(texts(&corpus.search("cat")), vec!["The Cat sat"]);
        assert_eq!(texts(&corpus.search("CAT")), vec!["The Cat sat"]);
    }

    #[test]
    fn test_every_result_contains_query() {
        let corpus = sample_corpus();
        for q in ["price", "STOCK", "e", "  "] {
            let needle = q.to_lowercase();
            for record in corpus.search(q).iter() {
                assert!(record.text().to_lowercase().contains(&needle));
            }
        }
    }

    #[test]
    fn test_caps_at_first_fifteen() {
        let corpus: Corpus = (0..40)
            .map(|i| Record::new(format!("headline {} market", i)))
            .collect();

        let results = corpus.search("market");
        assert_eq!(results.len(), MAX_RESULTS);
        let expected: Vec<String> = (0..15).map(|i| format!("headline {} market", i)).collect();
        assert_eq!(results.into_texts(), expected);
    }

    #[test]
    fn test_scan_stops_after_cap() {
        let records: Vec<Record> = (0..100)
            .map(|i| {
                if i % 2 == 0 {
                    Record::new(format!("match {}", i))
                } else {
                    Record::new(format!("other {}", i))
                }
            })
            .collect();

        let visited = Cell::new(0usize);
        let results = scan(
            records.iter().inspect(|_| visited.set(visited.get() + 1)),
            &SearchQuery::new("MATCH"),
        );

        assert_eq!(results.len(), MAX_RESULTS);
        // 15th match is at index 28
        assert_eq!(visited.get(), 29);
    }

    #[test]
    fn test_empty_query_does_not_scan() {
        let records = vec![Record::new("anything")];
        let visited = Cell::new(0usize);
        let results = scan(
            records.iter().inspect(|_| visited.set(visited.get() + 1)),
            &SearchQuery::new(""),
        );
        assert!(results.is_empty());
        assert_eq!(visited.get(), 0);
    }

    #[test]
    fn test_repeated_search_is_identical() {
        let corpus = sample_corpus();
        assert_eq!(corpus.search("stock"), corpus.search("stock"));
    }

    #[test]
    fn test_clones_share_records() {
        let corpus = sample_corpus();
        let shared = corpus.clone();
        assert!(std::ptr::eq(corpus.get(0).unwrap(), shared.get(0).unwrap()));
        assert_eq!(shared.len(), 3);
    }
}
