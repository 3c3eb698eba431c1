// file: src/search/mod.rs
// description: corpus and query module exports
// reference: internal module structure

pub mod corpus;
pub mod query;

pub use corpus::{Corpus, scan};
pub use query::SearchQuery;
