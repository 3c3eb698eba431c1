// file: src/models/mod.rs
// description: data models module exports
// reference: internal module structure

pub mod record;
pub mod result_set;

pub use record::Record;
pub use result_set::{MAX_RESULTS, ResultSet};
