// file: src/loader/mod.rs
// description: dataset loading module exports
// reference: internal module structure

pub mod csv_loader;
pub mod latin1;

pub use csv_loader::{CorpusLoader, flatten_row};
pub use latin1::decode_latin1;
