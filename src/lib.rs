// file: src/lib.rs
// description: library entry point and public api exports
// reference: rust library patterns
#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/readme.md"))]

pub mod config;
pub mod error;
pub mod health;
pub mod loader;
pub mod models;
pub mod search;
pub mod server;
pub mod utils;

pub use config::{Config, DatasetConfig, ServerConfig};
pub use error::{Result, SearchError};
pub use health::{HealthStatus, ReadinessReport};
pub use loader::CorpusLoader;
pub use models::{MAX_RESULTS, Record, ResultSet};
pub use search::{Corpus, SearchQuery};
pub use server::AppState;
pub use utils::{LoadMetrics, Validator};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        let config = Config::default_config();
        let corpus = Corpus::new(vec![Record::new("neutral company reports earnings")]);
        let _state = AppState::new(corpus.clone());
        assert_eq!(config.server.port, 5000);
        assert_eq!(corpus.search("COMPANY").len(), 1);
        assert_eq!(MAX_RESULTS, 15);
    }
}
