// file: src/loader/csv_loader.rs
// description: one-shot CSV ingestion into the in-memory corpus
// reference: https://docs.rs/csv

use super::latin1::decode_latin1;
use crate::error::{Result, SearchError};
use crate::models::Record;
use crate::search::Corpus;
use crate::utils::{LoadMetrics, OperationTimer, Validator};
use csv::{ByteRecord, ReaderBuilder};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::info;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Reads a comma-separated source and flattens each non-empty row into a [`Record`].
#[derive(Debug, Clone)]
pub struct CorpusLoader {
    delimiter: u8,
}

impl Default for CorpusLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl CorpusLoader {
    pub fn new() -> Self {
        Self { delimiter: b',' }
    }

    pub fn load(&self, path: &Path) -> Result<Corpus> {
        Ok(self.load_with_metrics(path)?.0)
    }

    pub fn load_with_metrics(&self, path: &Path) -> Result<(Corpus, LoadMetrics)> {
        info!("Loading dataset from: {}", path.display());
        Validator::validate_file_path(path)?;

        let timer = OperationTimer::new("load_corpus");
        let file = File::open(path).map_err(|e| SearchError::FileOperation {
            path: path.to_path_buf(),
            source: e,
        })?;

        let corpus = self.load_from_reader(file, path)?;
        let metrics = timer.finish_with_count(corpus.len());
        Ok((corpus, metrics))
    }

    /// Parses CSV from any reader; `source` only labels errors.
    ///
    /// A leading UTF-8 byte order mark is kept as data: the csv reader would drop
    /// it, so it is split off here and re-attached, decoded, to the first row.
    pub fn load_from_reader<R: Read>(&self, mut reader: R, source: &Path) -> Result<Corpus> {
        // One byte past the mark tells whether it shares a line with the first row.
        let mut head = Vec::with_capacity(UTF8_BOM.len() + 1);
        reader
            .by_ref()
            .take(UTF8_BOM.len() as u64 + 1)
            .read_to_end(&mut head)
            .map_err(|e| SearchError::FileOperation {
                path: source.to_path_buf(),
                source: e,
            })?;

        let mut records = Vec::new();
        let mut bom_prefix = None;
        let mut replay: &[u8] = &head;

        if let Some(rest) = head.strip_prefix(UTF8_BOM) {
            let prefix = decode_latin1(UTF8_BOM);
            match rest.first() {
                None | Some(b'\n') | Some(b'\r') => records.push(Record::new(prefix)),
                Some(_) => bom_prefix = Some(prefix),
            }
            replay = rest;
        }

        let mut csv_reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .delimiter(self.delimiter)
            .from_reader(replay.chain(reader));

        let mut row = ByteRecord::new();

        // Blank lines never come back from the csv reader, so every row has fields.
        while csv_reader
            .read_byte_record(&mut row)
            .map_err(|e| SearchError::Csv {
                path: source.to_path_buf(),
                source: e,
            })?
        {
            let record = flatten_row(&row);
            match bom_prefix.take() {
                Some(prefix) => records.push(Record::new(prefix + record.text())),
                None => records.push(record),
            }
        }

        info!("Loaded {} records from {}", records.len(), source.display());

        Ok(Corpus::new(records))
    }
}

/// Joins the Latin-1 decoded fields of `row` with single spaces.
pub fn flatten_row(row: &ByteRecord) -> Record {
    Record::from_fields(row.iter().map(decode_latin1))
}
