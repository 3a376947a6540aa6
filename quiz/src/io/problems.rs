//! Loading the problems file (`question,answer` CSV rows).

use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::Result;
use tracing::{debug, instrument};

use crate::core::question::{MalformedRecord, QuestionStore};

/// The problems file could not be opened or read.
#[derive(Debug)]
pub struct LoadError {
    pub path: PathBuf,
    pub source: std::io::Error,
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to open the file: {}", self.path.display())
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}

/// The problems file was readable but its contents are not usable.
#[derive(Debug)]
pub enum ParseError {
    /// CSV syntax error (e.g. an unterminated quote).
    Csv(csv::Error),
    /// A row with fewer than two fields.
    Malformed(MalformedRecord),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to parse the CSV file")
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ParseError::Csv(err) => Some(err),
            ParseError::Malformed(err) => Some(err),
        }
    }
}

/// Open and parse the problems file at `path`.
#[instrument(skip_all, fields(path = %path.display()))]
pub fn load_problems(path: &Path) -> Result<QuestionStore> {
    let file = File::open(path).map_err(|source| LoadError {
        path: path.to_path_buf(),
        source,
    })?;
    let store = parse_problems(file)?;
    debug!(questions = store.len(), "problems loaded");
    Ok(store)
}

/// Parse CSV problem rows from any reader.
///
/// There is no header row. Rows may have differing lengths; rows with fewer
/// than two fields are rejected by the question store.
pub fn parse_problems<R: Read>(reader: R) -> Result<QuestionStore> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut records: Vec<Vec<String>> = Vec::new();
    for record in csv_reader.records() {
        let record = record.map_err(ParseError::Csv)?;
        records.push(record.iter().map(str::to_string).collect());
    }

    let store = QuestionStore::from_records(records).map_err(ParseError::Malformed)?;
    Ok(store)
}
