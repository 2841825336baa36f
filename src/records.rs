// Input records: one CSV row per student or startup.
//
// The matcher is schema-agnostic: a record is just field name -> value. Only
// the bag-of-words fields and the name field are ever read.

use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::info;

/// A single input row. A field that is missing from the row is absent;
/// an empty cell is present but contributes no tokens.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record(HashMap<String, String>);

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter, handy for assembling records in code.
    pub fn with(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.0.insert(field.into(), value.into());
        self
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for Record
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

/// Load every row of a CSV file. The header row names the fields.
pub fn load_records(path: &Path) -> Result<Vec<Record>> {
    let file = File::open(path)
        .with_context(|| format!("Cannot open input file {}", path.display()))?;
    let records = read_records(file, &path.display().to_string())?;

    info!(path = %path.display(), records = records.len(), "Loaded records");
    Ok(records)
}

/// Parse CSV rows from any reader. `source` is only used in error messages.
///
/// Short rows are tolerated: trailing fields they lack are simply absent.
/// Non-UTF-8 content is rejected as malformed input.
pub fn read_records<R: Read>(reader: R, source: &str) -> Result<Vec<Record>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(reader);

    let headers = csv_reader
        .headers()
        .with_context(|| format!("Malformed header row in {source}"))?
        .clone();

    csv_reader
        .records()
        .enumerate()
        .map(|(i, row)| -> Result<Record> {
            // +2: one for the header, one for 1-based line numbers
            let row = row.with_context(|| format!("Malformed row {} in {source}", i + 2))?;
            Ok(headers
                .iter()
                .zip(row.iter())
                .map(|(field, value)| (field.to_string(), value.to_string()))
                .collect())
        })
        .collect()
}
