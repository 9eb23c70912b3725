//! Catalog sources: where raw job rows come from.
//!
//! The catalog only needs `(title, company, skills)` triples; the file format
//! lives entirely behind `CatalogSource`.

use std::path::PathBuf;

use serde::Deserialize;
use thiserror::Error;

/// One raw job row before normalization. `skills` is comma-separated.
#[derive(Debug, Clone, Deserialize)]
pub struct JobRow {
    pub title: String,
    pub company: String,
    pub skills: String,
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("catalog source {0} contains no job rows")]
    Empty(String),
}

pub trait CatalogSource: Send + Sync {
    fn load_rows(&self) -> Result<Vec<JobRow>, CatalogError>;

    /// Human-readable location, used in log lines.
    fn describe(&self) -> String;
}

/// Reads job rows from a CSV file with a `title,company,skills` header.
/// Extra columns are ignored; surrounding whitespace in cells is trimmed.
pub struct CsvCatalogSource {
    path: PathBuf,
}

impl CsvCatalogSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl CatalogSource for CsvCatalogSource {
    fn load_rows(&self) -> Result<Vec<JobRow>, CatalogError> {
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_path(&self.path)?;

        let rows = reader
            .deserialize::<JobRow>()
            .collect::<Result<Vec<_>, _>>()?;

        if rows.is_empty() {
            return Err(CatalogError::Empty(self.describe()));
        }
        Ok(rows)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
