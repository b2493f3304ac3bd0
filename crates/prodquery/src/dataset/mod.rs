//! Product dataset loading.
//!
//! A dataset is a CSV file whose first record is a header and whose remaining
//! records are `id,name,price,expires` rows:
//!
//! ```text
//! id,name,price,expires
//! 1,Curry Powder,2.47,06/13/2019
//! 2,Bread Crumbs - Panko,1.71,04/16/2019
//! ```
//!
//! Loading only checks the shape of the file. Price and date text are coerced
//! later, while matching, through [`RawRow::parse`].
//!
//! Each call to [`Dataset::from_path`] opens, reads, and closes the file before
//! returning, so reloading per query never leaves a partial read behind.

mod row;

use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use thiserror::Error;

pub use row::{
    ParsedRow, RawRow, RowError, RowResult, COLUMN_COUNT, DATASET_DATE_FORMAT,
};

/// Default dataset filename, looked up in the working directory.
pub const DEFAULT_DATA_FILE: &str = "products.csv";

/// Errors that can occur while loading a dataset.
#[derive(Debug, Error)]
pub enum DatasetError {
    /// The dataset file could not be opened.
    #[error("failed to open dataset '{path}': {source}")]
    Open {
        /// The path that failed to open.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The CSV reader failed (I/O or invalid UTF-8).
    #[error("failed to read dataset: {0}")]
    Csv(#[from] csv::Error),

    /// The source contains no header record.
    #[error("dataset has no header row")]
    MissingHeader,

    /// The header does not name exactly four non-empty columns.
    #[error("dataset header must name {COLUMN_COUNT} columns (id, name, price, expires), found {found:?}")]
    MalformedHeader {
        /// The header fields that were read.
        found: Vec<String>,
    },

    /// A data row does not have exactly four fields.
    #[error("line {line}: expected {COLUMN_COUNT} fields, found {found}")]
    RowShape {
        /// Source line of the row.
        line: u64,
        /// Number of fields found.
        found: usize,
    },
}

/// Result type for dataset operations.
pub type Result<T> = std::result::Result<T, DatasetError>;

/// A loaded product dataset.
///
/// Rows keep the order they had in the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dataset {
    header: Vec<String>,
    rows: Vec<RawRow>,
}

impl Dataset {
    /// Loads a dataset from a CSV file.
    ///
    /// # Errors
    ///
    /// Returns `DatasetError::Open` if the file cannot be opened, or any of
    /// the shape errors described on [`Dataset::from_reader`].
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| DatasetError::Open {
            path: path.to_path_buf(),
            source,
        })?;

        let dataset = Self::from_reader(file)?;
        log::debug!(
            "loaded {} rows from {}",
            dataset.rows.len(),
            path.display()
        );
        Ok(dataset)
    }

    /// Loads a dataset from any CSV source.
    ///
    /// # Errors
    ///
    /// Returns `DatasetError::MissingHeader` for an empty source,
    /// `DatasetError::MalformedHeader` if the first record is not a four
    /// column header, and `DatasetError::RowShape` for a row without exactly
    /// four fields.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(reader);

        let mut records = reader.records();

        let header: Vec<String> = match records.next() {
            Some(record) => record?.iter().map(str::to_string).collect(),
            None => return Err(DatasetError::MissingHeader),
        };
        validate_header(&header)?;

        let mut rows = Vec::new();
        for record in records {
            let record = record?;
            let line = record.position().map_or(0, |p| p.line());

            let [id, name, price, expires] = match record.len() {
                COLUMN_COUNT => [&record[0], &record[1], &record[2], &record[3]],
                found => return Err(DatasetError::RowShape { line, found }),
            };

            rows.push(RawRow::new(id, name, price, expires).with_line(line));
        }

        Ok(Self { header, rows })
    }

    /// Column names from the header record.
    pub fn header(&self) -> &[String] {
        &self.header
    }

    /// Rows in source order.
    pub fn rows(&self) -> &[RawRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Coerces every row, returning the number of rows checked.
    ///
    /// # Errors
    ///
    /// Returns the [`RowError`] of the first malformed row.
    pub fn validate(&self) -> RowResult<usize> {
        for row in &self.rows {
            row.parse()?;
        }
        Ok(self.rows.len())
    }
}

fn validate_header(header: &[String]) -> Result<()> {
    if header.len() != COLUMN_COUNT || header.iter().any(|h| h.trim().is_empty()) {
        return Err(DatasetError::MalformedHeader {
            found: header.to_vec(),
        });
    }
    Ok(())
}
