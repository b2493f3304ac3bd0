//! Product rows and their typed view.

use chrono::NaiveDate;
use thiserror::Error;

use crate::date;

/// Date format of the `expires` column (e.g. `01/01/2019`).
pub const DATASET_DATE_FORMAT: &str = "%m/%d/%Y";

/// Number of columns in a product row: id, name, price, expires.
pub const COLUMN_COUNT: usize = 4;

const ID: usize = 0;
const NAME: usize = 1;
const PRICE: usize = 2;
const EXPIRES: usize = 3;

/// A specialized Result type for row coercion.
pub type RowResult<T> = Result<T, RowError>;

/// A row whose price or expiration text is not in the dataset format.
///
/// This indicates corrupt data rather than a bad query, so it is never
/// treated as a non-match.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RowError {
    /// The price column is not a number.
    #[error("line {line}: invalid price '{value}' for product {id}")]
    InvalidPrice {
        /// Source line of the row.
        line: u64,
        /// Product identifier.
        id: String,
        /// The offending text.
        value: String,
    },

    /// The expires column is not a `MM/DD/YYYY` date.
    #[error("line {line}: invalid expiration date '{value}' for product {id} (expected MM/DD/YYYY)")]
    InvalidExpires {
        /// Source line of the row.
        line: u64,
        /// Product identifier.
        id: String,
        /// The offending text.
        value: String,
    },
}

/// A product row exactly as read from the data source.
///
/// Fields are kept as text in `[id, name, price, expires]` order and are never
/// modified after loading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRow {
    line: u64,
    fields: [String; COLUMN_COUNT],
}

impl RawRow {
    /// Creates a row from its four text fields.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        price: impl Into<String>,
        expires: impl Into<String>,
    ) -> Self {
        Self {
            line: 0,
            fields: [id.into(), name.into(), price.into(), expires.into()],
        }
    }

    /// Sets the source line reported in coercion errors.
    pub fn with_line(mut self, line: u64) -> Self {
        self.line = line;
        self
    }

    /// Source line of the row, or 0 for rows not read from a file.
    pub fn line(&self) -> u64 {
        self.line
    }

    pub fn id(&self) -> &str {
        &self.fields[ID]
    }

    pub fn name(&self) -> &str {
        &self.fields[NAME]
    }

    pub fn price_text(&self) -> &str {
        &self.fields[PRICE]
    }

    pub fn expires_text(&self) -> &str {
        &self.fields[EXPIRES]
    }

    /// All fields in column order.
    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    /// Coerces the price and expiration columns.
    ///
    /// # Errors
    ///
    /// Returns a [`RowError`] if either column is malformed.
    pub fn parse(&self) -> RowResult<ParsedRow<'_>> {
        let price_text = self.price_text().trim();
        let price = price_text
            .parse::<f64>()
            .ok()
            .filter(|p| !p.is_nan())
            .ok_or_else(|| RowError::InvalidPrice {
                line: self.line,
                id: self.id().to_string(),
                value: price_text.to_string(),
            })?;

        let expires_text = self.expires_text().trim();
        let expires = date::parse_date(expires_text, DATASET_DATE_FORMAT).ok_or_else(|| {
            RowError::InvalidExpires {
                line: self.line,
                id: self.id().to_string(),
                value: expires_text.to_string(),
            }
        })?;

        Ok(ParsedRow {
            raw: self,
            price,
            expires,
        })
    }
}

/// Typed view of a [`RawRow`], built only while matching.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParsedRow<'a> {
    /// The row the values were read from.
    pub raw: &'a RawRow,
    pub price: f64,
    pub expires: NaiveDate,
}
