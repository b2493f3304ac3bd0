//! Filter evaluation against product rows.
//!
//! This module provides the [`FilterEvaluator`] for applying a parsed
//! [`Filter`] to raw dataset rows.
//!
//! # Example
//!
//! ```
//! use prodquery_rs::dataset::RawRow;
//! use prodquery_rs::filter::{FilterEvaluator, FilterParser};
//!
//! let filter = FilterParser::parse("2.0 3.0 JUN-01-2019 JUL-01-2019").unwrap();
//! let rows = vec![
//!     RawRow::new("1", "Curry Powder", "2.47", "06/13/2019"),
//!     RawRow::new("2", "Bread Crumbs - Panko", "1.71", "04/16/2019"),
//! ];
//!
//! let evaluator = FilterEvaluator::new(&filter);
//! let matched = evaluator.filter_rows(&rows).unwrap();
//! assert_eq!(matched.len(), 1);
//! assert_eq!(matched[0].name(), "Curry Powder");
//! ```

use crate::dataset::{ParsedRow, RawRow, RowResult};

use super::ast::Filter;

/// Evaluates a parsed filter against rows.
///
/// Every bound is inclusive and an unbounded side always passes. Rows whose
/// price or date cannot be coerced produce an error instead of a mismatch.
#[derive(Debug, Clone, Copy)]
pub struct FilterEvaluator<'a> {
    filter: &'a Filter,
}

impl<'a> FilterEvaluator<'a> {
    /// Creates a new filter evaluator.
    pub fn new(filter: &'a Filter) -> Self {
        Self { filter }
    }

    /// Returns true if the row satisfies all four bounds.
    ///
    /// # Errors
    ///
    /// Returns a [`RowError`](crate::dataset::RowError) if the row's price or
    /// expiration text is malformed.
    pub fn matches(&self, row: &RawRow) -> RowResult<bool> {
        let parsed = row.parse()?;
        Ok(self.matches_parsed(&parsed))
    }

    /// Returns true if an already-coerced row satisfies all four bounds.
    pub fn matches_parsed(&self, row: &ParsedRow<'_>) -> bool {
        self.filter.admits_price(row.price) && self.filter.admits_expires(row.expires)
    }

    /// Lazily yields the matching rows in input order.
    ///
    /// Malformed rows surface as `Err` items at their position; the caller
    /// decides whether to stop or continue.
    pub fn matching<'b, I>(&'b self, rows: I) -> impl Iterator<Item = RowResult<&'b RawRow>> + 'b
    where
        I: IntoIterator<Item = &'b RawRow>,
        I::IntoIter: 'b,
    {
        let evaluator = FilterEvaluator::<'b>::new(self.filter);
        rows.into_iter().filter_map(move |row| evaluator.keep(row))
    }

    /// Filters a slice of rows, returning only those that match.
    ///
    /// # Errors
    ///
    /// Stops at the first malformed row and returns its error.
    pub fn filter_rows<'b>(&self, rows: &'b [RawRow]) -> RowResult<Vec<&'b RawRow>> {
        let matched = rows
            .iter()
            .filter_map(|row| self.keep(row))
            .collect::<RowResult<Vec<_>>>()?;

        log::debug!(
            "filter '{}' matched {} of {} rows",
            self.filter,
            matched.len(),
            rows.len()
        );
        Ok(matched)
    }

    fn keep<'b>(&self, row: &'b RawRow) -> Option<RowResult<&'b RawRow>> {
        match self.matches(row) {
            Ok(true) => Some(Ok(row)),
            Ok(false) => None,
            Err(e) => Some(Err(e)),
        }
    }
}
