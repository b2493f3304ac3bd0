//! Filter expression parser and evaluator for product range queries.
//!
//! A filter expression is four whitespace-separated values, in order:
//!
//! ```text
//! PRICE_MIN PRICE_MAX EXPIRES_START EXPIRES_STOP
//! ```
//!
//! # Supported Syntax
//!
//! - `*` - No constraint on that side of the range
//! - `2.5`, `-1`, `10` - Price bounds (any real number)
//! - `JUL-01-2019` - Date bounds (month abbreviation, day, year)
//!
//! All bounds are inclusive. A minimum above its maximum is accepted and
//! matches nothing.
//!
//! # Example
//!
//! ```
//! use prodquery_rs::dataset::RawRow;
//! use prodquery_rs::filter::{FilterEvaluator, FilterParser};
//!
//! // Parse a filter expression
//! let filter = FilterParser::parse("4.0 * * JUL-01-2019").unwrap();
//!
//! // Create an evaluator
//! let evaluator = FilterEvaluator::new(&filter);
//!
//! // Match a row
//! let row = RawRow::new("9", "Wasabi Powder", "4.95", "03/08/2019");
//! assert!(evaluator.matches(&row).unwrap());
//! ```

mod ast;
mod error;
mod evaluator;
mod parser;

pub use ast::{Bound, Filter, FilterField, FILTER_DATE_FORMAT, WILDCARD};
pub use error::{FilterError, FilterResult};
pub use evaluator::FilterEvaluator;
pub use parser::FilterParser;

/// Usage text shown when a filter expression cannot be parsed.
pub const USAGE: &str = "To search for products, enter these four filters in order: \
PRICE_MIN PRICE_MAX EXPIRES_START EXPIRES_STOP, with a * to indicate a skipped value. \
Expiry dates are of the format JUL-01-2019.";

#[cfg(test)]
mod tests;
