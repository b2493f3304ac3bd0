//! Positional parser for filter expressions.

use chrono::NaiveDate;

use crate::date;

use super::ast::{Bound, Filter, FilterField, FILTER_DATE_FORMAT, WILDCARD};
use super::error::{FilterError, FilterResult};

/// Parser for product filter expressions.
///
/// # Grammar
///
/// ```text
/// expression ::= price price date date
/// price      ::= "*" | real number
/// date       ::= "*" | MON "-" DD "-" YYYY
/// ```
///
/// Tokens are separated by any amount of whitespace. Positions are, in order,
/// `PRICE_MIN PRICE_MAX EXPIRES_START EXPIRES_STOP`.
///
/// # Example
///
/// ```
/// use prodquery_rs::filter::{Bound, FilterParser};
///
/// let filter = FilterParser::parse("4.0 * * JUL-01-2019").unwrap();
/// assert_eq!(filter.price_min, Bound::Inclusive(4.0));
/// assert!(filter.price_max.is_unbounded());
/// ```
pub struct FilterParser;

impl FilterParser {
    /// Parses a filter expression string into a [`Filter`].
    ///
    /// # Errors
    ///
    /// Returns `FilterError::TokenCount` if the input does not contain exactly
    /// four tokens.
    ///
    /// Returns `FilterError::InvalidValue` for the first token, in positional
    /// order, that is neither `*` nor a valid literal for its field.
    pub fn parse(input: &str) -> FilterResult<Filter> {
        let tokens: Vec<&str> = input.split_whitespace().collect();
        let &[price_min, price_max, expires_start, expires_stop] = tokens.as_slice() else {
            return Err(FilterError::TokenCount {
                found: tokens.len(),
            });
        };

        Ok(Filter {
            price_min: parse_price(FilterField::PriceMin, price_min)?,
            price_max: parse_price(FilterField::PriceMax, price_max)?,
            expires_start: parse_date(FilterField::ExpiresStart, expires_start)?,
            expires_stop: parse_date(FilterField::ExpiresStop, expires_stop)?,
        })
    }
}

fn parse_price(field: FilterField, token: &str) -> FilterResult<Bound<f64>> {
    if token == WILDCARD {
        return Ok(Bound::Unbounded);
    }

    match token.parse::<f64>() {
        // NaN compares false against everything, which would silently match nothing.
        Ok(value) if !value.is_nan() => Ok(Bound::Inclusive(value)),
        _ => Err(FilterError::invalid_value(field, token)),
    }
}

fn parse_date(field: FilterField, token: &str) -> FilterResult<Bound<NaiveDate>> {
    if token == WILDCARD {
        return Ok(Bound::Unbounded);
    }

    date::parse_date(token, FILTER_DATE_FORMAT)
        .map(Bound::Inclusive)
        .ok_or_else(|| FilterError::invalid_value(field, token))
}
