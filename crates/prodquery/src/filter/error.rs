//! Error types for the filter parser.

use thiserror::Error;

use super::ast::FilterField;

/// A specialized Result type for filter parsing operations.
pub type FilterResult<T> = Result<T, FilterError>;

/// Errors that can occur during filter parsing.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FilterError {
    /// The expression did not split into exactly four tokens.
    #[error("expected 4 filter values, found {found}")]
    TokenCount {
        /// Number of whitespace-separated tokens in the input.
        found: usize,
    },

    /// A non-wildcard token could not be read as its field's type.
    #[error("invalid {field} '{token}': expected {}", .field.expected())]
    InvalidValue {
        /// The positional field the token was given for.
        field: FilterField,
        /// The offending token.
        token: String,
    },
}

impl FilterError {
    /// Creates an invalid value error.
    pub fn invalid_value(field: FilterField, token: impl Into<String>) -> Self {
        FilterError::InvalidValue {
            field,
            token: token.into(),
        }
    }

    /// Returns the field that failed to parse, if the error is field-specific.
    pub fn field(&self) -> Option<FilterField> {
        match self {
            FilterError::TokenCount { .. } => None,
            FilterError::InvalidValue { field, .. } => Some(*field),
        }
    }
}
