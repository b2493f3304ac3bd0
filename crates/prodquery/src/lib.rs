//! Range queries over product datasets.
//!
//! This crate loads `id,name,price,expires` CSV datasets ([`dataset`]) and
//! evaluates four-field price/expiration filters against them ([`filter`]).

mod date;
pub mod dataset;
pub mod filter;

pub use dataset::{Dataset, DatasetError, RawRow, RowError};
pub use filter::{Filter, FilterError, FilterEvaluator, FilterParser};
