//! Output formatting utilities for the pq CLI.
//!
//! This module provides functions for formatting data as tables or JSON.
//!
//! - [`products`] - Matched product rows (query, repl) and dataset checks
//! - [`helpers`] - Common formatting utilities (truncation, padding)

pub mod helpers;
mod products;

pub use products::{
    format_check_json, format_check_text, format_matches_json, format_matches_table,
};
