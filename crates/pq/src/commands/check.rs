//! Check command implementation.
//!
//! Loads the dataset and coerces every row, so corrupt data is found before
//! it interrupts a query.

use super::{CommandContext, Result};
use crate::output::{format_check_json, format_check_text};

/// Executes the check command.
///
/// # Errors
///
/// Returns an error if the dataset cannot be loaded or a row has a malformed
/// price or expiration date.
pub fn execute(ctx: &CommandContext) -> Result<()> {
    let dataset = ctx.load_dataset()?;
    let rows = dataset.validate()?;
    let path = ctx.data_file.display().to_string();

    if ctx.json_output {
        println!("{}", format_check_json(&path, rows)?);
    } else if !ctx.quiet {
        print!("{}", format_check_text(&path, rows, ctx.use_colors));
    }

    Ok(())
}
