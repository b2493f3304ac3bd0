//! Query command implementation.
//!
//! Runs a single filter expression against the dataset and prints the matches.

use prodquery_rs::dataset::Dataset;
use prodquery_rs::filter::{Filter, FilterEvaluator, FilterParser, USAGE};

use super::{CommandContext, Result};
use crate::output::{format_matches_json, format_matches_table};

/// Options for the query command.
#[derive(Debug)]
pub struct QueryOptions {
    /// Filter expression, possibly split across several arguments.
    pub filter: Vec<String>,
}

impl QueryOptions {
    /// Joins the filter arguments back into a single expression.
    pub fn expression(&self) -> String {
        self.filter.join(" ")
    }
}

/// Executes the query command.
///
/// # Errors
///
/// Returns an error if the filter expression is invalid, if the dataset
/// cannot be loaded, or if a row has a malformed price or date.
pub fn execute(ctx: &CommandContext, opts: &QueryOptions) -> Result<()> {
    let filter = match FilterParser::parse(&opts.expression()) {
        Ok(filter) => filter,
        Err(e) => {
            if !ctx.json_output && !ctx.quiet {
                eprintln!("{USAGE}");
            }
            return Err(e.into());
        }
    };

    let dataset = ctx.load_dataset()?;
    if ctx.verbose && !ctx.json_output {
        eprintln!(
            "Filter: {filter} ({} rows in {})",
            dataset.len(),
            ctx.data_file.display()
        );
    }

    let output = render_matches(ctx, &filter, &dataset)?;

    if ctx.json_output || !ctx.quiet {
        print!("{output}");
    }

    Ok(())
}

/// Matches `filter` against every row of `dataset` and formats the result.
///
/// Shared by the one-shot query and the interactive session.
pub fn render_matches(ctx: &CommandContext, filter: &Filter, dataset: &Dataset) -> Result<String> {
    let rows = FilterEvaluator::new(filter).filter_rows(dataset.rows())?;

    if ctx.json_output {
        let mut output = format_matches_json(filter, dataset.header(), &rows)?;
        output.push('\n');
        Ok(output)
    } else {
        Ok(format_matches_table(dataset.header(), &rows, ctx.use_colors))
    }
}
