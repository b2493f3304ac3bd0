//! Interactive session implementation.
//!
//! Reads one filter expression per line, prints the matching products, and
//! stops on `exit` or end of input. Invalid expressions print the usage text
//! and the session carries on; malformed dataset rows end the session.

use std::io::{self, BufRead, Write};

use prodquery_rs::filter::{FilterParser, USAGE};

use super::query::render_matches;
use super::{CommandContext, DatasetSource, Result};

/// Prompt printed before each line is read.
const PROMPT: &str = "> ";

/// Line that ends the session.
const EXIT_COMMAND: &str = "exit";

/// Outcome of a single input line.
#[derive(Debug, PartialEq, Eq)]
enum Step {
    /// Print the text and read the next line.
    Continue(String),
    /// End the session.
    Exit,
}

/// An interactive query session over one dataset source.
pub struct Repl<'a> {
    ctx: &'a CommandContext,
    source: DatasetSource,
}

impl<'a> Repl<'a> {
    pub fn new(ctx: &'a CommandContext, source: DatasetSource) -> Self {
        Self { ctx, source }
    }

    /// Runs the session until `exit` or end of input.
    ///
    /// The opening usage text is skipped under `--quiet`; prompts, results
    /// and invalid-filter messages are always written.
    ///
    /// # Errors
    ///
    /// Returns an error if reading or writing fails, if a reloaded dataset
    /// cannot be read, or if a row has a malformed price or date.
    pub fn run<R: BufRead, W: Write>(&self, mut input: R, out: &mut W) -> Result<()> {
        if !self.ctx.quiet {
            writeln!(out, "{USAGE}")?;
        }

        let mut line = String::new();
        loop {
            write!(out, "{PROMPT}")?;
            out.flush()?;

            line.clear();
            if input.read_line(&mut line)? == 0 {
                // End of input: finish the prompt line.
                writeln!(out)?;
                break;
            }

            match self.handle_line(&line)? {
                Step::Continue(text) => out.write_all(text.as_bytes())?,
                Step::Exit => break,
            }
        }

        log::debug!("session ended");
        Ok(())
    }

    fn handle_line(&self, line: &str) -> Result<Step> {
        let line = line.trim_end_matches(&['\r', '\n'][..]);
        if line.trim() == EXIT_COMMAND {
            return Ok(Step::Exit);
        }

        let filter = match FilterParser::parse(line) {
            Ok(filter) => filter,
            Err(e) => {
                log::debug!("rejected filter {line:?}: {e}");
                return Ok(Step::Continue(format!("Invalid filter: {e}\n{USAGE}\n")));
            }
        };

        let dataset = self.source.dataset()?;
        let output = render_matches(self.ctx, &filter, &dataset)?;
        Ok(Step::Continue(output))
    }
}

/// Executes the interactive session on stdin/stdout.
///
/// `reload` forces the dataset to be re-read before every query, in addition
/// to the `data.reload` config setting.
pub fn execute(ctx: &CommandContext, reload: bool) -> Result<()> {
    let source = DatasetSource::for_context(ctx, reload || ctx.reload)?;
    let repl = Repl::new(ctx, source);

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    repl.run(stdin.lock(), &mut stdout)
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;
    use std::path::PathBuf;

    use prodquery_rs::dataset::{Dataset, RowError};

    use super::*;
    use crate::commands::CommandError;

    const PRODUCTS: &str = "\
id,name,price,expires
1,Curry Powder,2.47,06/13/2019
2,Bread Crumbs - Panko,1.71,04/16/2019
5,Wasabi Powder,4.95,03/08/2019
7,Truffle Cups - Brown,1.04,12/22/2019
8,Mackerel Whole Fresh,3.98,07/25/2019
";

    fn ctx() -> CommandContext {
        CommandContext {
            json_output: false,
            use_colors: false,
            quiet: false,
            verbose: false,
            data_file: PathBuf::from("products.csv"),
            reload: false,
        }
    }

    fn run_session(dataset: &str, input: &str) -> (Result<()>, String) {
        run_session_with(ctx(), dataset, input)
    }

    fn run_session_with(ctx: CommandContext, dataset: &str, input: &str) -> (Result<()>, String) {
        let dataset = Dataset::from_reader(dataset.as_bytes()).unwrap();
        let repl = Repl::new(&ctx, DatasetSource::Cached(dataset));

        let mut out = Vec::new();
        let result = repl.run(Cursor::new(input), &mut out);
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_prints_usage_first() {
        let (result, out) = run_session(PRODUCTS, "exit\n");
        assert!(result.is_ok());
        assert!(out.starts_with(USAGE));
        assert!(out.ends_with(PROMPT));
    }

    #[test]
    fn test_quiet_skips_banner() {
        let quiet = CommandContext {
            quiet: true,
            ..ctx()
        };
        let (result, out) = run_session_with(quiet, PRODUCTS, "* 1.5 * *\nbad\nexit\n");
        assert!(result.is_ok());
        assert!(out.starts_with(PROMPT));
        assert!(out.contains("Truffle Cups - Brown"));
        // Invalid input still explains itself.
        assert_eq!(out.matches(USAGE).count(), 1);
    }

    #[test]
    fn test_exit_stops_reading() {
        let (_, out) = run_session(PRODUCTS, "exit\n* * * *\n");
        assert!(!out.contains("Curry Powder"));
    }

    #[test]
    fn test_end_of_input_ends_session() {
        let (result, out) = run_session(PRODUCTS, "* * * *\n");
        assert!(result.is_ok());
        assert!(out.contains("Curry Powder"));
        assert!(out.ends_with("> \n"));
    }

    #[test]
    fn test_query_prints_matches() {
        let (_, out) = run_session(PRODUCTS, "4.0 * * JUL-01-2019\nexit\n");
        assert!(out.contains("Wasabi Powder"));
        assert!(out.contains("4.95"));
        assert!(!out.contains("Truffle Cups - Brown"));
        assert!(!out.contains("Mackerel Whole Fresh"));
    }

    #[test]
    fn test_invalid_filter_prints_usage_and_continues() {
        let (result, out) = run_session(PRODUCTS, "i * * *\n* 2.0 * *\nexit\n");
        assert!(result.is_ok());
        assert!(out.contains("Invalid filter: invalid PRICE_MIN 'i'"));
        assert_eq!(out.matches(USAGE).count(), 2);
        // The next line is still answered.
        assert!(out.contains("Bread Crumbs - Panko"));
    }

    #[test]
    fn test_empty_line_prints_usage() {
        let (_, out) = run_session(PRODUCTS, "\nexit\n");
        assert!(out.contains("expected 4 filter values, found 0"));
    }

    #[test]
    fn test_no_matches() {
        let (_, out) = run_session(PRODUCTS, "3.0 2.0 * *\nexit\n");
        assert!(out.contains("No matching products."));
    }

    #[test]
    fn test_handles_crlf_input() {
        let (_, out) = run_session(PRODUCTS, "* 1.5 * *\r\nexit\r\n");
        assert!(out.contains("Truffle Cups - Brown"));
        assert!(!out.contains("Invalid filter"));
    }

    #[test]
    fn test_corrupt_row_ends_session() {
        let source = format!("{PRODUCTS}9,Broken,abc,01/01/2019\n");
        let (result, out) = run_session(&source, "* * * *\n* * * *\nexit\n");
        assert!(matches!(
            result,
            Err(CommandError::Row(RowError::InvalidPrice { .. }))
        ));
        // Nothing is printed for the failed query.
        assert!(!out.contains("Curry Powder"));
    }

    #[test]
    fn test_handle_line_exit_with_whitespace() {
        let ctx = ctx();
        let dataset = Dataset::from_reader(PRODUCTS.as_bytes()).unwrap();
        let repl = Repl::new(&ctx, DatasetSource::Cached(dataset));
        assert_eq!(repl.handle_line("  exit  \n").unwrap(), Step::Exit);
    }
}
