//! Product match output formatting.

use owo_colors::OwoColorize;
use prodquery_rs::dataset::RawRow;
use prodquery_rs::filter::Filter;
use serde::Serialize;

use super::helpers::{display_width, pad_right, truncate_str, MAX_CELL_WIDTH};

/// JSON output structure for query results.
#[derive(Serialize)]
pub struct MatchesOutput<'a> {
    pub filter: String,
    pub header: &'a [String],
    pub count: usize,
    pub products: Vec<ProductOutput<'a>>,
}

/// JSON output structure for a single product row.
#[derive(Serialize)]
pub struct ProductOutput<'a> {
    pub id: &'a str,
    pub name: &'a str,
    pub price: &'a str,
    pub expires: &'a str,
}

/// JSON output structure for a dataset check.
#[derive(Serialize)]
pub struct CheckOutput<'a> {
    pub path: &'a str,
    pub rows: usize,
    pub status: &'static str,
}

/// Formats matched rows as JSON.
pub fn format_matches_json(
    filter: &Filter,
    header: &[String],
    rows: &[&RawRow],
) -> Result<String, serde_json::Error> {
    let products: Vec<ProductOutput> = rows
        .iter()
        .map(|row| ProductOutput {
            id: row.id(),
            name: row.name(),
            price: row.price_text(),
            expires: row.expires_text(),
        })
        .collect();

    let output = MatchesOutput {
        filter: filter.to_string(),
        header,
        count: products.len(),
        products,
    };

    serde_json::to_string_pretty(&output)
}

/// Formats matched rows as a bordered table.
///
/// ```text
/// +----+--------------+-------+------------+
/// | id | name         | price | expires    |
/// +----+--------------+-------+------------+
/// | 1  | Curry Powder | 2.47  | 06/13/2019 |
/// +----+--------------+-------+------------+
/// ```
pub fn format_matches_table(header: &[String], rows: &[&RawRow], use_colors: bool) -> String {
    if rows.is_empty() {
        return "No matching products.\n".to_string();
    }

    let cells: Vec<Vec<String>> = rows
        .iter()
        .map(|row| {
            row.fields()
                .iter()
                .map(|field| truncate_str(field, MAX_CELL_WIDTH))
                .collect()
        })
        .collect();

    let widths: Vec<usize> = header
        .iter()
        .enumerate()
        .map(|(col, title)| {
            cells
                .iter()
                .filter_map(|row| row.get(col))
                .map(|cell| display_width(cell))
                .chain(std::iter::once(display_width(title)))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let border = border_line(&widths);
    let mut output = String::new();

    output.push_str(&border);

    let titles: Vec<String> = header
        .iter()
        .zip(&widths)
        .map(|(title, &width)| {
            if use_colors {
                pad_right(title, &title.bold().to_string(), width)
            } else {
                pad_right(title, title, width)
            }
        })
        .collect();
    output.push_str(&table_line(&titles));
    output.push_str(&border);

    for row in &cells {
        let padded: Vec<String> = row
            .iter()
            .zip(&widths)
            .map(|(cell, &width)| pad_right(cell, cell, width))
            .collect();
        output.push_str(&table_line(&padded));
    }
    output.push_str(&border);

    let summary = format!("{} product(s)", rows.len());
    if use_colors {
        output.push_str(&format!("{}\n", summary.dimmed()));
    } else {
        output.push_str(&summary);
        output.push('\n');
    }

    output
}

fn border_line(widths: &[usize]) -> String {
    let segments: Vec<String> = widths.iter().map(|w| "-".repeat(w + 2)).collect();
    format!("+{}+\n", segments.join("+"))
}

fn table_line(cells: &[String]) -> String {
    format!("| {} |\n", cells.join(" | "))
}

/// Formats a successful dataset check as JSON.
pub fn format_check_json(path: &str, rows: usize) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&CheckOutput {
        path,
        rows,
        status: "ok",
    })
}

/// Formats a successful dataset check for humans.
pub fn format_check_text(path: &str, rows: usize, use_colors: bool) -> String {
    let status = if use_colors {
        "OK".green().to_string()
    } else {
        "OK".to_string()
    };
    format!("{path}: {rows} rows {status}\n")
}
