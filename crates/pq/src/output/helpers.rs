//! Common helper functions for output formatting.

/// Widest a table cell may grow before it is truncated.
pub const MAX_CELL_WIDTH: usize = 40;

/// Returns the display width of a string, counted in chars.
pub fn display_width(s: &str) -> usize {
    s.chars().count()
}

/// Truncates a string to a maximum number of chars, ending in "...".
pub fn truncate_str(s: &str, max_len: usize) -> String {
    if display_width(s) > max_len {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{kept}...")
    } else {
        s.to_string()
    }
}

/// Pads `rendered` on the right so its visible text fills `width` columns.
///
/// `plain` is the uncoloured text, used to measure; `rendered` may carry
/// ANSI colour codes.
pub fn pad_right(plain: &str, rendered: &str, width: usize) -> String {
    let padding = width.saturating_sub(display_width(plain));
    format!("{rendered}{}", " ".repeat(padding))
}
