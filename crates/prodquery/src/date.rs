//! Calendar dates with a fixed four-digit year.

use chrono::NaiveDate;

/// Separators that may precede the trailing year segment.
const SEPARATORS: &[char] = &['-', '/'];

/// Parses `text` with `format`, requiring the trailing year to be exactly
/// four ASCII digits.
///
/// chrono's `%Y` accepts any number of digits, so `JUL-01-19` would otherwise
/// parse as the year 19.
pub(crate) fn parse_date(text: &str, format: &str) -> Option<NaiveDate> {
    let year = text.rsplit(SEPARATORS).next()?;
    if year.len() != 4 || !year.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    NaiveDate::parse_from_str(text, format).ok()
}
