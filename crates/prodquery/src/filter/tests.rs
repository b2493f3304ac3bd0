//! Tests for the filter parser.

use chrono::NaiveDate;

use super::*;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

// ==================== Wildcard Tests ====================

#[test]
fn test_parse_all_wildcards() {
    let filter = FilterParser::parse("* * * *").unwrap();
    assert_eq!(filter, Filter::unbounded());
    assert!(filter.is_unbounded());
}

#[test]
fn test_parse_with_extra_whitespace() {
    assert_eq!(
        FilterParser::parse("  *\t*   * *\n").unwrap(),
        Filter::unbounded()
    );
}

// ==================== Price Tests ====================

#[test]
fn test_parse_price_min() {
    let filter = FilterParser::parse("3.0 * * *").unwrap();
    assert_eq!(filter.price_min, Bound::Inclusive(3.0));
    assert_eq!(filter.price_max, Bound::Unbounded);
    assert_eq!(filter.expires_start, Bound::Unbounded);
    assert_eq!(filter.expires_stop, Bound::Unbounded);
}

#[test]
fn test_parse_price_max() {
    let filter = FilterParser::parse("* 3.0 * *").unwrap();
    assert_eq!(filter.price_min, Bound::Unbounded);
    assert_eq!(filter.price_max, Bound::Inclusive(3.0));
    assert_eq!(filter.expires_start, Bound::Unbounded);
    assert_eq!(filter.expires_stop, Bound::Unbounded);
}

#[test]
fn test_parse_price_integer_and_negative() {
    let filter = FilterParser::parse("-1 10 * *").unwrap();
    assert_eq!(filter.price_min, Bound::Inclusive(-1.0));
    assert_eq!(filter.price_max, Bound::Inclusive(10.0));
}

#[test]
fn test_parse_price_rejects_nan() {
    let err = FilterParser::parse("NaN * * *").unwrap_err();
    assert_eq!(err.field(), Some(FilterField::PriceMin));
}

// ==================== Date Tests ====================

#[test]
fn test_parse_expires_start() {
    let filter = FilterParser::parse("* * JUL-01-2019 *").unwrap();
    assert_eq!(filter.price_min, Bound::Unbounded);
    assert_eq!(filter.price_max, Bound::Unbounded);
    assert_eq!(filter.expires_start, Bound::Inclusive(date(2019, 7, 1)));
    assert_eq!(filter.expires_stop, Bound::Unbounded);
}

#[test]
fn test_parse_expires_stop() {
    let filter = FilterParser::parse("* * * JUL-01-2019").unwrap();
    assert_eq!(filter.expires_start, Bound::Unbounded);
    assert_eq!(filter.expires_stop, Bound::Inclusive(date(2019, 7, 1)));
}

#[test]
fn test_parse_date_month_case_insensitive() {
    let upper = FilterParser::parse("* * JUN-01-2019 *").unwrap();
    let title = FilterParser::parse("* * Jun-01-2019 *").unwrap();
    assert_eq!(upper, title);
}

#[test]
fn test_parse_date_rejects_dataset_format() {
    let err = FilterParser::parse("* * 07/01/2019 *").unwrap_err();
    assert_eq!(err.field(), Some(FilterField::ExpiresStart));
}

#[test]
fn test_parse_date_rejects_two_digit_year() {
    let err = FilterParser::parse("* * JUL-01-19 *").unwrap_err();
    assert_eq!(err, FilterError::invalid_value(FilterField::ExpiresStart, "JUL-01-19"));

    let err = FilterParser::parse("* * JUN-01-2019 JUL-01-19").unwrap_err();
    assert_eq!(err.field(), Some(FilterField::ExpiresStop));
}

#[test]
fn test_parse_date_rejects_impossible_day() {
    let err = FilterParser::parse("* * * FEB-30-2019").unwrap_err();
    assert_eq!(err.field(), Some(FilterField::ExpiresStop));
}

// ==================== Combined Tests ====================

#[test]
fn test_parse_all_values() {
    let filter = FilterParser::parse("2.0 3.0 JUN-01-2019 JUL-01-2019").unwrap();
    assert_eq!(
        filter,
        Filter {
            price_min: Bound::Inclusive(2.0),
            price_max: Bound::Inclusive(3.0),
            expires_start: Bound::Inclusive(date(2019, 6, 1)),
            expires_stop: Bound::Inclusive(date(2019, 7, 1)),
        }
    );
}

#[test]
fn test_parse_inverted_bounds_are_accepted() {
    let filter = FilterParser::parse("5.0 1.0 JUL-01-2019 JUN-01-2019").unwrap();
    assert_eq!(filter.price_min, Bound::Inclusive(5.0));
    assert_eq!(filter.price_max, Bound::Inclusive(1.0));
}

#[test]
fn test_parse_is_idempotent() {
    let input = "4.0 * * JUL-01-2019";
    assert_eq!(
        FilterParser::parse(input).unwrap(),
        FilterParser::parse(input).unwrap()
    );
}

#[test]
fn test_display_round_trips() {
    let filter = FilterParser::parse("2.5 * JUN-01-2019 *").unwrap();
    assert_eq!(filter.to_string(), "2.5 * JUN-01-2019 *");
    assert_eq!(FilterParser::parse(&filter.to_string()).unwrap(), filter);
}

// ==================== Shape Error Tests ====================

#[test]
fn test_parse_empty_input() {
    assert_eq!(
        FilterParser::parse(""),
        Err(FilterError::TokenCount { found: 0 })
    );
    assert_eq!(
        FilterParser::parse("   "),
        Err(FilterError::TokenCount { found: 0 })
    );
}

#[test]
fn test_parse_too_few_values() {
    assert_eq!(
        FilterParser::parse("* *"),
        Err(FilterError::TokenCount { found: 2 })
    );
}

#[test]
fn test_parse_too_many_values() {
    assert_eq!(
        FilterParser::parse("* * * * * *"),
        Err(FilterError::TokenCount { found: 6 })
    );
}

// ==================== Value Error Tests ====================

#[test]
fn test_parse_invalid_price_min() {
    assert_eq!(
        FilterParser::parse("i * * *"),
        Err(FilterError::invalid_value(FilterField::PriceMin, "i"))
    );
}

#[test]
fn test_parse_invalid_price_max() {
    assert_eq!(
        FilterParser::parse("* i * *"),
        Err(FilterError::invalid_value(FilterField::PriceMax, "i"))
    );
}

#[test]
fn test_parse_invalid_expires_start() {
    assert_eq!(
        FilterParser::parse("* * i *"),
        Err(FilterError::invalid_value(FilterField::ExpiresStart, "i"))
    );
}

#[test]
fn test_parse_invalid_expires_stop() {
    assert_eq!(
        FilterParser::parse("* * * i"),
        Err(FilterError::invalid_value(FilterField::ExpiresStop, "i"))
    );
}

#[test]
fn test_parse_reports_first_invalid_value() {
    assert_eq!(
        FilterParser::parse("i i i i"),
        Err(FilterError::invalid_value(FilterField::PriceMin, "i"))
    );
}

#[test]
fn test_parse_date_in_price_position() {
    let err = FilterParser::parse("JUL-01-2019 * * *").unwrap_err();
    assert_eq!(err.field(), Some(FilterField::PriceMin));
}

#[test]
fn test_error_messages_name_the_field() {
    let err = FilterParser::parse("* * * tomorrow").unwrap_err();
    let message = err.to_string();
    assert!(message.contains("EXPIRES_STOP"), "got: {message}");
    assert!(message.contains("tomorrow"), "got: {message}");

    let err = FilterParser::parse("* *").unwrap_err();
    assert_eq!(err.to_string(), "expected 4 filter values, found 2");
}

#[test]
fn test_usage_lists_fields_in_order() {
    let names: Vec<&str> = FilterField::ALL.iter().map(|f| f.name()).collect();
    assert!(USAGE.contains(&names.join(" ")));
}
