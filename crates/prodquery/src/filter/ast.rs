//! Structured representation of a parsed range filter.

use std::fmt;

use chrono::NaiveDate;

/// Date format used when typing filter bounds (e.g. `JUL-01-2019`).
pub const FILTER_DATE_FORMAT: &str = "%b-%d-%Y";

/// Token that leaves a bound unconstrained.
pub const WILDCARD: &str = "*";

/// One side of a range.
///
/// `Unbounded` places no constraint on its side. `Inclusive` accepts values
/// equal to the bound itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Bound<T> {
    /// No constraint on this side of the range.
    #[default]
    Unbounded,

    /// Values equal to the bound are accepted.
    Inclusive(T),
}

impl<T: PartialOrd> Bound<T> {
    /// Returns true if `value` is at or above this lower bound.
    pub fn admits_from_below(&self, value: &T) -> bool {
        match self {
            Bound::Unbounded => true,
            Bound::Inclusive(min) => min <= value,
        }
    }

    /// Returns true if `value` is at or below this upper bound.
    pub fn admits_from_above(&self, value: &T) -> bool {
        match self {
            Bound::Unbounded => true,
            Bound::Inclusive(max) => max >= value,
        }
    }
}

impl<T> Bound<T> {
    /// Returns true if this side of the range is unconstrained.
    pub fn is_unbounded(&self) -> bool {
        matches!(self, Bound::Unbounded)
    }

    /// Returns the bound value, if any.
    pub fn value(&self) -> Option<&T> {
        match self {
            Bound::Unbounded => None,
            Bound::Inclusive(value) => Some(value),
        }
    }
}

/// The four positional fields of a filter expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterField {
    PriceMin,
    PriceMax,
    ExpiresStart,
    ExpiresStop,
}

impl FilterField {
    /// All fields in the order they appear in a filter expression.
    pub const ALL: [FilterField; 4] = [
        FilterField::PriceMin,
        FilterField::PriceMax,
        FilterField::ExpiresStart,
        FilterField::ExpiresStop,
    ];

    /// Returns the upper-case name used in usage text.
    pub fn name(self) -> &'static str {
        match self {
            FilterField::PriceMin => "PRICE_MIN",
            FilterField::PriceMax => "PRICE_MAX",
            FilterField::ExpiresStart => "EXPIRES_START",
            FilterField::ExpiresStop => "EXPIRES_STOP",
        }
    }

    /// Returns a human description of the literal this field accepts.
    pub fn expected(self) -> &'static str {
        match self {
            FilterField::PriceMin | FilterField::PriceMax => "a number",
            FilterField::ExpiresStart | FilterField::ExpiresStop => "a date like JUL-01-2019",
        }
    }
}

impl fmt::Display for FilterField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A parsed product filter.
///
/// Each field is independently bounded or unbounded. No ordering is enforced
/// between `price_min`/`price_max` or `expires_start`/`expires_stop`; an
/// inverted pair is valid and simply matches nothing.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Filter {
    /// Lowest accepted price.
    pub price_min: Bound<f64>,

    /// Highest accepted price.
    pub price_max: Bound<f64>,

    /// Earliest accepted expiration date.
    pub expires_start: Bound<NaiveDate>,

    /// Latest accepted expiration date.
    pub expires_stop: Bound<NaiveDate>,
}

impl Filter {
    /// Returns a filter that matches every row.
    ///
    /// # Example
    ///
    /// ```
    /// use prodquery_rs::filter::Filter;
    ///
    /// let filter = Filter::unbounded();
    /// assert!(filter.is_unbounded());
    /// ```
    pub fn unbounded() -> Self {
        Self::default()
    }

    /// Returns true if no field constrains the match.
    pub fn is_unbounded(&self) -> bool {
        self.price_min.is_unbounded()
            && self.price_max.is_unbounded()
            && self.expires_start.is_unbounded()
            && self.expires_stop.is_unbounded()
    }

    /// Returns true if `price` lies within the price bounds.
    pub fn admits_price(&self, price: f64) -> bool {
        self.price_min.admits_from_below(&price) && self.price_max.admits_from_above(&price)
    }

    /// Returns true if `expires` lies within the expiration bounds.
    pub fn admits_expires(&self, expires: NaiveDate) -> bool {
        self.expires_start.admits_from_below(&expires)
            && self.expires_stop.admits_from_above(&expires)
    }
}

/// Renders the filter back in its input syntax.
impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn price(bound: &Bound<f64>) -> String {
            bound
                .value()
                .map_or_else(|| WILDCARD.to_string(), |v| v.to_string())
        }

        fn date(bound: &Bound<NaiveDate>) -> String {
            bound.value().map_or_else(
                || WILDCARD.to_string(),
                |d| d.format(FILTER_DATE_FORMAT).to_string().to_uppercase(),
            )
        }

        write!(
            f,
            "{} {} {} {}",
            price(&self.price_min),
            price(&self.price_max),
            date(&self.expires_start),
            date(&self.expires_stop)
        )
    }
}
