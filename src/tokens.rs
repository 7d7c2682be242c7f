//! Token validators: total functions classifying raw input strings.
//!
//! Every piece of user input enters the system as a whitespace-separated
//! token. The two validators here decide whether a token is a calendar date
//! or a base-10 integer. Both are total: for any input they return either a
//! parsed value or `None`, never an error and never a panic. Callers branch
//! on presence rather than catching anything.

use crate::constants::{DATE_COMPONENT_COUNT, DATE_FORMAT_DAY_FIRST, DATE_FORMAT_YEAR_FIRST};
use chrono::NaiveDate;

/// Parses a token as a calendar date, returning `None` on any failure.
///
/// A token is only considered date-shaped when it has exactly three
/// `-`-separated components; everything else is rejected before chrono is
/// consulted, so plain negative numbers like `"-5"` never reach the date
/// parser. Year-first `YYYY-MM-DD` is tried first, day-first `DD-MM-YYYY` as
/// a fallback. Single-digit months and days are accepted in both forms.
///
/// # Examples
///
/// ```
/// use ridepool::tokens::parse_date;
/// use chrono::NaiveDate;
///
/// assert_eq!(
///     parse_date("2022-01-10"),
///     NaiveDate::from_ymd_opt(2022, 1, 10)
/// );
/// assert_eq!(
///     parse_date("10-01-2022"),
///     NaiveDate::from_ymd_opt(2022, 1, 10)
/// );
/// assert_eq!(parse_date("2022-01"), None);
/// assert_eq!(parse_date("Odense"), None);
/// ```
pub fn parse_date(text: &str) -> Option<NaiveDate> {
    if text.split('-').count() != DATE_COMPONENT_COUNT {
        return None;
    }
    NaiveDate::parse_from_str(text, DATE_FORMAT_YEAR_FIRST)
        .or_else(|_| NaiveDate::parse_from_str(text, DATE_FORMAT_DAY_FIRST))
        .ok()
}

/// Parses a token as a base-10 integer, returning `None` on any failure.
///
/// The entire token must be an integer: no surrounding whitespace, no
/// floats, no partial parses. A leading `-` is accepted, so negative values
/// parse here and are bounds-checked by the caller where it matters.
///
/// # Examples
///
/// ```
/// use ridepool::tokens::parse_integer;
///
/// assert_eq!(parse_integer("3"), Some(3));
/// assert_eq!(parse_integer("-5"), Some(-5));
/// assert_eq!(parse_integer("3.5"), None);
/// assert_eq!(parse_integer("3 "), None);
/// assert_eq!(parse_integer("Odense"), None);
/// ```
pub fn parse_integer(text: &str) -> Option<i64> {
    text.parse::<i64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_parse_date_year_first() {
        assert_eq!(
            parse_date("2022-01-10"),
            NaiveDate::from_ymd_opt(2022, 1, 10)
        );
        // Single-digit month and day, as produced by the seed generator
        assert_eq!(parse_date("2022-1-5"), NaiveDate::from_ymd_opt(2022, 1, 5));
    }

    #[test]
    fn test_parse_date_day_first_fallback() {
        assert_eq!(
            parse_date("10-01-2022"),
            NaiveDate::from_ymd_opt(2022, 1, 10)
        );
        assert_eq!(parse_date("5-1-2022"), NaiveDate::from_ymd_opt(2022, 1, 5));
    }

    #[test]
    fn test_parse_date_requires_three_components() {
        assert_eq!(parse_date("2022-01"), None);
        assert_eq!(parse_date("2022-01-10-05"), None);
        assert_eq!(parse_date("20220110"), None);
        assert_eq!(parse_date(""), None);
    }

    #[test]
    fn test_parse_date_rejects_invalid_calendar_dates() {
        assert_eq!(parse_date("2022-02-30"), None);
        assert_eq!(parse_date("2022-13-01"), None);
        assert_eq!(parse_date("a-b-c"), None);
    }

    #[test]
    fn test_parse_date_never_panics_on_arbitrary_input() {
        for text in ["---", "-1-2", "🚗-🚗-🚗", " 2022-01-10", "2022-01-10 "] {
            // Totality: any outcome is fine as long as it is an Option
            let _ = parse_date(text);
        }
        assert_eq!(parse_date("---"), None);
    }

    #[test]
    fn test_parse_integer_accepts_whole_strings_only() {
        assert_eq!(parse_integer("3"), Some(3));
        assert_eq!(parse_integer("0"), Some(0));
        assert_eq!(parse_integer("-5"), Some(-5));
        assert_eq!(parse_integer("3.5"), None);
        assert_eq!(parse_integer("3x"), None);
        assert_eq!(parse_integer(" 3"), None);
        assert_eq!(parse_integer(""), None);
    }

    #[test]
    fn test_parse_integer_rejects_overflow() {
        assert_eq!(parse_integer("99999999999999999999999999"), None);
    }

    #[test]
    fn test_negative_number_is_not_a_date() {
        // "-5" splits into two components around the minus sign
        assert_eq!(parse_date("-5"), None);
        assert_eq!(parse_integer("-5"), Some(-5));
    }
}
