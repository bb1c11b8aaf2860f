//! Years-of-experience parsing.
//!
//! The model reports experience as a number, a numeric string, or a date range
//! such as `"Sep 2020 - Present"`. Everything is reduced to a year count or
//! `None`; nothing here returns an error.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

/// `<4-digit year> <dash> <4-digit year | present | now>`, case-insensitive.
static YEAR_RANGE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(\d{4})\s*[-\u{2013}\u{2014}]\s*(\d{4}|present|now)")
        .expect("year range pattern is valid")
});

/// Parses a years-of-experience value, resolving "present"/"now" to `current_year`.
///
/// Returns `None` for anything that is not a finite, non-negative count.
pub fn parse_years_at(value: &Value, current_year: i32) -> Option<f64> {
    let years = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => parse_years_text(s, current_year)?,
        _ => return None,
    };
    (years.is_finite() && years >= 0.0).then_some(years)
}

fn parse_years_text(text: &str, current_year: i32) -> Option<f64> {
    if let Ok(years) = text.trim().parse::<f64>() {
        return Some(years);
    }

    let caps = YEAR_RANGE.captures(text)?;
    let start: i32 = caps[1].parse().ok()?;
    let end_token = &caps[2];
    let end = if end_token.eq_ignore_ascii_case("present") || end_token.eq_ignore_ascii_case("now")
    {
        current_year
    } else {
        end_token.parse().ok()?
    };

    Some(f64::from((end - start).max(0)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Utc};
    use serde_json::json;

    const YEAR: i32 = 2026;

    #[test]
    fn test_integer_and_float_passthrough() {
        assert_eq!(parse_years_at(&json!(5), YEAR), Some(5.0));
        assert_eq!(parse_years_at(&json!(2.5), YEAR), Some(2.5));
    }

    #[test]
    fn test_numeric_string() {
        assert_eq!(parse_years_at(&json!("3.5"), YEAR), Some(3.5));
        assert_eq!(parse_years_at(&json!(" 7 "), YEAR), Some(7.0));
    }

    #[test]
    fn test_closed_year_range() {
        assert_eq!(parse_years_at(&json!("2019 - 2023"), YEAR), Some(4.0));
        assert_eq!(parse_years_at(&json!("2019-2023"), YEAR), Some(4.0));
        assert_eq!(parse_years_at(&json!("2019 \u{2013} 2021"), YEAR), Some(2.0));
    }

    #[test]
    fn test_open_range_uses_current_year() {
        assert_eq!(parse_years_at(&json!("Sep 2020 - Present"), YEAR), Some(6.0));
        assert_eq!(parse_years_at(&json!("2022 - now"), YEAR), Some(4.0));
        assert_eq!(parse_years_at(&json!("2021 - PRESENT"), YEAR), Some(5.0));
    }

    #[test]
    fn test_open_range_against_real_clock_is_non_negative() {
        let years = parse_years_at(&json!("Sep 2020 - Present"), Utc::now().year()).unwrap();
        assert_eq!(years, f64::from(Utc::now().year() - 2020));
        assert!(years >= 0.0);
    }

    #[test]
    fn test_inverted_range_clamps_to_zero() {
        assert_eq!(parse_years_at(&json!("2023 - 2019"), YEAR), Some(0.0));
        assert_eq!(parse_years_at(&json!("2030 - present"), YEAR), Some(0.0));
    }

    #[test]
    fn test_range_embedded_in_prose() {
        assert_eq!(
            parse_years_at(&json!("Backend engineer at Acme, 2015 - 2020 (remote)"), YEAR),
            Some(5.0)
        );
    }

    #[test]
    fn test_unparseable_is_unknown() {
        assert_eq!(parse_years_at(&json!("N/A"), YEAR), None);
        assert_eq!(parse_years_at(&json!(""), YEAR), None);
        assert_eq!(parse_years_at(&json!("since 2019"), YEAR), None);
    }

    #[test]
    fn test_non_text_non_numeric_is_unknown() {
        assert_eq!(parse_years_at(&Value::Null, YEAR), None);
        assert_eq!(parse_years_at(&json!(true), YEAR), None);
        assert_eq!(parse_years_at(&json!([2019, 2023]), YEAR), None);
        assert_eq!(parse_years_at(&json!({"years": 3}), YEAR), None);
    }

    #[test]
    fn test_negative_and_non_finite_are_unknown() {
        assert_eq!(parse_years_at(&json!(-2), YEAR), None);
        assert_eq!(parse_years_at(&json!("-1.5"), YEAR), None);
        assert_eq!(parse_years_at(&json!("NaN"), YEAR), None);
        assert_eq!(parse_years_at(&json!("inf"), YEAR), None);
    }
}
