//! Numeric coercion for point-count fields.
//!
//! Number inputs arrive as the text the user typed. They are coerced to
//! [`Decimal`] during validation and written back out as plain JSON numbers
//! in the compiled document.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::Serializer;
use thiserror::Error;

/// Error returned when a string cannot be coerced to a [`Decimal`].
#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid number '{input}'")]
pub struct ParseNumberError {
    input: String,
}

/// Normalizes input for decimal parsing: trims whitespace and removes commas (thousands separator).
fn normalize_number_input(s: &str) -> String {
    s.trim().replace(',', "")
}

/// Coerces a string into a [`Decimal`].
///
/// Handles comma as thousands separator (e.g. `"1,200"`).
/// Empty or whitespace-only input is treated as 0.
pub fn coerce_number(s: &str) -> Result<Decimal, ParseNumberError> {
    let normalized = normalize_number_input(s);
    if normalized.is_empty() {
        return Ok(Decimal::ZERO);
    }
    normalized.parse::<Decimal>().map_err(|e| {
        tracing::debug!(input = %s, "number coercion failed: {}", e);
        ParseNumberError {
            input: s.to_string(),
        }
    })
}

/// Formats a decimal the way it is shown in a number input (`4`, not `4.00`).
pub fn display_number(d: Decimal) -> String {
    d.normalize().to_string()
}

/// Serializes a [`Decimal`] as a JSON number: an integer when the value is
/// integral, a float otherwise.
pub fn serialize_number<S>(
    value: &Decimal,
    serializer: S,
) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let normalized = value.normalize();
    if normalized.scale() == 0 {
        if let Some(int) = normalized.to_i64() {
            return serializer.serialize_i64(int);
        }
    }
    serializer.serialize_f64(normalized.to_f64().unwrap_or(0.0))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;
    use serde::Serialize;

    use super::*;

    #[derive(Serialize)]
    struct Wrapper {
        #[serde(serialize_with = "serialize_number")]
        value: Decimal,
    }

    fn to_json(value: Decimal) -> String {
        serde_json::to_string(&Wrapper { value }).unwrap()
    }

    #[test]
    fn coerce_number_accepts_plain_integers() {
        assert_eq!(coerce_number("42").unwrap(), dec!(42));
    }

    #[test]
    fn coerce_number_accepts_comma_thousands_separator() {
        assert_eq!(coerce_number("1,200").unwrap(), dec!(1200));
    }

    #[test]
    fn coerce_number_trims_whitespace() {
        assert_eq!(coerce_number("  7.5 ").unwrap(), dec!(7.5));
    }

    #[test]
    fn coerce_number_empty_treated_as_zero() {
        assert_eq!(coerce_number("").unwrap(), Decimal::ZERO);
        assert_eq!(coerce_number("   ").unwrap(), Decimal::ZERO);
    }

    #[test]
    fn coerce_number_rejects_text() {
        assert!(coerce_number("four").is_err());
        assert!(coerce_number("4a").is_err());
    }

    #[test]
    fn coerce_number_keeps_negative_sign() {
        assert_eq!(coerce_number("-3").unwrap(), dec!(-3));
    }

    #[test]
    fn display_number_drops_trailing_zeros() {
        assert_eq!(display_number(dec!(4.00)), "4");
        assert_eq!(display_number(dec!(2.50)), "2.5");
    }

    #[test]
    fn serialize_number_writes_integers_without_fraction() {
        assert_eq!(to_json(dec!(4)), r#"{"value":4}"#);
        assert_eq!(to_json(dec!(4.000)), r#"{"value":4}"#);
    }

    #[test]
    fn serialize_number_writes_fractions_as_floats() {
        assert_eq!(to_json(dec!(2.5)), r#"{"value":2.5}"#);
    }
}
