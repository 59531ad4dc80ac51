//! Single-field rules shared by both form schemas.

use rust_decimal::Decimal;

use crate::number::coerce_number;
use crate::schema::errors::{ErrorReason, ValidationErrors};

/// Text that must be non-empty after trimming.
pub(crate) fn required_text(raw: &str) -> Result<String, ErrorReason> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        Err(ErrorReason::Required)
    } else {
        Ok(trimmed.to_string())
    }
}

/// Optional text: empty after trimming becomes `None`.
pub(crate) fn optional_text(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// A number that must coerce and be zero or greater.
pub(crate) fn non_negative(raw: &str) -> Result<Decimal, ErrorReason> {
    let value = coerce_number(raw).map_err(|_| ErrorReason::Invalid)?;
    if value < Decimal::ZERO {
        return Err(ErrorReason::Invalid);
    }
    Ok(value)
}

/// A number that must coerce and fall within `min..=max`.
pub(crate) fn in_range(
    raw: &str,
    min: Decimal,
    max: Decimal,
) -> Result<Decimal, ErrorReason> {
    let value = coerce_number(raw).map_err(|_| ErrorReason::Invalid)?;
    if value < min || value > max {
        return Err(ErrorReason::OutOfRange { min, max });
    }
    Ok(value)
}

/// Records a rule outcome against `field`, returning the value when it passed.
pub(crate) fn check<F, T>(
    errors: &mut ValidationErrors<F>,
    field: F,
    outcome: Result<T, ErrorReason>,
) -> Option<T> {
    match outcome {
        Ok(value) => Some(value),
        Err(reason) => {
            errors.push(field, reason);
            None
        }
    }
}
