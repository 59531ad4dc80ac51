//! Validation rules for the estimate and points forms.
//!
//! A validator either returns the form's typed, coerced value wrapped in
//! [`Validated`], or every field error it found, in form order. Only this
//! module can construct a [`Validated`] value, which is what lets
//! [`crate::compile`] accept nothing but fully validated input.

mod errors;
mod estimate;
mod points;
mod rules;

use std::ops::Deref;

pub use errors::{CollectionKind, ErrorReason, FieldError, SubmitError, ValidationErrors};
pub use estimate::{submit_estimate, validate_estimate};
pub use points::{submit_points, validate_points};

/// A value that passed schema validation in full.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Validated<T>(T);

impl<T> Validated<T> {
    pub(crate) fn new(value: T) -> Self {
        Self(value)
    }

    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> Deref for Validated<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.0
    }
}
