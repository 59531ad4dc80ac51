use std::collections::BTreeMap;
use std::fmt;

use rust_decimal::Decimal;
use thiserror::Error;

/// Why a single field failed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorReason {
    /// Required text was empty after trimming.
    Required,
    /// A number could not be coerced, or was negative.
    Invalid,
    /// A number fell outside an inclusive range.
    OutOfRange { min: Decimal, max: Decimal },
}

impl fmt::Display for ErrorReason {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            Self::Required => write!(f, "Required"),
            Self::Invalid => write!(f, "Invalid"),
            Self::OutOfRange { min, max } => write!(f, "Must be between {min} and {max}"),
        }
    }
}

/// A validation failure on one field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field}: {reason}")]
pub struct FieldError<F> {
    pub field: F,
    pub reason: ErrorReason,
}

/// Every field error from one validation pass, in form order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationErrors<F> {
    errors: Vec<FieldError<F>>,
}

impl<F> ValidationErrors<F> {
    pub(crate) fn new() -> Self {
        Self { errors: Vec::new() }
    }

    pub(crate) fn push(
        &mut self,
        field: F,
        reason: ErrorReason,
    ) {
        self.errors.push(FieldError { field, reason });
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError<F>> {
        self.errors.iter()
    }

    /// The earliest invalid field in form order; this is the one to focus.
    pub fn first(&self) -> Option<&FieldError<F>> {
        self.errors.first()
    }
}

impl<F: PartialEq> ValidationErrors<F> {
    pub fn for_field(
        &self,
        field: &F,
    ) -> Option<&ErrorReason> {
        self.errors
            .iter()
            .find(|error| &error.field == field)
            .map(|error| &error.reason)
    }
}

impl<F: fmt::Display> ValidationErrors<F> {
    /// Messages keyed by dot/index path, e.g. `systems.2.complexity`.
    pub fn by_path(&self) -> BTreeMap<String, String> {
        self.errors
            .iter()
            .map(|error| (error.field.to_string(), error.reason.to_string()))
            .collect()
    }
}

impl<F> fmt::Display for ValidationErrors<F>
where
    F: fmt::Display,
{
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        for (i, error) in self.errors.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{error}")?;
        }
        Ok(())
    }
}

/// The list a submit requires to be non-empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectionKind {
    Systems,
    Points,
}

impl fmt::Display for CollectionKind {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            Self::Systems => write!(f, "systems"),
            Self::Points => write!(f, "points"),
        }
    }
}

/// Why a submit was aborted. No output is produced in either case.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError<F> {
    #[error("{} field(s) failed validation", .0.len())]
    Invalid(ValidationErrors<F>),

    #[error("You didn't enter any {0}!")]
    EmptyCollection(CollectionKind),
}

impl<F> SubmitError<F> {
    pub fn validation_errors(&self) -> Option<&ValidationErrors<F>> {
        match self {
            Self::Invalid(errors) => Some(errors),
            Self::EmptyCollection(_) => None,
        }
    }
}
