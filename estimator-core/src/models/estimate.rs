use chrono::NaiveDate;

use crate::models::{Extras, SystemRecord, Tasks};

/// The estimate form after a successful validation pass.
///
/// Strings are trimmed and numbers coerced. Optional text that was left
/// empty is `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Estimate {
    pub project: String,
    pub partner: String,
    pub description: Option<String>,
    pub tasks: Tasks,
    pub due_date: Option<NaiveDate>,
    pub notes: Option<String>,
    pub extras: Extras,
    pub systems: Vec<SystemRecord>,
}
