//! Form controllers: each owns one form's state, its live validation errors
//! and whatever a successful submit produced.

mod estimate;
mod points;
mod result;

pub use estimate::EstimateController;
pub use points::PointsController;
pub use result::ResultState;

use estimator_core::form::FieldAccessError;
use thiserror::Error;

use crate::fields::BindingError;

/// Why a field edit was rejected. The form is unchanged.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ChangeError {
    #[error(transparent)]
    Binding(#[from] BindingError),

    #[error(transparent)]
    Access(#[from] FieldAccessError),
}
