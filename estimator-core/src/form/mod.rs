//! Form state: the raw values behind each form, typed field paths, and the
//! row store used for variable-length lists.

pub mod estimate_form;
pub mod field_array;
pub mod path;
pub mod points_form;

pub use estimate_form::{EstimateInput, SystemInput};
pub use field_array::{FieldArray, RowId};
pub use path::{
    EstimateField, FieldAccessError, FieldValue, FormModel, ParseFieldPathError, PointColumn,
    PointsField, SystemColumn,
};
pub use points_form::{PointInput, PointsInput};
