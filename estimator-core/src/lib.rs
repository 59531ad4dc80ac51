pub mod compile;
pub mod form;
pub mod models;
pub mod number;
pub mod schema;

pub use compile::{compile, format_due_date, to_pretty_json};
pub use models::*;
pub use schema::{SubmitError, Validated, ValidationErrors};
