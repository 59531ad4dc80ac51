//! Field components: what kind of input renders each field path, how raw
//! input text becomes a field value, and the `(value, error)` view a
//! renderer needs for one field.

use std::fmt;

use chrono::NaiveDate;
use estimator_core::form::{EstimateField, FieldValue, PointColumn, PointsField, SystemColumn};
use thiserror::Error;

/// Raw input a field kind cannot accept. The field keeps its previous value.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BindingError {
    #[error("'{0}' is not on/off (use true, false, on, off, yes, no, 1 or 0)")]
    InvalidFlag(String),

    #[error("'{0}' is not a date (use YYYY-MM-DD, or leave empty)")]
    InvalidDate(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Textarea,
    Number,
    Date,
    Switch,
    Checkbox,
}

impl FieldKind {
    /// Converts the text a user entered into a value for this kind of field.
    pub fn parse_input(
        &self,
        raw: &str,
    ) -> Result<FieldValue, BindingError> {
        match self {
            Self::Text | Self::Textarea | Self::Number => Ok(FieldValue::Text(raw.to_string())),
            Self::Date => parse_date(raw).map(FieldValue::Date),
            Self::Switch | Self::Checkbox => parse_flag(raw).map(FieldValue::Flag),
        }
    }
}

fn parse_flag(raw: &str) -> Result<bool, BindingError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "on" | "yes" | "1" => Ok(true),
        "false" | "off" | "no" | "0" => Ok(false),
        _ => Err(BindingError::InvalidFlag(raw.to_string())),
    }
}

fn parse_date(raw: &str) -> Result<Option<NaiveDate>, BindingError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .map(Some)
        .map_err(|_| BindingError::InvalidDate(raw.to_string()))
}

/// How one field is presented.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDescriptor<F> {
    pub field: F,
    pub kind: FieldKind,
    pub label: String,
    pub placeholder: Option<&'static str>,
}

pub fn estimate_descriptor(field: EstimateField) -> FieldDescriptor<EstimateField> {
    let (kind, label, placeholder) = match field {
        EstimateField::Project => (
            FieldKind::Text,
            "Project".to_string(),
            Some("Enter project name"),
        ),
        EstimateField::Partner => (
            FieldKind::Text,
            "Partner".to_string(),
            Some("Enter partner or project location"),
        ),
        EstimateField::Description => (
            FieldKind::Textarea,
            "Description".to_string(),
            Some("Description of project intent and scope of work"),
        ),
        EstimateField::Task(flag) => (FieldKind::Switch, flag.label().to_string(), None),
        EstimateField::DueDate => (FieldKind::Date, "Due Date".to_string(), None),
        EstimateField::Notes => (
            FieldKind::Textarea,
            "Notes".to_string(),
            Some("Enter any additional notes here..."),
        ),
        EstimateField::Extra(flag) => (FieldKind::Checkbox, flag.label().to_string(), None),
        EstimateField::System(_, column) => {
            let kind = match column {
                SystemColumn::Name => FieldKind::Text,
                _ => FieldKind::Number,
            };
            (kind, column.label().to_string(), None)
        }
    };
    FieldDescriptor {
        field,
        kind,
        label,
        placeholder,
    }
}

pub fn points_descriptor(field: PointsField) -> FieldDescriptor<PointsField> {
    let (kind, placeholder) = match field.column {
        PointColumn::Device => (FieldKind::Number, Some("Point Device")),
        PointColumn::Type => (FieldKind::Text, Some("Point Type")),
        PointColumn::Instance => (FieldKind::Number, Some("Point Instance")),
        PointColumn::Name => (FieldKind::Text, Some("Point Name")),
        PointColumn::Description => (FieldKind::Text, None),
    };
    FieldDescriptor {
        field,
        kind,
        label: field.column.label().to_string(),
        placeholder,
    }
}

/// Everything a renderer needs for one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldView<F> {
    pub descriptor: FieldDescriptor<F>,
    pub value: FieldValue,
    pub error: Option<String>,
    pub focused: bool,
}

impl<F> fmt::Display for FieldView<F> {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        let marker = if self.focused { '>' } else { ' ' };
        write!(f, "{marker} {}: ", self.descriptor.label)?;

        match (&self.descriptor.kind, &self.value) {
            (FieldKind::Switch, FieldValue::Flag(on)) => {
                write!(f, "{}", if *on { "(on)" } else { "(off)" })?
            }
            (FieldKind::Checkbox, FieldValue::Flag(checked)) => {
                write!(f, "{}", if *checked { "[x]" } else { "[ ]" })?
            }
            (_, value) => {
                let text = value.to_string();
                match (text.is_empty(), self.descriptor.placeholder) {
                    (true, Some(placeholder)) => write!(f, "[{placeholder}]")?,
                    _ => write!(f, "\"{text}\"")?,
                }
            }
        }

        if let Some(error) = &self.error {
            write!(f, "  <- {error}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use estimator_core::models::{ExtraFlag, TaskFlag};
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn flags_accept_common_spellings() {
        for raw in ["true", "ON", " yes ", "1"] {
            assert_eq!(
                FieldKind::Switch.parse_input(raw),
                Ok(FieldValue::Flag(true))
            );
        }
        for raw in ["false", "off", "No", "0"] {
            assert_eq!(
                FieldKind::Checkbox.parse_input(raw),
                Ok(FieldValue::Flag(false))
            );
        }
    }

    #[test]
    fn flags_reject_other_text() {
        assert_eq!(
            FieldKind::Switch.parse_input("maybe"),
            Err(BindingError::InvalidFlag("maybe".to_string()))
        );
    }

    #[test]
    fn dates_parse_iso_or_clear() {
        assert_eq!(
            FieldKind::Date.parse_input("2024-03-05"),
            Ok(FieldValue::Date(NaiveDate::from_ymd_opt(2024, 3, 5)))
        );
        assert_eq!(FieldKind::Date.parse_input(""), Ok(FieldValue::Date(None)));
        assert!(FieldKind::Date.parse_input("03/05/2024").is_err());
        assert!(FieldKind::Date.parse_input("2024-02-30").is_err());
    }

    #[test]
    fn number_fields_keep_raw_text() {
        assert_eq!(
            FieldKind::Number.parse_input("12abc"),
            Ok(FieldValue::Text("12abc".to_string()))
        );
    }

    #[test]
    fn estimate_descriptors_pick_field_kinds() {
        assert_eq!(
            estimate_descriptor(EstimateField::Task(TaskFlag::Training)).kind,
            FieldKind::Switch
        );
        assert_eq!(
            estimate_descriptor(EstimateField::Extra(ExtraFlag::HaveBom)).kind,
            FieldKind::Checkbox
        );
        assert_eq!(
            estimate_descriptor(EstimateField::System(0, SystemColumn::Name)).kind,
            FieldKind::Text
        );
        assert_eq!(
            estimate_descriptor(EstimateField::System(0, SystemColumn::Typicals)).kind,
            FieldKind::Number
        );
        assert_eq!(
            estimate_descriptor(EstimateField::Notes).kind,
            FieldKind::Textarea
        );
    }

    #[test]
    fn points_descriptor_labels() {
        let descriptor = points_descriptor(PointsField::new(0, PointColumn::Instance));

        assert_eq!(descriptor.kind, FieldKind::Number);
        assert_eq!(descriptor.label, "Instance");
    }

    #[test]
    fn field_view_renders_value_error_and_focus() {
        let view = FieldView {
            descriptor: estimate_descriptor(EstimateField::Project),
            value: FieldValue::Text(String::new()),
            error: Some("Required".to_string()),
            focused: true,
        };

        assert_eq!(view.to_string(), "> Project: [Enter project name]  <- Required");
    }

    #[test]
    fn field_view_renders_switches_and_checkboxes() {
        let switch = FieldView {
            descriptor: estimate_descriptor(EstimateField::Task(TaskFlag::Engineering)),
            value: FieldValue::Flag(true),
            error: None,
            focused: false,
        };
        let checkbox = FieldView {
            descriptor: estimate_descriptor(EstimateField::Extra(ExtraFlag::HaveDrawings)),
            value: FieldValue::Flag(false),
            error: None,
            focused: false,
        };

        assert_eq!(switch.to_string(), "  Engineering: (on)");
        assert_eq!(checkbox.to_string(), "  Have Drawings: [ ]");
    }
}
