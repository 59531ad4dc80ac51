//! Typed field addressing.
//!
//! Every editable value in a form is named by a path enum rather than an
//! interpolated string. Paths still render to (and parse from) the familiar
//! dot/index notation, e.g. `systems.2.complexity` or `extras.haveBOM`, which
//! is what error listings and the shell use.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use thiserror::Error;

use crate::models::{ExtraFlag, TaskFlag};

/// A value read from or written to a form field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Flag(bool),
    Date(Option<NaiveDate>),
}

impl FieldValue {
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Text(_) => "text",
            Self::Flag(_) => "flag",
            Self::Date(_) => "date",
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            Self::Text(text) => write!(f, "{text}"),
            Self::Flag(flag) => write!(f, "{flag}"),
            Self::Date(Some(date)) => write!(f, "{}", date.format("%Y-%m-%d")),
            Self::Date(None) => Ok(()),
        }
    }
}

/// Errors raised when a path does not address an existing field or the
/// value has the wrong shape for it.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FieldAccessError {
    #[error("no row at {0}")]
    MissingRow(String),

    #[error("field {field} expects a {expected} value, got {actual}")]
    KindMismatch {
        field: String,
        expected: &'static str,
        actual: &'static str,
    },
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown field path '{0}'")]
pub struct ParseFieldPathError(pub String);

/// Generic get/set over a form's fields.
pub trait FormModel {
    type Field: Clone + PartialEq + fmt::Display;

    fn get(
        &self,
        field: &Self::Field,
    ) -> Result<FieldValue, FieldAccessError>;

    fn set(
        &mut self,
        field: &Self::Field,
        value: FieldValue,
    ) -> Result<(), FieldAccessError>;
}

// ─── Estimate paths ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SystemColumn {
    Name,
    Inputs,
    Outputs,
    NetVars,
    Typicals,
    Complexity,
}

impl SystemColumn {
    pub const ALL: [SystemColumn; 6] = [
        SystemColumn::Name,
        SystemColumn::Inputs,
        SystemColumn::Outputs,
        SystemColumn::NetVars,
        SystemColumn::Typicals,
        SystemColumn::Complexity,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Inputs => "inputs",
            Self::Outputs => "outputs",
            Self::NetVars => "netVars",
            Self::Typicals => "typicals",
            Self::Complexity => "complexity",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|column| column.as_str() == s)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Inputs => "Inputs",
            Self::Outputs => "Outputs",
            Self::NetVars => "NetVars",
            Self::Typicals => "Typicals",
            Self::Complexity => "Complexity",
        }
    }
}

/// Path to a field of the estimate form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EstimateField {
    Project,
    Partner,
    Description,
    Task(TaskFlag),
    DueDate,
    Notes,
    Extra(ExtraFlag),
    System(usize, SystemColumn),
}

impl fmt::Display for EstimateField {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            Self::Project => write!(f, "project"),
            Self::Partner => write!(f, "partner"),
            Self::Description => write!(f, "description"),
            Self::Task(flag) => write!(f, "{}", flag.as_str()),
            Self::DueDate => write!(f, "dueDate"),
            Self::Notes => write!(f, "notes"),
            Self::Extra(flag) => write!(f, "extras.{}", flag.as_str()),
            Self::System(index, column) => write!(f, "systems.{index}.{}", column.as_str()),
        }
    }
}

impl FromStr for EstimateField {
    type Err = ParseFieldPathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseFieldPathError(s.to_string());
        let parts: Vec<&str> = s.split('.').collect();

        match parts.as_slice() {
            ["project"] => Ok(Self::Project),
            ["partner"] => Ok(Self::Partner),
            ["description"] => Ok(Self::Description),
            ["dueDate"] => Ok(Self::DueDate),
            ["notes"] => Ok(Self::Notes),
            [name] => TaskFlag::parse(name).map(Self::Task).ok_or_else(err),
            ["extras", name] => ExtraFlag::parse(name).map(Self::Extra).ok_or_else(err),
            ["systems", index, column] => {
                let index = index.parse::<usize>().map_err(|_| err())?;
                let column = SystemColumn::parse(column).ok_or_else(err)?;
                Ok(Self::System(index, column))
            }
            _ => Err(err()),
        }
    }
}

// ─── Points paths ────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointColumn {
    Device,
    Type,
    Instance,
    Name,
    Description,
}

impl PointColumn {
    pub const ALL: [PointColumn; 5] = [
        PointColumn::Device,
        PointColumn::Type,
        PointColumn::Instance,
        PointColumn::Name,
        PointColumn::Description,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Device => "pointDevice",
            Self::Type => "pointType",
            Self::Instance => "pointInstance",
            Self::Name => "pointName",
            Self::Description => "pointDescription",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|column| column.as_str() == s)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Device => "Device",
            Self::Type => "Type",
            Self::Instance => "Instance",
            Self::Name => "Name",
            Self::Description => "Description",
        }
    }
}

/// Path to a field of the points form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PointsField {
    pub index: usize,
    pub column: PointColumn,
}

impl PointsField {
    pub fn new(
        index: usize,
        column: PointColumn,
    ) -> Self {
        Self { index, column }
    }
}

impl fmt::Display for PointsField {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "points.{}.{}", self.index, self.column.as_str())
    }
}

impl FromStr for PointsField {
    type Err = ParseFieldPathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseFieldPathError(s.to_string());
        let parts: Vec<&str> = s.split('.').collect();

        match parts.as_slice() {
            ["points", index, column] => {
                let index = index.parse::<usize>().map_err(|_| err())?;
                let column = PointColumn::parse(column).ok_or_else(err)?;
                Ok(Self::new(index, column))
            }
            _ => Err(err()),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn estimate_paths_render_dot_notation() {
        assert_eq!(EstimateField::Project.to_string(), "project");
        assert_eq!(
            EstimateField::Task(TaskFlag::Engineering).to_string(),
            "engineering"
        );
        assert_eq!(
            EstimateField::Extra(ExtraFlag::HaveBom).to_string(),
            "extras.haveBOM"
        );
        assert_eq!(
            EstimateField::System(2, SystemColumn::Complexity).to_string(),
            "systems.2.complexity"
        );
    }

    #[test]
    fn estimate_paths_parse_back() {
        for path in [
            "project",
            "partner",
            "description",
            "training",
            "dueDate",
            "notes",
            "extras.existingSite",
            "systems.0.netVars",
            "systems.12.name",
        ] {
            let field: EstimateField = path.parse().unwrap();
            assert_eq!(field.to_string(), path);
        }
    }

    #[test]
    fn estimate_path_rejects_unknown_names() {
        assert!("systems.x.name".parse::<EstimateField>().is_err());
        assert!("systems.0.colour".parse::<EstimateField>().is_err());
        assert!("extras.pool".parse::<EstimateField>().is_err());
        assert!("".parse::<EstimateField>().is_err());
    }

    #[test]
    fn points_paths_round_trip_through_text() {
        let field: PointsField = "points.3.pointInstance".parse().unwrap();

        assert_eq!(field, PointsField::new(3, PointColumn::Instance));
        assert_eq!(field.to_string(), "points.3.pointInstance");
    }

    #[test]
    fn points_path_rejects_estimate_paths() {
        assert!("systems.0.name".parse::<PointsField>().is_err());
    }

    #[test]
    fn field_value_display() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();

        assert_eq!(FieldValue::Date(Some(date)).to_string(), "2024-03-05");
        assert_eq!(FieldValue::Date(None).to_string(), "");
        assert_eq!(FieldValue::Flag(true).to_string(), "true");
    }
}
