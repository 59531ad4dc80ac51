use serde::Serialize;

use crate::models::{Extras, SystemRecord, Tasks};

/// The summary document produced by a successful estimate submit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompiledData {
    pub details: ProjectDetails,
    pub tasks: Tasks,
    pub systems: Vec<SystemRecord>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDetails {
    pub project: String,
    pub partner: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Formatted as `YY-MM-DD`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub extras: Extras,
}
