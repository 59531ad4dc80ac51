use chrono::NaiveDate;

use crate::form::field_array::FieldArray;
use crate::form::path::{EstimateField, FieldAccessError, FieldValue, FormModel, SystemColumn};
use crate::models::{ExtraFlag, Extras, TaskFlag, Tasks};

/// Raw input for one system row, as typed by the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SystemInput {
    pub name: String,
    pub inputs: String,
    pub outputs: String,
    pub net_vars: String,
    pub typicals: String,
    pub complexity: String,
}

impl Default for SystemInput {
    fn default() -> Self {
        Self {
            name: String::new(),
            inputs: "0".to_string(),
            outputs: "0".to_string(),
            net_vars: "0".to_string(),
            typicals: "1".to_string(),
            complexity: "1".to_string(),
        }
    }
}

impl SystemInput {
    pub fn column(
        &self,
        column: SystemColumn,
    ) -> &str {
        match column {
            SystemColumn::Name => &self.name,
            SystemColumn::Inputs => &self.inputs,
            SystemColumn::Outputs => &self.outputs,
            SystemColumn::NetVars => &self.net_vars,
            SystemColumn::Typicals => &self.typicals,
            SystemColumn::Complexity => &self.complexity,
        }
    }

    pub fn column_mut(
        &mut self,
        column: SystemColumn,
    ) -> &mut String {
        match column {
            SystemColumn::Name => &mut self.name,
            SystemColumn::Inputs => &mut self.inputs,
            SystemColumn::Outputs => &mut self.outputs,
            SystemColumn::NetVars => &mut self.net_vars,
            SystemColumn::Typicals => &mut self.typicals,
            SystemColumn::Complexity => &mut self.complexity,
        }
    }
}

/// In-progress state of the estimate form.
#[derive(Debug, Clone)]
pub struct EstimateInput {
    pub project: String,
    pub partner: String,
    pub description: String,
    pub tasks: Tasks,
    pub due_date: Option<NaiveDate>,
    pub notes: String,
    pub extras: Extras,
    pub systems: FieldArray<SystemInput>,
}

impl Default for EstimateInput {
    /// Mount-time defaults: empty text, all options off, one blank system row.
    fn default() -> Self {
        let mut systems = FieldArray::new();
        systems.append(SystemInput::default());

        Self {
            project: String::new(),
            partner: String::new(),
            description: String::new(),
            tasks: Tasks::default(),
            due_date: None,
            notes: String::new(),
            extras: Extras::default(),
            systems,
        }
    }
}

impl EstimateInput {
    /// Defaults with the due date pre-filled.
    pub fn with_due_date(due_date: NaiveDate) -> Self {
        Self {
            due_date: Some(due_date),
            ..Default::default()
        }
    }

    /// Every addressable field in form order: details, options, system rows, extras.
    pub fn fields(&self) -> Vec<EstimateField> {
        let mut fields = vec![
            EstimateField::Project,
            EstimateField::Partner,
            EstimateField::Description,
        ];
        fields.extend(TaskFlag::ALL.map(EstimateField::Task));
        for index in 0..self.systems.len() {
            fields.extend(
                SystemColumn::ALL.map(|column| EstimateField::System(index, column)),
            );
        }
        fields.push(EstimateField::DueDate);
        fields.extend(ExtraFlag::ALL.map(EstimateField::Extra));
        fields.push(EstimateField::Notes);
        fields
    }
}

fn expect_text(
    field: &EstimateField,
    value: FieldValue,
) -> Result<String, FieldAccessError> {
    match value {
        FieldValue::Text(text) => Ok(text),
        other => Err(mismatch(field, "text", &other)),
    }
}

fn expect_flag(
    field: &EstimateField,
    value: FieldValue,
) -> Result<bool, FieldAccessError> {
    match value {
        FieldValue::Flag(flag) => Ok(flag),
        other => Err(mismatch(field, "flag", &other)),
    }
}

fn mismatch(
    field: &EstimateField,
    expected: &'static str,
    actual: &FieldValue,
) -> FieldAccessError {
    FieldAccessError::KindMismatch {
        field: field.to_string(),
        expected,
        actual: actual.kind_name(),
    }
}

impl FormModel for EstimateInput {
    type Field = EstimateField;

    fn get(
        &self,
        field: &EstimateField,
    ) -> Result<FieldValue, FieldAccessError> {
        let value = match field {
            EstimateField::Project => FieldValue::Text(self.project.clone()),
            EstimateField::Partner => FieldValue::Text(self.partner.clone()),
            EstimateField::Description => FieldValue::Text(self.description.clone()),
            EstimateField::Task(flag) => FieldValue::Flag(self.tasks.get(*flag)),
            EstimateField::DueDate => FieldValue::Date(self.due_date),
            EstimateField::Notes => FieldValue::Text(self.notes.clone()),
            EstimateField::Extra(flag) => FieldValue::Flag(self.extras.get(*flag)),
            EstimateField::System(index, column) => {
                let row = self
                    .systems
                    .get(*index)
                    .ok_or_else(|| FieldAccessError::MissingRow(field.to_string()))?;
                FieldValue::Text(row.column(*column).to_string())
            }
        };
        Ok(value)
    }

    fn set(
        &mut self,
        field: &EstimateField,
        value: FieldValue,
    ) -> Result<(), FieldAccessError> {
        match field {
            EstimateField::Project => self.project = expect_text(field, value)?,
            EstimateField::Partner => self.partner = expect_text(field, value)?,
            EstimateField::Description => self.description = expect_text(field, value)?,
            EstimateField::Notes => self.notes = expect_text(field, value)?,
            EstimateField::Task(flag) => self.tasks.set(*flag, expect_flag(field, value)?),
            EstimateField::Extra(flag) => self.extras.set(*flag, expect_flag(field, value)?),
            EstimateField::DueDate => match value {
                FieldValue::Date(date) => self.due_date = date,
                other => return Err(mismatch(field, "date", &other)),
            },
            EstimateField::System(index, column) => {
                // Resolve the position to the row's identity before touching it.
                let id = self
                    .systems
                    .id_at(*index)
                    .ok_or_else(|| FieldAccessError::MissingRow(field.to_string()))?;
                let text = expect_text(field, value)?;
                if let Some(row) = self.systems.get_by_id_mut(id) {
                    *row.column_mut(*column) = text;
                }
            }
        }
        Ok(())
    }
}
