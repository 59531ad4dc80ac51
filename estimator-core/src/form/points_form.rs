use crate::form::field_array::FieldArray;
use crate::form::path::{FieldAccessError, FieldValue, FormModel, PointColumn, PointsField};

/// Raw input for one point row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PointInput {
    pub point_device: String,
    pub point_type: String,
    pub point_instance: String,
    pub point_name: String,
    pub point_description: String,
}

impl Default for PointInput {
    /// Values used for a row added with "Add Point".
    fn default() -> Self {
        Self {
            point_device: "0".to_string(),
            point_type: "AI".to_string(),
            point_instance: "1101".to_string(),
            point_name: String::new(),
            point_description: String::new(),
        }
    }
}

impl PointInput {
    /// The row present when the form is first shown.
    pub fn placeholder() -> Self {
        Self {
            point_name: "New Point Name".to_string(),
            point_description: "New Point Description".to_string(),
            ..Default::default()
        }
    }

    pub fn column(
        &self,
        column: PointColumn,
    ) -> &str {
        match column {
            PointColumn::Device => &self.point_device,
            PointColumn::Type => &self.point_type,
            PointColumn::Instance => &self.point_instance,
            PointColumn::Name => &self.point_name,
            PointColumn::Description => &self.point_description,
        }
    }

    pub fn column_mut(
        &mut self,
        column: PointColumn,
    ) -> &mut String {
        match column {
            PointColumn::Device => &mut self.point_device,
            PointColumn::Type => &mut self.point_type,
            PointColumn::Instance => &mut self.point_instance,
            PointColumn::Name => &mut self.point_name,
            PointColumn::Description => &mut self.point_description,
        }
    }
}

/// In-progress state of the points form.
#[derive(Debug, Clone)]
pub struct PointsInput {
    pub points: FieldArray<PointInput>,
}

impl Default for PointsInput {
    fn default() -> Self {
        let mut points = FieldArray::new();
        points.append(PointInput::placeholder());
        Self { points }
    }
}

impl PointsInput {
    pub fn fields(&self) -> Vec<PointsField> {
        (0..self.points.len())
            .flat_map(|index| PointColumn::ALL.map(|column| PointsField::new(index, column)))
            .collect()
    }
}

impl FormModel for PointsInput {
    type Field = PointsField;

    fn get(
        &self,
        field: &PointsField,
    ) -> Result<FieldValue, FieldAccessError> {
        self.points
            .get(field.index)
            .map(|row| FieldValue::Text(row.column(field.column).to_string()))
            .ok_or_else(|| FieldAccessError::MissingRow(field.to_string()))
    }

    fn set(
        &mut self,
        field: &PointsField,
        value: FieldValue,
    ) -> Result<(), FieldAccessError> {
        let id = self
            .points
            .id_at(field.index)
            .ok_or_else(|| FieldAccessError::MissingRow(field.to_string()))?;
        let text = match value {
            FieldValue::Text(text) => text,
            other => {
                return Err(FieldAccessError::KindMismatch {
                    field: field.to_string(),
                    expected: "text",
                    actual: other.kind_name(),
                });
            }
        };
        if let Some(row) = self.points.get_by_id_mut(id) {
            *row.column_mut(field.column) = text;
        }
        Ok(())
    }
}
