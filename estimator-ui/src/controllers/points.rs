use estimator_core::form::{
    FieldAccessError, FieldValue, FormModel, PointInput, PointsField, PointsInput, RowId,
};
use estimator_core::models::PointRecord;
use estimator_core::schema::{
    ErrorReason, SubmitError, ValidationErrors, submit_points, validate_points,
};
use tracing::{debug, info, warn};

use crate::controllers::ChangeError;
use crate::fields::{FieldView, points_descriptor};

/// Owns the points form and the last point list it accepted.
#[derive(Debug, Clone, Default)]
pub struct PointsController {
    form: PointsInput,
    errors: Option<ValidationErrors<PointsField>>,
    focus: Option<PointsField>,
    notice: Option<String>,
    accepted: Option<Vec<PointRecord>>,
}

impl PointsController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn form(&self) -> &PointsInput {
        &self.form
    }

    pub fn errors(&self) -> Option<&ValidationErrors<PointsField>> {
        self.errors.as_ref()
    }

    pub fn error_for(
        &self,
        field: &PointsField,
    ) -> Option<&ErrorReason> {
        self.errors.as_ref().and_then(|errors| errors.for_field(field))
    }

    pub fn focused(&self) -> Option<PointsField> {
        self.focus
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// Points from the most recent successful submit.
    pub fn accepted(&self) -> Option<&[PointRecord]> {
        self.accepted.as_deref()
    }

    pub fn field_view(
        &self,
        field: PointsField,
    ) -> Result<FieldView<PointsField>, FieldAccessError> {
        Ok(FieldView {
            descriptor: points_descriptor(field),
            value: self.form.get(&field)?,
            error: self.error_for(&field).map(ToString::to_string),
            focused: self.focus == Some(field),
        })
    }

    pub fn on_change(
        &mut self,
        field: PointsField,
        raw: &str,
    ) -> Result<(), ChangeError> {
        let value = points_descriptor(field).kind.parse_input(raw)?;
        self.set_field(field, value)?;
        Ok(())
    }

    pub fn set_field(
        &mut self,
        field: PointsField,
        value: FieldValue,
    ) -> Result<(), FieldAccessError> {
        self.form.set(&field, value)?;
        debug!(%field, "point field changed");
        self.after_edit();
        Ok(())
    }

    pub fn append_point(&mut self) -> RowId {
        let id = self.form.points.append(PointInput::default());
        debug!(%id, rows = self.form.points.len(), "point row added");
        self.after_edit();
        id
    }

    pub fn remove_point(
        &mut self,
        index: usize,
    ) -> Option<PointInput> {
        let removed = self.form.points.remove(index);
        if removed.is_some() {
            debug!(index, rows = self.form.points.len(), "point row removed");
            self.shift_focus(index);
            self.after_edit();
        }
        removed
    }

    /// Keeps focus on the same row after the row at `removed` is gone.
    fn shift_focus(
        &mut self,
        removed: usize,
    ) {
        self.focus = match self.focus {
            Some(field) if field.index == removed => None,
            Some(field) if field.index > removed => {
                Some(PointsField::new(field.index - 1, field.column))
            }
            other => other,
        };
    }

    fn after_edit(&mut self) {
        self.notice = None;
        self.errors = validate_points(&self.form).err();
        if self
            .focus
            .is_some_and(|focus| self.error_for(&focus).is_none())
        {
            self.focus = None;
        }
    }

    pub fn submit(&mut self) -> Result<(), SubmitError<PointsField>> {
        match submit_points(&self.form) {
            Ok(points) => {
                info!(points = points.len(), "points accepted");
                self.errors = None;
                self.focus = None;
                self.notice = None;
                self.accepted = Some(points.into_inner());
                Ok(())
            }
            Err(err) => {
                warn!(%err, "points submit aborted");
                match &err {
                    SubmitError::Invalid(errors) => {
                        self.focus = errors.first().map(|error| error.field);
                        self.errors = Some(errors.clone());
                        self.notice = None;
                    }
                    SubmitError::EmptyCollection(_) => {
                        self.errors = None;
                        self.focus = None;
                        self.notice = Some(err.to_string());
                    }
                }
                Err(err)
            }
        }
    }

    /// Back to the single placeholder row.
    pub fn discard(&mut self) {
        info!("points discarded");
        *self = Self::default();
    }
}
