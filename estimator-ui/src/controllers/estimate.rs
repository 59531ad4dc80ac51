use chrono::Local;
use estimator_core::form::{
    EstimateField, EstimateInput, FieldAccessError, FieldValue, FormModel, RowId, SystemInput,
};
use estimator_core::compile::compile;
use estimator_core::schema::{
    ErrorReason, SubmitError, ValidationErrors, submit_estimate, validate_estimate,
};
use tracing::{debug, info, warn};

use crate::config::EstimateSettings;
use crate::controllers::{ChangeError, ResultState};
use crate::fields::{FieldView, estimate_descriptor};

/// Owns the estimate form, its live validation errors and the result card.
#[derive(Debug, Clone)]
pub struct EstimateController {
    settings: EstimateSettings,
    form: EstimateInput,
    errors: Option<ValidationErrors<EstimateField>>,
    focus: Option<EstimateField>,
    notice: Option<String>,
    result: ResultState,
}

impl EstimateController {
    pub fn new(settings: EstimateSettings) -> Self {
        let form = Self::mount_defaults(&settings);
        Self {
            settings,
            form,
            errors: None,
            focus: None,
            notice: None,
            result: ResultState::default(),
        }
    }

    fn mount_defaults(settings: &EstimateSettings) -> EstimateInput {
        if settings.prefill_due_date {
            EstimateInput::with_due_date(Local::now().date_naive())
        } else {
            EstimateInput::default()
        }
    }

    pub fn form(&self) -> &EstimateInput {
        &self.form
    }

    pub fn result(&self) -> &ResultState {
        &self.result
    }

    /// Current field errors; `None` until the first edit or submit.
    pub fn errors(&self) -> Option<&ValidationErrors<EstimateField>> {
        self.errors.as_ref()
    }

    pub fn error_for(
        &self,
        field: &EstimateField,
    ) -> Option<&ErrorReason> {
        self.errors.as_ref().and_then(|errors| errors.for_field(field))
    }

    /// The field that should hold input focus after a rejected submit.
    pub fn focused(&self) -> Option<EstimateField> {
        self.focus
    }

    /// Form-level message, e.g. an empty system list at submit.
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn field_view(
        &self,
        field: EstimateField,
    ) -> Result<FieldView<EstimateField>, FieldAccessError> {
        Ok(FieldView {
            descriptor: estimate_descriptor(field),
            value: self.form.get(&field)?,
            error: self.error_for(&field).map(ToString::to_string),
            focused: self.focus == Some(field),
        })
    }

    /// Applies raw input text to `field` through its field component.
    pub fn on_change(
        &mut self,
        field: EstimateField,
        raw: &str,
    ) -> Result<(), ChangeError> {
        let value = match estimate_descriptor(field).kind.parse_input(raw) {
            Ok(value) => value,
            Err(err) => {
                // A rejected edit still means the form no longer matches the result.
                self.result.mark_stale();
                return Err(err.into());
            }
        };
        self.set_field(field, value)?;
        Ok(())
    }

    pub fn set_field(
        &mut self,
        field: EstimateField,
        value: FieldValue,
    ) -> Result<(), FieldAccessError> {
        self.form.set(&field, value)?;
        debug!(%field, "estimate field changed");
        self.after_edit();
        Ok(())
    }

    pub fn append_system(&mut self) -> RowId {
        let id = self.form.systems.append(SystemInput::default());
        debug!(%id, rows = self.form.systems.len(), "system row added");
        self.after_edit();
        id
    }

    pub fn remove_system(
        &mut self,
        index: usize,
    ) -> Option<SystemInput> {
        let removed = self.form.systems.remove(index);
        if removed.is_some() {
            debug!(index, rows = self.form.systems.len(), "system row removed");
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
            Some(EstimateField::System(index, _)) if index == removed => None,
            Some(EstimateField::System(index, column)) if index > removed => {
                Some(EstimateField::System(index - 1, column))
            }
            other => other,
        };
    }

    fn after_edit(&mut self) {
        self.result.mark_stale();
        self.notice = None;
        self.errors = validate_estimate(&self.form).err();
        if self
            .focus
            .is_some_and(|focus| self.error_for(&focus).is_none())
        {
            self.focus = None;
        }
    }

    /// Validates in full and, when everything passes, replaces the result card.
    ///
    /// On failure the previous result is left untouched and focus moves to the
    /// first invalid field.
    pub fn submit(&mut self) -> Result<(), SubmitError<EstimateField>> {
        match submit_estimate(&self.form) {
            Ok(estimate) => {
                let data = compile(&estimate);
                info!(
                    project = %data.details.project,
                    systems = data.systems.len(),
                    "estimate compiled"
                );
                self.errors = None;
                self.focus = None;
                self.notice = None;
                self.result.accept(data);
                Ok(())
            }
            Err(err) => {
                warn!(%err, "estimate submit aborted");
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

    /// Resets the form to its mount defaults and clears the result card.
    pub fn discard(&mut self) {
        info!("estimate discarded");
        self.form = Self::mount_defaults(&self.settings);
        self.errors = None;
        self.focus = None;
        self.notice = None;
        self.result.discard();
    }
}
