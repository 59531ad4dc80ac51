use rust_decimal::Decimal;
use tracing::debug;

use crate::form::{EstimateField, EstimateInput, SystemColumn, SystemInput};
use crate::models::{Estimate, SystemRecord};
use crate::schema::Validated;
use crate::schema::errors::{CollectionKind, SubmitError, ValidationErrors};
use crate::schema::rules::{check, in_range, non_negative, optional_text, required_text};

const COMPLEXITY_MIN: Decimal = Decimal::ONE;
const COMPLEXITY_MAX: Decimal = Decimal::TEN;

/// Validates the whole estimate form.
///
/// Errors are reported in form order: project details, then each system row
/// column by column.
pub fn validate_estimate(
    form: &EstimateInput
) -> Result<Validated<Estimate>, ValidationErrors<EstimateField>> {
    let mut errors = ValidationErrors::new();

    let project = check(
        &mut errors,
        EstimateField::Project,
        required_text(&form.project),
    );
    let partner = check(
        &mut errors,
        EstimateField::Partner,
        required_text(&form.partner),
    );

    let systems: Vec<Option<SystemRecord>> = form
        .systems
        .iter()
        .enumerate()
        .map(|(index, row)| validate_system(&mut errors, index, row))
        .collect();

    match (project, partner) {
        (Some(project), Some(partner)) if errors.is_empty() => {
            let estimate = Estimate {
                project,
                partner,
                description: optional_text(&form.description),
                tasks: form.tasks,
                due_date: form.due_date,
                notes: optional_text(&form.notes),
                extras: form.extras,
                systems: systems.into_iter().flatten().collect(),
            };
            Ok(Validated::new(estimate))
        }
        _ => {
            debug!(errors = errors.len(), "estimate failed validation");
            Err(errors)
        }
    }
}

fn validate_system(
    errors: &mut ValidationErrors<EstimateField>,
    index: usize,
    row: &SystemInput,
) -> Option<SystemRecord> {
    let field = |column| EstimateField::System(index, column);

    let name = check(errors, field(SystemColumn::Name), required_text(&row.name));
    let inputs = check(errors, field(SystemColumn::Inputs), non_negative(&row.inputs));
    let outputs = check(
        errors,
        field(SystemColumn::Outputs),
        non_negative(&row.outputs),
    );
    let net_vars = check(
        errors,
        field(SystemColumn::NetVars),
        non_negative(&row.net_vars),
    );
    let typicals = check(
        errors,
        field(SystemColumn::Typicals),
        non_negative(&row.typicals),
    );
    let complexity = check(
        errors,
        field(SystemColumn::Complexity),
        in_range(&row.complexity, COMPLEXITY_MIN, COMPLEXITY_MAX),
    );

    Some(SystemRecord {
        name: name?,
        inputs: inputs?,
        outputs: outputs?,
        net_vars: net_vars?,
        typicals: typicals?,
        complexity: complexity?,
    })
}

/// Validates the form and additionally requires at least one system row.
pub fn submit_estimate(
    form: &EstimateInput
) -> Result<Validated<Estimate>, SubmitError<EstimateField>> {
    let estimate = validate_estimate(form).map_err(SubmitError::Invalid)?;
    if estimate.systems.is_empty() {
        debug!("estimate submitted without systems");
        return Err(SubmitError::EmptyCollection(CollectionKind::Systems));
    }
    Ok(estimate)
}
