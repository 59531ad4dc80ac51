use tracing::debug;

use crate::form::{PointColumn, PointInput, PointsField, PointsInput};
use crate::models::PointRecord;
use crate::schema::Validated;
use crate::schema::errors::{CollectionKind, SubmitError, ValidationErrors};
use crate::schema::rules::{check, non_negative, required_text};

/// Validates every point row. The description column is free text and never fails.
pub fn validate_points(
    form: &PointsInput
) -> Result<Validated<Vec<PointRecord>>, ValidationErrors<PointsField>> {
    let mut errors = ValidationErrors::new();

    let points: Vec<Option<PointRecord>> = form
        .points
        .iter()
        .enumerate()
        .map(|(index, row)| validate_point(&mut errors, index, row))
        .collect();

    if errors.is_empty() {
        Ok(Validated::new(points.into_iter().flatten().collect()))
    } else {
        debug!(errors = errors.len(), "points failed validation");
        Err(errors)
    }
}

fn validate_point(
    errors: &mut ValidationErrors<PointsField>,
    index: usize,
    row: &PointInput,
) -> Option<PointRecord> {
    let field = |column| PointsField::new(index, column);

    let point_device = check(
        errors,
        field(PointColumn::Device),
        non_negative(&row.point_device),
    );
    let point_type = check(
        errors,
        field(PointColumn::Type),
        required_text(&row.point_type),
    );
    let point_instance = check(
        errors,
        field(PointColumn::Instance),
        non_negative(&row.point_instance),
    );
    let point_name = check(
        errors,
        field(PointColumn::Name),
        required_text(&row.point_name),
    );

    Some(PointRecord {
        point_device: point_device?,
        point_type: point_type?,
        point_instance: point_instance?,
        point_name: point_name?,
        point_description: row.point_description.clone(),
    })
}

/// Validates the form and additionally requires at least one point row.
pub fn submit_points(
    form: &PointsInput
) -> Result<Validated<Vec<PointRecord>>, SubmitError<PointsField>> {
    let points = validate_points(form).map_err(SubmitError::Invalid)?;
    if points.is_empty() {
        debug!("points submitted without rows");
        return Err(SubmitError::EmptyCollection(CollectionKind::Points));
    }
    Ok(points)
}
