//! Plain-text views of each page. Every view borrows the state it shows and
//! renders through `Display`.

use std::fmt;

use estimator_core::form::{EstimateField, PointsField};
use estimator_core::models::{PointRecord, TaskFlag};
use estimator_core::number::display_number;
use estimator_core::{CompiledData, to_pretty_json};
use rust_decimal::Decimal;

use crate::controllers::{EstimateController, PointsController, ResultState};
use crate::routes::Route;

// ─── shared pieces ───────────────────────────────────────────────────────────

fn write_header(
    f: &mut fmt::Formatter<'_>,
    route: &Route,
) -> fmt::Result {
    writeln!(f, "== {} ==", route.title())?;
    writeln!(f, "{}", route.description())?;
    if let Some(tile) = route.tile() {
        writeln!(f)?;
        writeln!(f, "-- {} --", tile.title)?;
        writeln!(f, "{}", tile.description)?;
    }
    Ok(())
}

fn write_section(
    f: &mut fmt::Formatter<'_>,
    title: &str,
) -> fmt::Result {
    writeln!(f)?;
    writeln!(f, "[{title}]")
}

/// Left-aligned columns padded to the widest cell.
fn write_table(
    f: &mut fmt::Formatter<'_>,
    headers: &[&str],
    rows: &[Vec<String>],
) -> fmt::Result {
    let widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(i, header)| {
            rows.iter()
                .filter_map(|row| row.get(i))
                .map(|cell| cell.chars().count())
                .chain([header.chars().count()])
                .max()
                .unwrap_or_default()
        })
        .collect();

    let line = |f: &mut fmt::Formatter<'_>, cells: &mut dyn Iterator<Item = &str>| {
        let row: Vec<String> = cells
            .zip(&widths)
            .map(|(cell, &width)| format!("{cell:<width$}"))
            .collect();
        writeln!(f, "  {}", row.join(" | ").trim_end())
    };

    line(f, &mut headers.iter().copied())?;
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    writeln!(f, "  {}", rule.join("-+-"))?;
    for row in rows {
        line(f, &mut row.iter().map(String::as_str))?;
    }
    Ok(())
}

fn number_cells<const N: usize>(values: [Decimal; N]) -> [String; N] {
    values.map(display_number)
}

// ─── landing / not found ─────────────────────────────────────────────────────

pub struct LandingView;

impl fmt::Display for LandingView {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write_header(f, &Route::Landing)?;
        writeln!(f)?;
        writeln!(f, "  [Start a new Estimate]  go /new")?;
        write!(f, "  [Load From JSON]        load")
    }
}

pub struct NotFoundView<'a>(pub &'a str);

impl fmt::Display for NotFoundView<'_> {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        writeln!(f, "== Not Found ==")?;
        write!(f, "No page at '{}'. Try `go /`.", self.0)
    }
}

// ─── estimate page ───────────────────────────────────────────────────────────

fn estimate_section(field: &EstimateField) -> &'static str {
    match field {
        EstimateField::Project | EstimateField::Partner | EstimateField::Description => {
            "Project Information"
        }
        EstimateField::Task(_) => "Select service options",
        EstimateField::System(..) => "Add Systems and Points",
        EstimateField::DueDate | EstimateField::Extra(_) | EstimateField::Notes => {
            "Additional Information"
        }
    }
}

pub struct EstimatePage<'a>(pub &'a EstimateController);

impl fmt::Display for EstimatePage<'_> {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        let controller = self.0;
        let form = controller.form();
        write_header(f, &Route::NewEstimate)?;

        let mut section = None;
        let mut row = None;
        for field in form.fields() {
            let title = estimate_section(&field);
            if section != Some(title) {
                if title == "Additional Information" && form.systems.is_empty() {
                    write_section(f, "Add Systems and Points")?;
                    writeln!(f, "  (no systems)")?;
                }
                write_section(f, title)?;
                section = Some(title);
            }
            let indent = match field {
                EstimateField::System(index, _) => {
                    if row != Some(index) {
                        let id = form.systems.id_at(index).ok_or(fmt::Error)?;
                        writeln!(f, "  System {index} ({id})")?;
                        row = Some(index);
                    }
                    "  "
                }
                _ => "",
            };
            let view = controller.field_view(field).map_err(|_| fmt::Error)?;
            writeln!(f, "{indent}{view}")?;
        }

        writeln!(f)?;
        writeln!(f, "  [Update Summary]  submit")?;
        if let Some(notice) = controller.notice() {
            writeln!(f, "  ! {notice}")?;
        }
        writeln!(f)?;
        write!(f, "{}", ResultCard(controller.result()))
    }
}

/// The card under the estimate form.
pub struct ResultCard<'a>(pub &'a ResultState);

impl fmt::Display for ResultCard<'_> {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        let (Some(data), Some(fresh)) = (self.0.compiled(), self.0.is_fresh()) else {
            return write!(f, "No results yet.");
        };
        let marker = if fresh { "up to date" } else { "out of date" };
        writeln!(f, "== Summary ({marker}) ==")?;
        writeln!(
            f,
            "  [Discard] discard  [Save For Later] save  [Send to PDS for Quote] send"
        )?;
        writeln!(f)?;
        write!(f, "{}", to_pretty_json(data).map_err(|_| fmt::Error)?)
    }
}

/// Readable rendering of a compiled estimate.
pub struct SummaryView<'a>(pub &'a CompiledData);

impl fmt::Display for SummaryView<'_> {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        let data = self.0;
        let details = &data.details;

        writeln!(f, "Project Details")?;
        writeln!(f, "  Project: {}", details.project)?;
        writeln!(f, "  Partner: {}", details.partner)?;
        writeln!(
            f,
            "  Description: {}",
            details.description.as_deref().unwrap_or_default()
        )?;
        writeln!(
            f,
            "  Due Date: {}",
            details.due_date.as_deref().unwrap_or("N/A")
        )?;

        writeln!(f)?;
        writeln!(f, "Tasks")?;
        for flag in TaskFlag::ALL {
            let answer = if data.tasks.get(flag) { "Yes" } else { "No" };
            writeln!(f, "  {}: {answer}", flag.label())?;
        }

        writeln!(f)?;
        writeln!(f, "Systems")?;
        let rows: Vec<Vec<String>> = data
            .systems
            .iter()
            .map(|system| {
                let mut cells = vec![system.name.clone()];
                cells.extend(number_cells([
                    system.inputs,
                    system.outputs,
                    system.net_vars,
                    system.typicals,
                    system.complexity,
                ]));
                cells
            })
            .collect();
        write_table(
            f,
            &[
                "Name",
                "Inputs",
                "Outputs",
                "Network Variables",
                "Typicals",
                "Complexity",
            ],
            &rows,
        )
    }
}

// ─── points page ─────────────────────────────────────────────────────────────

pub struct PointsPage<'a>(pub &'a PointsController);

impl fmt::Display for PointsPage<'_> {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        let controller = self.0;
        let form = controller.form();
        write_header(f, &Route::Points)?;
        write_section(f, "Systems and Points")?;

        let mut row = None;
        for field in form.fields() {
            let PointsField { index, .. } = field;
            if row != Some(index) {
                let id = form.points.id_at(index).ok_or(fmt::Error)?;
                writeln!(f, "  Point {index} ({id})")?;
                row = Some(index);
            }
            let view = controller.field_view(field).map_err(|_| fmt::Error)?;
            writeln!(f, "  {view}")?;
        }
        if form.points.is_empty() {
            writeln!(f, "  (no points)")?;
        }

        writeln!(f)?;
        write!(f, "  [Update Summary]  submit")?;
        if let Some(notice) = controller.notice() {
            write!(f, "\n  ! {notice}")?;
        }
        if let Some(points) = controller.accepted() {
            write!(f, "\n\n{}", PointsTable(points))?;
        }
        Ok(())
    }
}

pub struct PointsTable<'a>(pub &'a [PointRecord]);

impl fmt::Display for PointsTable<'_> {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        writeln!(f, "Accepted {} point(s)", self.0.len())?;
        let rows: Vec<Vec<String>> = self
            .0
            .iter()
            .map(|point| {
                let [device, instance] = number_cells([point.point_device, point.point_instance]);
                vec![
                    device,
                    point.point_type.clone(),
                    instance,
                    point.point_name.clone(),
                    point.point_description.clone(),
                ]
            })
            .collect();
        write_table(
            f,
            &["Device", "Type", "Instance", "Name", "Description"],
            &rows,
        )
    }
}

#[cfg(test)]
mod tests {
    use estimator_core::models::{Extras, ProjectDetails, SystemRecord, Tasks};
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::config::EstimateSettings;

    fn compiled() -> CompiledData {
        CompiledData {
            details: ProjectDetails {
                project: "Acme HQ".to_string(),
                partner: "Acme Corp".to_string(),
                description: None,
                due_date: Some("24-03-05".to_string()),
                notes: None,
                extras: Extras::default(),
            },
            tasks: Tasks {
                engineering: true,
                ..Tasks::default()
            },
            systems: vec![SystemRecord {
                name: "AHU-1".to_string(),
                inputs: dec!(12),
                outputs: dec!(8),
                net_vars: dec!(4),
                typicals: dec!(1),
                complexity: dec!(3),
            }],
        }
    }

    #[test]
    fn summary_lists_details_tasks_and_systems() {
        let text = SummaryView(&compiled()).to_string();

        assert_eq!(
            text,
            "Project Details\n\
             \x20 Project: Acme HQ\n\
             \x20 Partner: Acme Corp\n\
             \x20 Description: \n\
             \x20 Due Date: 24-03-05\n\
             \n\
             Tasks\n\
             \x20 Engineering: Yes\n\
             \x20 Programming: No\n\
             \x20 Commissioning: No\n\
             \x20 Training: No\n\
             \n\
             Systems\n\
             \x20 Name  | Inputs | Outputs | Network Variables | Typicals | Complexity\n\
             \x20 ------+--------+---------+-------------------+----------+-----------\n\
             \x20 AHU-1 | 12     | 8       | 4                 | 1        | 3\n"
        );
    }

    #[test]
    fn summary_without_due_date_shows_na() {
        let mut data = compiled();
        data.details.due_date = None;

        assert!(SummaryView(&data).to_string().contains("Due Date: N/A"));
    }

    #[test]
    fn result_card_states() {
        let mut state = ResultState::default();
        assert_eq!(ResultCard(&state).to_string(), "No results yet.");

        state.accept(compiled());
        let fresh = ResultCard(&state).to_string();
        assert!(fresh.starts_with("== Summary (up to date) =="));
        assert!(fresh.contains("\"project\": \"Acme HQ\""));

        state.mark_stale();
        assert!(ResultCard(&state).to_string().starts_with("== Summary (out of date) =="));

        state.discard();
        assert_eq!(ResultCard(&state).to_string(), "No results yet.");
    }

    #[test]
    fn estimate_page_groups_fields_into_sections() {
        let controller = EstimateController::new(EstimateSettings {
            prefill_due_date: false,
        });
        let text = EstimatePage(&controller).to_string();

        let order: Vec<usize> = [
            "[Project Information]",
            "[Select service options]",
            "[Add Systems and Points]",
            "[Additional Information]",
            "No results yet.",
        ]
        .iter()
        .map(|needle| text.find(needle).unwrap())
        .collect();
        let mut sorted = order.clone();
        sorted.sort_unstable();
        assert_eq!(order, sorted);
        assert!(text.contains("  System 0 (row-0)"));
        assert!(text.contains("    Complexity: \"1\""));
    }

    #[test]
    fn points_page_shows_placeholder_row() {
        let controller = PointsController::new();
        let text = PointsPage(&controller).to_string();

        assert!(text.starts_with("== Points =="));
        assert!(text.contains("[Systems and Points]"));
        assert!(text.contains("  Point 0 (row-0)"));
        assert!(text.contains("Name: \"New Point Name\""));
    }
}
