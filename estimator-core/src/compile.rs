//! Projection from a validated estimate to the summary document.
//!
//! # Example
//!
//! ```
//! use estimator_core::compile::compile;
//! use estimator_core::form::{EstimateInput, FieldArray, SystemInput};
//! use estimator_core::schema::submit_estimate;
//!
//! let mut form = EstimateInput {
//!     project: "Acme HQ".to_string(),
//!     partner: "Acme Corp".to_string(),
//!     systems: FieldArray::new(),
//!     ..Default::default()
//! };
//! form.tasks.engineering = true;
//! form.systems.append(SystemInput {
//!     name: "AHU-1".to_string(),
//!     ..Default::default()
//! });
//!
//! let estimate = submit_estimate(&form).unwrap();
//! let compiled = compile(&estimate);
//!
//! assert!(compiled.tasks.engineering);
//! assert_eq!(compiled.systems[0].name, "AHU-1");
//! ```

use chrono::{Datelike, NaiveDate};

use crate::models::{CompiledData, Estimate, ProjectDetails};
use crate::schema::Validated;

/// Builds the summary document. Pure: the same estimate always yields the same document.
pub fn compile(estimate: &Validated<Estimate>) -> CompiledData {
    CompiledData {
        details: ProjectDetails {
            project: estimate.project.clone(),
            partner: estimate.partner.clone(),
            description: estimate.description.clone(),
            due_date: estimate.due_date.map(format_due_date),
            notes: estimate.notes.clone(),
            extras: estimate.extras,
        },
        tasks: estimate.tasks,
        systems: estimate.systems.clone(),
    }
}

/// Formats a date as `YY-MM-DD`: the year modulo 100, month and day zero-padded.
pub fn format_due_date(date: NaiveDate) -> String {
    format!(
        "{:02}-{:02}-{:02}",
        date.year().rem_euclid(100),
        date.month(),
        date.day()
    )
}

/// Renders the document as two-space indented JSON.
pub fn to_pretty_json(data: &CompiledData) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(data)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;
    use crate::form::{EstimateInput, FieldArray, SystemInput};
    use crate::schema::validate_estimate;

    fn date(
        y: i32,
        m: u32,
        d: u32,
    ) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn acme_form() -> EstimateInput {
        let mut form = EstimateInput {
            project: "Acme HQ".to_string(),
            partner: "Acme Corp".to_string(),
            systems: FieldArray::new(),
            ..Default::default()
        };
        form.tasks.engineering = true;
        form.extras.existing_site = true;
        form.systems.append(SystemInput {
            name: "AHU-1".to_string(),
            inputs: "4".to_string(),
            outputs: "2".to_string(),
            net_vars: "5".to_string(),
            typicals: "1".to_string(),
            complexity: "3".to_string(),
        });
        form
    }

    #[test]
    fn format_due_date_uses_two_digit_year() {
        assert_eq!(format_due_date(date(2024, 3, 5)), "24-03-05");
        assert_eq!(format_due_date(date(2031, 12, 31)), "31-12-31");
    }

    #[test]
    fn format_due_date_pads_low_years() {
        assert_eq!(format_due_date(date(2005, 1, 9)), "05-01-09");
        assert_eq!(format_due_date(date(2100, 7, 4)), "00-07-04");
    }

    #[test]
    fn compile_acme_example() {
        let estimate = validate_estimate(&acme_form()).unwrap();

        let compiled = compile(&estimate);

        assert!(compiled.tasks.engineering);
        assert!(!compiled.tasks.training);
        assert_eq!(compiled.systems[0].name, "AHU-1");
        assert_eq!(compiled.details.project, "Acme HQ");
        assert!(compiled.details.extras.existing_site);
    }

    #[test]
    fn compile_is_deterministic() {
        let estimate = validate_estimate(&acme_form()).unwrap();

        assert_eq!(compile(&estimate), compile(&estimate));
    }

    #[test]
    fn compile_preserves_system_order_and_length() {
        let mut form = acme_form();
        for name in ["VAV-1", "VAV-2", "CH-1"] {
            form.systems.append(SystemInput {
                name: name.to_string(),
                ..Default::default()
            });
        }
        form.systems.remove(1);

        let compiled = compile(&validate_estimate(&form).unwrap());
        let names: Vec<&str> = compiled.systems.iter().map(|s| s.name.as_str()).collect();

        assert_eq!(names, vec!["AHU-1", "VAV-2", "CH-1"]);
    }

    #[test]
    fn json_shape_matches_summary_document() {
        let mut form = acme_form();
        form.due_date = Some(date(2024, 3, 5));
        let compiled = compile(&validate_estimate(&form).unwrap());

        let value = serde_json::to_value(&compiled).unwrap();

        assert_eq!(
            value,
            json!({
                "details": {
                    "project": "Acme HQ",
                    "partner": "Acme Corp",
                    "dueDate": "24-03-05",
                    "extras": {
                        "haveDrawings": false,
                        "haveBOM": false,
                        "existingSite": true,
                        "corporateAccount": false
                    }
                },
                "tasks": {
                    "engineering": true,
                    "programming": false,
                    "commissioning": false,
                    "training": false
                },
                "systems": [
                    {
                        "name": "AHU-1",
                        "inputs": 4,
                        "outputs": 2,
                        "netVars": 5,
                        "typicals": 1,
                        "complexity": 3
                    }
                ]
            })
        );
    }

    #[test]
    fn absent_optionals_are_omitted_not_nulled() {
        let compiled = compile(&validate_estimate(&acme_form()).unwrap());

        let text = to_pretty_json(&compiled).unwrap();

        assert!(!text.contains("description"));
        assert!(!text.contains("dueDate"));
        assert!(!text.contains("notes"));
        assert!(!text.contains("null"));
    }

    #[test]
    fn pretty_json_uses_two_space_indent() {
        let compiled = compile(&validate_estimate(&acme_form()).unwrap());

        let text = to_pretty_json(&compiled).unwrap();

        assert!(text.starts_with("{\n  \"details\": {\n    \"project\": \"Acme HQ\","));
    }
}
