//! Drives a full session from on-disk command scripts, the same way the
//! `estimator --script` binary does.

use std::path::{Path, PathBuf};

use estimator_ui::config::EstimateSettings;
use estimator_ui::controllers::ResultState;
use estimator_ui::{Outcome, Session};
use pretty_assertions::assert_eq;
use rust_decimal_macros::dec;
use serde_json::{Value, json};

fn fixture_path(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn session() -> Session {
    Session::new(EstimateSettings {
        prefill_due_date: false,
    })
}

/// Runs every line of the fixture, failing on the first rejected command.
fn run_script(
    session: &mut Session,
    name: &str,
) -> Vec<String> {
    let script = std::fs::read_to_string(fixture_path(name)).expect("fixture should be readable");
    script
        .lines()
        .map(|line| match session.handle_line(line) {
            Ok(Outcome::Continue(text)) => text,
            Ok(Outcome::Quit) => panic!("script quit early at '{line}'"),
            Err(err) => panic!("'{line}' was rejected: {err}"),
        })
        .collect()
}

fn run(
    session: &mut Session,
    line: &str,
) -> String {
    match session.handle_line(line).unwrap() {
        Outcome::Continue(text) => text,
        Outcome::Quit => panic!("unexpected quit"),
    }
}

#[test]
fn test_acme_script_compiles_expected_document() {
    let mut s = session();
    run_script(&mut s, "acme_estimate.txt");

    let document: Value = serde_json::from_str(&run(&mut s, "json")).unwrap();

    assert_eq!(
        document,
        json!({
            "details": {
                "project": "Acme HQ",
                "partner": "Acme Corp",
                "dueDate": "24-03-05",
                "extras": {
                    "haveDrawings": false,
                    "haveBOM": true,
                    "existingSite": false,
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
                    "inputs": 12,
                    "outputs": 8,
                    "netVars": 4,
                    "typicals": 1,
                    "complexity": 1
                },
                {
                    "name": "VAV-1",
                    "inputs": 1200,
                    "outputs": 0,
                    "netVars": 0,
                    "typicals": 1,
                    "complexity": 2.5
                }
            ]
        })
    );
}

#[test]
fn test_acme_script_result_card_is_fresh() {
    let mut s = session();
    let outputs = run_script(&mut s, "acme_estimate.txt");

    let page = outputs.last().unwrap();
    assert!(page.contains("== Summary (up to date) =="));
    assert_eq!(s.estimate().result().is_fresh(), Some(true));
}

#[test]
fn test_edit_after_submit_marks_summary_stale() {
    let mut s = session();
    run_script(&mut s, "acme_estimate.txt");

    run(&mut s, "set notes call before visiting");

    assert!(run(&mut s, "show").contains("== Summary (out of date) =="));
    let data = s.estimate().result().compiled().unwrap();
    assert_eq!(data.details.notes, None);
}

#[test]
fn test_invalid_resubmit_keeps_previous_document() {
    let mut s = session();
    run_script(&mut s, "acme_estimate.txt");
    let before = s.estimate().result().compiled().cloned();

    run(&mut s, "set systems.0.complexity 11");
    let text = run(&mut s, "submit");

    assert!(text.contains("systems.0.complexity: Must be between 1 and 10"));
    assert!(text.ends_with("Focus: systems.0.complexity"));
    assert_eq!(s.estimate().result().compiled().cloned(), before);
}

#[test]
fn test_removing_first_system_keeps_second_rows_values() {
    let mut s = session();
    run_script(&mut s, "acme_estimate.txt");

    run(&mut s, "remove 0");
    run(&mut s, "submit");

    let data = s.estimate().result().compiled().unwrap();
    assert_eq!(data.systems.len(), 1);
    assert_eq!(data.systems[0].name, "VAV-1");
    assert_eq!(data.systems[0].inputs, dec!(1200));
}

#[test]
fn test_summary_command_renders_table() {
    let mut s = session();
    run_script(&mut s, "acme_estimate.txt");

    let summary = run(&mut s, "summary");

    assert!(summary.contains("  Due Date: 24-03-05"));
    assert!(summary.contains("  Engineering: Yes"));
    assert!(summary.contains("  VAV-1 | 1200"));
}

#[test]
fn test_discard_then_resubmit() {
    let mut s = session();
    run_script(&mut s, "acme_estimate.txt");

    let page = run(&mut s, "discard");
    assert!(page.ends_with("No results yet."));
    assert_eq!(s.estimate().result(), &ResultState::Discarded);

    let outputs = run_script(&mut s, "acme_estimate.txt");
    assert!(outputs.last().unwrap().contains("== Summary (up to date) =="));
}

#[test]
fn test_points_script_accepts_rows() {
    let mut s = session();
    let outputs = run_script(&mut s, "points.txt");

    let points = s.points().accepted().unwrap();
    assert_eq!(points.len(), 2);
    assert_eq!(points[0].point_name, "New Point Name");
    assert_eq!(points[1].point_type, "AV");
    assert_eq!(points[1].point_instance, dec!(2001));
    assert!(outputs.last().unwrap().contains("Accepted 2 point(s)"));
}
