//! End-to-end tests of the solve command writing JSON reports.

use super::helpers::{Workspace, grid_instance, parse_reports, unit_square_instance};
use super::*;
use crate::solve::run_solve_with;
use rstest::rstest;
use serde_json::json;

fn solve_to_buffer(args: SolveArgs) -> Vec<u8> {
    let mut buffer = Vec::new();
    run_solve_with(args, &mut buffer).expect("solve should succeed");
    buffer
}

#[rstest]
fn reports_every_algorithm_in_order() {
    let workspace = Workspace::new();
    let path = workspace.write_instance("square.json", &unit_square_instance());

    let reports = parse_reports(&solve_to_buffer(SolveArgs {
        instance_path: Some(path),
        algorithm: None,
        no_steps: false,
    }));

    let names: Vec<&str> = reports
        .iter()
        .filter_map(|report| report["algorithm"].as_str())
        .collect();
    assert_eq!(names, ["greedy", "held-karp", "christofides"]);

    let greedy = &reports[0];
    assert_eq!(greedy["path"], json!([0, 1, 2, 3]));
    assert_eq!(greedy["cost"], json!(4.0));
    assert!(greedy["executionTimeMs"].is_number());
    assert!(greedy.get("execution_time_ms").is_none());
    let steps = greedy["steps"].as_array().expect("steps should be present");
    assert_eq!(steps.first().map(|step| &step["description"]), Some(&json!("Start at node 0")));
    assert_eq!(steps.first().map(|step| &step["currentNode"]), Some(&json!(0)));
    let last = steps.last().expect("final step");
    assert_eq!(last["cost"], greedy["cost"]);
    assert_eq!(last["path"], greedy["path"]);
}

#[rstest]
fn no_steps_omits_traces() {
    let workspace = Workspace::new();
    let path = workspace.write_instance("square.json", &unit_square_instance());

    let reports = parse_reports(&solve_to_buffer(SolveArgs {
        instance_path: Some(path),
        algorithm: Some("christofides".to_owned()),
        no_steps: true,
    }));

    assert_eq!(reports.len(), 1);
    assert!(reports[0].get("steps").is_none());
    assert_eq!(reports[0]["path"].as_array().map(Vec::len), Some(4));
}

#[rstest]
fn refused_held_karp_reports_null_cost() {
    let workspace = Workspace::new();
    let path = workspace.write_instance("grid.json", &grid_instance(16));

    let reports = parse_reports(&solve_to_buffer(SolveArgs {
        instance_path: Some(path),
        algorithm: Some("held-karp".to_owned()),
        no_steps: false,
    }));

    let report = &reports[0];
    assert_eq!(report["algorithm"], json!("held-karp"));
    assert_eq!(report["cost"], json!(null));
    assert_eq!(report["path"], json!([]));
    assert_eq!(report["steps"].as_array().map(Vec::len), Some(1));
}

#[rstest]
fn missing_instance_surfaces_error() {
    let workspace = Workspace::new();
    let mut buffer = Vec::new();
    let err = run_solve_with(
        SolveArgs {
            instance_path: Some(workspace.path("absent.json")),
            algorithm: None,
            no_steps: false,
        },
        &mut buffer,
    )
    .expect_err("missing instance should error");
    assert!(matches!(err, CliError::MissingSourceFile { .. }));
    assert!(buffer.is_empty());
}
