//! Focused unit tests covering solve configuration and instance parsing.

use super::helpers::{Workspace, unit_square_instance, write_utf8};
use super::*;
use crate::instance::{Instance, load_instance};
use crate::solve::{SolveConfig, config_from_layers_for_test};
use rstest::rstest;
use tsp_trace_core::{Algorithm, MatrixError};

#[rstest]
fn converting_solve_without_instance_errors() {
    let args = SolveArgs {
        instance_path: None,
        ..SolveArgs::default()
    };

    let err = SolveConfig::try_from(args).expect_err("missing instance should error");
    match err {
        CliError::MissingArgument { field, env } => {
            assert_eq!(field, ARG_INSTANCE);
            assert_eq!(env, ENV_INSTANCE);
        }
        other => panic!("expected MissingArgument, found {other:?}"),
    }
}

#[rstest]
#[case::default(None, Algorithm::ALL.to_vec())]
#[case::all(Some("all"), Algorithm::ALL.to_vec())]
#[case::upper_all(Some("ALL"), Algorithm::ALL.to_vec())]
#[case::greedy(Some("greedy"), vec![Algorithm::Greedy])]
#[case::held_karp(Some("held-karp"), vec![Algorithm::HeldKarp])]
#[case::christofides(Some(" christofides "), vec![Algorithm::Christofides])]
fn algorithm_selection_resolves(#[case] name: Option<&str>, #[case] expected: Vec<Algorithm>) {
    let args = SolveArgs {
        instance_path: Some("instance.json".into()),
        algorithm: name.map(str::to_owned),
        no_steps: false,
    };
    let config = SolveConfig::try_from(args).expect("config should build");
    assert_eq!(config.algorithms, expected);
    assert!(config.include_steps);
}

#[rstest]
fn unknown_algorithm_is_rejected() {
    let args = SolveArgs {
        instance_path: Some("instance.json".into()),
        algorithm: Some("2-opt".to_owned()),
        no_steps: true,
    };
    let err = SolveConfig::try_from(args).expect_err("unknown algorithm should error");
    match err {
        CliError::UnknownAlgorithm(inner) => assert_eq!(inner.0, "2-opt"),
        other => panic!("expected UnknownAlgorithm, found {other:?}"),
    }
}

#[rstest]
fn validate_sources_reports_missing_instance() {
    let workspace = Workspace::new();
    let config = SolveConfig {
        instance_path: workspace.path("missing.json"),
        algorithms: Algorithm::ALL.to_vec(),
        include_steps: true,
    };
    let err = config.validate_sources().expect_err("expected failure");
    match err {
        CliError::MissingSourceFile { field, .. } => assert_eq!(field, ARG_INSTANCE),
        other => panic!("expected MissingSourceFile, found {other:?}"),
    }
}

#[rstest]
fn validate_sources_reports_not_file() {
    let workspace = Workspace::new();
    let instance_path = workspace.path("instance.json");
    std::fs::create_dir(instance_path.as_std_path()).expect("instance directory");

    let config = SolveConfig {
        instance_path: instance_path.clone(),
        algorithms: vec![Algorithm::Greedy],
        include_steps: true,
    };
    let err = config
        .validate_sources()
        .expect_err("expected directory path to fail validation");
    match err {
        CliError::SourcePathNotFile { field, path } => {
            assert_eq!(field, ARG_INSTANCE);
            assert_eq!(path, instance_path);
        }
        other => panic!("expected SourcePathNotFile, found {other:?}"),
    }
}

#[rstest]
fn load_instance_measures_points() {
    let workspace = Workspace::new();
    let path = workspace.write_instance("square.json", &unit_square_instance());

    let matrix = load_instance(&path).expect("instance should load");
    assert_eq!(matrix.len(), 4);
    assert_eq!(matrix.distance(0, 1), 1.0);
}

#[rstest]
fn load_instance_accepts_distances() {
    let workspace = Workspace::new();
    let path = workspace.path("matrix.json");
    write_utf8(&path, br#"{ "distances": [[0, 2], [2, 0]] }"#);

    let matrix = load_instance(&path).expect("instance should load");
    assert_eq!(matrix.distance(1, 0), 2.0);
}

#[rstest]
fn load_instance_rejects_invalid_json() {
    let workspace = Workspace::new();
    let path = workspace.path("broken.json");
    write_utf8(&path, b"{ not valid json");

    let err = load_instance(&path).expect_err("invalid json should error");
    match err {
        CliError::ParseInstance { path: reported, .. } => assert_eq!(reported, path),
        other => panic!("unexpected error {other:?}"),
    }
}

#[rstest]
fn load_instance_rejects_asymmetric_matrix() {
    let workspace = Workspace::new();
    let path = workspace.write_instance(
        "asymmetric.json",
        &Instance::Distances {
            distances: vec![vec![0.0, 1.0], vec![3.0, 0.0]],
        },
    );

    let err = load_instance(&path).expect_err("asymmetric matrix should error");
    match err {
        CliError::InvalidMatrix { source, .. } => {
            assert!(matches!(source, MatrixError::Asymmetric { .. }));
        }
        other => panic!("expected InvalidMatrix, found {other:?}"),
    }
}

#[rstest]
fn load_instance_io_error_returns_open_error() {
    let workspace = Workspace::new();
    let path = workspace.path("absent.json");

    let err = load_instance(&path).expect_err("missing instance should error");
    match err {
        CliError::OpenInstance { path: reported, .. } => assert_eq!(reported, path),
        other => panic!("expected OpenInstance, found {other:?}"),
    }
}

#[rstest]
fn merge_layers_maps_configuration_errors() {
    use ortho_config::MergeComposer;
    use serde_json::json;

    let mut composer = MergeComposer::new();
    composer.push_cli(json!({ "instance_path": 42 }));

    let err = config_from_layers_for_test(composer.layers())
        .expect_err("invalid config layer should map to CliError::Configuration");
    match err {
        CliError::Configuration(_) => {}
        other => panic!("expected CliError::Configuration, found {other:?}"),
    }
}

#[rstest]
fn merge_layers_honours_precedence() {
    use ortho_config::MergeComposer;
    use serde_json::json;

    let workspace = Workspace::new();
    let env_instance = workspace.path("from-env.json");
    let mut composer = MergeComposer::new();
    composer.push_file(
        json!({
            "instance_path": workspace.path("from-file.json").as_str(),
            "algorithm": "greedy",
            "no_steps": true,
        }),
        None,
    );
    composer.push_environment(json!({
        "instance_path": env_instance.as_str(),
        "algorithm": "held-karp",
    }));
    composer.push_cli(json!({
        "algorithm": "christofides",
    }));

    let config =
        config_from_layers_for_test(composer.layers()).expect("merged config should build");
    assert_eq!(config.instance_path, env_instance);
    assert_eq!(config.algorithms, vec![Algorithm::Christofides]);
    assert!(!config.include_steps);
}
