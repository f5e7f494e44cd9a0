//! Solve command implementation for the tsp-trace CLI.

use std::io::Write;

use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use tsp_trace_core::{Algorithm, AlgorithmStep, TspResult};
use tsp_trace_solvers::solve_each;

use crate::instance::load_instance;
use crate::{ARG_ALGORITHM, ARG_INSTANCE, ARG_NO_STEPS, CliError, ENV_INSTANCE};

/// Value of `--algorithm` selecting every solver.
pub(crate) const ALL_ALGORITHMS: &str = "all";

/// CLI arguments for the `solve` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Solve a TSP instance given as JSON, either a symmetric \
                 `distances` matrix or a list of planar `points`, and print \
                 a report per algorithm with its tour, cost, timing and \
                 step trace.",
    about = "Solve a TSP instance"
)]
#[ortho_config(prefix = "TSP_TRACE")]
pub(crate) struct SolveArgs {
    /// Path to a JSON instance file.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) instance_path: Option<Utf8PathBuf>,
    /// Algorithm to run: greedy, held-karp, christofides or all.
    #[arg(long = ARG_ALGORITHM, value_name = "name")]
    #[serde(default)]
    pub(crate) algorithm: Option<String>,
    /// Omit step traces from the report.
    #[arg(long = ARG_NO_STEPS)]
    #[serde(default)]
    pub(crate) no_steps: bool,
}

impl SolveArgs {
    pub(crate) fn into_config(self) -> Result<SolveConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        SolveConfig::try_from(merged)
    }
}

/// Resolved `solve` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SolveConfig {
    /// Path to the JSON instance file.
    pub(crate) instance_path: Utf8PathBuf,
    /// Solvers to run, in report order.
    pub(crate) algorithms: Vec<Algorithm>,
    /// Whether reports carry the step trace.
    pub(crate) include_steps: bool,
}

impl SolveConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        Self::require_existing(&self.instance_path, ARG_INSTANCE)
    }

    fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
        match crate::fs::file_is_file(path) {
            Ok(true) => Ok(()),
            Ok(false) => Err(CliError::SourcePathNotFile {
                field,
                path: path.to_path_buf(),
            }),
            Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
                Err(CliError::MissingSourceFile {
                    field,
                    path: path.to_path_buf(),
                })
            }
            Err(source) => Err(CliError::InspectSourcePath {
                field,
                path: path.to_path_buf(),
                source,
            }),
        }
    }
}

impl TryFrom<SolveArgs> for SolveConfig {
    type Error = CliError;

    fn try_from(args: SolveArgs) -> Result<Self, Self::Error> {
        let instance_path = args.instance_path.ok_or(CliError::MissingArgument {
            field: ARG_INSTANCE,
            env: ENV_INSTANCE,
        })?;
        let algorithms = parse_algorithms(args.algorithm.as_deref())?;
        Ok(Self {
            instance_path,
            algorithms,
            include_steps: !args.no_steps,
        })
    }
}

fn parse_algorithms(name: Option<&str>) -> Result<Vec<Algorithm>, CliError> {
    match name.map(str::trim) {
        None => Ok(Algorithm::ALL.to_vec()),
        Some(value) if value.eq_ignore_ascii_case(ALL_ALGORITHMS) => Ok(Algorithm::ALL.to_vec()),
        Some(value) => Ok(vec![value.parse::<Algorithm>()?]),
    }
}

/// One algorithm's outcome as printed by `solve`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct AlgorithmReport<'a> {
    pub(crate) algorithm: Algorithm,
    pub(crate) path: &'a [usize],
    /// `None` when the solver refused the instance.
    pub(crate) cost: Option<f64>,
    pub(crate) execution_time_ms: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) steps: Option<&'a [AlgorithmStep]>,
}

impl<'a> AlgorithmReport<'a> {
    pub(crate) fn new(algorithm: Algorithm, result: &'a TspResult, include_steps: bool) -> Self {
        Self {
            algorithm,
            path: result.path(),
            cost: result.is_feasible().then_some(result.cost()),
            execution_time_ms: result.execution_time_ms(),
            steps: include_steps.then_some(result.steps()),
        }
    }
}

pub(super) fn run_solve(args: SolveArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_solve_with(args, &mut stdout)
}

pub(super) fn run_solve_with(args: SolveArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = resolve_solve_config(args)?;
    let matrix = load_instance(&config.instance_path)?;
    let results = solve_each(&matrix, config.algorithms.iter().copied());
    for (algorithm, result) in &results {
        if !result.is_feasible() {
            log::warn!("{algorithm} returned no tour for {}", config.instance_path);
        }
    }
    let reports: Vec<AlgorithmReport<'_>> = results
        .iter()
        .map(|(algorithm, result)| AlgorithmReport::new(*algorithm, result, config.include_steps))
        .collect();
    write_reports(writer, &reports)
}

fn resolve_solve_config(args: SolveArgs) -> Result<SolveConfig, CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    Ok(config)
}

fn write_reports(writer: &mut dyn Write, reports: &[AlgorithmReport<'_>]) -> Result<(), CliError> {
    let payload = serde_json::to_string_pretty(reports).map_err(CliError::SerialiseReport)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteReport)?;
    writer.write_all(b"\n").map_err(CliError::WriteReport)?;
    Ok(())
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<SolveConfig, CliError> {
    let merged = SolveArgs::merge_from_layers(layers).map_err(CliError::from)?;
    SolveConfig::try_from(merged)
}
