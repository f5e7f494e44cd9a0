//! Error types emitted by the tsp-trace CLI.
//!
//! Keep this error type reasonably small, as CLI helpers return
//! `Result<_, CliError>` and the workspace enables `clippy::result_large_err`.

use std::sync::Arc;

use camino::Utf8PathBuf;
use thiserror::Error;
use tsp_trace_core::{MatrixError, ParseAlgorithmError};

/// Errors emitted by the tsp-trace CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        /// Flag name.
        field: &'static str,
        /// Environment variable that can supply it.
        env: &'static str,
    },
    /// The algorithm name is not recognised.
    #[error("{0} (expected greedy, held-karp, christofides or all)")]
    UnknownAlgorithm(#[from] ParseAlgorithmError),
    /// A referenced input path does not exist on disk.
    #[error("{field} path {path:?} does not exist")]
    MissingSourceFile {
        /// Flag name.
        field: &'static str,
        /// Offending path.
        path: Utf8PathBuf,
    },
    /// A referenced input path exists but is not a file.
    #[error("{field} path {path:?} exists but is not a file")]
    SourcePathNotFile {
        /// Flag name.
        field: &'static str,
        /// Offending path.
        path: Utf8PathBuf,
    },
    /// A referenced input path could not be inspected due to an IO error.
    #[error("failed to inspect {field} path {path:?}: {source}")]
    InspectSourcePath {
        /// Flag name.
        field: &'static str,
        /// Offending path.
        path: Utf8PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },
    /// Opening the instance file failed.
    #[error("failed to open instance at {path:?}: {source}")]
    OpenInstance {
        /// Instance path.
        path: Utf8PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },
    /// The instance JSON could not be decoded.
    #[error("failed to parse instance JSON at {path:?}: {source}")]
    ParseInstance {
        /// Instance path.
        path: Utf8PathBuf,
        /// Underlying decode error.
        #[source]
        source: serde_json::Error,
    },
    /// The instance decoded but is not a valid distance matrix.
    #[error("instance in {path:?} is not a valid distance matrix: {source}")]
    InvalidMatrix {
        /// Instance path.
        path: Utf8PathBuf,
        /// Validation failure.
        #[source]
        source: MatrixError,
    },
    /// Serialising the report failed.
    #[error("failed to serialise solve report: {0}")]
    SerialiseReport(#[source] serde_json::Error),
    /// Writing the report failed.
    #[error("failed to write solve report: {0}")]
    WriteReport(#[source] std::io::Error),
    /// A global logger was already installed.
    #[error("failed to initialise logging: {0}")]
    Logging(#[source] log::SetLoggerError),
}
