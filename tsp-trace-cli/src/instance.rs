//! Instance files accepted by `tsp-trace solve`.

use std::io::BufReader;

use camino::Utf8Path;
use geo::Coord;
use serde::{Deserialize, Serialize};
use tsp_trace_core::{DistanceMatrix, MatrixError};

use crate::CliError;
use crate::fs::open_utf8_file;

/// A precomputed matrix or a point set to measure.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub(crate) enum Instance {
    /// Symmetric distances, one row per node.
    Distances { distances: Vec<Vec<f64>> },
    /// Planar points measured with Euclidean distance.
    Points { points: Vec<Coord<f64>> },
}

impl Instance {
    pub(crate) fn into_matrix(self) -> Result<DistanceMatrix, MatrixError> {
        match self {
            Self::Distances { distances } => DistanceMatrix::new(distances),
            Self::Points { points } => DistanceMatrix::from_points(&points),
        }
    }
}

/// Loads a JSON-encoded [`Instance`] from disk and validates its matrix.
pub(crate) fn load_instance(path: &Utf8Path) -> Result<DistanceMatrix, CliError> {
    let file = open_utf8_file(path).map_err(|source| CliError::OpenInstance {
        path: path.to_path_buf(),
        source,
    })?;
    let instance: Instance =
        serde_json::from_reader(BufReader::new(file)).map_err(|source| {
            CliError::ParseInstance {
                path: path.to_path_buf(),
                source,
            }
        })?;
    let matrix = instance
        .into_matrix()
        .map_err(|source| CliError::InvalidMatrix {
            path: path.to_path_buf(),
            source,
        })?;
    log::debug!("loaded {} nodes from {path}", matrix.len());
    Ok(matrix)
}
