//! Test helpers for writing instance files into temporary workspaces.

use camino::{Utf8Path, Utf8PathBuf};
use geo::Coord;
use serde_json::Value;
use tempfile::TempDir;

use crate::instance::Instance;

/// A temporary directory addressed through UTF-8 paths.
pub(super) struct Workspace {
    _dir: TempDir,
    root: Utf8PathBuf,
}

impl Workspace {
    pub(super) fn new() -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 workspace");
        Self { _dir: dir, root }
    }

    pub(super) fn path(&self, name: &str) -> Utf8PathBuf {
        self.root.join(name)
    }

    /// Serialise `instance` to `name` and return its path.
    pub(super) fn write_instance(&self, name: &str, instance: &Instance) -> Utf8PathBuf {
        let path = self.path(name);
        let payload = serde_json::to_vec_pretty(instance).expect("serialise instance");
        write_utf8(&path, &payload);
        path
    }
}

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    std::fs::write(path.as_std_path(), contents).expect("write file");
}

pub(super) fn unit_square_instance() -> Instance {
    Instance::Points {
        points: vec![
            Coord { x: 0.0, y: 0.0 },
            Coord { x: 1.0, y: 0.0 },
            Coord { x: 1.0, y: 1.0 },
            Coord { x: 0.0, y: 1.0 },
        ],
    }
}

/// Points on a four-wide unit grid.
pub(super) fn grid_instance(count: u32) -> Instance {
    Instance::Points {
        points: (0..count)
            .map(|i| Coord {
                x: f64::from(i % 4),
                y: f64::from(i / 4),
            })
            .collect(),
    }
}

pub(super) fn parse_reports(output: &[u8]) -> Vec<Value> {
    let value: Value = serde_json::from_slice(output).expect("report should be JSON");
    match value {
        Value::Array(reports) => reports,
        other => panic!("expected a JSON array, found {other}"),
    }
}
