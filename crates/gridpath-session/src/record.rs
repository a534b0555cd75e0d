use gridpath_core::{Cell, Grid};
use gridpath_paths::Algorithm;
use serde::{Deserialize, Serialize};

/// Snapshot of a session handed to whatever persists computed paths.
///
/// Field names follow the payload the path-saving service expects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PathRecord {
    pub grid: Grid,
    pub start: Cell,
    pub end: Cell,
    pub algorithm: Algorithm,
}
