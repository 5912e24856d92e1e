//! Data directory path resolution.

use std::path::{Path, PathBuf};

use zcta_model::YearGeneration;

use crate::error::TableKind;

/// Environment variable for overriding the data directory.
pub const DATA_DIR_ENV_VAR: &str = "ZCTA_DATA_DIR";

/// Get the data root directory.
///
/// Resolution order:
/// 1. `ZCTA_DATA_DIR` environment variable
/// 2. `data/json` directory relative to workspace root
pub fn data_root() -> PathBuf {
    if let Ok(root) = std::env::var(DATA_DIR_ENV_VAR) {
        return PathBuf::from(root);
    }
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../data/json")
}

/// Path of one table file under `root`.
pub fn table_path(root: &Path, generation: YearGeneration, kind: TableKind) -> PathBuf {
    root.join(kind.file_name(generation))
}
