use std::fmt;
use std::path::PathBuf;

use zcta_model::YearGeneration;

/// The two resources backing one generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TableKind {
    Crosswalk,
    Centroids,
}

impl TableKind {
    /// File name of this resource inside a data directory.
    pub fn file_name(self, generation: YearGeneration) -> String {
        let year = generation.census_year();
        match self {
            Self::Crosswalk => format!("zipzcta_crosswalk_{year}.json"),
            Self::Centroids => format!("zcta_latloncentroid_{year}.json"),
        }
    }
}

impl fmt::Display for TableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Crosswalk => "crosswalk",
            Self::Centroids => "centroid",
        })
    }
}

/// Failure to obtain a generation's tables.
///
/// Every variant means no lookups can run for that generation; callers
/// should treat it as fatal rather than falling back.
#[derive(Debug, thiserror::Error)]
pub enum DataError {
    #[error("{kind} table for {generation} not found at {path}: {source}")]
    DataSourceMissing {
        generation: YearGeneration,
        kind: TableKind,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {kind} table for {generation} at {path}: {source}")]
    Parse {
        generation: YearGeneration,
        kind: TableKind,
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("no {kind} table registered for {generation}")]
    NotRegistered {
        generation: YearGeneration,
        kind: TableKind,
    },
}

impl DataError {
    /// The resource could not be located: no file on disk, or nothing
    /// registered in memory.
    pub fn is_source_missing(&self) -> bool {
        matches!(
            self,
            Self::DataSourceMissing { .. } | Self::NotRegistered { .. }
        )
    }

    /// The resource exists but is not a valid table.
    pub fn is_parse_error(&self) -> bool {
        matches!(self, Self::Parse { .. })
    }

    pub fn generation(&self) -> YearGeneration {
        match self {
            Self::DataSourceMissing { generation, .. }
            | Self::Parse { generation, .. }
            | Self::NotRegistered { generation, .. } => *generation,
        }
    }

    pub fn kind(&self) -> TableKind {
        match self {
            Self::DataSourceMissing { kind, .. }
            | Self::Parse { kind, .. }
            | Self::NotRegistered { kind, .. } => *kind,
        }
    }
}
