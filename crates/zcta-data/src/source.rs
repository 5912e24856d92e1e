//! Where crosswalk and centroid tables come from.

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::de::DeserializeOwned;
use tracing::debug;
use zcta_model::{CentroidTable, CrosswalkTable, YearGeneration, ZctaTables};

use crate::error::{DataError, TableKind};
use crate::paths::table_path;

/// A provider of raw tables for each census generation.
pub trait TableSource: Send + Sync {
    /// Human readable description used in log output.
    fn describe(&self) -> String;

    fn crosswalk(&self, generation: YearGeneration) -> Result<CrosswalkTable, DataError>;

    fn centroids(&self, generation: YearGeneration) -> Result<CentroidTable, DataError>;

    /// Read both resources and derive the reverse crosswalk.
    fn load(&self, generation: YearGeneration) -> Result<ZctaTables, DataError> {
        let crosswalk = self.crosswalk(generation)?;
        let centroids = self.centroids(generation)?;
        Ok(ZctaTables::new(generation, crosswalk, centroids))
    }
}

/// Reads `zipzcta_crosswalk_<year>.json` and `zcta_latloncentroid_<year>.json`
/// from a directory.
#[derive(Debug, Clone)]
pub struct DirectorySource {
    root: PathBuf,
}

impl DirectorySource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn read_json<T: DeserializeOwned>(
        &self,
        generation: YearGeneration,
        kind: TableKind,
    ) -> Result<T, DataError> {
        let path = table_path(&self.root, generation, kind);
        debug!(path = %path.display(), %generation, %kind, "reading table");
        let contents =
            std::fs::read_to_string(&path).map_err(|source| DataError::DataSourceMissing {
                generation,
                kind,
                path: path.clone(),
                source,
            })?;
        serde_json::from_str(&contents).map_err(|source| DataError::Parse {
            generation,
            kind,
            path,
            source,
        })
    }
}

impl TableSource for DirectorySource {
    fn describe(&self) -> String {
        format!("directory {}", self.root.display())
    }

    fn crosswalk(&self, generation: YearGeneration) -> Result<CrosswalkTable, DataError> {
        self.read_json(generation, TableKind::Crosswalk)
    }

    fn centroids(&self, generation: YearGeneration) -> Result<CentroidTable, DataError> {
        self.read_json(generation, TableKind::Centroids)
    }
}

/// Tables held in memory, for embedding or tests.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    crosswalks: BTreeMap<YearGeneration, CrosswalkTable>,
    centroids: BTreeMap<YearGeneration, CentroidTable>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_crosswalk(mut self, generation: YearGeneration, table: CrosswalkTable) -> Self {
        self.crosswalks.insert(generation, table);
        self
    }

    #[must_use]
    pub fn with_centroids(mut self, generation: YearGeneration, table: CentroidTable) -> Self {
        self.centroids.insert(generation, table);
        self
    }

    /// Register one generation from JSON text in the on-disk table format.
    ///
    /// # Errors
    ///
    /// Returns [`DataError::Parse`] naming the table that failed; the path is
    /// `<memory>`.
    pub fn from_json(
        generation: YearGeneration,
        crosswalk_json: &str,
        centroid_json: &str,
    ) -> Result<Self, DataError> {
        let crosswalk = parse_json(generation, TableKind::Crosswalk, crosswalk_json)?;
        let centroids = parse_json(generation, TableKind::Centroids, centroid_json)?;
        Ok(Self::new()
            .with_crosswalk(generation, crosswalk)
            .with_centroids(generation, centroids))
    }
}

fn parse_json<T: DeserializeOwned>(
    generation: YearGeneration,
    kind: TableKind,
    contents: &str,
) -> Result<T, DataError> {
    serde_json::from_str(contents).map_err(|source| DataError::Parse {
        generation,
        kind,
        path: PathBuf::from("<memory>"),
        source,
    })
}

impl TableSource for MemorySource {
    fn describe(&self) -> String {
        let generations: Vec<String> = self
            .crosswalks
            .keys()
            .map(ToString::to_string)
            .collect();
        format!("memory [{}]", generations.join(", "))
    }

    fn crosswalk(&self, generation: YearGeneration) -> Result<CrosswalkTable, DataError> {
        self.crosswalks
            .get(&generation)
            .cloned()
            .ok_or(DataError::NotRegistered {
                generation,
                kind: TableKind::Crosswalk,
            })
    }

    fn centroids(&self, generation: YearGeneration) -> Result<CentroidTable, DataError> {
        self.centroids
            .get(&generation)
            .cloned()
            .ok_or(DataError::NotRegistered {
                generation,
                kind: TableKind::Centroids,
            })
    }
}
