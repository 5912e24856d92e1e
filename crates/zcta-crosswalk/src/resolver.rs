use std::fmt::Display;
use std::sync::Arc;

use zcta_data::{DataError, TableStore, default_store};
use zcta_model::{Centroid, LookupOptions, YearGeneration, ZctaTables, ZipCode};

use crate::centroid::resolve_centroid;
use crate::crosswalk::resolve_zcta;
use crate::reverse::resolve_zips;

/// Year-aware lookups backed by a [`TableStore`].
///
/// Each call loads the requested generation on first use; a missing data
/// source is returned as an error instead of being treated as a lookup miss.
#[derive(Debug, Clone)]
pub struct ZctaResolver {
    store: Arc<TableStore>,
}

impl ZctaResolver {
    pub fn new(store: Arc<TableStore>) -> Self {
        Self { store }
    }

    /// Resolver over [`default_store`].
    pub fn with_default_store() -> Self {
        Self::new(default_store())
    }

    pub fn store(&self) -> &TableStore {
        &self.store
    }

    pub fn tables(&self, generation: YearGeneration) -> Result<Arc<ZctaTables>, DataError> {
        self.store.get_or_load(generation)
    }

    pub fn zcta<T: Display>(
        &self,
        raw: T,
        generation: YearGeneration,
        options: LookupOptions,
    ) -> Result<Option<ZipCode>, DataError> {
        let tables = self.tables(generation)?;
        Ok(resolve_zcta(&tables, raw, options))
    }

    pub fn zips<T: Display>(
        &self,
        raw: T,
        generation: YearGeneration,
        options: LookupOptions,
    ) -> Result<Vec<ZipCode>, DataError> {
        let tables = self.tables(generation)?;
        Ok(resolve_zips(&tables, raw, options))
    }

    pub fn centroid<T: Display>(
        &self,
        raw: T,
        generation: YearGeneration,
        options: LookupOptions,
    ) -> Result<Centroid, DataError> {
        let tables = self.tables(generation)?;
        Ok(resolve_centroid(&tables, raw, options))
    }
}
