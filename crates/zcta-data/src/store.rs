//! Process-wide cache of loaded tables.
//!
//! Each generation is loaded at most once per [`TableStore`]. The first
//! caller for a generation takes that generation's init lock and reads the
//! source; concurrent callers wait on the lock and then observe the fully
//! built tables. After publication, reads go through the `OnceLock` without
//! locking.

use std::path::PathBuf;
use std::sync::{Arc, Mutex, OnceLock, PoisonError};
use std::time::Instant;

use tracing::{debug, info};
use zcta_model::{YearGeneration, ZctaTables};

use crate::error::DataError;
use crate::paths::data_root;
use crate::source::{DirectorySource, TableSource};

#[derive(Default)]
struct GenerationSlot {
    tables: OnceLock<Arc<ZctaTables>>,
    init: Mutex<()>,
}

pub struct TableStore {
    source: Box<dyn TableSource>,
    gen2010: GenerationSlot,
    gen2020: GenerationSlot,
}

impl TableStore {
    pub fn new(source: impl TableSource + 'static) -> Self {
        Self {
            source: Box::new(source),
            gen2010: GenerationSlot::default(),
            gen2020: GenerationSlot::default(),
        }
    }

    /// Store backed by JSON files in `root`.
    pub fn from_dir(root: impl Into<PathBuf>) -> Self {
        Self::new(DirectorySource::new(root))
    }

    /// Return the cached tables for `generation`, loading them on first use.
    ///
    /// # Errors
    ///
    /// Returns [`DataError`] when the source cannot provide or parse either
    /// table. Failures are not cached, so a later call retries the load.
    pub fn get_or_load(&self, generation: YearGeneration) -> Result<Arc<ZctaTables>, DataError> {
        let slot = self.slot(generation);
        if let Some(tables) = slot.tables.get() {
            return Ok(Arc::clone(tables));
        }

        let _guard = slot.init.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(tables) = slot.tables.get() {
            debug!(%generation, "tables loaded by another caller");
            return Ok(Arc::clone(tables));
        }

        let start = Instant::now();
        let loaded = self.source.load(generation)?;
        info!(
            %generation,
            source = %self.source.describe(),
            crosswalk_entries = loaded.crosswalk().len(),
            zcta_count = loaded.reverse().len(),
            centroid_entries = loaded.centroids().len(),
            duration_ms = start.elapsed().as_millis(),
            "loaded zcta tables"
        );
        Ok(Arc::clone(slot.tables.get_or_init(|| Arc::new(loaded))))
    }

    pub fn is_loaded(&self, generation: YearGeneration) -> bool {
        self.slot(generation).tables.get().is_some()
    }

    pub fn source_description(&self) -> String {
        self.source.describe()
    }

    fn slot(&self, generation: YearGeneration) -> &GenerationSlot {
        match generation {
            YearGeneration::Gen2010 => &self.gen2010,
            YearGeneration::Gen2020 => &self.gen2020,
        }
    }
}

impl std::fmt::Debug for TableStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TableStore")
            .field("source", &self.source.describe())
            .field("gen2010_loaded", &self.is_loaded(YearGeneration::Gen2010))
            .field("gen2020_loaded", &self.is_loaded(YearGeneration::Gen2020))
            .finish()
    }
}

static DEFAULT_STORE: OnceLock<Arc<TableStore>> = OnceLock::new();

/// Returns the process-wide store backed by [`data_root`].
///
/// The store itself is created on first access; tables still load lazily per
/// generation.
pub fn default_store() -> Arc<TableStore> {
    Arc::clone(DEFAULT_STORE.get_or_init(|| Arc::new(TableStore::from_dir(data_root()))))
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use zcta_model::{CentroidTable, CrosswalkTable, normalize_code};

    use super::*;

    struct CountingSource {
        loads: Arc<AtomicUsize>,
    }

    impl TableSource for CountingSource {
        fn describe(&self) -> String {
            "counting".to_string()
        }

        fn crosswalk(&self, _generation: YearGeneration) -> Result<CrosswalkTable, DataError> {
            self.loads.fetch_add(1, Ordering::SeqCst);
            let code = normalize_code("30303").expect("code");
            Ok([(code.clone(), code)].into_iter().collect())
        }

        fn centroids(&self, _generation: YearGeneration) -> Result<CentroidTable, DataError> {
            Ok(CentroidTable::default())
        }
    }

    #[test]
    fn concurrent_first_access_loads_once() {
        let loads = Arc::new(AtomicUsize::new(0));
        let store = Arc::new(TableStore::new(CountingSource {
            loads: Arc::clone(&loads),
        }));

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let store = Arc::clone(&store);
                std::thread::spawn(move || {
                    store
                        .get_or_load(YearGeneration::Gen2020)
                        .expect("load tables")
                })
            })
            .collect();
        let results: Vec<Arc<ZctaTables>> = handles
            .into_iter()
            .map(|handle| handle.join().expect("thread"))
            .collect();

        assert_eq!(loads.load(Ordering::SeqCst), 1);
        for tables in &results[1..] {
            assert!(Arc::ptr_eq(&results[0], tables));
        }
    }

    #[test]
    fn generations_are_cached_independently() {
        let loads = Arc::new(AtomicUsize::new(0));
        let store = TableStore::new(CountingSource {
            loads: Arc::clone(&loads),
        });
        store.get_or_load(YearGeneration::Gen2010).expect("2010");
        assert!(store.is_loaded(YearGeneration::Gen2010));
        assert!(!store.is_loaded(YearGeneration::Gen2020));
        store.get_or_load(YearGeneration::Gen2020).expect("2020");
        store.get_or_load(YearGeneration::Gen2010).expect("2010 again");
        assert_eq!(loads.load(Ordering::SeqCst), 2);
    }
}
