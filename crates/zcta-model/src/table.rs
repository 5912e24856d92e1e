//! Lookup tables for one census generation.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::code::ZipCode;
use crate::year::YearGeneration;

/// Postal ZIP Code -> ZCTA.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CrosswalkTable {
    entries: BTreeMap<ZipCode, ZipCode>,
}

impl CrosswalkTable {
    pub fn new(entries: BTreeMap<ZipCode, ZipCode>) -> Self {
        Self { entries }
    }

    pub fn get(&self, zip: &str) -> Option<&ZipCode> {
        self.entries.get(zip)
    }

    pub fn contains(&self, zip: &str) -> bool {
        self.entries.contains_key(zip)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates `(zip, zcta)` pairs in ascending ZIP order.
    pub fn iter(&self) -> impl Iterator<Item = (&ZipCode, &ZipCode)> {
        self.entries.iter()
    }
}

impl FromIterator<(ZipCode, ZipCode)> for CrosswalkTable {
    fn from_iter<I: IntoIterator<Item = (ZipCode, ZipCode)>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// ZCTA -> every postal ZIP Code that maps onto it.
///
/// Built from a [`CrosswalkTable`]; each ZIP appears in exactly one entry and
/// each entry is sorted ascending.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReverseCrosswalkTable {
    entries: BTreeMap<ZipCode, Vec<ZipCode>>,
}

impl ReverseCrosswalkTable {
    pub fn from_crosswalk(crosswalk: &CrosswalkTable) -> Self {
        let mut entries: BTreeMap<ZipCode, Vec<ZipCode>> = BTreeMap::new();
        // Crosswalk iteration is ordered by ZIP, so each list stays sorted.
        for (zip, zcta) in crosswalk.iter() {
            entries.entry(zcta.clone()).or_default().push(zip.clone());
        }
        Self { entries }
    }

    pub fn get(&self, zcta: &str) -> Option<&[ZipCode]> {
        self.entries.get(zcta).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ZipCode, &[ZipCode])> {
        self.entries.iter().map(|(zcta, zips)| (zcta, zips.as_slice()))
    }
}

/// Latitude / longitude pair for a ZCTA.
///
/// Stored on disk as a two element array whose members may be `null`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "(Option<f64>, Option<f64>)", into = "(Option<f64>, Option<f64>)")]
pub struct Centroid {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl Centroid {
    /// Result for a code without a centroid: both coordinates absent.
    pub const MISSING: Self = Self {
        latitude: None,
        longitude: None,
    };

    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude: Some(latitude),
            longitude: Some(longitude),
        }
    }

    pub fn is_missing(&self) -> bool {
        self.latitude.is_none() && self.longitude.is_none()
    }

    pub fn as_pair(&self) -> (Option<f64>, Option<f64>) {
        (self.latitude, self.longitude)
    }
}

impl From<(Option<f64>, Option<f64>)> for Centroid {
    fn from((latitude, longitude): (Option<f64>, Option<f64>)) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

impl From<Centroid> for (Option<f64>, Option<f64>) {
    fn from(centroid: Centroid) -> Self {
        centroid.as_pair()
    }
}

/// ZCTA -> centroid.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CentroidTable {
    entries: BTreeMap<ZipCode, Centroid>,
}

impl CentroidTable {
    pub fn new(entries: BTreeMap<ZipCode, Centroid>) -> Self {
        Self { entries }
    }

    pub fn get(&self, zcta: &str) -> Option<&Centroid> {
        self.entries.get(zcta)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(ZipCode, Centroid)> for CentroidTable {
    fn from_iter<I: IntoIterator<Item = (ZipCode, Centroid)>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// All tables for one generation. The reverse table is derived on
/// construction and cannot be replaced independently.
#[derive(Debug, Clone)]
pub struct ZctaTables {
    generation: YearGeneration,
    crosswalk: CrosswalkTable,
    reverse: ReverseCrosswalkTable,
    centroids: CentroidTable,
}

impl ZctaTables {
    pub fn new(
        generation: YearGeneration,
        crosswalk: CrosswalkTable,
        centroids: CentroidTable,
    ) -> Self {
        let reverse = ReverseCrosswalkTable::from_crosswalk(&crosswalk);
        Self {
            generation,
            crosswalk,
            reverse,
            centroids,
        }
    }

    pub fn generation(&self) -> YearGeneration {
        self.generation
    }

    pub fn crosswalk(&self) -> &CrosswalkTable {
        &self.crosswalk
    }

    pub fn reverse(&self) -> &ReverseCrosswalkTable {
        &self.reverse
    }

    pub fn centroids(&self) -> &CentroidTable {
        &self.centroids
    }
}
