//! Row-oriented lookups behind the single-value subcommands.

use serde::Serialize;
use zcta_crosswalk::{ZctaResolver, resolve_centroid, resolve_zcta, resolve_zips};
use zcta_data::DataError;
use zcta_model::{LookupOptions, YearGeneration, ZipCode, normalize_code};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ZctaRow {
    pub input: String,
    pub zcta: Option<ZipCode>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ZipsRow {
    pub input: String,
    pub zip_codes: Vec<ZipCode>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CentroidRow {
    pub input: String,
    pub zcta: Option<ZipCode>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NormalizeRow {
    pub input: String,
    pub code: Option<ZipCode>,
}

pub fn zcta_rows(
    resolver: &ZctaResolver,
    inputs: &[String],
    generation: YearGeneration,
    options: LookupOptions,
) -> Result<Vec<ZctaRow>, DataError> {
    let tables = resolver.tables(generation)?;
    Ok(inputs
        .iter()
        .map(|input| ZctaRow {
            input: input.clone(),
            zcta: resolve_zcta(&tables, input, options),
        })
        .collect())
}

pub fn zips_rows(
    resolver: &ZctaResolver,
    inputs: &[String],
    generation: YearGeneration,
    options: LookupOptions,
) -> Result<Vec<ZipsRow>, DataError> {
    let tables = resolver.tables(generation)?;
    Ok(inputs
        .iter()
        .map(|input| ZipsRow {
            input: input.clone(),
            zip_codes: resolve_zips(&tables, input, options),
        })
        .collect())
}

/// Centroid rows also report the ZCTA the centroid was taken from.
///
/// Only the centroid lookup emits diagnostics; it reports a crosswalk miss
/// and the missing centroid. Resolving the ZCTA column again stays silent.
pub fn centroid_rows(
    resolver: &ZctaResolver,
    inputs: &[String],
    generation: YearGeneration,
    options: LookupOptions,
) -> Result<Vec<CentroidRow>, DataError> {
    let tables = resolver.tables(generation)?;
    Ok(inputs
        .iter()
        .map(|input| {
            let centroid = resolve_centroid(&tables, input, options);
            CentroidRow {
                input: input.clone(),
                zcta: resolve_zcta(&tables, input, options.suppressed()),
                latitude: centroid.latitude,
                longitude: centroid.longitude,
            }
        })
        .collect())
}

pub fn normalize_rows(inputs: &[String]) -> Vec<NormalizeRow> {
    inputs
        .iter()
        .map(|input| NormalizeRow {
            input: input.clone(),
            code: normalize_code(input),
        })
        .collect()
}
