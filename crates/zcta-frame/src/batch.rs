//! Column-wise crosswalk application.
//!
//! Each function reads one input column, resolves every row against a single
//! generation's tables, and writes the results into new column(s) of the same
//! frame. When the input column is absent the frame is left untouched and
//! [`BatchOutcome::MissingColumn`] is returned.

use polars::prelude::*;
use tracing::{info, warn};
use zcta_crosswalk::{ZctaResolver, resolve_centroid, resolve_zcta, resolve_zips};
use zcta_model::{Centroid, LookupOptions, YearGeneration, ZipCode, normalize_code};

use crate::cells::cell_text;
use crate::error::Result;

pub const DEFAULT_ZCTA_COLUMN: &str = "zcta";
pub const DEFAULT_ZIPS_COLUMN: &str = "zip_codes";
pub const LAT_COLUMN: &str = "lat";
pub const LON_COLUMN: &str = "lon";
pub const COORDINATES_COLUMN: &str = "coordinates";

/// Result of applying a lookup over a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatchOutcome {
    /// Every row was processed; `resolved` rows produced a non-empty result.
    Applied { rows: usize, resolved: usize },
    /// The input column does not exist; nothing was written.
    MissingColumn,
}

impl BatchOutcome {
    pub fn resolved(self) -> usize {
        match self {
            Self::Applied { resolved, .. } => resolved,
            Self::MissingColumn => 0,
        }
    }
}

/// Add a ZCTA column resolved from the ZIP Codes in `zip_column`.
pub fn apply_zcta_crosswalk(
    df: &mut DataFrame,
    resolver: &ZctaResolver,
    generation: YearGeneration,
    zip_column: &str,
    zcta_column: &str,
    options: LookupOptions,
) -> Result<BatchOutcome> {
    let Some(cells) = column_cells(df, zip_column, "no ZCTA field will be added")? else {
        return Ok(BatchOutcome::MissingColumn);
    };
    let tables = resolver.tables(generation)?;

    let values: Vec<Option<String>> = cells
        .into_iter()
        .map(|cell| {
            cell.and_then(|raw| resolve_zcta(&tables, raw, options))
                .map(ZipCode::into_string)
        })
        .collect();
    let resolved = values.iter().filter(|value| value.is_some()).count();
    let rows = values.len();

    df.with_column(Column::new(zcta_column.into(), values))?;
    info!(
        %generation,
        source = zip_column,
        target = zcta_column,
        rows,
        resolved,
        "applied ZIP Code crosswalk"
    );
    Ok(BatchOutcome::Applied { rows, resolved })
}

/// Add a list column of ZIP Codes resolved from the ZCTAs in `zcta_column`.
///
/// The input column is rewritten with normalized ZCTAs.
pub fn apply_reverse_crosswalk(
    df: &mut DataFrame,
    resolver: &ZctaResolver,
    generation: YearGeneration,
    zcta_column: &str,
    zips_column: &str,
    options: LookupOptions,
) -> Result<BatchOutcome> {
    let Some(cells) = column_cells(df, zcta_column, "no ZIP Code field will be added")? else {
        return Ok(BatchOutcome::MissingColumn);
    };
    let tables = resolver.tables(generation)?;

    let mut normalized: Vec<Option<String>> = Vec::with_capacity(cells.len());
    let mut lists: Vec<Series> = Vec::with_capacity(cells.len());
    let mut resolved = 0usize;
    for cell in cells {
        let zips: Vec<String> = match cell.as_deref() {
            Some(raw) => resolve_zips(&tables, raw, options)
                .into_iter()
                .map(ZipCode::into_string)
                .collect(),
            None => Vec::new(),
        };
        if !zips.is_empty() {
            resolved += 1;
        }
        lists.push(Series::new(PlSmallStr::EMPTY, zips));
        normalized.push(cell.and_then(normalize_code).map(ZipCode::into_string));
    }
    let rows = lists.len();

    df.with_column(Series::new(zips_column.into(), lists))?;
    df.with_column(Column::new(zcta_column.into(), normalized))?;
    info!(
        %generation,
        source = zcta_column,
        target = zips_column,
        rows,
        resolved,
        "applied reverse ZCTA crosswalk"
    );
    Ok(BatchOutcome::Applied { rows, resolved })
}

/// Add `lat` and `lon` columns with the centroid of each row's ZCTA.
///
/// With `keep_coordinates` a `coordinates` list column holding
/// `[lat, lon]` is written as well.
pub fn apply_centroids(
    df: &mut DataFrame,
    resolver: &ZctaResolver,
    generation: YearGeneration,
    zip_column: &str,
    keep_coordinates: bool,
    options: LookupOptions,
) -> Result<BatchOutcome> {
    let Some(cells) = column_cells(df, zip_column, "no ZCTA centroid fields will be added")?
    else {
        return Ok(BatchOutcome::MissingColumn);
    };
    let tables = resolver.tables(generation)?;

    let mut latitudes: Vec<Option<f64>> = Vec::with_capacity(cells.len());
    let mut longitudes: Vec<Option<f64>> = Vec::with_capacity(cells.len());
    let mut resolved = 0usize;
    for cell in cells {
        let centroid = match cell {
            Some(raw) => resolve_centroid(&tables, raw, options),
            None => Centroid::MISSING,
        };
        if !centroid.is_missing() {
            resolved += 1;
        }
        latitudes.push(centroid.latitude);
        longitudes.push(centroid.longitude);
    }
    let rows = latitudes.len();

    if keep_coordinates {
        let pairs: Vec<Series> = latitudes
            .iter()
            .zip(&longitudes)
            .map(|(lat, lon)| Series::new(PlSmallStr::EMPTY, vec![*lat, *lon]))
            .collect();
        df.with_column(Series::new(COORDINATES_COLUMN.into(), pairs))?;
    }
    df.with_column(Column::new(LAT_COLUMN.into(), latitudes))?;
    df.with_column(Column::new(LON_COLUMN.into(), longitudes))?;
    info!(
        %generation,
        source = zip_column,
        rows,
        resolved,
        keep_coordinates,
        "applied ZCTA centroids"
    );
    Ok(BatchOutcome::Applied { rows, resolved })
}

/// Read a column as optional text cells, or `None` when the column is absent.
fn column_cells(
    df: &DataFrame,
    name: &str,
    consequence: &str,
) -> Result<Option<Vec<Option<String>>>> {
    let Ok(column) = df.column(name) else {
        warn!(column = name, "{name} not in the submitted dataframe; {consequence}");
        return Ok(None);
    };
    let mut cells = Vec::with_capacity(df.height());
    for idx in 0..df.height() {
        cells.push(cell_text(column.get(idx)?));
    }
    Ok(Some(cells))
}
