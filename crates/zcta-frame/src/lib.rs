//! Batch ZCTA lookups over Polars DataFrames.

pub mod batch;
pub mod cells;
pub mod error;
pub mod export;

pub use batch::{
    BatchOutcome, COORDINATES_COLUMN, DEFAULT_ZCTA_COLUMN, DEFAULT_ZIPS_COLUMN, LAT_COLUMN,
    LON_COLUMN, apply_centroids, apply_reverse_crosswalk, apply_zcta_crosswalk,
};
pub use cells::{cell_text, format_numeric};
pub use error::{FrameError, Result};
pub use export::join_list_columns;
