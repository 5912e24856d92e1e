//! Core data model for ZIP Code to ZCTA crosswalks.

pub mod code;
pub mod options;
pub mod table;
pub mod year;

pub use code::{CODE_LEN, ZipCode, normalize_code, normalize_code_opt};
pub use options::{Diagnostics, LookupOptions, MissPolicy};
pub use table::{Centroid, CentroidTable, CrosswalkTable, ReverseCrosswalkTable, ZctaTables};
pub use year::YearGeneration;
