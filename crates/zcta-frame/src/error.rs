use polars::prelude::PolarsError;
use thiserror::Error;
use zcta_data::DataError;

#[derive(Debug, Error)]
pub enum FrameError {
    /// The generation's tables could not be loaded.
    #[error(transparent)]
    Data(#[from] DataError),

    #[error("polars error: {0}")]
    Polars(#[from] PolarsError),
}

pub type Result<T> = std::result::Result<T, FrameError>;
