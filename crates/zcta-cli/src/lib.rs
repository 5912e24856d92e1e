//! CLI library components for the ZCTA lookup tool.

pub mod frame;
pub mod logging;
pub mod lookup;
pub mod render;
