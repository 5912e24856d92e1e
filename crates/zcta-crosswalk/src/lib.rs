//! ZIP Code crosswalks.
//!
//! Takes USA ZIP Codes and returns 5 digit US Census Zip Code Tabulation
//! Areas (ZCTAs), the ZIP Codes behind a ZCTA, or ZCTA centroid coordinates.
//!
//! The free functions operate on one generation's [`ZctaTables`]; the
//! [`ZctaResolver`] picks and loads tables from a [`zcta_data::TableStore`].
//!
//! [`ZctaTables`]: zcta_model::ZctaTables

pub mod centroid;
pub mod crosswalk;
pub mod resolver;
pub mod reverse;

pub use centroid::resolve_centroid;
pub use crosswalk::{lookup_zcta, resolve_zcta};
pub use resolver::ZctaResolver;
pub use reverse::resolve_zips;
