//! ZIP Code -> ZCTA centroid coordinates.
//!
//! Centroids come from the Census TIGER ZCTA polygons and are not guaranteed
//! to fall on land; a ZCTA with a large body of water near its geometric
//! center may have an offshore centroid.

use std::fmt::Display;

use tracing::warn;
use zcta_model::{Centroid, LookupOptions, ZctaTables, ZipCode, normalize_code};

use crate::crosswalk::lookup_zcta;

/// Resolve a raw postal code to the centroid of its ZCTA.
///
/// The code is first crosswalked (honouring `options.on_miss`), then the
/// resulting ZCTA is looked up in the centroid table. Anything that cannot be
/// resolved yields [`Centroid::MISSING`]; inputs that normalize to nothing do
/// so without a diagnostic.
pub fn resolve_centroid<T: Display>(tables: &ZctaTables, raw: T, options: LookupOptions) -> Centroid {
    let Some(input) = normalize_code(raw) else {
        return Centroid::MISSING;
    };
    let zcta = lookup_zcta(tables, &input, options).and_then(normalize_code);

    if let Some(centroid) = zcta
        .as_ref()
        .and_then(|zcta| tables.centroids().get(zcta.as_str()))
    {
        return *centroid;
    }

    if options.diagnostics.enabled() {
        let generation = tables.generation();
        if zcta.as_ref() == Some(&input) {
            warn!(
                zip = %input,
                %generation,
                "ZIP Code does not have a centroid in the records; no centroid will be returned"
            );
        } else {
            warn!(
                zip = %input,
                zcta = display_code(zcta.as_ref()),
                %generation,
                "tabulation area of the ZIP Code does not have a centroid in the records; no centroid will be returned"
            );
        }
    }
    Centroid::MISSING
}

fn display_code(code: Option<&ZipCode>) -> &str {
    code.map_or("none", ZipCode::as_str)
}
