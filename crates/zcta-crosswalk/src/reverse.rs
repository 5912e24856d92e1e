//! ZCTA -> postal ZIP Codes.

use std::fmt::Display;

use tracing::{info, warn};
use zcta_model::{LookupOptions, MissPolicy, ZctaTables, ZipCode, normalize_code};

/// Resolve a ZCTA to every postal code assigned to it.
///
/// The result is always a list. When the ZCTA is unknown:
/// - a value that is itself a postal code in the crosswalk comes back as a
///   one-element list;
/// - otherwise [`MissPolicy::UseInput`] returns the normalized input alone and
///   [`MissPolicy::Empty`] returns an empty list.
///
/// Inputs that normalize to nothing always produce an empty list.
pub fn resolve_zips<T: Display>(
    tables: &ZctaTables,
    raw: T,
    options: LookupOptions,
) -> Vec<ZipCode> {
    let Some(zcta) = normalize_code(raw) else {
        return Vec::new();
    };
    if let Some(zips) = tables.reverse().get(zcta.as_str()) {
        return zips.to_vec();
    }

    let emit = options.diagnostics.enabled();
    let generation = tables.generation();
    if tables.crosswalk().contains(zcta.as_str()) {
        if emit {
            info!(
                zcta = %zcta,
                %generation,
                "value is not a ZCTA in the records but is already a ZIP Code; returning it as the only item"
            );
        }
        return vec![zcta];
    }

    match options.on_miss {
        MissPolicy::UseInput => {
            if emit {
                warn!(
                    zcta = %zcta,
                    %generation,
                    "ZCTA is not in the records; returning it as the only item instead"
                );
            }
            vec![zcta]
        }
        MissPolicy::Empty => {
            if emit {
                warn!(
                    zcta = %zcta,
                    %generation,
                    "ZCTA is not in the records; no ZIP Codes will be returned"
                );
            }
            Vec::new()
        }
    }
}
