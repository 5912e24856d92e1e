//! Postal ZIP Code -> ZCTA.
//!
//! Postal codes describe delivery routes rather than areas: a code can be a
//! single post office, a discontinuous region, or cross state lines. The
//! Census tabulation area (ZCTA) is the polygon that code is assigned to.

use std::fmt::Display;

use tracing::warn;
use zcta_model::{LookupOptions, MissPolicy, ZctaTables, ZipCode, normalize_code};

/// Resolve a raw postal code to its ZCTA.
///
/// Unknown codes follow `options.on_miss`: [`MissPolicy::UseInput`] returns the
/// normalized code itself, [`MissPolicy::Empty`] returns `None`. Inputs that
/// normalize to nothing return `None` without a diagnostic.
pub fn resolve_zcta<T: Display>(
    tables: &ZctaTables,
    raw: T,
    options: LookupOptions,
) -> Option<ZipCode> {
    let code = normalize_code(raw)?;
    lookup_zcta(tables, &code, options)
}

/// Same as [`resolve_zcta`] for an already normalized code.
pub fn lookup_zcta(tables: &ZctaTables, code: &ZipCode, options: LookupOptions) -> Option<ZipCode> {
    if let Some(zcta) = tables.crosswalk().get(code.as_str()) {
        return Some(zcta.clone());
    }

    let emit = options.diagnostics.enabled();
    match options.on_miss {
        MissPolicy::UseInput => {
            if emit {
                warn!(
                    zip = %code,
                    generation = %tables.generation(),
                    "ZIP Code is not in the crosswalk records; the input code will be returned instead"
                );
            }
            Some(code.clone())
        }
        MissPolicy::Empty => {
            if emit {
                warn!(
                    zip = %code,
                    generation = %tables.generation(),
                    "ZIP Code is not in the crosswalk records; no ZCTA will be returned"
                );
            }
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use zcta_model::{CentroidTable, CrosswalkTable, YearGeneration};

    use super::*;

    fn tables() -> ZctaTables {
        let crosswalk: CrosswalkTable = [("00501", "11742"), ("30303", "30303")]
            .into_iter()
            .filter_map(|(zip, zcta)| Some((normalize_code(zip)?, normalize_code(zcta)?)))
            .collect();
        ZctaTables::new(YearGeneration::Gen2020, crosswalk, CentroidTable::default())
    }

    #[test]
    fn maps_known_codes() {
        let tables = tables();
        let zcta = resolve_zcta(&tables, "00501", LookupOptions::forward());
        assert_eq!(zcta.as_ref().map(ZipCode::as_str), Some("11742"));
    }

    #[test]
    fn normalizes_before_lookup() {
        let tables = tables();
        let options = LookupOptions::forward();
        assert_eq!(
            resolve_zcta(&tables, 501, options).as_ref().map(ZipCode::as_str),
            Some("11742")
        );
        assert_eq!(
            resolve_zcta(&tables, "30303-1234", options)
                .as_ref()
                .map(ZipCode::as_str),
            Some("30303")
        );
    }

    #[test]
    fn unknown_code_follows_miss_policy() {
        let tables = tables();
        let empty = LookupOptions::forward().suppressed();
        assert_eq!(resolve_zcta(&tables, "99999", empty), None);

        let use_input = empty.with_on_miss(MissPolicy::UseInput);
        assert_eq!(
            resolve_zcta(&tables, "99999", use_input)
                .as_ref()
                .map(ZipCode::as_str),
            Some("99999")
        );
    }

    #[test]
    fn null_input_is_none_under_either_policy() {
        let tables = tables();
        for on_miss in [MissPolicy::Empty, MissPolicy::UseInput] {
            let options = LookupOptions::forward().with_on_miss(on_miss);
            assert_eq!(resolve_zcta(&tables, "nan", options), None);
            assert_eq!(resolve_zcta(&tables, "", options), None);
        }
    }
}
