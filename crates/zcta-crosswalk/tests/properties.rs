//! Property tests over randomly generated crosswalks.

use std::collections::BTreeMap;

use proptest::prelude::*;
use zcta_crosswalk::{resolve_zcta, resolve_zips};
use zcta_model::{
    CentroidTable, CrosswalkTable, LookupOptions, YearGeneration, ZctaTables, ZipCode,
    normalize_code,
};

fn code_strategy() -> impl Strategy<Value = ZipCode> {
    (0u32..100_000).prop_map(|n| normalize_code(format!("{n:05}")).expect("five digits"))
}

fn tables_strategy() -> impl Strategy<Value = ZctaTables> {
    // A small ZCTA pool forces many-to-one mappings.
    (
        prop::collection::vec(code_strategy(), 1..6),
        prop::collection::btree_map(code_strategy(), 0usize..6, 1..40),
    )
        .prop_map(|(zctas, assignments)| {
            let entries: BTreeMap<ZipCode, ZipCode> = assignments
                .into_iter()
                .map(|(zip, idx)| (zip, zctas[idx % zctas.len()].clone()))
                .collect();
            ZctaTables::new(
                YearGeneration::Gen2020,
                CrosswalkTable::new(entries),
                CentroidTable::default(),
            )
        })
}

proptest! {
    #[test]
    fn every_zip_appears_in_reverse_of_its_zcta(tables in tables_strategy()) {
        let options = LookupOptions::reverse().suppressed();
        for (zip, zcta) in tables.crosswalk().iter() {
            let zips = resolve_zips(&tables, zcta, options);
            prop_assert!(zips.contains(zip));
        }
    }

    #[test]
    fn forward_then_reverse_contains_input(tables in tables_strategy()) {
        let forward = LookupOptions::forward().suppressed();
        let reverse = LookupOptions::reverse().suppressed();
        for (zip, zcta) in tables.crosswalk().iter() {
            let resolved = resolve_zcta(&tables, zip, forward);
            prop_assert_eq!(resolved.as_ref(), Some(zcta));
            let zips = resolve_zips(&tables, zcta, reverse);
            prop_assert!(zips.contains(zip));
        }
    }

    #[test]
    fn reverse_lists_are_sorted_and_partition_the_crosswalk(tables in tables_strategy()) {
        let mut seen = 0usize;
        for (_, zips) in tables.reverse().iter() {
            prop_assert!(zips.windows(2).all(|pair| pair[0] < pair[1]));
            seen += zips.len();
        }
        prop_assert_eq!(seen, tables.crosswalk().len());
    }
}
