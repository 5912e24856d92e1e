//! Miss diagnostics are emitted as tracing events and respect `Diagnostics`.

use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use tracing_subscriber::fmt::MakeWriter;
use zcta_crosswalk::{resolve_centroid, resolve_zcta, resolve_zips};
use zcta_data::TableStore;
use zcta_model::{LookupOptions, MissPolicy, YearGeneration, ZctaTables, ZipCode};

#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<u8>>>);

impl Captured {
    fn text(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl Write for Captured {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for Captured {
    type Writer = Self;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

/// Run `f` with a subscriber that records every event as plain text.
fn capture<R>(f: impl FnOnce() -> R) -> (R, String) {
    let buffer = Captured::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(buffer.clone())
        .with_ansi(false)
        .with_max_level(tracing::Level::TRACE)
        .finish();
    let result = tracing::subscriber::with_default(subscriber, f);
    (result, buffer.text())
}

fn warn_lines(text: &str) -> usize {
    text.lines().filter(|line| line.contains("WARN")).count()
}

fn tables() -> Arc<ZctaTables> {
    let root = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../testdata/json");
    TableStore::from_dir(root)
        .get_or_load(YearGeneration::Gen2020)
        .expect("fixture tables")
}

#[test]
fn forward_miss_emits_a_warning() {
    let tables = tables();
    let (zcta, logs) = capture(|| resolve_zcta(&tables, "99999", LookupOptions::forward()));

    assert_eq!(zcta, None);
    assert_eq!(warn_lines(&logs), 1);
    assert!(logs.contains("zip=99999"));
    assert!(logs.contains("generation=2020"));
    assert!(logs.contains("no ZCTA will be returned"));
}

#[test]
fn forward_fallback_names_the_returned_input() {
    let tables = tables();
    let options = LookupOptions::forward().with_on_miss(MissPolicy::UseInput);
    let (zcta, logs) = capture(|| resolve_zcta(&tables, "99999", options));

    assert_eq!(zcta.map(ZipCode::into_string).as_deref(), Some("99999"));
    assert!(logs.contains("input code will be returned"));
}

#[test]
fn suppressed_and_successful_lookups_are_silent() {
    let tables = tables();
    let (_, logs) = capture(|| {
        resolve_zcta(&tables, "99999", LookupOptions::forward().suppressed());
        resolve_zips(&tables, "99999", LookupOptions::reverse().suppressed());
        resolve_centroid(&tables, "99999", LookupOptions::forward().suppressed());
        resolve_zcta(&tables, "00501", LookupOptions::forward());
        resolve_zips(&tables, "11742", LookupOptions::reverse());
        resolve_centroid(&tables, "30301", LookupOptions::forward());
    });

    assert_eq!(logs, "");
}

#[test]
fn null_inputs_are_never_reported() {
    let tables = tables();
    let empty = LookupOptions::forward();
    let (_, logs) = capture(|| {
        assert_eq!(resolve_zcta(&tables, "nan", empty), None);
        assert_eq!(resolve_zcta(&tables, "", empty), None);
        assert!(resolve_zips(&tables, "", empty).is_empty());
        assert!(resolve_zips(&tables, "null", LookupOptions::reverse()).is_empty());
        assert!(resolve_centroid(&tables, "none", empty).is_missing());
    });

    assert_eq!(logs, "");
}

#[test]
fn reverse_misses_are_reported_by_kind() {
    let tables = tables();

    let (zips, logs) = capture(|| resolve_zips(&tables, "99999", LookupOptions::reverse()));
    assert_eq!(zips.len(), 1);
    assert_eq!(warn_lines(&logs), 1);
    assert!(logs.contains("zcta=99999"));

    let (zips, logs) = capture(|| resolve_zips(&tables, "10118", LookupOptions::reverse()));
    assert_eq!(zips.len(), 1);
    assert_eq!(warn_lines(&logs), 0);
    assert!(logs.contains("INFO"));
    assert!(logs.contains("already a ZIP Code"));

    let empty = LookupOptions::reverse().with_on_miss(MissPolicy::Empty);
    let (zips, logs) = capture(|| resolve_zips(&tables, "99999", empty));
    assert!(zips.is_empty());
    assert!(logs.contains("no ZIP Codes will be returned"));
}

#[test]
fn centroid_miss_reports_the_crosswalk_and_the_centroid() {
    let tables = tables();

    let (centroid, logs) =
        capture(|| resolve_centroid(&tables, "99999", LookupOptions::forward()));
    assert!(centroid.is_missing());
    assert_eq!(warn_lines(&logs), 2);
    assert!(logs.contains("not in the crosswalk records"));
    assert!(logs.contains("tabulation area of the ZIP Code does not have a centroid"));

    let (centroid, logs) =
        capture(|| resolve_centroid(&tables, "96799", LookupOptions::forward()));
    assert!(centroid.is_missing());
    assert_eq!(warn_lines(&logs), 1);
    assert!(logs.contains("ZIP Code does not have a centroid"));
    assert!(!logs.contains("tabulation area"));
}
