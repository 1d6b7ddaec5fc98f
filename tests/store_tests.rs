//! Tests for artifact loading and the on-demand stats summary.

use std::fs;
use std::path::PathBuf;

use catalog_rust::models::{CleanedRecord, StatsSummary};
use catalog_rust::store::{ArtifactError, ArtifactStore};

fn record(show_id: &str, record_type: Option<&str>) -> CleanedRecord {
    CleanedRecord {
        show_id: Some(show_id.to_string()),
        record_type: record_type.map(str::to_string),
        title: None,
        director: "Unknown".to_string(),
        cast: "Unknown".to_string(),
        country: "Unknown".to_string(),
        date_added: None,
        release_year: None,
        rating: None,
        duration: None,
        listed_in: vec![String::new()],
        description: None,
        year_added: 0,
        month_added: "Unknown".to_string(),
        day_added: "Unknown".to_string(),
    }
}

fn write_artifact(path: &PathBuf, records: &[CleanedRecord]) {
    fs::write(path, serde_json::to_vec_pretty(records).unwrap()).unwrap();
}

#[test]
fn load_returns_records_in_stored_order() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("catalog_cleaned.json");
    write_artifact(
        &path,
        &[record("s1", Some("Movie")), record("s2", Some("TV Show"))],
    );

    let store = ArtifactStore::single(&path);
    let records = store.load().unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].show_id.as_deref(), Some("s1"));
    assert_eq!(records[1].show_id.as_deref(), Some("s2"));
}

#[test]
fn stats_are_recomputed_from_the_current_artifact() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("catalog_cleaned.json");
    write_artifact(
        &path,
        &[
            record("s1", Some("Movie")),
            record("s2", Some("Movie")),
            record("s3", Some("TV Show")),
            record("s4", None),
        ],
    );

    let store = ArtifactStore::single(&path);
    assert_eq!(
        store.stats().unwrap(),
        StatsSummary {
            total_titles: 4,
            movies: 2,
            tv_shows: 1,
        }
    );

    // Rewrite the artifact; the next call must see the new counts.
    write_artifact(&path, &[record("s1", Some("Movie"))]);
    assert_eq!(
        store.stats().unwrap(),
        StatsSummary {
            total_titles: 1,
            movies: 1,
            tv_shows: 0,
        }
    );
}

#[test]
fn candidates_are_tried_in_order() {
    let dir = tempfile::tempdir().unwrap();
    let primary = dir.path().join("install/data/processed/catalog_cleaned.json");
    let fallback = dir.path().join("cwd/catalog_cleaned.json");
    fs::create_dir_all(fallback.parent().unwrap()).unwrap();
    write_artifact(&fallback, &[record("s1", Some("Movie"))]);

    let store = ArtifactStore::new(vec![primary.clone(), fallback.clone()]);
    assert!(store.available());
    assert_eq!(store.load().unwrap().len(), 1);

    // Once the primary appears it wins.
    fs::create_dir_all(primary.parent().unwrap()).unwrap();
    write_artifact(
        &primary,
        &[record("s1", Some("Movie")), record("s2", Some("TV Show"))],
    );
    assert_eq!(store.load().unwrap().len(), 2);
}

#[test]
fn corrupt_artifact_is_a_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("catalog_cleaned.json");
    fs::write(&path, b"{ not json").unwrap();

    let store = ArtifactStore::single(&path);
    assert!(matches!(
        store.load().unwrap_err(),
        ArtifactError::Parse { .. }
    ));
}

#[test]
fn store_recovers_once_the_artifact_appears() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("catalog_cleaned.json");

    let store = ArtifactStore::single(&path);
    assert!(matches!(
        store.load().unwrap_err(),
        ArtifactError::Missing { .. }
    ));

    write_artifact(&path, &[record("s1", Some("Movie"))]);
    assert_eq!(store.load().unwrap().len(), 1);
}
