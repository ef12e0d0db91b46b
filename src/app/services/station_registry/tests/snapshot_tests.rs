//! Snapshot round-trip tests

use super::fixture_file_content;
use crate::Error;
use crate::app::services::station_registry::StationRegistry;
use std::io::Write;
use tempfile::{NamedTempFile, TempDir};

async fn load_fixture_registry() -> StationRegistry {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(fixture_file_content().as_bytes()).unwrap();
    file.flush().unwrap();

    let (registry, _) = StationRegistry::load_from_msn(file.path(), false)
        .await
        .unwrap();
    registry
}

#[tokio::test]
async fn test_snapshot_round_trip() {
    let registry = load_fixture_registry().await;

    let dir = TempDir::new().unwrap();
    let snapshot_path = dir.path().join("stations.json");

    registry.write_snapshot(&snapshot_path).unwrap();
    let restored = StationRegistry::load_snapshot(&snapshot_path).unwrap();

    assert_eq!(restored.record_count(), registry.record_count());
    assert_eq!(restored.records(), registry.records());
    assert_eq!(restored.source_path(), snapshot_path);
}

#[tokio::test]
async fn test_snapshot_is_a_json_array() {
    let registry = load_fixture_registry().await;

    let dir = TempDir::new().unwrap();
    let snapshot_path = dir.path().join("stations.json");
    registry.write_snapshot(&snapshot_path).unwrap();

    let content = std::fs::read_to_string(&snapshot_path).unwrap();
    let value: serde_json::Value = serde_json::from_str(&content).unwrap();

    let array = value.as_array().expect("snapshot must be a JSON array");
    assert_eq!(array.len(), 4);
    assert_eq!(array[0]["station_name"], "ABERDARE");
    assert_eq!(array[0]["interchange_status"], "none");
    assert_eq!(array[0]["CRS"]["main"], "ABA");
}

#[tokio::test]
async fn test_snapshot_overwrites_previous_run() {
    let registry = load_fixture_registry().await;

    let dir = TempDir::new().unwrap();
    let snapshot_path = dir.path().join("stations.json");

    std::fs::write(&snapshot_path, "[\"stale\"]").unwrap();
    registry.write_snapshot(&snapshot_path).unwrap();

    let restored = StationRegistry::load_snapshot(&snapshot_path).unwrap();
    assert_eq!(restored.record_count(), 4);
}

#[test]
fn test_load_snapshot_rejects_malformed_json() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"{not json").unwrap();
    file.flush().unwrap();

    match StationRegistry::load_snapshot(file.path()).unwrap_err() {
        Error::Snapshot { message, .. } => assert!(message.contains("deserialization")),
        other => panic!("expected Snapshot, got {:?}", other),
    }
}
