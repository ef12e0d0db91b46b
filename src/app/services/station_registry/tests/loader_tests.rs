//! Loader tests against temporary MSN files

use super::{fixture_file_content, msn_line};
use crate::Error;
use crate::app::models::InterchangeStatus;
use crate::app::services::station_registry::StationRegistry;
use std::io::Write;
use tempfile::NamedTempFile;

fn write_temp_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[tokio::test]
async fn test_load_from_msn_decodes_only_detail_records() {
    let file = write_temp_file(&fixture_file_content());

    let (registry, stats) = StationRegistry::load_from_msn(file.path(), false)
        .await
        .unwrap();

    // Header, alias, and trailer are skipped; four detail records remain
    assert_eq!(registry.record_count(), 4);
    assert_eq!(stats.lines_read, 7);
    assert_eq!(stats.records_loaded, 4);
    assert_eq!(stats.lines_skipped, 3);

    // Records keep their file order
    assert_eq!(registry.records()[0].station_name, "ABERDARE");
    assert_eq!(registry.records()[3].interchange_status, InterchangeStatus::Subsidiary);
}

#[tokio::test]
async fn test_load_aborts_on_unknown_interchange_code() {
    let content = [
        msn_line(
            'A', "ABERDARE", '0', "ABDARE", "ABA", "ABA", "13004", ' ', "62027", "03",
        ),
        msn_line(
            'A', "BADSTATION", '5', "BADSTN", "BAD", "BAD", "13004", ' ', "62027", "03",
        ),
    ]
    .join("\n");
    let file = write_temp_file(&content);

    let err = StationRegistry::load_from_msn(file.path(), false)
        .await
        .unwrap_err();

    match err {
        Error::UnknownInterchangeCode { code, line } => {
            assert_eq!(code, "5");
            assert_eq!(line, 2);
        }
        other => panic!("expected UnknownInterchangeCode, got {:?}", other),
    }
}

#[tokio::test]
async fn test_load_missing_file_is_an_io_error() {
    let result =
        StationRegistry::load_from_msn(std::path::Path::new("/nonexistent/ttisf.msn"), false)
            .await;

    match result.unwrap_err() {
        Error::Io { message, .. } => assert!(message.contains("failed to read MSN file")),
        other => panic!("expected Io, got {:?}", other),
    }
}

#[tokio::test]
async fn test_loaded_registry_answers_queries() {
    let file = write_temp_file(&fixture_file_content());

    let (registry, _) = StationRegistry::load_from_msn(file.path(), false)
        .await
        .unwrap();

    // Principal and secondary codes both resolve the multi-TIPLOC station
    assert_eq!(registry.find_by_crs("TAM").len(), 2);
    assert_eq!(registry.find_by_crs("TAH").len(), 1);

    // Name lookup ignores case
    assert_eq!(registry.find_by_name("coventry").len(), 1);
}
