//! Fixed-width station record parsing
//!
//! Decodes MSN station detail ('A') records by byte offset, following the
//! RSPS5041 layout. Field boundaries are fixed columns, not delimiters; the
//! layout is compile-time data and never varies between records.
//!
//! Record layout (0-based inclusive column ranges):
//!
//! | Field              | Columns | Notes                                   |
//! |--------------------|---------|-----------------------------------------|
//! | Record type        | 0       | 'A' = station detail, others skipped    |
//! | Station name       | 5-34    | space padded                            |
//! | CATE type          | 35      | interchange status, closed {0,1,2,3,9}  |
//! | TIPLOC             | 36-42   | CIF location code                       |
//! | Subsidiary 3-alpha | 43-45   | repeats the principal code normally     |
//! | Principal 3-alpha  | 49-51   |                                         |
//! | Easting            | 52-56   | 100 m units, 00000 = out of range       |
//! | Estimated          | 57      | 'E' = estimated coordinates             |
//! | Northing           | 58-62   | 100 m units, 00000 = out of range       |
//! | Change time        | 63-64   | minutes                                 |

use crate::app::models::{CrsPair, GridCoordinates, InterchangeStatus, StationRecord};
use crate::constants::STATION_DETAIL_TAG;
use crate::{Error, Result};
use std::ops::RangeInclusive;

const STATION_NAME: RangeInclusive<usize> = 5..=34;
const INTERCHANGE_STATUS: usize = 35;
const TIPLOC: RangeInclusive<usize> = 36..=42;
const CRS_SECONDARY: RangeInclusive<usize> = 43..=45;
const CRS_MAIN: RangeInclusive<usize> = 49..=51;
const EASTING: RangeInclusive<usize> = 52..=56;
const ESTIMATE_FLAG: usize = 57;
const NORTHING: RangeInclusive<usize> = 58..=62;
const CHANGE_TIME: RangeInclusive<usize> = 63..=64;

/// Marker character in the estimate column; anything else (including the
/// usual space) means the coordinates are surveyed, not estimated.
const ESTIMATE_MARKER: u8 = b'E';

/// Shortest line that still contains every field we decode
pub const MIN_STATION_RECORD_LEN: usize = 65;

/// Decode one MSN line.
///
/// Returns `Ok(None)` for lines whose record type tag is not the station
/// detail tag (headers, aliases, groups, trailers); those are skipped
/// silently regardless of their remaining content. Returns an error for
/// station detail lines that are truncated or carry malformed field values.
///
/// `line_number` is 1-based and is carried into every error.
pub fn parse_station_line(line: &str, line_number: usize) -> Result<Option<StationRecord>> {
    let bytes = line.as_bytes();

    let Some(&tag) = bytes.first() else {
        return Ok(None);
    };

    // Tag comparison is case-insensitive, matching the original behavior
    if !tag.eq_ignore_ascii_case(&(STATION_DETAIL_TAG as u8)) {
        return Ok(None);
    }

    if bytes.len() < MIN_STATION_RECORD_LEN {
        return Err(Error::record_format(
            line_number,
            format!(
                "truncated station record: {} characters, need at least {}",
                bytes.len(),
                MIN_STATION_RECORD_LEN
            ),
        ));
    }

    let station_name = text_field(bytes, &STATION_NAME, "station name", line_number)?;
    let interchange_code = single_field(bytes, INTERCHANGE_STATUS);
    let tiploc = text_field(bytes, &TIPLOC, "TIPLOC", line_number)?;
    let crs_secondary = text_field(bytes, &CRS_SECONDARY, "subsidiary CRS", line_number)?;
    let crs_main = text_field(bytes, &CRS_MAIN, "principal CRS", line_number)?;
    let easting = numeric_field(bytes, &EASTING, "easting", line_number)?;
    let northing = numeric_field(bytes, &NORTHING, "northing", line_number)?;
    let change_time = numeric_field(bytes, &CHANGE_TIME, "change time", line_number)?;

    let interchange_status =
        InterchangeStatus::from_code(interchange_code.trim(), line_number)?;
    let is_estimate = bytes[ESTIMATE_FLAG].eq_ignore_ascii_case(&ESTIMATE_MARKER);

    StationRecord::new(
        station_name.to_string(),
        interchange_status,
        tiploc.to_string(),
        CrsPair {
            main: crs_main.to_string(),
            secondary: crs_secondary.to_string(),
        },
        GridCoordinates {
            easting,
            northing,
            is_estimate,
        },
        change_time,
    )
    .map_err(|e| match e {
        Error::DataValidation { message } => Error::record_format(line_number, message),
        other => other,
    })
    .map(Some)
}

/// Extract a trimmed text field at a fixed column range
fn text_field<'a>(
    bytes: &'a [u8],
    columns: &RangeInclusive<usize>,
    name: &str,
    line_number: usize,
) -> Result<&'a str> {
    let slice = &bytes[*columns.start()..=*columns.end()];
    std::str::from_utf8(slice).map(str::trim).map_err(|_| {
        Error::record_format(
            line_number,
            format!("{name} field contains non-ASCII bytes"),
        )
    })
}

/// Extract a single-column field as a one-character string slice
fn single_field(bytes: &[u8], column: usize) -> String {
    (bytes[column] as char).to_string()
}

/// Extract and parse a zero-padded numeric field
fn numeric_field(
    bytes: &[u8],
    columns: &RangeInclusive<usize>,
    name: &str,
    line_number: usize,
) -> Result<u32> {
    let text = text_field(bytes, columns, name, line_number)?;
    text.parse().map_err(|_| {
        Error::record_format(
            line_number,
            format!("invalid {name} value '{text}': expected an integer"),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::MSN_RECORD_LEN;

    /// Build an 82-character MSN line with each field placed at its
    /// documented columns.
    #[allow(clippy::too_many_arguments)]
    fn msn_line(
        tag: char,
        name: &str,
        interchange: char,
        tiploc: &str,
        crs_secondary: &str,
        crs_main: &str,
        easting: &str,
        estimate: char,
        northing: &str,
        change_time: &str,
    ) -> String {
        let mut line = vec![b' '; MSN_RECORD_LEN];

        let put = |line: &mut Vec<u8>, start: usize, text: &str| {
            line[start..start + text.len()].copy_from_slice(text.as_bytes());
        };

        line[0] = tag as u8;
        put(&mut line, 5, name);
        line[35] = interchange as u8;
        put(&mut line, 36, tiploc);
        put(&mut line, 43, crs_secondary);
        put(&mut line, 49, crs_main);
        put(&mut line, 52, easting);
        line[57] = estimate as u8;
        put(&mut line, 58, northing);
        put(&mut line, 63, change_time);

        String::from_utf8(line).unwrap()
    }

    fn aberdare_line() -> String {
        msn_line(
            'A', "ABERDARE", '0', "ABDARE", "ABA", "ABA", "13004", ' ', "62027", "03",
        )
    }

    #[test]
    fn test_decode_aberdare_example() {
        let record = parse_station_line(&aberdare_line(), 2).unwrap().unwrap();

        assert_eq!(record.station_name, "ABERDARE");
        assert_eq!(record.interchange_status, InterchangeStatus::None);
        assert_eq!(record.tiploc, "ABDARE");
        assert_eq!(record.crs.main, "ABA");
        assert_eq!(record.crs.secondary, "ABA");
        assert_eq!(record.coordinates.easting, 13004);
        assert_eq!(record.coordinates.northing, 62027);
        assert!(!record.coordinates.is_estimate);
        assert_eq!(record.change_time, 3);
    }

    #[test]
    fn test_tag_check_is_case_insensitive() {
        let line = msn_line(
            'a', "ABERDARE", '0', "ABDARE", "ABA", "ABA", "13004", ' ', "62027", "03",
        );
        let record = parse_station_line(&line, 1).unwrap();
        assert!(record.is_some());
    }

    #[test]
    fn test_non_detail_tags_are_skipped() {
        // An alias record with otherwise plausible content must not decode
        let alias = msn_line(
            'L', "ABERDARE", '0', "ABDARE", "ABA", "ABA", "13004", ' ', "62027", "03",
        );
        assert!(parse_station_line(&alias, 1).unwrap().is_none());

        // Header and trailer lines don't even have the detail layout
        assert!(parse_station_line("H  FILE HEADER", 1).unwrap().is_none());
        assert!(parse_station_line("Z", 1).unwrap().is_none());
        assert!(parse_station_line("", 1).unwrap().is_none());
    }

    #[test]
    fn test_unknown_interchange_code_is_fatal() {
        let line = msn_line(
            'A', "ABERDARE", '7', "ABDARE", "ABA", "ABA", "13004", ' ', "62027", "03",
        );
        let err = parse_station_line(&line, 12).unwrap_err();
        match err {
            Error::UnknownInterchangeCode { code, line } => {
                assert_eq!(code, "7");
                assert_eq!(line, 12);
            }
            other => panic!("expected UnknownInterchangeCode, got {:?}", other),
        }
    }

    #[test]
    fn test_truncated_detail_line_is_an_error() {
        let full = aberdare_line();
        let truncated = &full[..40];
        let err = parse_station_line(truncated, 7).unwrap_err();
        match err {
            Error::RecordFormat { line, message } => {
                assert_eq!(line, 7);
                assert!(message.contains("truncated"));
            }
            other => panic!("expected RecordFormat, got {:?}", other),
        }
    }

    #[test]
    fn test_non_numeric_easting_is_an_error() {
        let line = msn_line(
            'A', "ABERDARE", '0', "ABDARE", "ABA", "ABA", "1300X", ' ', "62027", "03",
        );
        let err = parse_station_line(&line, 3).unwrap_err();
        match err {
            Error::RecordFormat { message, .. } => assert!(message.contains("easting")),
            other => panic!("expected RecordFormat, got {:?}", other),
        }
    }

    #[test]
    fn test_estimate_flag_marker() {
        let estimated = msn_line(
            'A', "LIZARD (BUS)", '0', "LIZBUS", "LIZ", "LIZ", "10000", 'E', "60126", "05",
        );
        let record = parse_station_line(&estimated, 1).unwrap().unwrap();
        assert!(record.coordinates.is_estimate);

        // Any other character, including the usual space, means false
        let surveyed = msn_line(
            'A', "LIZARD (BUS)", '0', "LIZBUS", "LIZ", "LIZ", "10000", 'X', "60126", "05",
        );
        let record = parse_station_line(&surveyed, 1).unwrap().unwrap();
        assert!(!record.coordinates.is_estimate);
    }

    #[test]
    fn test_out_of_range_sentinel_survives_decode() {
        let line = msn_line(
            'A', "ST HELIER", '0', "STHELIR", "SHI", "SHI", "00000", ' ', "00000", "02",
        );
        let record = parse_station_line(&line, 1).unwrap().unwrap();
        assert!(record.coordinates.is_out_of_range());
    }

    #[test]
    fn test_subsidiary_tiploc_record() {
        // Multi-TIPLOC stations carry code 9 and differing subsidiary codes
        let line = msn_line(
            'A', "TAMWORTH", '9', "TAMWTHH", "TAH", "TAM", "42060", ' ', "30395", "10",
        );
        let record = parse_station_line(&line, 1).unwrap().unwrap();
        assert_eq!(record.interchange_status, InterchangeStatus::Subsidiary);
        assert_eq!(record.crs.main, "TAM");
        assert_eq!(record.crs.secondary, "TAH");
    }
}
