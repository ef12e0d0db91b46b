//! File-based tests for the station registry
//!
//! Parsing and query logic is covered by unit tests next to the code; these
//! modules exercise the loader and snapshot paths against real files.

mod loader_tests;
mod snapshot_tests;

use crate::constants::MSN_RECORD_LEN;

/// Build an 82-character MSN line with each field at its documented columns
#[allow(clippy::too_many_arguments)]
pub fn msn_line(
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

/// A small but representative MSN file: header, detail records (including a
/// multi-TIPLOC station), an alias record, and a trailer.
pub fn fixture_file_content() -> String {
    let lines = vec![
        "H  RSPS5041 MASTER STATION NAMES FILE".to_string(),
        msn_line(
            'A', "ABERDARE", '0', "ABDARE", "ABA", "ABA", "13004", ' ', "62027", "03",
        ),
        msn_line(
            'A', "COVENTRY", '2', "COVNTRY", "COV", "COV", "43327", ' ', "27933", "05",
        ),
        msn_line(
            'A', "TAMWORTH", '3', "TAMWTHL", "TAM", "TAM", "42060", ' ', "30395", "10",
        ),
        msn_line(
            'A', "TAMWORTH", '9', "TAMWTHH", "TAH", "TAM", "42060", ' ', "30395", "10",
        ),
        msn_line(
            'L', "ABERDAR", '0', "ABDARE", "ABA", "ABA", "13004", ' ', "62027", "03",
        ),
        "T TRAILER RECORD".to_string(),
    ];
    lines.join("\n")
}
