//! Delimited-file reader for source tables

use super::RawRow;
use crate::error::{RosterError, RosterResult};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Read a CSV file with a header row into raw rows.
///
/// Rows whose every value is blank are skipped. Short rows leave the
/// trailing columns missing; fields beyond the header are ignored.
pub fn read_rows(path: &Path) -> RosterResult<Vec<RawRow>> {
    let file = File::open(path).map_err(|source| RosterError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    read_rows_from(file, path)
}

/// Read rows from any reader; `path` is only used in error messages.
pub fn read_rows_from<R: Read>(input: R, path: &Path) -> RosterResult<Vec<RawRow>> {
    let csv_err = |source| RosterError::Csv {
        path: path.to_path_buf(),
        source,
    };

    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(input);
    let headers = reader.headers().map_err(csv_err)?.clone();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(csv_err)?;
        if record.iter().all(|v| v.trim().is_empty()) {
            continue;
        }
        let row: RawRow = headers
            .iter()
            .zip(record.iter())
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        rows.push(row);
    }

    tracing::debug!(path = %path.display(), rows = rows.len(), "read source table");
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn parse(text: &str) -> Vec<RawRow> {
        read_rows_from(text.as_bytes(), &PathBuf::from("inline.csv")).unwrap()
    }

    #[test]
    fn reads_header_keyed_rows() {
        let rows = parse("person_name,award_name,year\nMarie Curie,Nobel Prize in Physics,1903\n");
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0]["person_name"], "Marie Curie");
        assert_eq!(rows[0]["year"], "1903");
    }

    #[test]
    fn skips_blank_rows() {
        let rows = parse("person_name,award_name\n , \nAda,Medal\n,\n");
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0]["person_name"], "Ada");
    }

    #[test]
    fn quoted_commas_stay_in_one_field() {
        let rows = parse("person_name,person_description\n\"Curie, Marie\",\"physicist, chemist\"\n");
        assert_eq!(rows[0]["person_name"], "Curie, Marie");
        assert_eq!(rows[0]["person_description"], "physicist, chemist");
    }

    #[test]
    fn ragged_rows_are_tolerated() {
        let rows = parse("person_name,award_name,year\nAda\nBob,Medal,1900,extra\n");
        assert_eq!(rows.len(), 2);
        assert!(!rows[0].contains_key("award_name"));
        assert_eq!(rows[1]["year"], "1900");
        assert_eq!(rows[1].len(), 3);
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let err = read_rows(Path::new("/nonexistent/roster/awards.csv")).unwrap_err();
        assert!(matches!(err, RosterError::Read { .. }));
        assert!(err.to_string().contains("awards.csv"));
    }
}
