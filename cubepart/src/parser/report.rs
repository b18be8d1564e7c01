//! CubeMX pin report reader
//!
//! The report is a comma separated file with one header line followed by
//! rows of `Pin, Name, Type, Signal, Label`. The header is skipped without
//! being inspected; every other row must carry exactly five fields. An empty
//! line between rows is an error; trailing empty lines are ignored.

use crate::core::CubePartError;
use crate::parser::schema::RawPinRow;
use csv::{ReaderBuilder, StringRecord};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Number of fields in a report row
pub const REPORT_FIELDS: usize = 5;

/// Read a pin report from a file.
pub fn read_report(path: &Path) -> Result<Vec<RawPinRow>, CubePartError> {
    let file = File::open(path)?;
    read_report_from_reader(BufReader::new(file))
}

/// Read a pin report from any reader.
pub fn read_report_from_reader<R: Read>(reader: R) -> Result<Vec<RawPinRow>, CubePartError> {
    let mut csv_reader = ReaderBuilder::new()
        .delimiter(b',')
        .quote(b'"')
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    // Line the next row must start on
    let mut expected_line = {
        let header = csv_reader.headers()?;
        let start = header.position().map(|p| p.line() as usize).unwrap_or(1);
        start + record_height(header)
    };

    let mut rows = Vec::new();
    for (idx, result) in csv_reader.records().enumerate() {
        let record = result?;
        // +2: header line and 1-based numbering
        let line = record
            .position()
            .map(|p| p.line() as usize)
            .unwrap_or(idx + 2);
        if line > expected_line {
            return Err(CubePartError::BlankLine {
                line: expected_line,
            });
        }
        expected_line = line + record_height(&record);
        rows.push(row_from_record(&record, line)?);
    }

    tracing::debug!("Read {} pin rows", rows.len());
    Ok(rows)
}

/// Number of source lines a record spans (quoted fields may hold newlines).
fn record_height(record: &StringRecord) -> usize {
    1 + record.iter().map(|f| f.matches('\n').count()).sum::<usize>()
}

fn row_from_record(record: &StringRecord, line: usize) -> Result<RawPinRow, CubePartError> {
    if record.len() != REPORT_FIELDS {
        return Err(CubePartError::FieldCount {
            line,
            found: record.len(),
        });
    }
    Ok(RawPinRow {
        pin: record[0].to_string(),
        name: record[1].to_string(),
        pin_type: record[2].to_string(),
        signal: record[3].to_string(),
        label: record[4].to_string(),
        line,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "\"Position\",\"Name\",\"Type\",\"Signal\",\"Label\"\n";

    #[test]
    fn test_skips_header_and_keeps_order() {
        let data = format!(
            "{}\"1\",\"VBAT\",\"Power\",\"\",\"\"\n\"2\",\"PC13\",\"I/O\",\"\",\"\"\n\"14\",\"PA0-WKUP\",\"I/O\",\"ADC1_IN0\",\"SENSE\"\n",
            HEADER
        );
        let rows = read_report_from_reader(data.as_bytes()).expect("Should parse report");

        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].pin, "1");
        assert_eq!(rows[0].name, "VBAT");
        assert_eq!(rows[0].pin_type, "Power");
        assert_eq!(rows[2].signal, "ADC1_IN0");
        assert_eq!(rows[2].label, "SENSE");
        assert_eq!(rows[2].line, 4);
    }

    #[test]
    fn test_quoted_commas_stay_in_field() {
        let data = format!("{}\"5\",\"PD0\",\"I/O\",\"\",\"a,b\"\n", HEADER);
        let rows = read_report_from_reader(data.as_bytes()).unwrap();
        assert_eq!(rows[0].label, "a,b");
    }

    #[test]
    fn test_wrong_field_count_is_error() {
        let data = format!("{}\"1\",\"VBAT\",\"Power\",\"\"\n", HEADER);
        let err = read_report_from_reader(data.as_bytes()).unwrap_err();
        match err {
            CubePartError::FieldCount { line, found } => {
                assert_eq!(line, 2);
                assert_eq!(found, 4);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_empty_line_between_rows_is_error() {
        let data = format!(
            "{}\"1\",\"VBAT\",\"Power\",\"\",\"\"\n\n\"2\",\"PC13\",\"I/O\",\"\",\"\"\n",
            HEADER
        );
        let err = read_report_from_reader(data.as_bytes()).unwrap_err();
        assert!(matches!(err, CubePartError::BlankLine { line: 3 }));
    }

    #[test]
    fn test_trailing_empty_lines_allowed() {
        let data = format!("{}\"1\",\"VBAT\",\"Power\",\"\",\"\"\n\n\n", HEADER);
        let rows = read_report_from_reader(data.as_bytes()).unwrap();
        assert_eq!(rows.len(), 1);
    }

    #[test]
    fn test_multiline_label_keeps_line_tracking() {
        let data = format!(
            "{}\"1\",\"PA0\",\"Input\",\"\",\"two\nlines\"\n\"2\",\"PA1\",\"I/O\",\"\",\"\"\n",
            HEADER
        );
        let rows = read_report_from_reader(data.as_bytes()).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].line, 4);
    }

    #[test]
    fn test_header_only_report_is_empty() {
        let rows = read_report_from_reader(HEADER.as_bytes()).unwrap();
        assert!(rows.is_empty());
    }

    #[test]
    fn test_missing_file() {
        let result = read_report(Path::new("does_not_exist.csv"));
        assert!(matches!(result, Err(CubePartError::Io(_))));
    }
}
