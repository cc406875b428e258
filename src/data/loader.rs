use std::path::Path;

use chrono::NaiveDate;
use thiserror::Error;

use super::model::{COLUMNS, Finding};

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Why the findings file could not be loaded. Surfaced verbatim in the UI;
/// a load failure must never leave the user looking at a blank page.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot read {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("missing required column '{0}'")]
    MissingColumn(&'static str),
    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),
}

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load all findings from the CSV at `path`, in source row order.
///
/// The file is decoded as Latin-1 (the encoding the source system exports),
/// the nine required columns are located by header name, and every other
/// column is ignored. Unparseable or blank target dates become `None`;
/// a missing file or missing required column is an error.
pub fn load_findings(path: &Path) -> Result<Vec<Finding>, LoadError> {
    let bytes = std::fs::read(path).map_err(|source| LoadError::Io {
        path: path.display().to_string(),
        source,
    })?;
    parse_findings(&decode_latin1(&bytes))
}

/// Parse findings from already-decoded CSV text.
pub fn parse_findings(text: &str) -> Result<Vec<Finding>, LoadError> {
    let mut reader = csv::Reader::from_reader(text.as_bytes());

    let headers: Vec<String> = reader.headers()?.iter().map(|h| h.to_string()).collect();
    let mut col_idx = [0usize; 9];
    for (i, name) in COLUMNS.iter().enumerate() {
        col_idx[i] = headers
            .iter()
            .position(|h| h == name)
            .ok_or(LoadError::MissingColumn(name))?;
    }

    let mut findings = Vec::new();
    for (row, result) in reader.records().enumerate() {
        let record = result?;
        let field = |i: usize| record.get(col_idx[i]).unwrap_or("").to_string();

        findings.push(Finding {
            car_maker: field(0),
            car_model: field(1),
            line: field(2),
            findings: field(3),
            action_items: field(4),
            department: field(5),
            person_in_charge: field(6),
            status: field(7),
            target_date: parse_target_date(record.get(col_idx[8]).unwrap_or("")),
            row,
        });
    }

    Ok(findings)
}

// ---------------------------------------------------------------------------
// Cell parsing
// ---------------------------------------------------------------------------

/// Latin-1 code points map 1:1 onto the first 256 Unicode scalars, so the
/// decode is a plain widening. Never fails, unlike a UTF-8 read.
fn decode_latin1(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| b as char).collect()
}

/// Permissive date parse: try the formats the source data has been seen to
/// use, map anything else (including blanks) to `None`.
pub fn parse_target_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    const FORMATS: [&str; 6] = [
        "%Y-%m-%d",
        "%m/%d/%Y",
        "%m/%d/%y",
        "%d-%b-%y",
        "%d-%b-%Y",
        "%B %d, %Y",
    ];
    FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "Car Maker,Car Model,Line,Findings,Items to Check/Action,\
Department,Person in Charge,Status,Target Date";

    fn sample_csv() -> String {
        format!(
            "{HEADER}\n\
Honda,Civic,3158,Loose bolt,Re-torque,MECH,Reyes,OPEN,2024-05-01\n\
Toyota,Vios,2201,Scratch,Polish,PAINT,Cruz,CLOSE,05/30/2024\n\
Honda,City,3158,Missing clip,Replace,MECH,Reyes,OPEN,\n"
        )
    }

    #[test]
    fn loads_rows_in_source_order() {
        let findings = parse_findings(&sample_csv()).unwrap();
        assert_eq!(findings.len(), 3);
        assert_eq!(findings[0].car_maker, "Honda");
        assert_eq!(findings[0].row, 0);
        assert_eq!(findings[2].row, 2);
        assert_eq!(findings[1].department, "PAINT");
    }

    #[test]
    fn extra_columns_are_ignored() {
        let text = format!("Remarks,{HEADER}\nnote,Honda,Civic,1,f,a,MECH,p,OPEN,2024-01-02\n");
        let findings = parse_findings(&text).unwrap();
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].car_maker, "Honda");
        assert_eq!(
            findings[0].target_date,
            NaiveDate::from_ymd_opt(2024, 1, 2)
        );
    }

    #[test]
    fn missing_column_is_an_error() {
        let text = "Car Maker,Line\nHonda,1\n";
        match parse_findings(text) {
            Err(LoadError::MissingColumn(col)) => assert_eq!(col, "Car Model"),
            other => panic!("expected MissingColumn, got {other:?}"),
        }
    }

    #[test]
    fn missing_file_is_an_error() {
        let path = std::env::temp_dir().join("fmea_viewer_no_such_file.csv");
        assert!(matches!(
            load_findings(&path),
            Err(LoadError::Io { .. })
        ));
    }

    #[test]
    fn latin1_bytes_decode_without_loss() {
        // 0xE9 is 'é' in Latin-1 and invalid on its own in UTF-8.
        assert_eq!(decode_latin1(&[0x4a, 0x6f, 0x73, 0xe9]), "José");
    }

    #[test]
    fn date_parse_is_permissive() {
        assert_eq!(
            parse_target_date("2024-05-30"),
            NaiveDate::from_ymd_opt(2024, 5, 30)
        );
        assert_eq!(
            parse_target_date("05/30/2024"),
            NaiveDate::from_ymd_opt(2024, 5, 30)
        );
        assert_eq!(
            parse_target_date("May 30, 2024"),
            NaiveDate::from_ymd_opt(2024, 5, 30)
        );
        assert_eq!(parse_target_date(""), None);
        assert_eq!(parse_target_date("TBA"), None);
        assert_eq!(parse_target_date("30-13-2024"), None);
    }
}
