use super::model::{COLUMNS, Finding};

// ---------------------------------------------------------------------------
// CSV export of the current subset
// ---------------------------------------------------------------------------

/// Serialize `rows` to UTF-8 CSV bytes.
///
/// The first column is the source row index with an empty header name,
/// matching the layout the previous reporting tool produced; consumers
/// counting columns must account for it. The nine data columns follow in
/// [`COLUMNS`] order.
pub fn to_csv_bytes(rows: &[&Finding]) -> Result<Vec<u8>, csv::Error> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    let mut header = vec![""];
    header.extend(COLUMNS);
    writer.write_record(&header)?;

    for finding in rows {
        let mut record = vec![finding.row.to_string()];
        record.extend(finding.field_values());
        writer.write_record(&record)?;
    }

    writer
        .into_inner()
        .map_err(|e| e.into_error().into())
}

/// Suggested download filename for the current department/line selection.
/// Values are interpolated verbatim; no character sanitization.
pub fn export_filename(department: &str, line: &str) -> String {
    format!("Line {line} FMEA PDCA OPEN Items - {department}.csv")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn finding(row: usize) -> Finding {
        Finding {
            car_maker: "Honda".to_string(),
            car_model: "Civic".to_string(),
            line: "3158".to_string(),
            findings: "Loose bolt, left bracket".to_string(),
            action_items: "Re-torque".to_string(),
            department: "MECH".to_string(),
            person_in_charge: "Reyes".to_string(),
            status: "OPEN".to_string(),
            target_date: NaiveDate::from_ymd_opt(2024, 5, 30),
            row,
        }
    }

    #[test]
    fn header_has_index_column_first() {
        let bytes = to_csv_bytes(&[]).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        let header = text.lines().next().unwrap();
        assert!(header.starts_with(",Car Maker,"));
        assert_eq!(header.split(',').count(), 10);
    }

    #[test]
    fn rows_carry_source_index() {
        let a = finding(4);
        let b = finding(17);
        let bytes = to_csv_bytes(&[&a, &b]).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        let mut lines = text.lines().skip(1);
        assert!(lines.next().unwrap().starts_with("4,"));
        assert!(lines.next().unwrap().starts_with("17,"));
    }

    #[test]
    fn export_round_trips_through_the_loader() {
        let a = finding(0);
        let mut b = finding(1);
        b.status = "CLOSE".to_string();
        b.target_date = None;
        let rows = [&a, &b];

        let bytes = to_csv_bytes(&rows).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        let reparsed = crate::data::loader::parse_findings(&text).unwrap();

        assert_eq!(reparsed.len(), rows.len());
        for (orig, back) in rows.iter().zip(&reparsed) {
            assert_eq!(orig.field_values(), back.field_values());
        }
    }

    #[test]
    fn filename_interpolates_selection_verbatim() {
        assert_eq!(
            export_filename("MECH", "3158"),
            "Line 3158 FMEA PDCA OPEN Items - MECH.csv"
        );
        // Path-hostile characters pass through untouched.
        assert_eq!(
            export_filename("A/B", "3158"),
            "Line 3158 FMEA PDCA OPEN Items - A/B.csv"
        );
    }
}
