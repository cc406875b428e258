use chrono::NaiveDate;

use super::model::Finding;

// ---------------------------------------------------------------------------
// Delay classification
// ---------------------------------------------------------------------------

/// Whether an item is delayed as of `today`.
///
/// An item is delayed iff it is open and its target date is either missing
/// or already past. `today` is the render-time wall clock date, so an
/// unchanged dataset can legitimately produce a different count tomorrow.
pub fn is_delayed(finding: &Finding, today: NaiveDate) -> bool {
    finding.is_open()
        && match finding.target_date {
            Some(date) => date < today,
            None => true,
        }
}

/// Count of delayed items in `rows` as of `today`.
pub fn delayed_count(rows: &[&Finding], today: NaiveDate) -> usize {
    rows.iter().filter(|f| is_delayed(f, today)).count()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
