use super::model::Finding;

// ---------------------------------------------------------------------------
// Cascading equality filters: department → car maker → line
// ---------------------------------------------------------------------------

/// The three columns the drill-down selectors filter on. Keeping the column
/// choice in one enum means a selector and its filter can never disagree
/// about which field they read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterKey {
    Department,
    CarMaker,
    Line,
}

impl FilterKey {
    pub fn value<'a>(&self, finding: &'a Finding) -> &'a str {
        match self {
            FilterKey::Department => &finding.department,
            FilterKey::CarMaker => &finding.car_maker,
            FilterKey::Line => &finding.line,
        }
    }
}

/// Distinct values of `key` within `rows`, in first-appearance order.
///
/// The option set offered at each stage is always scoped to the upstream
/// subset, so a downstream selector can never offer a choice that would
/// yield an empty result.
pub fn options(rows: &[&Finding], key: FilterKey) -> Vec<String> {
    let mut seen = Vec::new();
    for finding in rows {
        let value = key.value(finding);
        if !seen.iter().any(|v: &String| v == value) {
            seen.push(value.to_string());
        }
    }
    seen
}

/// Narrow `rows` to those whose `key` field equals `choice`.
pub fn narrow<'a>(rows: &[&'a Finding], key: FilterKey, choice: &str) -> Vec<&'a Finding> {
    rows.iter()
        .filter(|f| key.value(f) == choice)
        .copied()
        .collect()
}

/// Borrow the full record set as a view, the root of the filter chain.
pub fn all<'a>(findings: &'a [Finding]) -> Vec<&'a Finding> {
    findings.iter().collect()
}

/// Restrict `rows` to open items (exact `Status == "OPEN"` match).
pub fn open_items<'a>(rows: &[&'a Finding]) -> Vec<&'a Finding> {
    rows.iter().filter(|f| f.is_open()).copied().collect()
}

/// Number of open items in `rows`.
pub fn open_count(rows: &[&Finding]) -> usize {
    rows.iter().filter(|f| f.is_open()).count()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn finding(department: &str, maker: &str, line: &str, status: &str, row: usize) -> Finding {
        Finding {
            car_maker: maker.to_string(),
            car_model: String::new(),
            line: line.to_string(),
            findings: String::new(),
            action_items: String::new(),
            department: department.to_string(),
            person_in_charge: String::new(),
            status: status.to_string(),
            target_date: None,
            row,
        }
    }

    fn sample() -> Vec<Finding> {
        vec![
            finding("MECH", "Honda", "3158", "OPEN", 0),
            finding("PAINT", "Toyota", "2201", "CLOSE", 1),
            finding("MECH", "Honda", "3159", "CLOSE", 2),
            finding("MECH", "Toyota", "3158", "OPEN", 3),
        ]
    }

    #[test]
    fn options_preserve_first_appearance_order() {
        let data = sample();
        let rows = all(&data);
        assert_eq!(options(&rows, FilterKey::Department), ["MECH", "PAINT"]);
        assert_eq!(options(&rows, FilterKey::CarMaker), ["Honda", "Toyota"]);
    }

    #[test]
    fn narrow_keeps_only_matching_rows() {
        let data = sample();
        let mech = narrow(&all(&data), FilterKey::Department, "MECH");
        assert_eq!(mech.len(), 3);
        assert!(mech.iter().all(|f| f.department == "MECH"));
    }

    #[test]
    fn downstream_options_are_scoped_to_upstream_subset() {
        let data = sample();
        let mech = narrow(&all(&data), FilterKey::Department, "MECH");
        let makers = options(&mech, FilterKey::CarMaker);
        // Every offered maker must actually occur in the MECH subset.
        for maker in &makers {
            assert!(!narrow(&mech, FilterKey::CarMaker, maker).is_empty());
        }
        let honda = narrow(&mech, FilterKey::CarMaker, "Honda");
        assert_eq!(options(&honda, FilterKey::Line), ["3158", "3159"]);
    }

    #[test]
    fn open_filter_is_value_exact() {
        let mut data = sample();
        data.push(finding("MECH", "Honda", "3158", "open", 4));
        data.push(finding("MECH", "Honda", "3158", " OPEN", 5));
        let rows = all(&data);
        assert_eq!(open_count(&rows), 2);
        assert!(open_items(&rows).iter().all(|f| f.status == "OPEN"));
    }

    #[test]
    fn empty_subset_yields_empty_options() {
        let data = sample();
        let none = narrow(&all(&data), FilterKey::Department, "QA");
        assert!(none.is_empty());
        assert!(options(&none, FilterKey::CarMaker).is_empty());
    }
}
