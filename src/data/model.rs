use chrono::NaiveDate;

// ---------------------------------------------------------------------------
// Source columns
// ---------------------------------------------------------------------------

/// The fixed column subset pulled from the source CSV, in display order.
/// Any other columns in the file are ignored.
pub const COLUMNS: [&str; 9] = [
    "Car Maker",
    "Car Model",
    "Line",
    "Findings",
    "Items to Check/Action",
    "Department",
    "Person in Charge",
    "Status",
    "Target Date",
];

/// The status value that marks an item as unresolved. Comparison is
/// byte-exact: no trimming, no case folding.
pub const STATUS_OPEN: &str = "OPEN";

// ---------------------------------------------------------------------------
// Finding – one row of the source table
// ---------------------------------------------------------------------------

/// A single FMEA/PDCA finding (one row of the source CSV).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    pub car_maker: String,
    pub car_model: String,
    /// Always text, even when the source encodes lines numerically.
    pub line: String,
    pub findings: String,
    pub action_items: String,
    pub department: String,
    pub person_in_charge: String,
    pub status: String,
    /// None when the source cell is blank or unparseable.
    pub target_date: Option<NaiveDate>,
    /// Zero-based position in the source file; exported as the index column.
    pub row: usize,
}

impl Finding {
    pub fn is_open(&self) -> bool {
        self.status == STATUS_OPEN
    }

    /// The nine column values in [`COLUMNS`] order, dates as ISO-8601.
    pub fn field_values(&self) -> [String; 9] {
        [
            self.car_maker.clone(),
            self.car_model.clone(),
            self.line.clone(),
            self.findings.clone(),
            self.action_items.clone(),
            self.department.clone(),
            self.person_in_charge.clone(),
            self.status.clone(),
            self.target_date
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_default(),
        ]
    }
}
