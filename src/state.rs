use std::path::Path;

use crate::data::filter::FilterKey;
use crate::data::loader;
use crate::data::model::Finding;

// ---------------------------------------------------------------------------
// Access gate
// ---------------------------------------------------------------------------

/// Feedback after a failed key submission. Neither variant is an error;
/// the prompt stays open and the user may try again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateFeedback {
    NothingEntered,
    WrongKey,
}

impl GateFeedback {
    pub fn message(&self) -> &'static str {
        match self {
            GateFeedback::NothingEntered => "You haven't entered the app key",
            GateFeedback::WrongKey => "Incorrect app key",
        }
    }
}

/// State of the plaintext app-key gate in front of the dashboard.
#[derive(Debug, Default)]
pub struct Gate {
    pub input: String,
    pub feedback: Option<GateFeedback>,
    pub unlocked: bool,
}

impl Gate {
    /// Compare the entered key against the configured one. Exact equality
    /// unlocks; empty input and a wrong key give distinct messages.
    pub fn submit(&mut self, expected: &str) {
        if self.input.is_empty() {
            self.feedback = Some(GateFeedback::NothingEntered);
        } else if self.input == expected {
            self.unlocked = true;
            self.feedback = None;
        } else {
            self.feedback = Some(GateFeedback::WrongKey);
        }
    }
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    pub gate: Gate,

    /// Loaded findings (None until the first successful load).
    pub findings: Option<Vec<Finding>>,

    /// Load failure shown in the UI; a bad file must never render blank.
    pub load_error: Option<String>,

    /// Cascading selections; downstream of any change they are re-resolved
    /// against the options the narrowed subset actually offers.
    pub department: Option<String>,
    pub car_maker: Option<String>,
    pub line: Option<String>,

    /// Export feedback shown near the download button.
    pub status_message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            gate: Gate::default(),
            findings: None,
            load_error: None,
            department: None,
            car_maker: None,
            line: None,
            status_message: None,
        }
    }
}

impl AppState {
    /// Reload the findings file. Called on unlock and after every selection
    /// change so each render pass works on a fresh copy of the source.
    pub fn reload(&mut self, path: &Path) {
        match loader::load_findings(path) {
            Ok(findings) => {
                log::info!("Loaded {} findings from {}", findings.len(), path.display());
                self.findings = Some(findings);
                self.load_error = None;
            }
            Err(e) => {
                log::error!("Failed to load findings: {e}");
                self.load_error = Some(e.to_string());
                // A failed load is fatal for the pass; never keep rows from
                // an earlier read next to the error banner.
                self.findings = None;
            }
        }
    }

    /// Record a selection and invalidate everything downstream of it.
    pub fn select(&mut self, key: FilterKey, value: String) {
        match key {
            FilterKey::Department => {
                self.department = Some(value);
                self.car_maker = None;
                self.line = None;
            }
            FilterKey::CarMaker => {
                self.car_maker = Some(value);
                self.line = None;
            }
            FilterKey::Line => {
                self.line = Some(value);
            }
        }
    }
}

/// Reconcile a stored selection with the options currently on offer: keep it
/// if still offered, otherwise fall back to the first option, or to nothing
/// when the option set is empty.
pub fn resolve_selection(options: &[String], current: Option<&str>) -> Option<String> {
    match current {
        Some(value) if options.iter().any(|o| o == value) => Some(value.to_string()),
        _ => options.first().cloned(),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
