use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

// ---------------------------------------------------------------------------
// Startup configuration
// ---------------------------------------------------------------------------

/// One announced checking session, shown verbatim on the landing page.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ScheduleEntry {
    pub date: String,
    pub maker_model: String,
    pub line: String,
    pub time: String,
}

impl Default for ScheduleEntry {
    fn default() -> Self {
        Self {
            date: "TBA".to_string(),
            maker_model: "TBA".to_string(),
            line: "TBA".to_string(),
            time: "TBA".to_string(),
        }
    }
}

/// Everything editable about a deployment, loaded once at startup and passed
/// by reference into rendering. There is no other mutable global state.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Path to the findings CSV.
    pub data_path: PathBuf,
    /// Plaintext app key the user must enter to see the dashboard.
    pub access_key: String,
    pub fmea_schedule: ScheduleEntry,
    pub npra_schedule: ScheduleEntry,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from("FMEA_PDCA.csv"),
            access_key: "FMEA-SE24".to_string(),
            fmea_schedule: ScheduleEntry::default(),
            npra_schedule: ScheduleEntry::default(),
        }
    }
}

impl Config {
    /// Read configuration from a JSON file. Missing fields take their
    /// defaults; a missing or malformed file is an error.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        serde_json::from_str(&text)
            .with_context(|| format!("parsing config {}", path.display()))
    }

    /// Load from `path` when given, otherwise use `config.json` next to the
    /// working directory if present, otherwise fall back to defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Self::load(p),
            None => {
                let default_path = Path::new("config.json");
                if default_path.exists() {
                    Self::load(default_path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_config_takes_defaults() {
        let cfg: Config =
            serde_json::from_str(r#"{ "access_key": "SECRET" }"#).unwrap();
        assert_eq!(cfg.access_key, "SECRET");
        assert_eq!(cfg.data_path, PathBuf::from("FMEA_PDCA.csv"));
        assert_eq!(cfg.fmea_schedule.date, "TBA");
    }

    #[test]
    fn schedule_fields_round_trip() {
        let cfg: Config = serde_json::from_str(
            r#"{
                "fmea_schedule": {
                    "date": "May 30, 2024",
                    "maker_model": "Honda",
                    "line": "Line 3158",
                    "time": "10:30 AM"
                }
            }"#,
        )
        .unwrap();
        assert_eq!(cfg.fmea_schedule.maker_model, "Honda");
        assert_eq!(cfg.npra_schedule.time, "TBA");
    }

    #[test]
    fn missing_config_file_is_an_error() {
        let path = std::env::temp_dir().join("fmea_viewer_no_such_config.json");
        assert!(Config::load(&path).is_err());
    }
}
