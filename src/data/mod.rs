/// Data layer: core types, loading, filtering, classification, export.
///
/// Architecture:
/// ```text
///      FMEA_PDCA.csv
///            │
///            ▼
///      ┌──────────┐
///      │  loader   │  Latin-1 decode + parse → Vec<Finding>
///      └──────────┘
///            │
///            ▼
///      ┌──────────┐
///      │  filter   │  department → car maker → line → open items
///      └──────────┘
///            │
///      ┌─────┴─────┐
///      ▼           ▼
/// ┌──────────┐ ┌──────────┐
/// │  delay    │ │  export   │
/// └──────────┘ └──────────┘
/// ```
pub mod delay;
pub mod export;
pub mod filter;
pub mod loader;
pub mod model;
