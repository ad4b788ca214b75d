//! Stable DTOs and IDs used across the safezone workspace.
//!
//! This crate is intentionally boring:
//! - the geographic point type shared by every layer
//! - data types for the emitted report and the scenario input
//! - stable string IDs and codes
//! - explain registry for remediation guidance

#![forbid(unsafe_code)]

pub mod explain;
pub mod geo;
pub mod ids;
pub mod receipt;

pub use explain::{ExamplePair, Explanation, lookup_explanation};
pub use geo::GeoPoint;
pub use receipt::{
    Finding, ReportEnvelope, SCHEMA_REPORT_V1, SCHEMA_SCENARIO_V1, SafezoneData, SafezoneReport,
    ScenarioV1, Severity, ToolMeta, Verdict,
};
