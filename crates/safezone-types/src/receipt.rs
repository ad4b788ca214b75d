use crate::GeoPoint;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use time::OffsetDateTime;

/// Stable schema identifiers for safezone documents.
pub const SCHEMA_REPORT_V1: &str = "safezone.report.v1";
pub const SCHEMA_SCENARIO_V1: &str = "safezone.scenario.v1";

/// Severity is intentionally small: `warning` keeps the exit code green, `error` fails it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Warning,
    Error,
}

/// Outcome of one evaluation.
///
/// `Skip` means there was nothing to evaluate against (no reference position yet).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Safe,
    Warn,
    Unsafe,
    Skip,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Finding {
    pub severity: Severity,
    pub check_id: String,
    pub code: String,
    pub message: String,

    /// Position in the input report list (zero-based).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report_index: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<GeoPoint>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance_m: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub help: Option<String>,

    /// Stable identifier intended for dedup across runs. A hash of
    /// `check_id + code + report coordinates`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fingerprint: Option<String>,

    #[serde(default, skip_serializing_if = "serde_json::Value::is_null")]
    pub data: JsonValue,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ToolMeta {
    pub name: String,
    pub version: String,
}

/// Safezone-specific summary payload for the report.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema, Default)]
pub struct SafezoneData {
    pub profile: String,
    pub threshold_m: f64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<GeoPoint>,

    pub reports_scanned: u32,
    pub hazards_total: u32,
    pub hazards_emitted: u32,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub nearest_distance_m: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub truncated_reason: Option<String>,
}

/// A generic receipt/envelope.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ReportEnvelope<TData = SafezoneData> {
    /// Versioned schema identifier for the envelope shape.
    pub schema: String,
    pub tool: ToolMeta,
    #[schemars(with = "String")]
    #[serde(with = "time::serde::rfc3339")]
    pub started_at: OffsetDateTime,
    #[schemars(with = "String")]
    #[serde(with = "time::serde::rfc3339")]
    pub finished_at: OffsetDateTime,
    pub verdict: Verdict,
    pub findings: Vec<Finding>,
    pub data: TData,
}

pub type SafezoneReport = ReportEnvelope<SafezoneData>;

/// Scenario input: where the user is and what has been reported around them.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ScenarioV1 {
    /// Optional schema string for tooling (`safezone.scenario.v1`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    /// Current position; absent until geolocation has produced a fix.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<GeoPoint>,

    #[serde(default)]
    pub reports: Vec<GeoPoint>,
}
