use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// `safezone.toml` schema v1.
///
/// This is a *user-facing* config model: it is intentionally permissive so forward-compat is easy.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SafezoneConfigV1 {
    /// Optional schema string for tooling (`safezone.config.v1`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    /// Preset to start from: `default` or `advisory`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<String>,

    /// Safe radius in meters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub threshold_m: Option<f64>,

    /// Severity of hazard findings: `error` (fails the check) or `warning`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub severity: Option<String>,

    /// How many findings to emit before truncating the list.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_findings: Option<u32>,
}
