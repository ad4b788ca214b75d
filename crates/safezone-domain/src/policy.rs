use crate::model::SafetyThreshold;
use safezone_types::Severity;

#[derive(Clone, Debug, PartialEq)]
pub struct EffectiveConfig {
    pub profile: String,
    pub threshold: SafetyThreshold,
    /// Severity attached to every hazard finding.
    pub severity: Severity,
    pub max_findings: usize,
}

impl Default for EffectiveConfig {
    fn default() -> Self {
        Self {
            profile: "default".to_string(),
            threshold: SafetyThreshold::DEFAULT,
            severity: Severity::Error,
            max_findings: 200,
        }
    }
}
