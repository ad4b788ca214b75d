use safezone_types::{Finding, SafezoneData, Severity, Verdict};

/// Emitted findings per severity (after truncation).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SeverityCounts {
    pub warning: u32,
    pub error: u32,
}

impl SeverityCounts {
    pub fn from_findings(findings: &[Finding]) -> Self {
        let error = findings
            .iter()
            .filter(|f| f.severity == Severity::Error)
            .count() as u32;
        Self {
            warning: findings.len() as u32 - error,
            error,
        }
    }
}

/// Everything one evaluation produced, before it is wrapped in a report envelope.
#[derive(Clone, Debug)]
pub struct DomainReport {
    pub verdict: Verdict,
    /// `None` when there was no reference position to evaluate.
    pub safe: Option<bool>,
    pub findings: Vec<Finding>,
    pub data: SafezoneData,
    pub counts: SeverityCounts,
}
