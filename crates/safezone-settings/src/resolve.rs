use crate::{model::SafezoneConfigV1, presets};
use anyhow::Context;
use safezone_domain::SafetyThreshold;
use safezone_domain::policy::EffectiveConfig;
use safezone_types::Severity;

#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub profile: Option<String>,
    pub threshold_m: Option<f64>,
    pub max_findings: Option<u32>,
}

#[derive(Clone, Debug)]
pub struct ResolvedConfig {
    pub effective: EffectiveConfig,
}

pub fn resolve_config(
    cfg: SafezoneConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    let profile = overrides
        .profile
        .clone()
        .or(cfg.profile.clone())
        .unwrap_or_else(|| "default".to_string());

    let mut effective = presets::preset(&profile);

    if let Some(meters) = overrides.threshold_m.or(cfg.threshold_m) {
        effective.threshold = SafetyThreshold::new(meters)
            .with_context(|| format!("invalid threshold_m: {meters}"))?;
    }

    if let Some(sev) = cfg.severity.as_deref() {
        effective.severity = parse_severity(sev)?;
    }

    if let Some(mf) = overrides.max_findings.or(cfg.max_findings) {
        effective.max_findings = mf as usize;
    }

    Ok(ResolvedConfig { effective })
}

fn parse_severity(v: &str) -> anyhow::Result<Severity> {
    match v {
        "warning" | "warn" => Ok(Severity::Warning),
        "error" => Ok(Severity::Error),
        other => anyhow::bail!("unknown severity: {other} (expected warning|error)"),
    }
}
