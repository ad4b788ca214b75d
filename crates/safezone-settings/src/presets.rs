use safezone_domain::SafetyThreshold;
use safezone_domain::policy::EffectiveConfig;
use safezone_types::Severity;

/// Preset profiles are opinionated defaults.
///
/// Keep these small and readable. Anything site-specific should go into repo config.
pub fn preset(profile: &str) -> EffectiveConfig {
    match profile {
        "advisory" => advisory_profile(),
        // default
        _ => default_profile(),
    }
}

fn default_profile() -> EffectiveConfig {
    EffectiveConfig {
        profile: "default".to_string(),
        threshold: SafetyThreshold::DEFAULT,
        severity: Severity::Error,
        max_findings: 200,
    }
}

fn advisory_profile() -> EffectiveConfig {
    // Same radius, but hazards only warn: useful while reports are still being vetted.
    EffectiveConfig {
        profile: "advisory".to_string(),
        threshold: SafetyThreshold::DEFAULT,
        severity: Severity::Warning,
        max_findings: 200,
    }
}
