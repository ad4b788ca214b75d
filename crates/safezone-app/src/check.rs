//! The `check` use case: resolve settings, evaluate the scenario, produce a report.

use anyhow::Context;
use safezone_settings::{Overrides, ResolvedConfig, SafezoneConfigV1};
use safezone_types::{ReportEnvelope, SCHEMA_REPORT_V1, SafezoneReport, ToolMeta, Verdict};
use time::OffsetDateTime;

use crate::scenario::parse_scenario_json;

/// Input for the check use case.
#[derive(Clone, Debug)]
pub struct CheckInput<'a> {
    /// Scenario JSON (`safezone.scenario.v1`).
    pub scenario_text: &'a str,
    /// Config file contents (empty string if not found).
    pub config_text: &'a str,
    /// CLI overrides.
    pub overrides: Overrides,
}

/// Output from the check use case.
#[derive(Clone, Debug)]
pub struct CheckOutput {
    pub report: SafezoneReport,
    /// The boolean the safe-area display keys off; `None` without a reference position.
    pub safe: Option<bool>,
    pub resolved_config: ResolvedConfig,
}

/// Parse and resolve config text. Empty text means defaults.
pub fn resolve_settings(
    config_text: &str,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    let cfg = if config_text.trim().is_empty() {
        SafezoneConfigV1::default()
    } else {
        safezone_settings::parse_config_toml(config_text).context("parse config")?
    };

    safezone_settings::resolve_config(cfg, overrides).context("resolve config")
}

/// Run the check use case: parse config, parse scenario, evaluate, produce report.
pub fn run_check(input: CheckInput<'_>) -> anyhow::Result<CheckOutput> {
    let started_at = OffsetDateTime::now_utc();

    let resolved = resolve_settings(input.config_text, input.overrides.clone())?;
    let scenario = parse_scenario_json(input.scenario_text)?;

    tracing::debug!(
        profile = %resolved.effective.profile,
        threshold_m = resolved.effective.threshold.meters(),
        reports = scenario.reports.len(),
        has_reference = scenario.reference.is_some(),
        "evaluating scenario"
    );

    let domain_report = safezone_domain::evaluate(&scenario, &resolved.effective);

    tracing::debug!(
        verdict = ?domain_report.verdict,
        hazards = domain_report.data.hazards_total,
        errors = domain_report.counts.error,
        warnings = domain_report.counts.warning,
        "evaluation finished"
    );

    let report = ReportEnvelope {
        schema: SCHEMA_REPORT_V1.to_string(),
        tool: ToolMeta {
            name: "safezone".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        started_at,
        finished_at: OffsetDateTime::now_utc(),
        verdict: domain_report.verdict,
        findings: domain_report.findings,
        data: domain_report.data,
    };

    Ok(CheckOutput {
        report,
        safe: domain_report.safe,
        resolved_config: resolved,
    })
}

/// Map verdict to exit code: 0 = safe/warn/skip, 2 = unsafe.
pub fn verdict_exit_code(verdict: Verdict) -> i32 {
    match verdict {
        Verdict::Safe => 0,
        Verdict::Warn => 0,
        Verdict::Skip => 0,
        Verdict::Unsafe => 2,
    }
}
