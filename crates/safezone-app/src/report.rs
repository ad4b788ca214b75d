use anyhow::Context;
use safezone_render::{
    RenderableData, RenderableFinding, RenderableReport, RenderableSeverity,
    RenderableVerdictStatus,
};
use safezone_types::{
    Finding, ReportEnvelope, SCHEMA_REPORT_V1, SafezoneData, SafezoneReport, Severity, ToolMeta,
    Verdict, ids,
};
use time::OffsetDateTime;

pub fn parse_report_json(text: &str) -> anyhow::Result<SafezoneReport> {
    let value: serde_json::Value = serde_json::from_str(text).context("parse report json")?;

    let schema = value
        .get("schema")
        .and_then(|v| v.as_str())
        .unwrap_or_default()
        .to_string();

    if schema != SCHEMA_REPORT_V1 {
        anyhow::bail!("unknown report schema: {schema} (expected {SCHEMA_REPORT_V1})");
    }

    serde_json::from_value(value).context("parse safezone v1 report")
}

pub fn serialize_report(report: &SafezoneReport) -> anyhow::Result<Vec<u8>> {
    serde_json::to_vec_pretty(report).context("serialize report")
}

/// Report emitted when the evaluation itself could not run.
pub fn runtime_error_report(message: &str) -> SafezoneReport {
    let now = OffsetDateTime::now_utc();
    ReportEnvelope {
        schema: SCHEMA_REPORT_V1.to_string(),
        tool: ToolMeta {
            name: "safezone".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        started_at: now,
        finished_at: now,
        verdict: Verdict::Unsafe,
        findings: vec![Finding {
            severity: Severity::Error,
            check_id: ids::CHECK_TOOL_RUNTIME.to_string(),
            code: ids::CODE_RUNTIME_ERROR.to_string(),
            message: message.to_string(),
            report_index: None,
            location: None,
            distance_m: None,
            help: Some("Fix the input named in the message and run the check again.".to_string()),
            fingerprint: None,
            data: serde_json::Value::Null,
        }],
        data: SafezoneData {
            profile: "unknown".to_string(),
            ..SafezoneData::default()
        },
    }
}

pub fn to_renderable(report: &SafezoneReport) -> RenderableReport {
    RenderableReport {
        verdict: match report.verdict {
            Verdict::Safe => RenderableVerdictStatus::Safe,
            Verdict::Warn => RenderableVerdictStatus::Warn,
            Verdict::Unsafe => RenderableVerdictStatus::Unsafe,
            Verdict::Skip => RenderableVerdictStatus::Skip,
        },
        findings: report.findings.iter().map(renderable_finding).collect(),
        data: RenderableData {
            threshold_m: report.data.threshold_m,
            reports_scanned: report.data.reports_scanned,
            hazards_emitted: report.data.hazards_emitted,
            hazards_total: report.data.hazards_total,
            nearest_distance_m: report.data.nearest_distance_m,
            truncated_reason: report.data.truncated_reason.clone(),
        },
    }
}

fn renderable_finding(f: &Finding) -> RenderableFinding {
    RenderableFinding {
        severity: match f.severity {
            Severity::Warning => RenderableSeverity::Warning,
            Severity::Error => RenderableSeverity::Error,
        },
        check_id: Some(f.check_id.clone()),
        code: f.code.clone(),
        message: f.message.clone(),
        report_index: f.report_index,
        distance_m: f.distance_m,
        help: f.help.clone(),
    }
}
