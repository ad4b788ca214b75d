use crate::{RenderableReport, RenderableSeverity, RenderableVerdictStatus};

pub fn render_markdown(report: &RenderableReport) -> String {
    let mut out = String::new();

    out.push_str("# Safezone report\n\n");
    let verdict = match report.verdict {
        RenderableVerdictStatus::Safe => "SAFE",
        RenderableVerdictStatus::Warn => "WARN",
        RenderableVerdictStatus::Unsafe => "UNSAFE",
        RenderableVerdictStatus::Skip => "SKIP",
    };
    out.push_str(&format!(
        "- Verdict: **{}**\n- Safe radius: {} m\n- Reports: {} scanned, {} within radius ({} listed)\n",
        verdict,
        report.data.threshold_m,
        report.data.reports_scanned,
        report.data.hazards_total,
        report.data.hazards_emitted
    ));
    if let Some(d) = report.data.nearest_distance_m {
        out.push_str(&format!("- Nearest report: {:.1} m\n", d));
    }
    out.push('\n');

    if let Some(r) = &report.data.truncated_reason {
        out.push_str(&format!("> Note: {}\n\n", r));
    }

    if report.verdict == RenderableVerdictStatus::Skip {
        out.push_str("No reference position; nothing evaluated.\n");
        return out;
    }

    if report.findings.is_empty() {
        out.push_str("No reports within the safe radius.\n");
        return out;
    }

    out.push_str("## Hazards\n\n");

    for f in &report.findings {
        let sev = match f.severity {
            RenderableSeverity::Warning => "WARN",
            RenderableSeverity::Error => "ERROR",
        };

        out.push_str(&format!(
            "- [{}] `{}` / `{}`: {}\n",
            sev,
            f.check_id.as_deref().unwrap_or(""),
            f.code,
            f.message
        ));

        if let Some(help) = &f.help {
            out.push_str(&format!("  - help: {}\n", help));
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{RenderableData, RenderableFinding};

    fn data(hazards: u32) -> RenderableData {
        RenderableData {
            threshold_m: 150.0,
            reports_scanned: 2,
            hazards_emitted: hazards,
            hazards_total: hazards,
            nearest_distance_m: Some(39.052),
            truncated_reason: None,
        }
    }

    #[test]
    fn renders_safe_report() {
        let report = RenderableReport {
            verdict: RenderableVerdictStatus::Safe,
            findings: Vec::new(),
            data: data(0),
        };
        let md = render_markdown(&report);
        assert!(md.contains("Verdict: **SAFE**"));
        assert!(md.contains("No reports within the safe radius"));
    }

    #[test]
    fn renders_skip_without_nearest() {
        let report = RenderableReport {
            verdict: RenderableVerdictStatus::Skip,
            findings: Vec::new(),
            data: RenderableData {
                nearest_distance_m: None,
                ..data(0)
            },
        };
        let md = render_markdown(&report);
        assert!(md.contains("Verdict: **SKIP**"));
        assert!(md.contains("No reference position"));
        assert!(!md.contains("Nearest report"));
    }

    #[test]
    fn renders_unsafe_report_with_truncation() {
        let report = RenderableReport {
            verdict: RenderableVerdictStatus::Unsafe,
            findings: vec![RenderableFinding {
                severity: RenderableSeverity::Error,
                check_id: Some("proximity.safe_radius".to_string()),
                code: "report_within_radius".to_string(),
                message: "report #1 at (47.178351, -1.446386) is 39.1 m away, inside the 150 m safe radius".to_string(),
                report_index: Some(1),
                distance_m: Some(39.052),
                help: Some("Keep more than 150 m between the reference position and every report.".to_string()),
            }],
            data: RenderableData {
                hazards_total: 3,
                truncated_reason: Some("findings truncated to max_findings=1".to_string()),
                ..data(1)
            },
        };

        let md = render_markdown(&report);
        insta::assert_snapshot!(md, @r"
# Safezone report

- Verdict: **UNSAFE**
- Safe radius: 150 m
- Reports: 2 scanned, 3 within radius (1 listed)
- Nearest report: 39.1 m

> Note: findings truncated to max_findings=1

## Hazards

- [ERROR] `proximity.safe_radius` / `report_within_radius`: report #1 at (47.178351, -1.446386) is 39.1 m away, inside the 150 m safe radius
  - help: Keep more than 150 m between the reference position and every report.
");
    }
}
