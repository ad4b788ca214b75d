use crate::fingerprint::fingerprint_for_report;
use crate::model::Scenario;
use crate::policy::EffectiveConfig;
use crate::proximity::{Hazard, ProximityEvaluator};
use crate::report::{DomainReport, SeverityCounts};
use safezone_types::{Finding, GeoPoint, SafezoneData, Severity, Verdict, ids};
use serde_json::json;

pub fn evaluate(scenario: &Scenario, cfg: &EffectiveConfig) -> DomainReport {
    let evaluator = ProximityEvaluator::new(cfg.threshold);
    let reports = scenario.reports.as_slice();

    let mut data = SafezoneData {
        profile: cfg.profile.clone(),
        threshold_m: cfg.threshold.meters(),
        reference: scenario.reference,
        reports_scanned: reports.len() as u32,
        ..SafezoneData::default()
    };

    let Some(reference) = scenario.reference else {
        return DomainReport {
            verdict: Verdict::Skip,
            safe: None,
            findings: Vec::new(),
            data,
            counts: SeverityCounts::default(),
        };
    };

    let mut hazards: Vec<Hazard> = evaluator.hazards(reference, reports).collect();

    // Deterministic ordering before truncation: closest first.
    hazards.sort_by(|a, b| {
        a.distance_m
            .total_cmp(&b.distance_m)
            .then(a.index.cmp(&b.index))
    });

    let total = hazards.len();
    let safe = total == 0;

    let mut truncated_reason: Option<String> = None;
    if hazards.len() > cfg.max_findings {
        hazards.truncate(cfg.max_findings);
        truncated_reason = Some(format!(
            "findings truncated to max_findings={}",
            cfg.max_findings
        ));
    }

    let findings: Vec<Finding> = hazards
        .iter()
        .map(|h| hazard_finding(reference, h, cfg))
        .collect();

    data.hazards_total = total as u32;
    data.hazards_emitted = findings.len() as u32;
    data.nearest_distance_m = evaluator.nearest(reference, reports).map(|(_, d)| d);
    data.truncated_reason = truncated_reason;

    DomainReport {
        verdict: compute_verdict(safe, cfg.severity),
        safe: Some(safe),
        counts: SeverityCounts::from_findings(&findings),
        findings,
        data,
    }
}

fn compute_verdict(safe: bool, severity: Severity) -> Verdict {
    if safe {
        return Verdict::Safe;
    }
    match severity {
        Severity::Error => Verdict::Unsafe,
        Severity::Warning => Verdict::Warn,
    }
}

fn hazard_finding(reference: GeoPoint, hazard: &Hazard, cfg: &EffectiveConfig) -> Finding {
    let threshold_m = cfg.threshold.meters();
    let (code, message) = if hazard.on_boundary(cfg.threshold) {
        (
            ids::CODE_REPORT_ON_BOUNDARY,
            format!(
                "report #{} at {} lies exactly on the {} m safe radius",
                hazard.index, hazard.point, threshold_m
            ),
        )
    } else {
        (
            ids::CODE_REPORT_WITHIN_RADIUS,
            format!(
                "report #{} at {} is {:.1} m away, inside the {} m safe radius",
                hazard.index, hazard.point, hazard.distance_m, threshold_m
            ),
        )
    };

    Finding {
        severity: cfg.severity,
        check_id: ids::CHECK_PROXIMITY_SAFE_RADIUS.to_string(),
        code: code.to_string(),
        message,
        report_index: Some(hazard.index as u32),
        location: Some(hazard.point),
        distance_m: Some(hazard.distance_m),
        help: Some(format!(
            "Keep more than {threshold_m} m between the reference position and every report."
        )),
        fingerprint: Some(fingerprint_for_report(
            ids::CHECK_PROXIMITY_SAFE_RADIUS,
            code,
            hazard.point,
        )),
        data: json!({
            "reference": { "lat": reference.lat, "lon": reference.lon },
            "threshold_m": threshold_m,
        }),
    }
}
