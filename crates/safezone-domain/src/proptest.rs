//! Property-based tests for the domain crate.
//!
//! These tests use proptest to verify invariants around:
//! - haversine distance (symmetry, identity, bounds)
//! - the safe-radius contract of `is_safe`
//! - engine determinism, ordering and truncation

use crate::engine::evaluate;
use crate::geo::{EARTH_RADIUS_M, haversine_distance_m};
use crate::model::{ReportSet, SafetyThreshold, Scenario};
use crate::policy::EffectiveConfig;
use crate::proximity::is_safe;
use proptest::prelude::*;
use safezone_types::{GeoPoint, Verdict};

// ============================================================================
// Strategies for generating arbitrary values
// ============================================================================

/// Any valid coordinate on the globe.
fn arb_point() -> impl Strategy<Value = GeoPoint> {
    (-90.0f64..=90.0, -180.0f64..=180.0).prop_map(|(lat, lon)| GeoPoint::new(lat, lon))
}

/// Points within roughly a kilometer of a city-scale anchor, so thresholds matter.
fn arb_local_point() -> impl Strategy<Value = GeoPoint> {
    (-0.01f64..=0.01, -0.01f64..=0.01)
        .prop_map(|(dlat, dlon)| GeoPoint::new(47.178 + dlat, -1.4464 + dlon))
}

fn arb_threshold() -> impl Strategy<Value = SafetyThreshold> {
    prop_oneof![
        Just(0.0),
        Just(150.0),
        0.0f64..5_000.0,
    ]
    .prop_map(|m| SafetyThreshold::new(m).expect("strategy yields valid thresholds"))
}

fn config(threshold: SafetyThreshold, max_findings: usize) -> EffectiveConfig {
    EffectiveConfig {
        profile: "test".to_string(),
        threshold,
        max_findings,
        ..EffectiveConfig::default()
    }
}

// ============================================================================
// Property tests: distance
// ============================================================================

proptest! {
    /// Distance does not depend on argument order.
    #[test]
    fn distance_is_symmetric(a in arb_point(), b in arb_point()) {
        let ab = haversine_distance_m(a, b);
        let ba = haversine_distance_m(b, a);
        prop_assert!((ab - ba).abs() <= 1e-6, "ab={} ba={}", ab, ba);
    }

    /// Distance from a point to itself is exactly zero.
    #[test]
    fn distance_to_self_is_zero(a in arb_point()) {
        prop_assert_eq!(haversine_distance_m(a, a), 0.0);
    }

    /// No two points are farther apart than half the circumference.
    #[test]
    fn distance_is_bounded(a in arb_point(), b in arb_point()) {
        let d = haversine_distance_m(a, b);
        prop_assert!(d >= 0.0);
        prop_assert!(d <= std::f64::consts::PI * EARTH_RADIUS_M + 1e-6);
    }
}

// ============================================================================
// Property tests: safe-radius contract
// ============================================================================

proptest! {
    /// An empty report set is safe for every threshold.
    #[test]
    fn empty_reports_are_always_safe(r in arb_point(), t in arb_threshold()) {
        prop_assert!(is_safe(r, &[], t));
    }

    /// A report at the reference position is always a hazard.
    #[test]
    fn report_at_reference_is_never_safe(
        r in arb_point(),
        others in prop::collection::vec(arb_point(), 0..8),
        t in arb_threshold(),
    ) {
        let mut reports = others;
        reports.push(r);
        prop_assert!(!is_safe(r, &reports, t));
    }

    /// With a single report, safety is exactly `distance > threshold`.
    #[test]
    fn single_report_matches_strict_comparison(
        r in arb_local_point(),
        p in arb_local_point(),
        t in arb_threshold(),
    ) {
        let d = haversine_distance_m(r, p);
        prop_assert_eq!(is_safe(r, &[p], t), d > t.meters());
    }

    /// The exact threshold distance is on the unsafe side.
    #[test]
    fn boundary_is_unsafe(r in arb_local_point(), p in arb_local_point()) {
        let d = haversine_distance_m(r, p);
        let t = SafetyThreshold::new(d).unwrap();
        prop_assert!(!is_safe(r, &[p], t));
    }

    /// Adding a report that is also far away never flips a safe position.
    #[test]
    fn adding_far_report_keeps_safe(
        r in arb_local_point(),
        reports in prop::collection::vec(arb_local_point(), 0..10),
        extra in arb_local_point(),
        t in arb_threshold(),
    ) {
        let all_far = reports.iter().chain(std::iter::once(&extra))
            .all(|p| haversine_distance_m(r, *p) > t.meters());
        prop_assume!(all_far);

        prop_assert!(is_safe(r, &reports, t));
        let mut grown = reports.clone();
        grown.push(extra);
        prop_assert!(is_safe(r, &grown, t));
    }

    /// Adding a report can only make a position less safe.
    #[test]
    fn safety_is_monotone_in_reports(
        r in arb_local_point(),
        reports in prop::collection::vec(arb_local_point(), 0..10),
        extra in arb_local_point(),
        t in arb_threshold(),
    ) {
        let mut grown = reports.clone();
        grown.push(extra);
        if is_safe(r, &grown, t) {
            prop_assert!(is_safe(r, &reports, t));
        }
    }
}

// ============================================================================
// Property tests: engine
// ============================================================================

proptest! {
    /// The engine's safe flag agrees with the bare evaluator.
    #[test]
    fn engine_agrees_with_is_safe(
        r in arb_local_point(),
        reports in prop::collection::vec(arb_local_point(), 0..20),
        t in arb_threshold(),
    ) {
        let scenario = Scenario::new(Some(r), ReportSet::from(reports.clone()));
        let report = evaluate(&scenario, &config(t, 200));
        let expected = is_safe(r, &reports, t);

        prop_assert_eq!(report.safe, Some(expected));
        prop_assert_eq!(report.verdict == Verdict::Safe, expected);
        prop_assert_eq!(report.data.hazards_total as usize, report.findings.len());
    }

    /// Findings are ordered by distance, and the order does not depend on input order.
    #[test]
    fn findings_ordering_is_deterministic(
        r in arb_local_point(),
        reports in prop::collection::vec(arb_local_point(), 0..20),
    ) {
        use rand::SeedableRng;
        use rand::seq::SliceRandom;

        let cfg = config(SafetyThreshold::new(800.0).unwrap(), 200);
        let mut rng = rand::rngs::StdRng::seed_from_u64(42);
        let mut shuffled = reports.clone();
        shuffled.shuffle(&mut rng);

        let a = evaluate(&Scenario::new(Some(r), ReportSet::from(reports)), &cfg);
        let b = evaluate(&Scenario::new(Some(r), ReportSet::from(shuffled)), &cfg);

        let distances = |rep: &crate::report::DomainReport| -> Vec<f64> {
            rep.findings.iter().map(|f| f.distance_m.unwrap_or(f64::NAN)).collect()
        };
        let da = distances(&a);
        let db = distances(&b);

        prop_assert_eq!(&da, &db);
        prop_assert!(da.windows(2).all(|w| w[0] <= w[1]), "not sorted: {:?}", da);
    }

    /// Totals are computed before truncation; emitted never exceeds the cap.
    #[test]
    fn truncation_respects_max_findings(
        r in arb_local_point(),
        reports in prop::collection::vec(arb_local_point(), 0..30),
        max in 0usize..10,
    ) {
        let cfg = config(SafetyThreshold::new(5_000.0).unwrap(), max);
        let scenario = Scenario::new(Some(r), ReportSet::from(reports.clone()));
        let report = evaluate(&scenario, &cfg);

        prop_assert_eq!(report.data.hazards_total as usize, reports.len());
        prop_assert_eq!(report.findings.len(), reports.len().min(max));
        prop_assert_eq!(report.data.truncated_reason.is_some(), reports.len() > max);
    }
}
