//! Live safety state: a position that moves and a report log that grows.
//!
//! Every mutation re-runs the pure evaluator over the current state, so the status is
//! always a function of `(position, reports, threshold)` and nothing else.

use crate::model::{ReportSet, SafetyThreshold, Scenario};
use crate::proximity::ProximityEvaluator;
use safezone_types::GeoPoint;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SafetyStatus {
    /// No position fix yet; nothing to draw.
    Unknown,
    Safe,
    Unsafe,
}

impl SafetyStatus {
    pub fn is_safe(self) -> Option<bool> {
        match self {
            SafetyStatus::Unknown => None,
            SafetyStatus::Safe => Some(true),
            SafetyStatus::Unsafe => Some(false),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SafetyStatus::Unknown => "unknown",
            SafetyStatus::Safe => "safe",
            SafetyStatus::Unsafe => "unsafe",
        }
    }
}

#[derive(Clone, Debug)]
pub struct SafetyMonitor {
    position: Option<GeoPoint>,
    reports: ReportSet,
    evaluator: ProximityEvaluator,
}

impl SafetyMonitor {
    pub fn new(threshold: SafetyThreshold) -> Self {
        Self::with_reports(threshold, ReportSet::new())
    }

    /// Start with reports that already exist before the first position fix.
    pub fn with_reports(threshold: SafetyThreshold, reports: ReportSet) -> Self {
        Self {
            position: None,
            reports,
            evaluator: ProximityEvaluator::new(threshold),
        }
    }

    pub fn update_position(&mut self, position: GeoPoint) -> SafetyStatus {
        self.position = Some(position);
        self.status()
    }

    pub fn add_report(&mut self, report: GeoPoint) -> SafetyStatus {
        self.reports.push(report);
        self.status()
    }

    pub fn status(&self) -> SafetyStatus {
        match self.position {
            None => SafetyStatus::Unknown,
            Some(p) if self.evaluator.is_safe(p, self.reports.as_slice()) => SafetyStatus::Safe,
            Some(_) => SafetyStatus::Unsafe,
        }
    }

    pub fn position(&self) -> Option<GeoPoint> {
        self.position
    }

    pub fn reports(&self) -> &ReportSet {
        &self.reports
    }

    pub fn threshold(&self) -> SafetyThreshold {
        self.evaluator.threshold()
    }

    /// Snapshot of the current state for the full engine or the renderers.
    pub fn scenario(&self) -> Scenario {
        Scenario::new(self.position, self.reports.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{REFERENCE, near_reference};

    #[test]
    fn unknown_until_first_fix() {
        let mut m = SafetyMonitor::new(SafetyThreshold::DEFAULT);
        assert_eq!(m.add_report(REFERENCE), SafetyStatus::Unknown);
        assert_eq!(m.status().is_safe(), None);
    }

    #[test]
    fn status_follows_position_and_reports() {
        let mut m = SafetyMonitor::new(SafetyThreshold::DEFAULT);
        assert_eq!(m.update_position(REFERENCE), SafetyStatus::Safe);
        assert_eq!(
            m.add_report(GeoPoint::new(47.1699, -1.4651)),
            SafetyStatus::Safe
        );
        assert_eq!(m.add_report(near_reference()), SafetyStatus::Unsafe);

        // Walking away from every report makes it safe again.
        assert_eq!(
            m.update_position(GeoPoint::new(47.19, -1.42)),
            SafetyStatus::Safe
        );
        assert_eq!(m.reports().len(), 2);
    }

    #[test]
    fn seeded_reports_count_from_the_first_fix() {
        let seeds = ReportSet::from(vec![near_reference()]);
        let mut m = SafetyMonitor::with_reports(SafetyThreshold::DEFAULT, seeds);
        assert_eq!(m.status(), SafetyStatus::Unknown);
        assert_eq!(m.update_position(REFERENCE), SafetyStatus::Unsafe);
    }

    #[test]
    fn scenario_snapshot_matches_state() {
        let mut m = SafetyMonitor::new(SafetyThreshold::DEFAULT);
        m.update_position(REFERENCE);
        m.add_report(near_reference());
        let s = m.scenario();
        assert_eq!(s.reference, Some(REFERENCE));
        assert_eq!(s.reports.as_slice(), &[near_reference()]);
    }
}
