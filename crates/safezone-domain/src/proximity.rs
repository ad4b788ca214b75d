//! The safe-area check itself.

use crate::geo::haversine_distance_m;
use crate::model::SafetyThreshold;
use safezone_types::GeoPoint;

/// True iff every report is strictly farther than `threshold` from `reference`.
///
/// Vacuously true for no reports. A report exactly at the threshold distance is a hazard,
/// and so is one whose distance is NaN.
pub fn is_safe(reference: GeoPoint, reports: &[GeoPoint], threshold: SafetyThreshold) -> bool {
    reports
        .iter()
        .all(|p| haversine_distance_m(reference, *p) > threshold.meters())
}

/// A report that is not strictly outside the safe radius.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hazard {
    pub index: usize,
    pub point: GeoPoint,
    pub distance_m: f64,
}

impl Hazard {
    /// Exactly on the circle, as opposed to inside it.
    pub fn on_boundary(&self, threshold: SafetyThreshold) -> bool {
        self.distance_m == threshold.meters()
    }
}

/// Stateless evaluator bound to one threshold.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ProximityEvaluator {
    threshold: SafetyThreshold,
}

impl ProximityEvaluator {
    pub const fn new(threshold: SafetyThreshold) -> Self {
        Self { threshold }
    }

    pub const fn threshold(&self) -> SafetyThreshold {
        self.threshold
    }

    pub fn is_safe(&self, reference: GeoPoint, reports: &[GeoPoint]) -> bool {
        is_safe(reference, reports, self.threshold)
    }

    /// Reports inside (or on) the safe radius, in input order.
    pub fn hazards<'a>(
        &self,
        reference: GeoPoint,
        reports: &'a [GeoPoint],
    ) -> impl Iterator<Item = Hazard> + 'a {
        let threshold = self.threshold.meters();
        reports.iter().enumerate().filter_map(move |(index, p)| {
            let distance_m = haversine_distance_m(reference, *p);
            if distance_m > threshold {
                return None;
            }
            Some(Hazard {
                index,
                point: *p,
                distance_m,
            })
        })
    }

    /// Closest report and its distance; `None` when there are no reports.
    pub fn nearest(&self, reference: GeoPoint, reports: &[GeoPoint]) -> Option<(usize, f64)> {
        reports
            .iter()
            .map(|p| haversine_distance_m(reference, *p))
            .enumerate()
            .min_by(|a, b| a.1.total_cmp(&b.1))
    }
}
