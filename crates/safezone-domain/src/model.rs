use crate::geo::{CoordinateError, validate_point};
use safezone_types::{GeoPoint, ScenarioV1};
use std::fmt;
use thiserror::Error;

/// Distance in meters below which a report counts as a proximity hazard.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct SafetyThreshold(f64);

#[derive(Clone, Copy, Debug, PartialEq, Error)]
pub enum ThresholdError {
    #[error("threshold {0} m is not a finite number")]
    NonFinite(f64),
    #[error("threshold {0} m is negative")]
    Negative(f64),
}

impl SafetyThreshold {
    /// 150 m, the radius the safe-area circle is drawn with.
    pub const DEFAULT: SafetyThreshold = SafetyThreshold(150.0);

    pub fn new(meters: f64) -> Result<Self, ThresholdError> {
        if !meters.is_finite() {
            return Err(ThresholdError::NonFinite(meters));
        }
        if meters < 0.0 {
            return Err(ThresholdError::Negative(meters));
        }
        Ok(Self(meters))
    }

    pub const fn meters(self) -> f64 {
        self.0
    }
}

impl Default for SafetyThreshold {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for SafetyThreshold {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} m", self.0)
    }
}

/// Append-only list of reported incident positions.
///
/// Order only matters for display; evaluation treats it as a set.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ReportSet {
    points: Vec<GeoPoint>,
}

impl ReportSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a report and return its index.
    pub fn push(&mut self, point: GeoPoint) -> usize {
        self.points.push(point);
        self.points.len() - 1
    }

    pub fn as_slice(&self) -> &[GeoPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, GeoPoint> {
        self.points.iter()
    }
}

impl From<Vec<GeoPoint>> for ReportSet {
    fn from(points: Vec<GeoPoint>) -> Self {
        Self { points }
    }
}

impl FromIterator<GeoPoint> for ReportSet {
    fn from_iter<I: IntoIterator<Item = GeoPoint>>(iter: I) -> Self {
        Self {
            points: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a ReportSet {
    type Item = &'a GeoPoint;
    type IntoIter = std::slice::Iter<'a, GeoPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

/// Everything one evaluation looks at.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Scenario {
    /// `None` until a position fix exists.
    pub reference: Option<GeoPoint>,
    pub reports: ReportSet,
}

#[derive(Clone, Copy, Debug, PartialEq, Error)]
pub enum ScenarioError {
    #[error("invalid reference position")]
    Reference(#[source] CoordinateError),
    #[error("invalid report #{index}")]
    Report {
        index: usize,
        #[source]
        source: CoordinateError,
    },
}

impl Scenario {
    pub fn new(reference: Option<GeoPoint>, reports: ReportSet) -> Self {
        Self { reference, reports }
    }

    /// Build a scenario from its wire form, validating every coordinate.
    pub fn from_v1(input: ScenarioV1) -> Result<Self, ScenarioError> {
        let reference = input
            .reference
            .map(validate_point)
            .transpose()
            .map_err(ScenarioError::Reference)?;

        let reports = input
            .reports
            .into_iter()
            .enumerate()
            .map(|(index, p)| {
                validate_point(p).map_err(|source| ScenarioError::Report { index, source })
            })
            .collect::<Result<ReportSet, _>>()?;

        Ok(Self { reference, reports })
    }
}
