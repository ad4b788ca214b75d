//! Pure proximity evaluation (no IO).
//!
//! Input: a reference position and the reports around it, constructed elsewhere.
//! Output: a safety flag, hazard findings, verdict and summary data.

#![forbid(unsafe_code)]

pub mod geo;
pub mod model;
pub mod monitor;
pub mod policy;
pub mod proximity;
pub mod report;

mod engine;
mod fingerprint;

#[cfg(test)]
mod proptest;
#[cfg(test)]
mod test_support;

pub use engine::evaluate;
pub use geo::{CoordinateError, EARTH_RADIUS_M, haversine_distance_m, validate_point};
pub use model::{ReportSet, SafetyThreshold, Scenario, ScenarioError, ThresholdError};
pub use monitor::{SafetyMonitor, SafetyStatus};
pub use proximity::{Hazard, ProximityEvaluator, is_safe};
