//! Fuzz target for the safe-radius evaluator with arbitrary coordinates.
//!
//! Goal: `is_safe` never panics, and agrees with a direct per-report comparison
//! even for NaN, infinite, and out-of-range inputs.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_proximity
//! ```

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use safezone_domain::{SafetyThreshold, haversine_distance_m, is_safe};
use safezone_types::GeoPoint;

#[derive(Arbitrary, Debug)]
struct Input {
    reference: (f64, f64),
    reports: Vec<(f64, f64)>,
    threshold_m: f64,
}

fuzz_target!(|input: Input| {
    let Ok(threshold) = SafetyThreshold::new(input.threshold_m) else {
        return;
    };
    let reference = GeoPoint::from(input.reference);
    let reports: Vec<GeoPoint> = input.reports.into_iter().map(GeoPoint::from).collect();

    let expected = reports
        .iter()
        .all(|p| haversine_distance_m(reference, *p) > threshold.meters());
    assert_eq!(is_safe(reference, &reports, threshold), expected);
});
