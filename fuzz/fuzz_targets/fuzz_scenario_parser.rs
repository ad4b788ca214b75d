//! Fuzz target for scenario JSON parsing and evaluation.
//!
//! Goal: parsing and evaluating a scenario should **never panic** on any input.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_scenario_parser
//! ```

#![no_main]

use libfuzzer_sys::fuzz_target;
use safezone_domain::policy::EffectiveConfig;

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        if let Ok(scenario) = safezone_app::parse_scenario_json(text) {
            let report = safezone_domain::evaluate(&scenario, &EffectiveConfig::default());
            assert!(report.findings.len() <= scenario.reports.len());
        }
    }
});
