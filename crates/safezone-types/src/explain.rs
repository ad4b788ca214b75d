//! Explain registry for checks and codes.
//!
//! Maps check IDs and codes to human-readable explanations with remediation guidance.

use crate::ids;

/// Explanation entry for a check or code.
#[derive(Debug, Clone)]
pub struct Explanation {
    /// Short description of the check/code.
    pub title: &'static str,
    /// What the check does and why it exists.
    pub description: &'static str,
    /// What to do about a finding.
    pub remediation: &'static str,
    /// Before/after scenario examples.
    pub examples: ExamplePair,
}

/// Before and after scenario examples.
#[derive(Debug, Clone)]
pub struct ExamplePair {
    /// Scenario that produces a finding.
    pub before: &'static str,
    /// Scenario that evaluates as safe.
    pub after: &'static str,
}

/// Look up an explanation by check_id or code.
///
/// Returns `None` if the identifier is not recognized.
pub fn lookup_explanation(identifier: &str) -> Option<Explanation> {
    match identifier {
        // Check IDs
        ids::CHECK_PROXIMITY_SAFE_RADIUS => Some(explain_safe_radius()),
        ids::CHECK_TOOL_RUNTIME => Some(explain_tool_runtime()),

        // Codes
        ids::CODE_REPORT_WITHIN_RADIUS => Some(explain_report_within_radius()),
        ids::CODE_REPORT_ON_BOUNDARY => Some(explain_report_on_boundary()),
        ids::CODE_RUNTIME_ERROR => Some(explain_runtime_error()),

        _ => None,
    }
}

/// List all known check IDs.
pub fn all_check_ids() -> &'static [&'static str] {
    &[ids::CHECK_PROXIMITY_SAFE_RADIUS, ids::CHECK_TOOL_RUNTIME]
}

/// List all known codes.
pub fn all_codes() -> &'static [&'static str] {
    &[
        ids::CODE_REPORT_WITHIN_RADIUS,
        ids::CODE_REPORT_ON_BOUNDARY,
        ids::CODE_RUNTIME_ERROR,
    ]
}

// --- Check-level explanations ---

fn explain_safe_radius() -> Explanation {
    Explanation {
        title: "Safe Radius",
        description: "\
Checks that no reported incident lies within the safe radius around the reference position.

The distance between the reference position and each report is the great-circle
(haversine) distance on a spherical earth of radius 6 371 000 m. The position is safe
only when every report is strictly farther away than the configured threshold
(`threshold_m`, 150 m by default). A report exactly on the circle counts as inside.

An empty report list is always safe.",
        remediation: "\
Move away from the reported incidents until the nearest one is farther than the
threshold, or review the reports listed in the findings.

The threshold can be tuned in safezone.toml:

    threshold_m = 200",
        examples: ExamplePair {
            before: r#"{
  "reference": { "lat": 47.1780, "lon": -1.4464 },
  "reports": [ { "lat": 47.17835, "lon": -1.44639 } ]
}"#,
            after: r#"{
  "reference": { "lat": 47.1780, "lon": -1.4464 },
  "reports": [ { "lat": 47.1699, "lon": -1.4651 } ]
}"#,
        },
    }
}

fn explain_tool_runtime() -> Explanation {
    Explanation {
        title: "Tool Runtime",
        description: "\
Emitted when safezone could not complete an evaluation: unreadable or malformed scenario
files, invalid coordinates, or an invalid configuration.",
        remediation: "\
Read the finding message for the underlying error. Coordinates must be finite, with
latitude in [-90, 90] and longitude in [-180, 180].",
        examples: ExamplePair {
            before: r#"{ "reference": { "lat": 123.0, "lon": 0.0 }, "reports": [] }"#,
            after: r#"{ "reference": { "lat": 12.3, "lon": 0.0 }, "reports": [] }"#,
        },
    }
}

// --- Code-level explanations ---

fn explain_report_within_radius() -> Explanation {
    Explanation {
        title: "Report Within Radius",
        description: "\
A reported incident is closer to the reference position than the safe threshold.

The finding carries the report index, its coordinates, and the measured distance.",
        remediation: "\
Treat the area as unsafe. The safe-area circle is drawn red while any such finding exists.",
        examples: ExamplePair {
            before: r#"{
  "reference": { "lat": 0.0, "lon": 0.0 },
  "reports": [ { "lat": 0.0, "lon": 0.001 } ]
}"#,
            after: r#"{
  "reference": { "lat": 0.0, "lon": 0.0 },
  "reports": [ { "lat": 0.0, "lon": 0.01 } ]
}"#,
        },
    }
}

fn explain_report_on_boundary() -> Explanation {
    Explanation {
        title: "Report On Boundary",
        description: "\
A reported incident lies exactly at the threshold distance.

Safety requires every report to be strictly farther than the threshold, so a report on
the boundary makes the position unsafe.",
        remediation: "\
Treat the area as unsafe, exactly as for `report_within_radius`.",
        examples: ExamplePair {
            before: r#"# safezone.toml: report measured at 150.0 m
threshold_m = 150"#,
            after: r#"# safezone.toml: report measured at 150.0 m
threshold_m = 149.5"#,
        },
    }
}

fn explain_runtime_error() -> Explanation {
    Explanation {
        title: "Runtime Error",
        description: "\
The evaluation did not run. The report carries a single finding with the error chain.",
        remediation: "\
Fix the input named in the message and run the check again.",
        examples: ExamplePair {
            before: r#"{ "reference": { "lat": "north", "lon": 0.0 } }"#,
            after: r#"{ "reference": { "lat": 10.0, "lon": 0.0 } }"#,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_listed_identifier_has_an_explanation() {
        for id in all_check_ids().iter().chain(all_codes()) {
            assert!(lookup_explanation(id).is_some(), "missing explanation for {id}");
        }
    }

    #[test]
    fn unknown_identifier_is_none() {
        assert!(lookup_explanation("proximity.nope").is_none());
    }
}
