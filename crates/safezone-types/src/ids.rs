//! Stable identifiers for checks and finding codes.
//!
//! `check_id` is a dotted namespace. `code` is a short snake_case discriminator.

// Checks
pub const CHECK_PROXIMITY_SAFE_RADIUS: &str = "proximity.safe_radius";

// Codes: proximity.safe_radius
pub const CODE_REPORT_WITHIN_RADIUS: &str = "report_within_radius";
pub const CODE_REPORT_ON_BOUNDARY: &str = "report_on_boundary";

// Tool-level
pub const CHECK_TOOL_RUNTIME: &str = "tool.runtime";
pub const CODE_RUNTIME_ERROR: &str = "runtime_error";
