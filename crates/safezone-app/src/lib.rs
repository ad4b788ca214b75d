//! Use case orchestration for safezone.
//!
//! This crate provides the application layer: use cases that coordinate the settings,
//! domain, and render layers. It is intentionally thin and delegates heavy lifting to
//! the appropriate layers.
//!
//! The CLI crate depends on this; it only handles argument parsing and I/O.

#![forbid(unsafe_code)]

mod check;
mod explain;
mod render;
mod report;
mod scenario;
mod watch;

pub use check::{CheckInput, CheckOutput, resolve_settings, run_check, verdict_exit_code};
pub use explain::{ExplainOutput, format_explanation, format_not_found, run_explain};
pub use render::{GeojsonInput, overlay_for, render_markdown, run_geojson};
pub use report::{parse_report_json, runtime_error_report, serialize_report, to_renderable};
pub use scenario::parse_scenario_json;
pub use watch::{DEMO_INCIDENTS, WatchEvent, WatchSession, WatchSummary, WatchUpdate, run_watch};
