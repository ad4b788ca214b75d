//! The `watch` use case: replay position fixes and incident reports, one status per event.
//!
//! Input is JSON lines, one event each:
//!
//! ```text
//! {"position": {"lat": 47.178, "lon": -1.4464}}
//! {"report": {"lat": 47.1699, "lon": -1.4651}}
//! ```
//!
//! Blank lines and lines starting with `#` are ignored.

use anyhow::Context;
use safezone_domain::{
    ProximityEvaluator, ReportSet, SafetyMonitor, SafetyStatus, SafetyThreshold, validate_point,
};
use safezone_types::GeoPoint;
use serde::{Deserialize, Serialize};
use std::io::{BufRead, Write};

/// Incidents a fresh session starts with when seeded for a demo.
pub const DEMO_INCIDENTS: [GeoPoint; 2] = [
    GeoPoint::new(47.17835107557902, -1.446386025697808),
    GeoPoint::new(47.169859870861515, -1.46513612682222),
];

#[derive(Clone, Copy, Debug, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WatchEvent {
    /// A new geolocation fix for the user.
    Position(GeoPoint),
    /// A user-submitted incident location.
    Report(GeoPoint),
}

/// One output line.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct WatchUpdate {
    /// 1-based line number the event came from.
    pub line: usize,
    pub status: &'static str,
    /// Status differs from the previous event's.
    pub changed: bool,
    pub reports: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nearest_m: Option<f64>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WatchSummary {
    pub events: usize,
    pub transitions: usize,
    pub final_status: Option<&'static str>,
}

pub struct WatchSession {
    monitor: SafetyMonitor,
    last: SafetyStatus,
}

impl WatchSession {
    pub fn new(threshold: SafetyThreshold, seed: ReportSet) -> Self {
        let monitor = SafetyMonitor::with_reports(threshold, seed);
        let last = monitor.status();
        Self { monitor, last }
    }

    pub fn status(&self) -> SafetyStatus {
        self.monitor.status()
    }

    pub fn apply(&mut self, line: usize, event: WatchEvent) -> anyhow::Result<WatchUpdate> {
        let status = match event {
            WatchEvent::Position(p) => {
                let p = validate_point(p).with_context(|| format!("line {line}: position"))?;
                self.monitor.update_position(p)
            }
            WatchEvent::Report(p) => {
                let p = validate_point(p).with_context(|| format!("line {line}: report"))?;
                self.monitor.add_report(p)
            }
        };

        let changed = status != self.last;
        if changed {
            tracing::debug!(line, from = self.last.as_str(), to = status.as_str(), "status changed");
        }
        self.last = status;

        let nearest_m = self.monitor.position().and_then(|r| {
            ProximityEvaluator::new(self.monitor.threshold())
                .nearest(r, self.monitor.reports().as_slice())
                .map(|(_, d)| d)
        });

        Ok(WatchUpdate {
            line,
            status: status.as_str(),
            changed,
            reports: self.monitor.reports().len(),
            nearest_m,
        })
    }
}

fn parse_event_line(line: &str) -> anyhow::Result<Option<WatchEvent>> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(None);
    }
    let event = serde_json::from_str(trimmed).context("parse event")?;
    Ok(Some(event))
}

/// Drive a session from a JSON-lines reader, writing one JSON line per event.
pub fn run_watch<R: BufRead, W: Write>(
    reader: R,
    mut writer: W,
    session: &mut WatchSession,
) -> anyhow::Result<WatchSummary> {
    let mut summary = WatchSummary::default();

    for (i, line) in reader.lines().enumerate() {
        let line_no = i + 1;
        let line = line.with_context(|| format!("read line {line_no}"))?;
        let Some(event) =
            parse_event_line(&line).with_context(|| format!("line {line_no}"))?
        else {
            continue;
        };

        let update = session.apply(line_no, event)?;
        summary.events += 1;
        if update.changed {
            summary.transitions += 1;
        }

        serde_json::to_writer(&mut writer, &update).context("write update")?;
        writer.write_all(b"\n").context("write update")?;
    }

    writer.flush().context("flush output")?;
    summary.final_status = Some(session.status().as_str());
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(input: &str, seed: ReportSet) -> (WatchSummary, Vec<serde_json::Value>) {
        let mut session = WatchSession::new(SafetyThreshold::DEFAULT, seed);
        let mut out = Vec::new();
        let summary = run_watch(input.as_bytes(), &mut out, &mut session).unwrap();
        let lines = String::from_utf8(out)
            .unwrap()
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();
        (summary, lines)
    }

    #[test]
    fn events_drive_status_transitions() {
        let input = r#"
# user opens the map
{"report": {"lat": 47.1699, "lon": -1.4651}}
{"position": {"lat": 47.1780, "lon": -1.4464}}
{"report": {"lat": 47.17835107557902, "lon": -1.446386025697808}}
{"position": {"lat": 47.19, "lon": -1.42}}
"#;
        let (summary, lines) = run(input, ReportSet::new());

        assert_eq!(summary.events, 4);
        assert_eq!(lines[0]["status"], "unknown");
        assert_eq!(lines[0]["changed"], false);
        assert!(lines[0].get("nearest_m").is_none());
        assert_eq!(lines[1]["status"], "safe");
        assert_eq!(lines[2]["status"], "unsafe");
        assert_eq!(lines[2]["reports"], 2);
        assert_eq!(lines[3]["status"], "safe");
        assert_eq!(lines[3]["line"], 6);
        assert_eq!(summary.transitions, 3);
        assert_eq!(summary.final_status, Some("safe"));
    }

    #[test]
    fn demo_seed_makes_first_fix_unsafe() {
        let input = r#"{"position": {"lat": 47.1780, "lon": -1.4464}}"#;
        let (_, lines) = run(input, DEMO_INCIDENTS.into_iter().collect());
        assert_eq!(lines[0]["status"], "unsafe");
        assert_eq!(lines[0]["reports"], 2);
        assert!(lines[0]["nearest_m"].as_f64().unwrap() < 40.0);
    }

    #[test]
    fn invalid_coordinates_stop_the_session() {
        let mut session = WatchSession::new(SafetyThreshold::DEFAULT, ReportSet::new());
        let input = r#"{"position": {"lat": 123.0, "lon": 0.0}}"#;
        let err = run_watch(input.as_bytes(), Vec::new(), &mut session).unwrap_err();
        assert!(format!("{err:#}").contains("line 1: position"));
    }

    #[test]
    fn unknown_event_kind_is_an_error() {
        let mut session = WatchSession::new(SafetyThreshold::DEFAULT, ReportSet::new());
        let input = r#"{"teleport": {"lat": 1.0, "lon": 0.0}}"#;
        assert!(run_watch(input.as_bytes(), Vec::new(), &mut session).is_err());
    }
}
