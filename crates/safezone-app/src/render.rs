//! Render use cases: markdown from reports, GeoJSON overlays from scenarios.

use safezone_domain::policy::EffectiveConfig;
use safezone_domain::{ProximityEvaluator, Scenario, haversine_distance_m};
use safezone_render::{RenderableMarker, RenderableOverlay, RenderableReport};
use safezone_settings::Overrides;
use std::collections::BTreeSet;

use crate::check::resolve_settings;
use crate::scenario::parse_scenario_json;

pub fn render_markdown(report: &RenderableReport) -> String {
    safezone_render::render_markdown(report)
}

/// Input for the GeoJSON use case.
#[derive(Clone, Debug)]
pub struct GeojsonInput<'a> {
    pub scenario_text: &'a str,
    pub config_text: &'a str,
    pub overrides: Overrides,
}

/// Build the map overlay for a scenario: safe-area color and per-report hazard flags.
pub fn overlay_for(scenario: &Scenario, cfg: &EffectiveConfig) -> RenderableOverlay {
    let evaluator = ProximityEvaluator::new(cfg.threshold);
    let reports = scenario.reports.as_slice();

    let hazard_indices: BTreeSet<usize> = scenario
        .reference
        .map(|r| evaluator.hazards(r, reports).map(|h| h.index).collect::<BTreeSet<_>>())
        .unwrap_or_default();

    let markers = reports
        .iter()
        .enumerate()
        .map(|(index, p)| RenderableMarker {
            point: *p,
            hazard: hazard_indices.contains(&index),
            distance_m: scenario.reference.map(|r| haversine_distance_m(r, *p)),
        })
        .collect();

    RenderableOverlay {
        reference: scenario.reference,
        radius_m: cfg.threshold.meters(),
        safe: scenario.reference.map(|_| hazard_indices.is_empty()),
        markers,
    }
}

pub fn run_geojson(input: GeojsonInput<'_>) -> anyhow::Result<serde_json::Value> {
    let resolved = resolve_settings(input.config_text, input.overrides)?;
    let scenario = parse_scenario_json(input.scenario_text)?;
    let overlay = overlay_for(&scenario, &resolved.effective);
    Ok(safezone_render::render_geojson(&overlay))
}
