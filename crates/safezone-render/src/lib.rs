//! Rendering utilities for display surfaces (Markdown summaries, GeoJSON map overlays).

#![forbid(unsafe_code)]

mod geojson;
mod markdown;
mod model;
mod style;

pub use geojson::render_geojson;
pub use markdown::render_markdown;
pub use model::{
    RenderableData, RenderableFinding, RenderableMarker, RenderableOverlay, RenderableReport,
    RenderableSeverity, RenderableVerdictStatus,
};
pub use style::{AreaStyle, REPORT_MARKER_RADIUS_M, area_style, report_marker_style};
