use safezone_types::GeoPoint;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderableSeverity {
    Warning,
    Error,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderableVerdictStatus {
    Safe,
    Warn,
    Unsafe,
    Skip,
}

#[derive(Clone, Debug, PartialEq)]
pub struct RenderableFinding {
    pub severity: RenderableSeverity,
    pub check_id: Option<String>,
    pub code: String,
    pub message: String,
    pub report_index: Option<u32>,
    pub distance_m: Option<f64>,
    pub help: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct RenderableData {
    pub threshold_m: f64,
    pub reports_scanned: u32,
    pub hazards_emitted: u32,
    pub hazards_total: u32,
    pub nearest_distance_m: Option<f64>,
    pub truncated_reason: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct RenderableReport {
    pub verdict: RenderableVerdictStatus,
    pub findings: Vec<RenderableFinding>,
    pub data: RenderableData,
}

/// One incident marker on the map.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderableMarker {
    pub point: GeoPoint,
    /// Inside the safe radius of the reference position.
    pub hazard: bool,
    pub distance_m: Option<f64>,
}

/// Everything a map needs to draw the safe area and the reports around it.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderableOverlay {
    pub reference: Option<GeoPoint>,
    pub radius_m: f64,
    /// `None` when there is no reference position: no safe area is drawn.
    pub safe: Option<bool>,
    pub markers: Vec<RenderableMarker>,
}
