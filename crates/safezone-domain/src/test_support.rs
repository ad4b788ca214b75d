use crate::model::{ReportSet, Scenario};
use crate::policy::EffectiveConfig;
use safezone_types::GeoPoint;

pub const REFERENCE: GeoPoint = GeoPoint::new(47.1780, -1.4464);

/// About 39 m north-east of [`REFERENCE`].
pub fn near_reference() -> GeoPoint {
    GeoPoint::new(47.17835107557902, -1.446386025697808)
}

pub fn scenario(reports: Vec<GeoPoint>) -> Scenario {
    Scenario::new(Some(REFERENCE), ReportSet::from(reports))
}

pub fn config() -> EffectiveConfig {
    EffectiveConfig {
        profile: "test".to_string(),
        ..EffectiveConfig::default()
    }
}

pub fn config_with(f: impl FnOnce(&mut EffectiveConfig)) -> EffectiveConfig {
    let mut cfg = config();
    f(&mut cfg);
    cfg
}
