use crate::style::{REPORT_MARKER_RADIUS_M, area_style, report_marker_style};
use crate::{RenderableMarker, RenderableOverlay};
use safezone_types::GeoPoint;
use serde_json::{Map, Value, json};

/// Render the overlay as a GeoJSON `FeatureCollection`.
///
/// GeoJSON has no circle geometry, so circles are `Point` features with a `radius_m`
/// property, the convention most web map libraries accept. Coordinates are `[lon, lat]`.
///
/// Feature order: safe area, position marker, then reports in input order.
pub fn render_geojson(overlay: &RenderableOverlay) -> Value {
    let mut features = Vec::new();

    if let (Some(reference), Some(safe)) = (overlay.reference, overlay.safe) {
        let style = area_style(safe);
        features.push(feature(
            reference,
            json!({
                "kind": "safe_area",
                "radius_m": overlay.radius_m,
                "safe": safe,
                "color": style.color,
                "fillColor": style.fill_color,
            }),
        ));
        features.push(feature(
            reference,
            json!({
                "kind": "position",
                "popup": "You are here",
            }),
        ));
    }

    for (index, marker) in overlay.markers.iter().enumerate() {
        features.push(feature(marker.point, marker_properties(index, marker)));
    }

    json!({
        "type": "FeatureCollection",
        "features": features,
    })
}

fn marker_properties(index: usize, marker: &RenderableMarker) -> Value {
    let style = report_marker_style();
    let mut props = Map::new();
    props.insert("kind".into(), json!("report"));
    props.insert("index".into(), json!(index));
    props.insert("radius_m".into(), json!(REPORT_MARKER_RADIUS_M));
    props.insert("color".into(), json!(style.color));
    props.insert("fillColor".into(), json!(style.fill_color));
    props.insert("hazard".into(), json!(marker.hazard));
    if let Some(d) = marker.distance_m {
        props.insert("distance_m".into(), json!(d));
    }
    Value::Object(props)
}

fn feature(point: GeoPoint, properties: Value) -> Value {
    json!({
        "type": "Feature",
        "geometry": {
            "type": "Point",
            "coordinates": [point.lon, point.lat],
        },
        "properties": properties,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn marker(lat: f64, lon: f64, hazard: bool, distance_m: Option<f64>) -> RenderableMarker {
        RenderableMarker {
            point: GeoPoint::new(lat, lon),
            hazard,
            distance_m,
        }
    }

    #[test]
    fn no_reference_draws_only_reports() {
        let overlay = RenderableOverlay {
            reference: None,
            radius_m: 150.0,
            safe: None,
            markers: vec![marker(1.0, 2.0, false, None)],
        };
        let gj = render_geojson(&overlay);
        let features = gj["features"].as_array().unwrap();
        assert_eq!(features.len(), 1);
        assert_eq!(features[0]["properties"]["kind"], "report");
        assert!(features[0]["properties"].get("distance_m").is_none());
        assert_eq!(
            features[0]["geometry"]["coordinates"],
            json!([2.0, 1.0])
        );
    }

    #[test]
    fn unsafe_area_is_red_and_lists_hazards() {
        let overlay = RenderableOverlay {
            reference: Some(GeoPoint::new(47.178, -1.4464)),
            radius_m: 150.0,
            safe: Some(false),
            markers: vec![
                marker(47.1699, -1.4651, false, Some(1676.0)),
                marker(47.17835, -1.44639, true, Some(39.0)),
            ],
        };
        let gj = render_geojson(&overlay);
        assert_eq!(gj["type"], "FeatureCollection");

        let features = gj["features"].as_array().unwrap();
        assert_eq!(features.len(), 4);

        let area = &features[0]["properties"];
        assert_eq!(area["kind"], "safe_area");
        assert_eq!(area["color"], "red");
        assert_eq!(area["fillColor"], "red");
        assert_eq!(area["radius_m"], 150.0);

        assert_eq!(features[1]["properties"]["popup"], "You are here");

        let hazard = &features[3]["properties"];
        assert_eq!(hazard["index"], 1);
        assert_eq!(hazard["hazard"], true);
        assert_eq!(hazard["radius_m"], 50.0);
    }

    #[test]
    fn safe_area_is_green() {
        let overlay = RenderableOverlay {
            reference: Some(GeoPoint::new(0.0, 0.0)),
            radius_m: 10.0,
            safe: Some(true),
            markers: Vec::new(),
        };
        let gj = render_geojson(&overlay);
        assert_eq!(gj["features"][0]["properties"]["color"], "green");
    }
}
