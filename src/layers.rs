use geojson::{Feature, FeatureCollection, Geometry, Value};
use serde::Serialize;

use crate::categories::{legend, LegendEntry};
use crate::grouping::{group_stations, ChangeGroup, EnrichedStation};
use crate::stations::{ItemGroup, LatLng};

const DESTINATION_COLOR: &str = "#ffffff";

/// Everything the map frontend needs to draw one destination: the
/// destination marker, one toggleable overlay per change count, and the
/// legend. The caller owns the previous layer set and removes it before
/// drawing this one.
#[derive(Serialize)]
pub struct DestinationLayers {
    pub destination: Feature,
    pub overlays: Vec<Overlay>,
    pub legend: Vec<LegendEntry>,
}

#[derive(Serialize)]
pub struct Overlay {
    pub changes: u32,
    pub label: String,
    pub features: FeatureCollection,
}

fn point_feature(position: LatLng) -> Feature {
    // GeoJSON positions are [lon, lat]
    Feature::from(Geometry::new(Value::Point(vec![
        position.longitude,
        position.latitude,
    ])))
}

fn station_marker(station: &EnrichedStation) -> Feature {
    let mut feature = point_feature(station.position);
    feature.set_property("color", station.color);
    feature.set_property("tooltip", station.tooltip.clone());
    feature
}

fn destination_marker(itemgroup: &ItemGroup) -> Feature {
    let mut feature = point_feature(itemgroup.destination.position());
    feature.set_property("color", DESTINATION_COLOR);
    feature.set_property(
        "tooltip",
        format!("<strong>{}</strong>", itemgroup.destination.name),
    );
    feature
}

fn overlay(group: ChangeGroup) -> Overlay {
    let features = group.stations.iter().map(station_marker).collect();
    Overlay {
        changes: group.changes,
        label: format!("{} changes", group.changes),
        features: FeatureCollection {
            bbox: None,
            features,
            foreign_members: None,
        },
    }
}

/// Computes the full layer set for one destination, fresh on every call.
pub fn render_destination(itemgroup: &ItemGroup) -> DestinationLayers {
    let groups = group_stations(&itemgroup.stations, &itemgroup.destination.id);

    DestinationLayers {
        destination: destination_marker(itemgroup),
        overlays: groups.into_iter().map(overlay).collect(),
        legend: legend(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stations::{StationRecord, StationVisit};

    fn itemgroup() -> ItemGroup {
        let raw = r#"{
            "destination": {
                "id": "DEST",
                "name": "Stadtmitte",
                "coordinates": ["48.7755", "9.1733"]
            },
            "stations": []
        }"#;
        let mut group: ItemGroup = serde_json::from_str(raw).unwrap();
        group.stations = vec![
            None,
            Some(visit("A", 8.0, 0)),
            Some(visit("B", 44.0, 1)),
            Some(visit("DEST", 0.0, 0)),
        ];
        group
    }

    fn visit(global_id: &str, duration: f64, changes: u32) -> StationVisit {
        StationVisit {
            station: StationRecord {
                global_id: global_id.to_string(),
                name: format!("{global_id} Haltestelle"),
                x_coordinate: "9,16".to_string(),
                y_coordinate: "48,78".to_string(),
            },
            duration,
            changes,
            transportation: vec!["U9".to_string()],
        }
    }

    fn point_of(feature: &Feature) -> Vec<f64> {
        match &feature.geometry.as_ref().unwrap().value {
            Value::Point(coordinates) => coordinates.clone(),
            other => panic!("expected a point, got {other:?}"),
        }
    }

    #[test]
    fn station_markers_use_lon_lat_order() {
        let layers = render_destination(&itemgroup());
        let marker = &layers.overlays[0].features.features[0];
        assert_eq!(point_of(marker), vec![9.16, 48.78]);
    }

    #[test]
    fn one_overlay_per_change_count() {
        let layers = render_destination(&itemgroup());
        assert_eq!(layers.overlays.len(), 2);
        assert_eq!(layers.overlays[0].label, "0 changes");
        assert_eq!(layers.overlays[1].label, "1 changes");
        assert_eq!(layers.overlays[0].features.features.len(), 1);
    }

    #[test]
    fn markers_carry_color_and_tooltip() {
        let layers = render_destination(&itemgroup());
        let marker = &layers.overlays[0].features.features[0];
        assert_eq!(
            marker.property("color").unwrap().as_str().unwrap(),
            "#2ecc71"
        );
        assert!(marker
            .property("tooltip")
            .unwrap()
            .as_str()
            .unwrap()
            .contains("A Haltestelle"));
    }

    #[test]
    fn destination_marker_is_white_with_bold_name() {
        let layers = render_destination(&itemgroup());
        assert_eq!(point_of(&layers.destination), vec![9.1733, 48.7755]);
        assert_eq!(
            layers.destination.property("color").unwrap().as_str().unwrap(),
            "#ffffff"
        );
        assert_eq!(
            layers.destination.property("tooltip").unwrap().as_str().unwrap(),
            "<strong>Stadtmitte</strong>"
        );
    }

    #[test]
    fn includes_the_legend() {
        let layers = render_destination(&itemgroup());
        assert_eq!(layers.legend.len(), 7);
        assert_eq!(layers.legend[0].description, "No data");
    }
}
