use std::collections::BTreeMap;

use geojson::{Feature, FeatureCollection, Geometry, JsonObject, Value};

use super::{MapView, Marker, MarkerLayer};
use crate::model::state::{FleetError, Vehicle};

/// the fleet map: a marker per vehicle, the layer that decides which of them
/// are shown, and the current view.
#[derive(Debug, Clone, PartialEq)]
pub struct FleetMap {
    pub view: MapView,
    pub markers: BTreeMap<usize, Marker>,
    pub layer: MarkerLayer,
}

impl FleetMap {
    /// a map showing every vehicle's marker.
    pub fn new(vehicles: &[Vehicle]) -> FleetMap {
        let view = if vehicles.is_empty() {
            MapView::empty_fleet()
        } else {
            MapView::fleet_default()
        };
        let mut layer = MarkerLayer::new();
        let markers = vehicles
            .iter()
            .map(|v| {
                layer.add_layer(v.id);
                (v.id, Marker::for_vehicle(v))
            })
            .collect();
        FleetMap {
            view,
            markers,
            layer,
        }
    }

    pub fn marker(&self, vehicle_id: usize) -> Option<&Marker> {
        self.markers.get(&vehicle_id)
    }

    pub fn sync_position(&mut self, vehicle: &Vehicle) {
        if let Some(marker) = self.markers.get_mut(&vehicle.id) {
            marker.position = vehicle.position();
        }
    }

    pub fn sync_status(&mut self, vehicle: &Vehicle) {
        if let Some(marker) = self.markers.get_mut(&vehicle.id) {
            marker.set_status(vehicle.is_active);
        }
    }

    /// opens one popup and closes the others.
    pub fn open_popup(&mut self, vehicle_id: usize) {
        for (id, marker) in self.markers.iter_mut() {
            marker.popup_open = *id == vehicle_id;
        }
    }

    /// visible markers as a GeoJSON FeatureCollection of points.
    pub fn snapshot(&self) -> FeatureCollection {
        let features = self
            .layer
            .visible()
            .filter_map(|id| self.markers.get(&id))
            .map(|marker| {
                let mut properties = JsonObject::new();
                properties.insert("id".to_string(), marker.vehicle_id.into());
                properties.insert("label".to_string(), marker.popup.clone().into());
                properties.insert("status".to_string(), marker.icon_class.into());
                Feature {
                    bbox: None,
                    geometry: Some(Geometry::new(Value::Point(vec![
                        marker.position.x,
                        marker.position.y,
                    ]))),
                    id: None,
                    properties: Some(properties),
                    foreign_members: None,
                }
            })
            .collect();
        FeatureCollection {
            bbox: None,
            features,
            foreign_members: None,
        }
    }

    pub fn snapshot_json(&self) -> Result<String, FleetError> {
        serde_json::to_string_pretty(&self.snapshot())
            .map_err(|e| FleetError::Snapshot(e.to_string()))
    }
}
