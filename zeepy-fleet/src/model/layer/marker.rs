use geo::Coord;

use crate::model::state::Vehicle;

pub const STATUS_ACTIVE_CLASS: &str = "status-active";
pub const STATUS_IDLE_CLASS: &str = "status-idle";

/// the rendered marker of one vehicle.
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub vehicle_id: usize,
    pub position: Coord<f64>,
    pub icon_class: &'static str,
    pub popup: String,
    pub popup_open: bool,
}

impl Marker {
    pub fn for_vehicle(vehicle: &Vehicle) -> Marker {
        Marker {
            vehicle_id: vehicle.id,
            position: vehicle.position(),
            icon_class: icon_class(vehicle.is_active),
            popup: vehicle.label(),
            popup_open: false,
        }
    }

    pub fn set_status(&mut self, is_active: bool) {
        self.icon_class = icon_class(is_active);
    }
}

fn icon_class(is_active: bool) -> &'static str {
    if is_active {
        STATUS_ACTIVE_CLASS
    } else {
        STATUS_IDLE_CLASS
    }
}
