mod fleet_map;
mod map_view;
mod marker;
mod marker_layer;

pub use fleet_map::FleetMap;
pub use map_view::{MapView, SEARCH_ZOOM};
pub use marker::{Marker, STATUS_ACTIVE_CLASS, STATUS_IDLE_CLASS};
pub use marker_layer::MarkerLayer;
