use geo::Coord;
use zeepy_core::util::geo_utils::lat_lon;

pub const SEARCH_ZOOM: u8 = 18;

/// center and zoom of the fleet map.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapView {
    pub center: Coord<f64>,
    pub zoom: u8,
}

impl MapView {
    /// the view when the fleet has vehicles.
    pub fn fleet_default() -> MapView {
        MapView {
            center: lat_lon(31.2, 121.5),
            zoom: 11,
        }
    }

    /// the view shown when the user owns no vehicles.
    pub fn empty_fleet() -> MapView {
        MapView {
            center: lat_lon(31.10, 121.24),
            zoom: 10,
        }
    }

    pub fn fly_to(&mut self, center: Coord<f64>, zoom: u8) {
        self.center = center;
        self.zoom = zoom;
    }
}
