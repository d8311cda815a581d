use geo::Coord;
use rand::prelude::*;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use zeepy_core::util::geo_utils::lat_lon;

/// a simulated scooter as persisted between sessions. `angle` is the heading in radians.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Vehicle {
    pub id: usize,
    pub lat: f64,
    pub lon: f64,
    pub is_active: bool,
    pub angle: f64,
}

impl Vehicle {
    /// a vehicle at this position with a random heading and activity drawn
    /// against `idle_threshold`.
    pub fn spawn(
        id: usize,
        position: Coord<f64>,
        idle_threshold: f64,
        rng: &mut StdRng,
    ) -> Vehicle {
        Vehicle {
            id,
            lat: position.y,
            lon: position.x,
            is_active: draw_active(idle_threshold, rng),
            angle: rng.random::<f64>() * 2.0 * std::f64::consts::PI,
        }
    }

    pub fn position(&self) -> Coord<f64> {
        lat_lon(self.lat, self.lon)
    }

    /// display number, one-based.
    pub fn number(&self) -> usize {
        self.id + 1
    }

    pub fn label(&self) -> String {
        format!("Scooter #{}", self.number())
    }
}

/// a vehicle is active when a uniform draw exceeds the idle threshold.
pub fn draw_active(idle_threshold: f64, rng: &mut StdRng) -> bool {
    rng.random::<f64>() > idle_threshold
}
