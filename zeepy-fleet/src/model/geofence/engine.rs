use geo::{Coord, Intersects, Rect};
use rand::prelude::*;
use rand::rngs::StdRng;
use zeepy_core::util::geo_utils::lat_lon;

use super::SafeZone;

/// answers whether a position lies in any safe zone, and samples positions inside them.
#[derive(Debug, Clone)]
pub struct SafeZoneEngine {
    zones: Vec<Rect<f64>>,
}

impl SafeZoneEngine {
    pub fn new(zones: &[SafeZone]) -> Result<SafeZoneEngine, String> {
        if zones.is_empty() {
            return Err(String::from("at least one safe zone is required"));
        }
        let rects = zones
            .iter()
            .map(|zone| zone.validate().map(|_| zone.to_rect()))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(SafeZoneEngine { zones: rects })
    }

    /// boundaries count as inside.
    pub fn contains(&self, lat: f64, lon: f64) -> bool {
        let point = lat_lon(lat, lon);
        self.zones.iter().any(|zone| zone.intersects(&point))
    }

    /// picks a zone uniformly at random, then a uniform position inside it.
    pub fn sample_location(&self, rng: &mut StdRng) -> Coord<f64> {
        let zone = &self.zones[rng.random_range(0..self.zones.len())];
        let (min, max) = (zone.min(), zone.max());
        let lat = rng.random::<f64>() * (max.y - min.y) + min.y;
        let lon = rng.random::<f64>() * (max.x - min.x) + min.x;
        lat_lon(lat, lon)
    }

    pub fn len(&self) -> usize {
        self.zones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }
}
