use geo::{coord, Rect};
use serde::{Deserialize, Serialize};

/// a fixed lat/lon rectangle that simulated vehicles may not leave.
#[derive(Clone, Debug, Serialize, Deserialize, Copy, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SafeZone {
    #[serde(alias = "min_lat", alias = "minlat")]
    pub min_lat: f64,
    #[serde(alias = "max_lat", alias = "maxlat")]
    pub max_lat: f64,
    #[serde(alias = "min_lon", alias = "minlon")]
    pub min_lon: f64,
    #[serde(alias = "max_lon", alias = "maxlon")]
    pub max_lon: f64,
}

impl SafeZone {
    pub fn new(min_lat: f64, max_lat: f64, min_lon: f64, max_lon: f64) -> Self {
        Self {
            min_lat,
            max_lat,
            min_lon,
            max_lon,
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        let values = [self.min_lat, self.max_lat, self.min_lon, self.max_lon];
        if values.iter().any(|v| !v.is_finite()) {
            return Err(format!("safe zone has non-finite bounds: {self:?}"));
        }
        if self.max_lat < self.min_lat || self.max_lon < self.min_lon {
            return Err(format!("safe zone has inverted bounds: {self:?}"));
        }
        Ok(())
    }

    pub fn to_rect(&self) -> Rect<f64> {
        Rect::new(
            coord! { x: self.min_lon, y: self.min_lat },
            coord! { x: self.max_lon, y: self.max_lat },
        )
    }
}

/// the Shanghai-area zones the dashboard ships with.
pub fn default_safe_zones() -> Vec<SafeZone> {
    vec![
        SafeZone::new(30.8527, 31.1458, 121.5294, 121.8569),
        SafeZone::new(31.6277, 31.7317, 121.3721, 121.5054),
        SafeZone::new(30.7371, 31.1247, 121.0419, 121.4003),
        SafeZone::new(31.2251, 31.4123, 120.4064, 120.6728),
        SafeZone::new(31.2028, 31.4105, 120.9464, 121.4902),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_zones_are_valid() {
        for zone in default_safe_zones() {
            assert!(zone.validate().is_ok(), "{zone:?}");
        }
    }

    #[test]
    fn test_invalid_zone() {
        assert!(SafeZone::new(31.0, 30.0, 121.0, 122.0).validate().is_err());
        assert!(SafeZone::new(30.0, 31.0, f64::NAN, 122.0).validate().is_err());
    }

    #[test]
    fn test_wire_format() {
        let zone: SafeZone = serde_json::from_str(
            r#"{"minLat": 30.0, "maxLat": 31.0, "minLon": 121.0, "maxLon": 122.0}"#,
        )
        .expect("deserialize");
        assert_eq!(zone, SafeZone::new(30.0, 31.0, 121.0, 122.0));
    }
}
