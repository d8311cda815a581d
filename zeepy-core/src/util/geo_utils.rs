use geo::{Coord, Distance, Haversine, Point};
use uom::si::f64::Length;

/// builds a coordinate from a latitude/longitude pair. coordinates throughout
/// zeepy follow the geo convention of x = longitude, y = latitude.
pub fn lat_lon(lat: f64, lon: f64) -> Coord<f64> {
    Coord { x: lon, y: lat }
}

/// great-circle distance between two coordinates.
pub fn haversine_distance(src: &Coord<f64>, dst: &Coord<f64>) -> Length {
    let meters = Haversine.distance(Point::from(*src), Point::from(*dst));
    Length::new::<uom::si::length::meter>(meters)
}

/// sums the great-circle distance of each consecutive pair of coordinates
/// along a path. paths with fewer than two coordinates have zero length.
pub fn path_length(path: &[Coord<f64>]) -> Length {
    path.windows(2).fold(
        Length::new::<uom::si::length::meter>(0.0),
        |acc, pair| acc + haversine_distance(&pair[0], &pair[1]),
    )
}

/// validates that a coordinate is a finite WGS84 position.
pub fn validate_coordinate(coord: &Coord<f64>) -> Result<(), String> {
    if !coord.x.is_finite() || !coord.y.is_finite() {
        return Err(format!("coordinate ({}, {}) is not finite", coord.y, coord.x));
    }
    if !(-90.0..=90.0).contains(&coord.y) {
        return Err(format!("latitude {} outside of [-90, 90]", coord.y));
    }
    if !(-180.0..=180.0).contains(&coord.x) {
        return Err(format!("longitude {} outside of [-180, 180]", coord.x));
    }
    Ok(())
}
