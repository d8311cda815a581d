use geo::Coord;
use uom::si::f64::Length;
use zeepy_core::util::geo_utils;

use super::RouteDatasetError;

/// an ordered sequence of route vertices along with its great-circle length.
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    pub index: usize,
    path: Vec<Coord<f64>>,
    distance: Length,
}

impl Route {
    pub fn new(index: usize, path: Vec<Coord<f64>>) -> Result<Route, RouteDatasetError> {
        if path.is_empty() {
            return Err(RouteDatasetError::InvalidRoute {
                index,
                message: String::from("route has no vertices"),
            });
        }
        for coord in path.iter() {
            geo_utils::validate_coordinate(coord)
                .map_err(|message| RouteDatasetError::InvalidRoute { index, message })?;
        }
        let distance = geo_utils::path_length(&path);
        Ok(Route {
            index,
            path,
            distance,
        })
    }

    pub fn path(&self) -> &[Coord<f64>] {
        &self.path
    }

    pub fn len(&self) -> usize {
        self.path.len()
    }

    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    pub fn first(&self) -> Coord<f64> {
        self.path[0]
    }

    pub fn distance(&self) -> Length {
        self.distance
    }
}
