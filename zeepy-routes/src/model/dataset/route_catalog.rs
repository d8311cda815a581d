use geo::Coord;
use geojson::{GeoJson, Value};
use rand::prelude::*;
use rand::rngs::StdRng;
use zeepy_core::util::geo_utils::lat_lon;

use super::{Route, RouteDatasetError, RouteSource};

/// the set of routes a simulation may draw from. loaded once and shared by all cards.
#[derive(Debug, Clone)]
pub struct RouteCatalog {
    routes: Vec<Route>,
}

impl RouteCatalog {
    /// fetches the dataset from its source and parses it.
    pub async fn load(
        source: &RouteSource,
        client: &reqwest::Client,
    ) -> Result<RouteCatalog, RouteDatasetError> {
        let contents = match source {
            RouteSource::Url(url) => {
                let response =
                    client
                        .get(url)
                        .send()
                        .await
                        .map_err(|e| RouteDatasetError::Request {
                            url: url.clone(),
                            message: e.to_string(),
                        })?;
                let status = response.status();
                if !status.is_success() {
                    return Err(RouteDatasetError::HttpStatus {
                        url: url.clone(),
                        status: status.as_u16(),
                    });
                }
                response
                    .text()
                    .await
                    .map_err(|e| RouteDatasetError::Request {
                        url: url.clone(),
                        message: e.to_string(),
                    })?
            }
            RouteSource::File(path) => {
                std::fs::read_to_string(path).map_err(|source| RouteDatasetError::Read {
                    path: path.clone(),
                    source,
                })?
            }
        };
        let catalog = RouteCatalog::from_geojson_str(&contents)?;
        log::info!("loaded {} routes from {source}", catalog.len());
        Ok(catalog)
    }

    /// parses a GeoJSON FeatureCollection. LineString features become routes,
    /// MultiLineString features are concatenated into a single route. GeoJSON
    /// positions are [lon, lat].
    pub fn from_geojson_str(contents: &str) -> Result<RouteCatalog, RouteDatasetError> {
        let geojson = contents
            .parse::<GeoJson>()
            .map_err(|e| RouteDatasetError::Parse(e.to_string()))?;
        let collection = match geojson {
            GeoJson::FeatureCollection(fc) => fc,
            GeoJson::Feature(_) => {
                return Err(RouteDatasetError::NotAFeatureCollection("Feature".into()))
            }
            GeoJson::Geometry(_) => {
                return Err(RouteDatasetError::NotAFeatureCollection("Geometry".into()))
            }
        };
        if collection.features.is_empty() {
            return Err(RouteDatasetError::Empty);
        }

        let mut routes = Vec::with_capacity(collection.features.len());
        for (index, feature) in collection.features.iter().enumerate() {
            let path = match feature.geometry.as_ref().map(|g| &g.value) {
                Some(Value::LineString(line)) => positions_to_path(index, line)?,
                Some(Value::MultiLineString(lines)) => {
                    let mut path = vec![];
                    for line in lines.iter() {
                        path.extend(positions_to_path(index, line)?);
                    }
                    path
                }
                Some(other) => {
                    log::warn!(
                        "skipping route feature {index} with unsupported geometry type {}",
                        geometry_type_name(other)
                    );
                    continue;
                }
                None => {
                    log::warn!("skipping route feature {index} without geometry");
                    continue;
                }
            };
            if path.is_empty() {
                log::warn!("skipping route feature {index} without coordinates");
                continue;
            }
            routes.push(Route::new(index, path)?);
        }

        if routes.is_empty() {
            return Err(RouteDatasetError::Empty);
        }
        Ok(RouteCatalog { routes })
    }

    pub fn new(routes: Vec<Route>) -> RouteCatalog {
        RouteCatalog { routes }
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// uniformly selects one route, or None for an empty catalog.
    pub fn random_route(&self, rng: &mut StdRng) -> Option<&Route> {
        if self.routes.is_empty() {
            return None;
        }
        let index = rng.random_range(0..self.routes.len());
        self.routes.get(index)
    }
}

fn geometry_type_name(value: &Value) -> &'static str {
    match value {
        Value::Point(_) => "Point",
        Value::MultiPoint(_) => "MultiPoint",
        Value::LineString(_) => "LineString",
        Value::MultiLineString(_) => "MultiLineString",
        Value::Polygon(_) => "Polygon",
        Value::MultiPolygon(_) => "MultiPolygon",
        Value::GeometryCollection(_) => "GeometryCollection",
    }
}

fn positions_to_path(
    index: usize,
    positions: &[Vec<f64>],
) -> Result<Vec<Coord<f64>>, RouteDatasetError> {
    positions
        .iter()
        .map(|position| match position.as_slice() {
            [lon, lat, ..] => Ok(lat_lon(*lat, *lon)),
            _ => Err(RouteDatasetError::InvalidRoute {
                index,
                message: format!("position {position:?} has fewer than two values"),
            }),
        })
        .collect()
}
