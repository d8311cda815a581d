use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum RouteDatasetError {
    #[error("failure requesting route dataset from {url}: {message}")]
    Request { url: String, message: String },
    #[error("route dataset request to {url} failed with HTTP status {status}")]
    HttpStatus { url: String, status: u16 },
    #[error("failure reading route dataset from {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("route dataset is not valid GeoJSON: {0}")]
    Parse(String),
    #[error("route dataset must be a GeoJSON FeatureCollection, found {0}")]
    NotAFeatureCollection(String),
    #[error("route dataset is empty or has no usable LineString features")]
    Empty,
    #[error("route {index} is invalid: {message}")]
    InvalidRoute { index: usize, message: String },
}
