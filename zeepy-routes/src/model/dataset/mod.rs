mod error;
mod route;
mod route_catalog;
mod route_source;

pub use error::RouteDatasetError;
pub use route::Route;
pub use route_catalog::RouteCatalog;
pub use route_source::RouteSource;
