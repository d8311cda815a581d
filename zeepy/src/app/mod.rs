mod error;
mod fleet;
mod render;
mod routes;
mod zeepy_app;

pub use error::ZeepyAppError;
pub use fleet::FleetRunOptions;
pub use routes::RoutesRunOptions;
pub use zeepy_app::{ZeepyApp, ZeepyOperation};
