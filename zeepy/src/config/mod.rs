mod routes_config;
mod zeepy_config;

pub use routes_config::RoutesConfig;
pub use zeepy_config::{ZeepyConfig, DEFAULT_CONFIG_TOML, ENV_PREFIX};
