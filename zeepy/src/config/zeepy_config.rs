use std::path::Path;

use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use zeepy_fleet::model::monitor::FleetConfig;

use super::RoutesConfig;
use crate::app::ZeepyAppError;

/// built-in defaults, layered under any user configuration file.
pub const DEFAULT_CONFIG_TOML: &str = include_str!("../util/zeepy-config.toml");

/// environment overrides such as `ZEEPY__FLEET__VEHICLE_COUNT=12`.
pub const ENV_PREFIX: &str = "ZEEPY";

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct ZeepyConfig {
    pub routes: RoutesConfig,
    #[serde(default)]
    pub fleet: FleetConfig,
}

impl ZeepyConfig {
    /// reads the defaults, then the optional configuration file, then the environment.
    pub fn load(configuration_file: Option<&Path>) -> Result<ZeepyConfig, ZeepyAppError> {
        let mut builder =
            Config::builder().add_source(File::from_str(DEFAULT_CONFIG_TOML, FileFormat::Toml));
        if let Some(path) = configuration_file {
            if !path.is_file() {
                return Err(ZeepyAppError::InvalidUserInput(format!(
                    "configuration file '{}' does not exist",
                    path.display()
                )));
            }
            builder = builder.add_source(File::from(path));
        }
        let config = builder
            .add_source(Environment::with_prefix(ENV_PREFIX).separator("__"))
            .build()
            .map_err(|e| {
                let source = configuration_file
                    .map(|p| p.display().to_string())
                    .unwrap_or_else(|| String::from("<defaults>"));
                ZeepyAppError::Config(format!("file '{source}' produced error: {e}"))
            })?;
        let routes = config
            .get::<RoutesConfig>("routes")
            .map_err(|e| ZeepyAppError::Config(format!("error reading 'routes' key: {e}")))?;
        let fleet = config
            .get::<FleetConfig>("fleet")
            .map_err(|e| ZeepyAppError::Config(format!("error reading 'fleet' key: {e}")))?;
        routes.validate().map_err(ZeepyAppError::Config)?;
        fleet.validate().map_err(ZeepyAppError::Config)?;
        Ok(ZeepyConfig { routes, fleet })
    }
}
