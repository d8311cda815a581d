mod fleet_config;
mod fleet_monitor;

pub use fleet_config::FleetConfig;
pub use fleet_monitor::FleetMonitor;
