use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::model::{
    geofence::{default_safe_zones, SafeZone},
    state::STORAGE_KEY,
};

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct FleetConfig {
    /// JSON file standing in for browser local storage. when omitted, state
    /// lives in memory for the lifetime of the process.
    #[serde(default)]
    pub storage_file: Option<String>,
    /// key the fleet blob is stored under.
    #[serde(default = "default_storage_key")]
    pub storage_key: String,
    /// number of scooters the user owns.
    #[serde(default)]
    pub vehicle_count: usize,
    #[serde(default = "default_position_interval_ms")]
    pub position_interval_ms: u64,
    #[serde(default = "default_status_interval_ms")]
    pub status_interval_ms: u64,
    /// age of the last activity re-draw before statuses are re-drawn.
    #[serde(default = "default_status_ttl_secs")]
    pub status_ttl_secs: u64,
    /// distance in degrees a vehicle covers per position tick.
    #[serde(default = "default_step_degrees")]
    pub step_degrees: f64,
    /// width of the uniform heading perturbation applied each tick, in radians.
    #[serde(default = "default_heading_jitter")]
    pub heading_jitter: f64,
    /// a vehicle is active when a uniform draw exceeds this value.
    #[serde(default = "default_idle_threshold")]
    pub idle_threshold: f64,
    #[serde(default = "default_safe_zones")]
    pub safe_zones: Vec<SafeZone>,
}

impl Default for FleetConfig {
    fn default() -> Self {
        FleetConfig {
            storage_file: None,
            storage_key: default_storage_key(),
            vehicle_count: 0,
            position_interval_ms: default_position_interval_ms(),
            status_interval_ms: default_status_interval_ms(),
            status_ttl_secs: default_status_ttl_secs(),
            step_degrees: default_step_degrees(),
            heading_jitter: default_heading_jitter(),
            idle_threshold: default_idle_threshold(),
            safe_zones: default_safe_zones(),
        }
    }
}

impl FleetConfig {
    pub fn position_interval(&self) -> Duration {
        Duration::from_millis(self.position_interval_ms)
    }

    pub fn status_interval(&self) -> Duration {
        Duration::from_millis(self.status_interval_ms)
    }

    pub fn status_ttl_ms(&self) -> i64 {
        (self.status_ttl_secs as i64).saturating_mul(1000)
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.storage_key.trim().is_empty() {
            return Err(String::from("storage_key cannot be empty"));
        }
        if self.position_interval_ms == 0 || self.status_interval_ms == 0 {
            return Err(String::from("timer intervals must be greater than zero"));
        }
        if !self.step_degrees.is_finite() || self.step_degrees < 0.0 {
            return Err(format!("invalid step_degrees {}", self.step_degrees));
        }
        if !self.heading_jitter.is_finite() || self.heading_jitter < 0.0 {
            return Err(format!("invalid heading_jitter {}", self.heading_jitter));
        }
        if !(0.0..=1.0).contains(&self.idle_threshold) {
            return Err(format!(
                "idle_threshold must be within [0, 1], found {}",
                self.idle_threshold
            ));
        }
        if self.safe_zones.is_empty() {
            return Err(String::from("at least one safe zone is required"));
        }
        self.safe_zones.iter().try_for_each(SafeZone::validate)
    }
}

fn default_storage_key() -> String {
    STORAGE_KEY.to_string()
}

fn default_position_interval_ms() -> u64 {
    2_000
}

fn default_status_interval_ms() -> u64 {
    60_000
}

fn default_status_ttl_secs() -> u64 {
    600
}

fn default_step_degrees() -> f64 {
    0.00012
}

fn default_heading_jitter() -> f64 {
    0.5
}

fn default_idle_threshold() -> f64 {
    0.3
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = FleetConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.storage_key, "zeepyScooterState");
        assert_eq!(config.status_ttl_ms(), 600_000);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: FleetConfig =
            serde_json::from_str(r#"{"vehicle_count": 12, "step_degrees": 0.001}"#)
                .expect("deserialize");
        assert_eq!(config.vehicle_count, 12);
        assert_eq!(config.step_degrees, 0.001);
        assert_eq!(config.safe_zones.len(), 5);
        assert_eq!(config.position_interval(), Duration::from_secs(2));
    }

    #[test]
    fn test_invalid_threshold() {
        let config = FleetConfig {
            idle_threshold: 1.5,
            ..FleetConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
