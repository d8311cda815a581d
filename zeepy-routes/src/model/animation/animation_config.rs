use std::time::Duration;

use serde::{Deserialize, Serialize};

/// fixed rates used to animate a route and derive its totals.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct AnimationConfig {
    /// wall-clock seconds taken to animate a full route, regardless of its length.
    #[serde(default = "default_simulation_duration_secs")]
    pub simulation_duration_secs: f64,
    /// average vehicle speed used to convert distance into ride duration.
    #[serde(default = "default_speed_kmh")]
    pub speed_kmh: f64,
    /// profit credited per minute of ride duration.
    #[serde(default = "default_profit_per_minute")]
    pub profit_per_minute: f64,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        AnimationConfig {
            simulation_duration_secs: default_simulation_duration_secs(),
            speed_kmh: default_speed_kmh(),
            profit_per_minute: default_profit_per_minute(),
        }
    }
}

impl AnimationConfig {
    /// values too large for a `Duration` saturate, and negative or NaN values
    /// collapse to zero. `validate` rejects both.
    pub fn simulation_duration(&self) -> Duration {
        let secs = self.simulation_duration_secs;
        Duration::try_from_secs_f64(secs).unwrap_or(if secs > 0.0 {
            Duration::MAX
        } else {
            Duration::ZERO
        })
    }

    pub fn validate(&self) -> Result<(), String> {
        let checks = [
            ("simulation_duration_secs", self.simulation_duration_secs),
            ("speed_kmh", self.speed_kmh),
            ("profit_per_minute", self.profit_per_minute),
        ];
        for (name, value) in checks {
            if !value.is_finite() || value <= 0.0 {
                return Err(format!("{name} must be a positive number, found {value}"));
            }
        }
        Duration::try_from_secs_f64(self.simulation_duration_secs).map_err(|e| {
            format!(
                "simulation_duration_secs {} is out of range: {e}",
                self.simulation_duration_secs
            )
        })?;
        Ok(())
    }
}

fn default_simulation_duration_secs() -> f64 {
    30.0
}

fn default_speed_kmh() -> f64 {
    15.0
}

fn default_profit_per_minute() -> f64 {
    0.10
}
