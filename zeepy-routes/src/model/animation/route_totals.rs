use uom::si::{
    f64::{Length, Time, Velocity},
    length::kilometer,
    time::{minute, second},
    velocity::kilometer_per_hour,
};

use super::{AnimationConfig, Progress};
use crate::model::dataset::Route;

/// distance, ride duration and profit for a route, or for the portion of it
/// covered at some progress.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RouteTotals {
    pub distance: Length,
    pub duration: Time,
    pub profit: f64,
}

impl RouteTotals {
    /// duration follows from distance at the configured speed, profit from
    /// duration at the configured per-minute rate.
    pub fn for_route(route: &Route, config: &AnimationConfig) -> RouteTotals {
        let distance = route.distance();
        let speed = Velocity::new::<kilometer_per_hour>(config.speed_kmh);
        let duration: Time = distance / speed;
        let profit = duration.get::<minute>() * config.profit_per_minute;
        RouteTotals {
            distance,
            duration,
            profit,
        }
    }

    pub fn scaled(&self, progress: Progress) -> RouteTotals {
        let p = progress.value();
        RouteTotals {
            distance: self.distance * p,
            duration: self.duration * p,
            profit: self.profit * p,
        }
    }

    pub fn distance_km(&self) -> f64 {
        self.distance.get::<kilometer>()
    }

    pub fn duration_seconds(&self) -> f64 {
        self.duration.get::<second>()
    }

    /// whole minutes, rounded down.
    pub fn duration_whole_minutes(&self) -> u64 {
        self.duration.get::<minute>().floor().max(0.0) as u64
    }
}
