use rand::prelude::*;
use rand::rngs::StdRng;

use crate::model::{geofence::SafeZoneEngine, state::Vehicle};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// idle vehicles stay put.
    Idle,
    Moved,
    /// the candidate left every safe zone. the heading was reversed and the
    /// position kept.
    Reversed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickSummary {
    pub moved: usize,
    pub reversed: usize,
    pub idle: usize,
}

/// bounded random walk of vehicle positions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RandomWalk {
    pub step_degrees: f64,
    pub heading_jitter: f64,
}

impl RandomWalk {
    pub fn new(step_degrees: f64, heading_jitter: f64) -> RandomWalk {
        RandomWalk {
            step_degrees,
            heading_jitter,
        }
    }

    /// perturbs the heading by a random delta in [-jitter/2, jitter/2) and steps forward.
    pub fn step(
        &self,
        vehicle: &mut Vehicle,
        zones: &SafeZoneEngine,
        rng: &mut StdRng,
    ) -> StepOutcome {
        if !vehicle.is_active {
            return StepOutcome::Idle;
        }
        let delta = (rng.random::<f64>() - 0.5) * self.heading_jitter;
        self.step_with_delta(vehicle, zones, delta)
    }

    /// steps an active vehicle after adding `delta` to its heading. the
    /// candidate is committed only when it lies inside a safe zone.
    pub fn step_with_delta(
        &self,
        vehicle: &mut Vehicle,
        zones: &SafeZoneEngine,
        delta: f64,
    ) -> StepOutcome {
        if !vehicle.is_active {
            return StepOutcome::Idle;
        }
        vehicle.angle += delta;
        let lat = vehicle.lat + vehicle.angle.sin() * self.step_degrees;
        let lon = vehicle.lon + vehicle.angle.cos() * self.step_degrees;
        if zones.contains(lat, lon) {
            vehicle.lat = lat;
            vehicle.lon = lon;
            StepOutcome::Moved
        } else {
            vehicle.angle += std::f64::consts::PI;
            StepOutcome::Reversed
        }
    }

    pub fn tick(
        &self,
        vehicles: &mut [Vehicle],
        zones: &SafeZoneEngine,
        rng: &mut StdRng,
    ) -> TickSummary {
        let mut summary = TickSummary::default();
        for vehicle in vehicles.iter_mut() {
            match self.step(vehicle, zones, rng) {
                StepOutcome::Idle => summary.idle += 1,
                StepOutcome::Moved => summary.moved += 1,
                StepOutcome::Reversed => summary.reversed += 1,
            }
        }
        summary
    }
}
