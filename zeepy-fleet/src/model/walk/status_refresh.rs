use rand::rngs::StdRng;
use zeepy_core::util::time::elapsed_beyond;

use crate::model::state::{draw_active, FleetState};

/// periodically re-draws every vehicle's active flag once the last re-draw is
/// older than the time-to-live.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatusRefresh {
    pub ttl_ms: i64,
    pub idle_threshold: f64,
}

impl StatusRefresh {
    pub fn new(ttl_ms: i64, idle_threshold: f64) -> StatusRefresh {
        StatusRefresh {
            ttl_ms,
            idle_threshold,
        }
    }

    pub fn is_due(&self, state: &FleetState, now: i64) -> bool {
        elapsed_beyond(state.last_status_update, now, self.ttl_ms)
    }

    /// returns true when the statuses were re-drawn.
    pub fn refresh_if_due(&self, state: &mut FleetState, rng: &mut StdRng, now: i64) -> bool {
        if !self.is_due(state, now) {
            return false;
        }
        for vehicle in state.scooters.iter_mut() {
            vehicle.is_active = draw_active(self.idle_threshold, rng);
        }
        state.last_status_update = now;
        log::info!(
            "re-drew scooter statuses, {}/{} active",
            state.active_count(),
            state.scooters.len()
        );
        true
    }
}
