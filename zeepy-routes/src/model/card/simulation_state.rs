use std::time::Instant;

use crate::model::animation::{AnimationFrame, RouteAnimation};

/// transient state of one card's simulation. dropped when the card resets.
#[derive(Debug, Clone)]
pub struct SimulationState {
    pub is_running: bool,
    pub animation: RouteAnimation,
    pub started_at: Instant,
    /// true while another animation frame is scheduled.
    pub frame_scheduled: bool,
}

impl SimulationState {
    pub fn new(animation: RouteAnimation, started_at: Instant) -> SimulationState {
        SimulationState {
            is_running: true,
            animation,
            started_at,
            frame_scheduled: false,
        }
    }

    pub fn frame_at(&self, now: Instant) -> AnimationFrame {
        self.animation
            .frame(now.saturating_duration_since(self.started_at))
    }

    pub fn total_profit(&self) -> f64 {
        self.animation.totals().profit
    }
}
