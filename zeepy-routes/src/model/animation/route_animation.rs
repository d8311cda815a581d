use std::time::Duration;

use geo::Coord;

use super::{AnimationConfig, Progress, RouteTotals};
use crate::model::dataset::Route;

/// animates a marker along a route over a fixed wall-clock duration.
#[derive(Debug, Clone)]
pub struct RouteAnimation {
    route: Route,
    totals: RouteTotals,
    total_duration: Duration,
}

/// what the card shows after some elapsed time.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationFrame {
    pub progress: Progress,
    /// vertex the marker snaps to.
    pub vertex_index: usize,
    pub position: Coord<f64>,
    /// totals covered so far.
    pub covered: RouteTotals,
}

impl RouteAnimation {
    pub fn new(route: Route, config: &AnimationConfig) -> RouteAnimation {
        let totals = RouteTotals::for_route(&route, config);
        RouteAnimation {
            route,
            totals,
            total_duration: config.simulation_duration(),
        }
    }

    pub fn route(&self) -> &Route {
        &self.route
    }

    pub fn totals(&self) -> &RouteTotals {
        &self.totals
    }

    pub fn total_duration(&self) -> Duration {
        self.total_duration
    }

    /// the marker snaps to the vertex nearest below the progress fraction.
    /// there is no interpolation within a segment.
    pub fn frame(&self, elapsed: Duration) -> AnimationFrame {
        let progress = Progress::from_elapsed(elapsed, self.total_duration);
        let vertex_index = self.vertex_index(progress);
        AnimationFrame {
            progress,
            vertex_index,
            position: self.route.path()[vertex_index],
            covered: self.totals.scaled(progress),
        }
    }

    pub fn vertex_index(&self, progress: Progress) -> usize {
        let last = self.route.len().saturating_sub(1);
        let index = (progress.value() * last as f64).floor() as usize;
        index.min(last)
    }

    /// the polyline drawn so far, up to and including the current vertex.
    pub fn trail(&self, frame: &AnimationFrame) -> &[Coord<f64>] {
        &self.route.path()[..=frame.vertex_index]
    }
}
