mod animation_config;
mod progress;
mod route_animation;
mod route_totals;

pub use animation_config::AnimationConfig;
pub use progress::Progress;
pub use route_animation::{AnimationFrame, RouteAnimation};
pub use route_totals::RouteTotals;
