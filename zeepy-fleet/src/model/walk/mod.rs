mod random_walk;
mod status_refresh;

pub use random_walk::{RandomWalk, StepOutcome, TickSummary};
pub use status_refresh::StatusRefresh;
