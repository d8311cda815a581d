mod error;
mod fleet_state;
mod vehicle;

pub use error::FleetError;
pub use fleet_state::{FleetState, RegenerateReason, RestoreOutcome, STORAGE_KEY};
pub use vehicle::{draw_active, Vehicle};
