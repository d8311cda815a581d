mod engine;
mod safe_zone;

pub use engine::SafeZoneEngine;
pub use safe_zone::{default_safe_zones, SafeZone};
