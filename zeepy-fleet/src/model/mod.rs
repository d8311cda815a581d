pub mod filter;
pub mod geofence;
pub mod layer;
pub mod monitor;
pub mod state;
pub mod walk;
