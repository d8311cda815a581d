mod balance_display;
mod card_display;
mod error;
mod route_simulator;
mod simulation_state;

pub use balance_display::BalanceDisplay;
pub use card_display::{
    CardDisplay, CardMap, ClaimButton, CARD_MAP_ZOOM, CLAIM_LABEL, EN_ROUTE_LABEL,
    PROCESSING_LABEL,
};
pub use error::SimulationError;
pub use route_simulator::{ClaimOutcome, RouteSimulator, StartOutcome};
pub use simulation_state::SimulationState;
