use zeepy_core::model::storage::StorageError;
use zeepy_fleet::model::state::FleetError;
use zeepy_routes::model::{card::SimulationError, claim::ClaimError, dataset::RouteDatasetError};

#[derive(thiserror::Error, Debug)]
pub enum ZeepyAppError {
    #[error("Invalid input: {0}")]
    InvalidUserInput(String),
    #[error("failure loading configuration: {0}")]
    Config(String),
    #[error(transparent)]
    RouteDataset(#[from] RouteDatasetError),
    #[error(transparent)]
    Simulation(#[from] SimulationError),
    #[error(transparent)]
    Claim(#[from] ClaimError),
    #[error(transparent)]
    Fleet(#[from] FleetError),
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error("Error creating a runtime to handle async code: {0}")]
    Runtime(String),
    #[error("failure rendering progress: {0}")]
    Render(String),
}
