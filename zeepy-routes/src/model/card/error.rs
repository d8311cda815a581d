#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum SimulationError {
    #[error("no card registered for scooter {0}")]
    UnknownCard(String),
    #[error("could not pick a route for scooter {0}, please try again")]
    NoRouteAvailable(String),
}
