use zeepy_core::model::storage::StorageError;

#[derive(thiserror::Error, Debug)]
pub enum FleetError {
    #[error("fleet state storage failed: {0}")]
    Storage(#[from] StorageError),
    #[error("invalid fleet configuration: {0}")]
    InvalidConfig(String),
    #[error("failed to serialize fleet snapshot: {0}")]
    Snapshot(String),
}
