use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum StorageError {
    #[error("failure reading file from {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Error writing to '{path}': {message}")]
    Write { path: PathBuf, message: String },
    #[error("failed to parse store '{path}' due to: {message}")]
    Parse { path: PathBuf, message: String },
    #[error("failed to serialize value for key '{key}': {message}")]
    Serialize { key: String, message: String },
}
