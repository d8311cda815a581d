//! browser-style key/value persistence. values are opaque strings, typically
//! JSON blobs, and each write replaces the stored value wholesale.
mod error;
mod json_file_store;
mod key_value_store;
mod memory_store;

pub use error::StorageError;
pub use json_file_store::JsonFileStore;
pub use key_value_store::KeyValueStore;
pub use memory_store::MemoryStore;
