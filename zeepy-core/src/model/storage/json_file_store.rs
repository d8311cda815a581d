use std::{
    collections::BTreeMap,
    path::{Path, PathBuf},
};

use super::{KeyValueStore, StorageError};
use crate::util::fs;

/// key/value store persisted as a single JSON object on disk. the file is
/// loaded once when opened and rewritten in full on every mutation.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    items: BTreeMap<String, String>,
}

impl JsonFileStore {
    /// opens the store at this path. a missing file is an empty store.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<JsonFileStore, StorageError> {
        let path = path.as_ref().to_path_buf();
        let items = match fs::read_optional_string(&path)? {
            None => BTreeMap::new(),
            Some(contents) if contents.trim().is_empty() => BTreeMap::new(),
            Some(contents) => {
                serde_json::from_str(&contents).map_err(|e| StorageError::Parse {
                    path: path.clone(),
                    message: e.to_string(),
                })?
            }
        };
        log::debug!("opened store '{}' with {} keys", path.display(), items.len());
        Ok(JsonFileStore { path, items })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> Result<(), StorageError> {
        let contents =
            serde_json::to_string_pretty(&self.items).map_err(|e| StorageError::Write {
                path: self.path.clone(),
                message: e.to_string(),
            })?;
        fs::write_string_replacing(&self.path, &contents)
    }
}

impl KeyValueStore for JsonFileStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.items.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.items.insert(key.to_string(), value.to_string());
        self.flush()
    }

    fn remove_item(&mut self, key: &str) -> Result<(), StorageError> {
        if self.items.remove(key).is_some() {
            self.flush()
        } else {
            Ok(())
        }
    }
}
