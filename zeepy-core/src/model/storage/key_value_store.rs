use super::StorageError;

/// a string-keyed, string-valued store with the semantics of browser local storage.
pub trait KeyValueStore {
    /// returns the value stored under this key, if any.
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// replaces the value stored under this key.
    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError>;

    /// removes the key. removing a missing key is not an error.
    fn remove_item(&mut self, key: &str) -> Result<(), StorageError>;

    /// reads and deserializes a JSON value. a value that fails to parse is
    /// returned as an error so callers can decide whether to discard it.
    fn get_json<T>(&self, key: &str) -> Result<Option<T>, StorageError>
    where
        Self: Sized,
        T: serde::de::DeserializeOwned,
    {
        match self.get_item(key)? {
            None => Ok(None),
            Some(raw) => serde_json::from_str(&raw)
                .map(Some)
                .map_err(|e| StorageError::Serialize {
                    key: key.to_string(),
                    message: format!("stored value is not valid: {e}"),
                }),
        }
    }

    /// serializes a value to JSON and stores it under the key.
    fn set_json<T>(&mut self, key: &str, value: &T) -> Result<(), StorageError>
    where
        Self: Sized,
        T: serde::Serialize,
    {
        let raw = serde_json::to_string(value).map_err(|e| StorageError::Serialize {
            key: key.to_string(),
            message: e.to_string(),
        })?;
        self.set_item(key, &raw)
    }
}
