use std::path::Path;

use crate::model::storage::StorageError;

/// helper function to "mkdir -p path" - make all directories along a path
pub fn create_dirs<P>(path: P) -> Result<(), StorageError>
where
    P: AsRef<Path>,
{
    let dirspath = path.as_ref();
    if !dirspath.is_dir() {
        std::fs::create_dir_all(dirspath).map_err(|e| StorageError::Write {
            path: dirspath.to_path_buf(),
            message: format!("error building directory: {e}"),
        })
    } else {
        Ok(())
    }
}

/// reads a file to a string. a missing file is reported as None.
pub fn read_optional_string(path: &Path) -> Result<Option<String>, StorageError> {
    match std::fs::read_to_string(path) {
        Ok(contents) => Ok(Some(contents)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(source) => Err(StorageError::Read {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// writes the contents to a sibling temporary file before renaming it over the
/// destination, so readers never observe a partially written file.
pub fn write_string_replacing(path: &Path, contents: &str) -> Result<(), StorageError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        create_dirs(parent)?;
    }
    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    let tmp_path = Path::new(&tmp);
    std::fs::write(tmp_path, contents).map_err(|e| StorageError::Write {
        path: tmp_path.to_path_buf(),
        message: e.to_string(),
    })?;
    std::fs::rename(tmp_path, path).map_err(|e| {
        if let Err(cleanup) = std::fs::remove_file(tmp_path) {
            log::warn!("unable to remove '{}': {cleanup}", tmp_path.display());
        }
        StorageError::Write {
            path: path.to_path_buf(),
            message: format!(
                "unable to move '{}' into place: {e}",
                tmp_path.to_str().unwrap_or("?")
            ),
        }
    })
}
