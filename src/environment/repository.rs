use serde::Serialize;
use serde_json::{from_slice, to_string_pretty, Value};
use std::path::{Path, PathBuf};

use super::config::Config;
use crate::error::Result;

/// JSON file holding the persisted state tree
#[derive(Clone, Debug)]
pub struct Repository {
    path: PathBuf,
}

impl Repository {
    pub fn new(config: &Config) -> Result<Self> {
        let dirs = &config.data_dir;
        if !dirs.exists() {
            if let Err(e) = std::fs::create_dir_all(dirs) {
                log::error!("Could not create directory {}: {e:?}", dirs.display());
                return Err(e.into());
            }
        }
        Ok(Self {
            path: config.state_path(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn read(&self) -> Result<Option<Value>> {
        read(&self.path)
    }

    pub fn write<T: Serialize>(&self, value: &T) -> Result<()> {
        write(&self.path, value)
    }

    pub fn clear(&self) -> Result<()> {
        if self.path.exists() {
            std::fs::remove_file(&self.path)?;
        }
        Ok(())
    }
}

fn read(data_path: &Path) -> Result<Option<Value>> {
    if !data_path.exists() {
        return Ok(None);
    };
    let data = std::fs::read(data_path)?;
    let obj: Value = from_slice(&data)?;
    log::debug!("read state from {}", data_path.display());
    Ok(Some(obj))
}

fn write<T: Serialize>(data_path: &Path, value: &T) -> Result<()> {
    let data = to_string_pretty(&value)?;
    std::fs::write(data_path, data)?;
    log::debug!("wrote state to {}", data_path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StorageError;
    use serde_json::json;

    #[test]
    fn read_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let repository = Repository::new(&Config::new(dir.path())).unwrap();
        assert!(repository.read().unwrap().is_none());
    }

    #[test]
    fn write_then_read() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::new(dir.path().join("nested"));
        let repository = Repository::new(&config).unwrap();
        let value = json!({ "version": 1, "currentUser": { "id": 3 } });
        repository.write(&value).unwrap();
        assert_eq!(repository.read().unwrap(), Some(value));

        repository.clear().unwrap();
        assert!(repository.read().unwrap().is_none());
        // clearing twice is fine
        repository.clear().unwrap();
    }

    #[test]
    fn unparsable_file() {
        let dir = tempfile::tempdir().unwrap();
        let repository = Repository::new(&Config::new(dir.path())).unwrap();
        std::fs::write(repository.path(), "{ not json").unwrap();
        assert!(matches!(repository.read(), Err(StorageError::Json(_))));
    }
}
