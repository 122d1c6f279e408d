use std::path::PathBuf;

use directories_next::ProjectDirs;

use crate::error::{Result, StorageError};

/// Overrides the directory the state is persisted in
pub const DATA_DIR_ENV: &str = "GRAVATAR_STATUS_DATA_DIR";

const STATE_PATH: &str = "state.json";

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
    pub data_dir: PathBuf,
    pub file_name: String,
}

impl Config {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            file_name: STATE_PATH.to_string(),
        }
    }

    /// The platform config directory, unless `GRAVATAR_STATUS_DATA_DIR` is set
    pub fn from_env() -> Result<Self> {
        if let Some(dir) = std::env::var_os(DATA_DIR_ENV).filter(|d| !d.is_empty()) {
            return Ok(Self::new(dir));
        }
        let proj_dirs =
            ProjectDirs::from("com", "gravatar", "gravatar-status").ok_or(StorageError::NoDataDir)?;
        Ok(Self::new(proj_dirs.config_dir()))
    }

    pub fn with_file_name(mut self, file_name: impl Into<String>) -> Self {
        self.file_name = file_name.into();
        self
    }

    pub fn state_path(&self) -> PathBuf {
        self.data_dir.join(&self.file_name)
    }
}
