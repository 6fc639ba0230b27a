//! Runtime configuration.
//!
//! The only setting is where the task file lives. It defaults to
//! `~/todo.json` and can be overridden with `--db`.

use std::path::PathBuf;

use directories::BaseDirs;

use crate::error::{Error, Result};

/// File name of the task store inside the home directory.
pub const STORE_FILE_NAME: &str = "todo.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub store_path: PathBuf,
}

impl Config {
    /// Resolve the store path, preferring an explicit override.
    pub fn resolve(db_override: Option<PathBuf>) -> Result<Self> {
        let store_path = match db_override {
            Some(path) => path,
            None => BaseDirs::new()
                .ok_or(Error::NoHomeDir)?
                .home_dir()
                .join(STORE_FILE_NAME),
        };
        Ok(Config { store_path })
    }
}
