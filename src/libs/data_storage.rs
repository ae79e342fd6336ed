//! Location of taskmig's own files (currently just `config.json`).
//!
//! `TASKMIG_DATA_DIR` overrides the platform default when set and non-empty.

use std::env;
use std::fs;
use std::io;
use std::path::PathBuf;

/// Environment variable that replaces the platform data directory.
pub const DATA_DIR_ENV: &str = "TASKMIG_DATA_DIR";

pub const VENDOR_NAME: &str = "taskmig";
pub const APP_NAME: &str = "taskmig";

#[derive(Clone, Debug)]
pub struct DataStorage {
    base_path: PathBuf,
}

impl DataStorage {
    pub fn new() -> Self {
        let base_path = match env::var_os(DATA_DIR_ENV) {
            Some(dir) if !dir.is_empty() => PathBuf::from(dir),
            _ => platform_data_dir().join(VENDOR_NAME).join(APP_NAME),
        };
        Self { base_path }
    }

    /// Directory holding taskmig's files; it may not exist yet.
    pub fn base_path(&self) -> &PathBuf {
        &self.base_path
    }

    /// Path of `file_name` inside the data directory, creating the directory on demand.
    pub fn get_path(&self, file_name: &str) -> io::Result<PathBuf> {
        fs::create_dir_all(&self.base_path)?;
        Ok(self.base_path.join(file_name))
    }
}

impl Default for DataStorage {
    fn default() -> Self {
        Self::new()
    }
}

fn home_or_cwd(var: &str) -> PathBuf {
    env::var_os(var).map(PathBuf::from).unwrap_or_else(|| PathBuf::from("."))
}

fn platform_data_dir() -> PathBuf {
    if cfg!(windows) {
        home_or_cwd("LOCALAPPDATA")
    } else if cfg!(target_os = "macos") {
        home_or_cwd("HOME").join("Library").join("Application Support")
    } else {
        home_or_cwd("HOME").join(".local").join("share")
    }
}
