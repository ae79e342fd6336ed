//! Configuration management for taskmig.
//!
//! Holds the settings that shape a migration run without being part of the
//! export itself: the name of the source service (used to label the namespace
//! that collects orphan lists) and the resource policy for attachment downloads.
//!
//! ## Storage
//!
//! The configuration is a JSON file in the platform application data directory:
//! - **Windows**: `%LOCALAPPDATA%\taskmig\taskmig\config.json`
//! - **macOS**: `~/Library/Application Support/taskmig/taskmig/config.json`
//! - **Linux**: `~/.local/share/taskmig/taskmig/config.json`
//!
//! A missing file is not an error; defaults apply. Command-line flags override
//! individual values for a single run.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use taskmig::libs::config::Config;
//!
//! let config = Config::read()?;
//! println!("Orphan lists go to {}", config.fallback_namespace());
//! ```

use super::data_storage::DataStorage;
use super::messages::Message;
use super::migration::DEFAULT_CONCURRENCY;
use crate::msg_print;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::time::Duration;

/// Configuration file name inside the data directory.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Source service assumed when nothing is configured.
pub const DEFAULT_SOURCE_NAME: &str = "wunderlist";

/// Label of the namespace holding lists that no folder claims.
pub fn fallback_namespace_for(source_name: &str) -> String {
    format!("Migrated from {}", source_name)
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Name of the service the export comes from.
    pub source_name: String,

    /// Explicit label for the orphan-list namespace.
    ///
    /// When unset the label is derived from `source_name`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fallback_namespace: Option<String>,

    /// Upper bound on concurrent attachment downloads and task conversions.
    pub fetch_concurrency: usize,

    /// Per-request timeout for attachment downloads, in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fetch_timeout_secs: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            source_name: DEFAULT_SOURCE_NAME.to_string(),
            fallback_namespace: None,
            fetch_concurrency: DEFAULT_CONCURRENCY,
            fetch_timeout_secs: None,
        }
    }
}

impl Config {
    /// Reads the configuration file, falling back to defaults when it does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    /// Writes the configuration as pretty-printed JSON.
    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Removes the configuration file if there is one.
    pub fn delete() -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        if config_file_path.exists() {
            fs::remove_file(config_file_path)?;
        }
        Ok(())
    }

    /// Interactive setup wizard, pre-filled with the current values.
    pub fn init() -> Result<Self> {
        let config = Self::read().unwrap_or_default();
        msg_print!(Message::ConfigModuleMigration);

        let source_name: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptSourceName.to_string())
            .default(config.source_name.clone())
            .interact_text()?;

        let fallback_namespace: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptFallbackNamespace.to_string())
            .default(config.fallback_namespace.clone().unwrap_or_else(|| fallback_namespace_for(&source_name)))
            .interact_text()?;

        let fetch_concurrency: usize = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptFetchConcurrency.to_string())
            .default(config.fetch_concurrency)
            .interact_text()?;

        // Zero means no timeout.
        let fetch_timeout_secs: u64 = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptFetchTimeout.to_string())
            .default(config.fetch_timeout_secs.unwrap_or(0))
            .interact_text()?;

        let derived = fallback_namespace_for(&source_name);
        Ok(Config {
            source_name,
            fallback_namespace: (fallback_namespace != derived).then_some(fallback_namespace),
            fetch_concurrency: fetch_concurrency.max(1),
            fetch_timeout_secs: (fetch_timeout_secs > 0).then_some(fetch_timeout_secs),
        })
    }

    /// The label of the namespace that collects orphan lists.
    pub fn fallback_namespace(&self) -> String {
        self.fallback_namespace
            .clone()
            .unwrap_or_else(|| fallback_namespace_for(&self.source_name))
    }

    /// Per-request download timeout; zero seconds means none.
    pub fn fetch_timeout(&self) -> Option<Duration> {
        self.fetch_timeout_secs.filter(|&secs| secs > 0).map(Duration::from_secs)
    }
}
