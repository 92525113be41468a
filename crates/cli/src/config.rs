// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Household configuration management.
//!
//! Configuration is stored in `.chorequest/config.toml` and includes:
//! - `parent_pin`: the shared PIN that unlocks `cq admin`
//! - `history_limit`: how many completions `cq history` shows by default
//! - `database`: optional path to keep the database somewhere else

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::env;
use crate::error::{Error, Result};

pub const WORK_DIR_NAME: &str = ".chorequest";
const CONFIG_FILE_NAME: &str = "config.toml";
const DB_FILE_NAME: &str = "chores.db";

pub const DEFAULT_PIN: &str = "1234";
pub const DEFAULT_HISTORY_LIMIT: usize = 10;

/// Household configuration stored in `.chorequest/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// PIN a parent must supply to use the admin commands.
    #[serde(default = "default_pin")]
    pub parent_pin: String,
    /// Number of history entries shown when no limit is given.
    #[serde(default = "default_history_limit")]
    pub history_limit: usize,
    /// Optional path for the database file (relative to the project root,
    /// absolute, or starting with `~/`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub database: Option<String>,
}

fn default_pin() -> String {
    DEFAULT_PIN.to_string()
}

fn default_history_limit() -> usize {
    DEFAULT_HISTORY_LIMIT
}

impl Default for Config {
    fn default() -> Self {
        Config {
            parent_pin: default_pin(),
            history_limit: default_history_limit(),
            database: None,
        }
    }
}

impl Config {
    /// Creates a config with the given parent PIN.
    ///
    /// # Errors
    ///
    /// Returns [`Error::FieldEmpty`] if the PIN is blank.
    pub fn with_pin(pin: &str) -> Result<Self> {
        let pin = pin.trim();
        if pin.is_empty() {
            return Err(Error::FieldEmpty { field: "PIN" });
        }
        Ok(Config {
            parent_pin: pin.to_string(),
            ..Config::default()
        })
    }

    /// Loads configuration from the given `.chorequest/` directory.
    pub fn load(work_dir: &Path) -> Result<Self> {
        let config_path = work_dir.join(CONFIG_FILE_NAME);
        let content = fs::read_to_string(&config_path)
            .map_err(|e| Error::Config(format!("failed to read config: {}", e)))?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| Error::Config(format!("failed to parse config: {}", e)))?;
        Ok(config)
    }

    /// Saves configuration to the given `.chorequest/` directory.
    pub fn save(&self, work_dir: &Path) -> Result<()> {
        let config_path = work_dir.join(CONFIG_FILE_NAME);
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("failed to serialize config: {}", e)))?;
        fs::write(&config_path, content)?;
        Ok(())
    }
}

/// Find the `.chorequest` directory.
///
/// An explicit directory wins when given. Otherwise walk up from `start`.
pub fn find_work_dir_from(explicit: Option<PathBuf>, start: &Path) -> Result<PathBuf> {
    if let Some(dir) = explicit {
        return if dir.is_dir() {
            Ok(dir)
        } else {
            Err(Error::NotInitialized)
        };
    }

    let mut current = start.to_path_buf();
    loop {
        let work_dir = current.join(WORK_DIR_NAME);
        if work_dir.is_dir() {
            return Ok(work_dir);
        }
        if !current.pop() {
            return Err(Error::NotInitialized);
        }
    }
}

/// Find the `.chorequest` directory from `CQ_DIR` or by walking up from the
/// current directory.
pub fn find_work_dir() -> Result<PathBuf> {
    find_work_dir_from(env::work_dir(), &std::env::current_dir()?)
}

/// Get the database path from config
pub fn get_db_path(work_dir: &Path, config: &Config) -> PathBuf {
    let Some(database) = &config.database else {
        return work_dir.join(DB_FILE_NAME);
    };

    if let Some(rest) = database.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }

    let path = Path::new(database);
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        // Relative to work_dir's parent (the project root)
        work_dir.parent().unwrap_or(work_dir).join(path)
    }
}

/// Initialize a new `.chorequest` directory at the given path
pub fn init_work_dir(path: &Path, config: &Config) -> Result<PathBuf> {
    let work_dir = path.join(WORK_DIR_NAME);

    if work_dir.exists() {
        return Err(Error::AlreadyInitialized(work_dir.display().to_string()));
    }

    fs::create_dir_all(&work_dir)?;
    config.save(&work_dir)?;

    Ok(work_dir)
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
