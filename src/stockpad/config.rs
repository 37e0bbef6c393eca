//! # Configuration
//!
//! Settings live in `config.json` inside the stockpad config directory
//! (`$STOCKPAD_HOME`, or the OS config dir for `stockpad`). Every key is
//! optional; a missing file means all defaults.
//!
//! | Key (file)       | Key (CLI)        | Default         |
//! |------------------|------------------|-----------------|
//! | `data_file`      | `data-file`      | `products.json` |
//! | `confirm_delete` | `confirm-delete` | `true`          |
//!
//! A relative `data_file` resolves against the current directory.

use crate::error::{Result, StockError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_DATA_FILE: &str = "products.json";

pub const KEYS: &[&str] = &["data-file", "confirm-delete"];

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StockConfig {
    /// Where the product catalog is stored
    #[serde(default = "default_data_file")]
    pub data_file: String,

    /// Ask before deleting a product
    #[serde(default = "default_confirm_delete")]
    pub confirm_delete: bool,
}

fn default_data_file() -> String {
    DEFAULT_DATA_FILE.to_string()
}

fn default_confirm_delete() -> bool {
    true
}

impl Default for StockConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            confirm_delete: default_confirm_delete(),
        }
    }
}

impl StockConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(StockError::Io)?;
        let config: StockConfig =
            serde_json::from_str(&content).map_err(StockError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(StockError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(StockError::Serialization)?;
        fs::write(config_path, content).map_err(StockError::Io)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Result<String> {
        match key {
            "data-file" => Ok(self.data_file.clone()),
            "confirm-delete" => Ok(self.confirm_delete.to_string()),
            other => Err(unknown_key(other)),
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "data-file" => {
                if value.trim().is_empty() {
                    return Err(StockError::Config("data-file cannot be empty".to_string()));
                }
                self.data_file = value.to_string();
            }
            "confirm-delete" => {
                self.confirm_delete = parse_bool(value).ok_or_else(|| {
                    StockError::Config(format!(
                        "confirm-delete expects true or false (got '{}')",
                        value
                    ))
                })?;
            }
            other => return Err(unknown_key(other)),
        }
        Ok(())
    }

    /// `(key, value)` pairs in display order.
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        KEYS.iter()
            .filter_map(|k| self.get(k).ok().map(|v| (*k, v)))
            .collect()
    }
}

fn unknown_key(key: &str) -> StockError {
    StockError::Config(format!(
        "Unknown config key: {} (expected one of: {})",
        key,
        KEYS.join(", ")
    ))
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Some(true),
        "false" | "no" | "off" | "0" => Some(false),
        _ => None,
    }
}
