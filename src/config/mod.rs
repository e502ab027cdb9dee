//! Persistent user preferences.

mod manager;

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use manager::ConfigManager;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serde(String),
}

/// Stores user-configurable CLI preferences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Overrides the donor name pre-filled in the booking wizard.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub donor_name: Option<String>,

    /// JSON file holding the center directory. Built-in centers are used when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub directory_path: Option<PathBuf>,

    /// Command line the assistant prompt is piped to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assistant_command: Option<String>,

    #[serde(default = "Config::default_low_stock_threshold")]
    pub low_stock_threshold: u8,

    #[serde(default = "Config::default_ui_color_enabled")]
    pub ui_color_enabled: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            donor_name: None,
            directory_path: None,
            assistant_command: None,
            low_stock_threshold: Self::default_low_stock_threshold(),
            ui_color_enabled: Self::default_ui_color_enabled(),
        }
    }
}

impl Config {
    pub fn default_low_stock_threshold() -> u8 {
        30
    }

    pub fn default_ui_color_enabled() -> bool {
        true
    }

    /// Applies `key = value` from the `config set` command.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), String> {
        let value = value.trim();
        let optional = || (!value.is_empty()).then(|| value.to_string());
        match key {
            "donor_name" => self.donor_name = optional(),
            "directory_path" => self.directory_path = optional().map(PathBuf::from),
            "assistant_command" => self.assistant_command = optional(),
            "low_stock_threshold" => {
                let parsed: u8 = value
                    .parse()
                    .map_err(|_| format!("`{value}` is not a percentage between 0 and 100"))?;
                if parsed > 100 {
                    return Err(format!("`{value}` is not a percentage between 0 and 100"));
                }
                self.low_stock_threshold = parsed;
            }
            "ui_color_enabled" => {
                self.ui_color_enabled = match value.to_ascii_lowercase().as_str() {
                    "true" | "yes" | "on" | "1" => true,
                    "false" | "no" | "off" | "0" => false,
                    _ => return Err(format!("`{value}` is not a boolean")),
                }
            }
            other => return Err(format!("Unknown setting `{other}`")),
        }
        Ok(())
    }

    /// `(key, value)` pairs for display.
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        let or_unset = |value: Option<String>| value.unwrap_or_else(|| "(unset)".into());
        vec![
            ("donor_name", or_unset(self.donor_name.clone())),
            (
                "directory_path",
                or_unset(
                    self.directory_path
                        .as_ref()
                        .map(|path| path.display().to_string()),
                ),
            ),
            ("assistant_command", or_unset(self.assistant_command.clone())),
            ("low_stock_threshold", self.low_stock_threshold.to_string()),
            ("ui_color_enabled", self.ui_color_enabled.to_string()),
        ]
    }
}
