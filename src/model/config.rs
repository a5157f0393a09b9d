use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

use super::task::Filter;

/// Configuration from config.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub log: LogConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Heading shown above the input row
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_true")]
    pub show_key_hints: bool,
    /// Filter selected at startup
    #[serde(default)]
    pub filter: Filter,
    /// Theme slot overrides, e.g. `highlight = "#FB4196"`
    #[serde(default)]
    pub colors: HashMap<String, String>,
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            title: default_title(),
            show_key_hints: true,
            filter: Filter::All,
            colors: HashMap::new(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LogConfig {
    /// Write tracing output here. Unset = no logging.
    #[serde(default)]
    pub file: Option<PathBuf>,
    /// `EnvFilter` directive used when `TASKLET_LOG` is not set
    #[serde(default)]
    pub level: Option<String>,
}

fn default_title() -> String {
    "Todo App".to_string()
}

fn default_true() -> bool {
    true
}
