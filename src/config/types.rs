use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Delay before the landing splash hands over to the search view.
pub const DEFAULT_LANDING_DELAY_MS: u64 = 2000;
/// Number of recent brand lookups kept in the history list.
pub const DEFAULT_HISTORY_LIMIT: usize = 3;

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub lookup: LookupConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub storage: StorageConfig,
}

/// Drug pricing service settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LookupConfig {
    /// Base URL the `/drug-info` path is appended to.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

/// Terminal UI settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Landing splash duration in milliseconds (default: 2000).
    #[serde(default = "default_landing_delay_ms")]
    pub landing_delay_ms: u64,
    /// Recent searches kept in history (default: 3).
    #[serde(default = "default_history_limit")]
    pub history_limit: usize,
    /// Redraw interval in milliseconds (default: 250).
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

/// Where favorites and alerts are persisted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Overrides the platform data directory.
    #[serde(default)]
    pub data_dir: Option<PathBuf>,
}

fn default_base_url() -> String {
    "http://localhost:5001".to_string()
}

fn default_landing_delay_ms() -> u64 {
    DEFAULT_LANDING_DELAY_MS
}

fn default_history_limit() -> usize {
    DEFAULT_HISTORY_LIMIT
}

fn default_tick_rate_ms() -> u64 {
    250
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            landing_delay_ms: default_landing_delay_ms(),
            history_limit: default_history_limit(),
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}

impl StorageConfig {
    /// Configured directory, else `<data_dir>/medwise`, else `./.medwise`.
    pub fn resolve_data_dir(&self) -> PathBuf {
        if let Some(dir) = &self.data_dir {
            return dir.clone();
        }
        dirs::data_dir()
            .map(|dir| dir.join("medwise"))
            .unwrap_or_else(|| PathBuf::from(".medwise"))
    }
}
