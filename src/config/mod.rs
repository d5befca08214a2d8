//! Application configuration loaded from `config.toml`.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{
    Config, LookupConfig, StorageConfig, UiConfig, DEFAULT_HISTORY_LIMIT,
    DEFAULT_LANDING_DELAY_MS,
};
