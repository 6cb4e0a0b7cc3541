//! Configuration module for Folio
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (FOLIO_*)
//! 3. Project config (`folio.toml`, or the file passed with `--config`)
//! 4. User config (`<config dir>/folio/config.toml`)
//! 5. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{
    load_with_warnings, resolve, with_env_overrides, ConfigWarning, LoadedConfig,
    PROJECT_CONFIG_FILE,
};
pub use types::{AssetsConfig, Config, OutputConfig, WatchConfig};
