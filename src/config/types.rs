//! Configuration type definitions

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::asset_path::DEFAULT_PREFIX;

/// Where project assets live and how they are addressed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetsConfig {
    /// Directory to scan
    #[serde(default = "default_source")]
    pub source: PathBuf,

    /// Prefix of manifest keys (`assets/projects/<name>.<ext>`)
    #[serde(default = "default_prefix")]
    pub prefix: String,

    /// Prepended to every manifest key to form a resource handle
    #[serde(default = "default_public_base")]
    pub public_base: String,
}

impl Default for AssetsConfig {
    fn default() -> Self {
        Self {
            source: default_source(),
            prefix: default_prefix(),
            public_base: default_public_base(),
        }
    }
}

fn default_source() -> PathBuf {
    PathBuf::from("src/assets/projects")
}

fn default_prefix() -> String {
    DEFAULT_PREFIX.to_string()
}

fn default_public_base() -> String {
    "/".to_string()
}

/// Published manifest settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_output_path")]
    pub path: PathBuf,

    #[serde(default = "default_true")]
    pub pretty: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: default_output_path(),
            pretty: true,
        }
    }
}

fn default_output_path() -> PathBuf {
    PathBuf::from("public/projects.json")
}

fn default_true() -> bool {
    true
}

/// Watch mode settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WatchConfig {
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
}

impl Default for WatchConfig {
    fn default() -> Self {
        Self {
            debounce_ms: default_debounce_ms(),
        }
    }
}

fn default_debounce_ms() -> u64 {
    100
}

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub assets: AssetsConfig,

    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub watch: WatchConfig,
}
