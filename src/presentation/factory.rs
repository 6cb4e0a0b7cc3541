//! Use Case Factory
//!
//! Wires configuration and CLI overrides into scanners and use cases.

use std::path::PathBuf;
use std::time::Duration;

use crate::application::{BuildOptions, BuildUseCase};
use crate::config::Config;
use crate::infrastructure::FsAssetScanner;
use crate::watcher::WatchOptions;

/// Effective settings after CLI flags are applied over config
#[derive(Debug, Clone)]
pub struct Settings {
    pub scanner: FsAssetScanner,
    pub build: BuildOptions,
    pub debounce: Duration,
}

impl Settings {
    pub fn resolve(config: &Config, source: Option<PathBuf>, output: Option<PathBuf>) -> Self {
        let mut assets = config.assets.clone();
        if let Some(source) = source {
            assets.source = source;
        }
        let output = output.unwrap_or_else(|| config.output.path.clone());

        Self {
            scanner: FsAssetScanner::from_config(&assets),
            build: BuildOptions::new(output).with_pretty(config.output.pretty),
            debounce: Duration::from_millis(config.watch.debounce_ms),
        }
    }

    pub fn watch_options(&self) -> WatchOptions {
        WatchOptions {
            scanner: self.scanner.clone(),
            build: self.build.clone(),
            debounce: self.debounce,
        }
    }
}

/// Build use case reading from the configured asset root
pub fn create_build_use_case(settings: &Settings) -> BuildUseCase<FsAssetScanner> {
    BuildUseCase::new(settings.scanner.clone())
}
