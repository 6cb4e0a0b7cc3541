//! Command handlers for the `folio` binary

use std::path::PathBuf;

use anyhow::{Context as _, Result};

use folio::config::{resolve, Config};

pub mod build;
pub mod columns;
pub mod diff;
pub mod list;
pub mod title;
pub mod watch;

/// Global flags shared by every command
#[derive(Debug, Clone)]
pub struct Context {
    pub json: bool,
    pub config: Option<PathBuf>,
}

impl Context {
    /// Resolve configuration from the working directory, printing any
    /// unknown-key warnings to stderr.
    pub fn load_config(&self) -> Result<Config> {
        let cwd = std::env::current_dir()?;
        let loaded = resolve(&cwd, self.config.as_deref()).with_context(|| match &self.config {
            Some(path) => format!("failed to load config {}", path.display()),
            None => "failed to load configuration".to_string(),
        })?;

        if let Some(source) = &loaded.source {
            tracing::debug!(path = %source.display(), "loaded config");
        }
        for warning in &loaded.warnings {
            eprintln!("warning: {}", warning);
        }
        Ok(loaded.config)
    }
}
