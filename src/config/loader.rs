//! Configuration loading

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{FolioError, FolioResult};

use super::types::Config;

/// File name of the project-level config
pub const PROJECT_CONFIG_FILE: &str = "folio.toml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown config key '{}' in {}", self.key, self.file.display())?;
        if let Some(line) = self.line {
            write!(f, ":{}", line)?;
        }
        if let Some(suggestion) = &self.suggestion {
            write!(f, " (did you mean '{}'?)", suggestion)?;
        }
        Ok(())
    }
}

/// Effective configuration and where it came from
#[derive(Debug, Clone, Default)]
pub struct LoadedConfig {
    pub config: Config,
    /// Config file that was read, if any
    pub source: Option<PathBuf>,
    pub warnings: Vec<ConfigWarning>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> FolioResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| FolioError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Resolve the effective configuration for `project_root`.
///
/// An explicit config path must exist. Otherwise `folio.toml` in the
/// project root is tried, then the user config, then defaults. Environment
/// overrides are applied last.
pub fn resolve(project_root: &Path, explicit: Option<&Path>) -> FolioResult<LoadedConfig> {
    let user_config = dirs::config_dir().map(|dir| dir.join("folio").join("config.toml"));
    let loaded = resolve_from(project_root, explicit, user_config.as_deref())?;
    Ok(LoadedConfig {
        config: with_env_overrides(loaded.config, |key| std::env::var(key).ok()),
        ..loaded
    })
}

fn resolve_from(
    project_root: &Path,
    explicit: Option<&Path>,
    user_config: Option<&Path>,
) -> FolioResult<LoadedConfig> {
    if let Some(path) = explicit {
        return load_file(path);
    }

    let project_config = project_root.join(PROJECT_CONFIG_FILE);
    if project_config.is_file() {
        return load_file(&project_config);
    }

    if let Some(path) = user_config.filter(|p| p.is_file()) {
        return load_file(path);
    }

    Ok(LoadedConfig::default())
}

fn load_file(path: &Path) -> FolioResult<LoadedConfig> {
    let (config, warnings) = load_with_warnings(path)?;
    tracing::debug!(path = %path.display(), warnings = warnings.len(), "loaded config");
    Ok(LoadedConfig {
        config,
        source: Some(path.to_path_buf()),
        warnings,
    })
}

/// Apply environment variable overrides (FOLIO_* prefix).
///
/// `lookup` returns the value of a variable, if set.
pub fn with_env_overrides(mut config: Config, lookup: impl Fn(&str) -> Option<String>) -> Config {
    if let Some(source) = lookup("FOLIO_SOURCE").filter(|v| !v.is_empty()) {
        config.assets.source = PathBuf::from(source);
    }

    if let Some(output) = lookup("FOLIO_OUTPUT").filter(|v| !v.is_empty()) {
        config.output.path = PathBuf::from(output);
    }

    if let Some(base) = lookup("FOLIO_PUBLIC_BASE") {
        config.assets.public_base = base;
    }

    if let Some(val) = lookup("FOLIO_PRETTY") {
        config.output.pretty = val.to_lowercase() != "false" && val != "0";
    }

    config
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "assets",
        "source",
        "prefix",
        "public_base",
        "output",
        "path",
        "pretty",
        "watch",
        "debounce_ms",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
