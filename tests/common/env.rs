//! Test environment for isolated Folio CLI runs.

use std::path::{Path, PathBuf};
use std::process::Command;

use tempfile::TempDir;

/// Result of running a Folio CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }
}

/// Isolated project directory with its own HOME and config dir.
///
/// `FOLIO_*` variables from the outer environment are cleared so a
/// developer's shell cannot leak into assertions.
pub struct TestEnv {
    pub project_root: TempDir,
    pub home_dir: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            project_root: tempfile::tempdir().expect("Failed to create project dir"),
            home_dir: tempfile::tempdir().expect("Failed to create home dir"),
        }
    }

    /// Get path relative to project root
    pub fn project_path(&self, relative: &str) -> PathBuf {
        self.project_root.path().join(relative)
    }

    /// Directory `dirs::config_dir()` resolves to inside this environment
    pub fn config_dir(&self) -> PathBuf {
        self.home_dir.path().join(".config")
    }

    /// Write a file under the project root, creating parents
    pub fn write(&self, relative: &str, content: impl AsRef<[u8]>) {
        let path = self.project_path(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create directories");
        }
        std::fs::write(&path, content).expect("Failed to write file");
    }

    /// Write an asset under the default source directory
    pub fn write_asset(&self, relative: &str, content: impl AsRef<[u8]>) {
        self.write(&format!("src/assets/projects/{}", relative), content);
    }

    /// Read a file under the project root
    pub fn read(&self, relative: &str) -> String {
        std::fs::read_to_string(self.project_path(relative))
            .unwrap_or_else(|e| panic!("Failed to read {}: {}", relative, e))
    }

    /// Parse the default manifest as JSON
    pub fn read_manifest(&self) -> serde_json::Value {
        serde_json::from_str(&self.read("public/projects.json")).expect("manifest is valid JSON")
    }

    /// Run folio from the project root
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    /// Run folio from the project root with extra env vars
    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        self.run_from_with_env(self.project_root.path(), args, env_vars)
    }

    pub fn run_from_with_env(
        &self,
        cwd: &Path,
        args: &[&str],
        env_vars: &[(&str, &str)],
    ) -> TestResult {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_folio"));
        cmd.current_dir(cwd)
            .args(args)
            .env("HOME", self.home_dir.path())
            .env("XDG_CONFIG_HOME", self.config_dir())
            .env_remove("FOLIO_SOURCE")
            .env_remove("FOLIO_OUTPUT")
            .env_remove("FOLIO_PUBLIC_BASE")
            .env_remove("FOLIO_PRETTY")
            .env_remove("FOLIO_LOG");

        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("Failed to execute folio");
        TestResult {
            success: output.status.success(),
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }
}
