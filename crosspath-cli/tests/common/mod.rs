//! Common test utilities for CLI integration tests.
//!
//! Every command runs with `HOME` pointed at a temporary directory and the
//! `CROSSPATH_*` variables cleared, so the developer's own configuration
//! never leaks into a test.

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const ENV_VARS: &[&str] = &[
    "CROSSPATH_CONFIG",
    "CROSSPATH_DISPLAY_NAME",
    "CROSSPATH_PLATFORM",
    "CROSSPATH_LOG_MODE",
];

/// Test environment with an isolated home directory.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the temporary directory
    pub temp_path: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let temp_path = temp_dir.path().to_path_buf();
        Self {
            temp_dir,
            temp_path,
        }
    }

    /// A command for the crosspath binary with an isolated environment.
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("crosspath").expect("Failed to find crosspath binary");
        cmd.env("HOME", &self.temp_path);
        for var in ENV_VARS {
            cmd.env_remove(var);
        }
        cmd
    }

    /// Get the temp path.
    pub fn path(&self) -> &Path {
        &self.temp_path
    }

    /// Write a file under the temporary directory and return its path.
    pub fn write_file(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.temp_path.join(name);
        std::fs::write(&path, contents).expect("Failed to write test file");
        path
    }

    /// Write `~/.crosspath/config.yaml` inside the isolated home.
    pub fn write_user_config(&self, contents: &str) -> PathBuf {
        let dir = self.temp_path.join(".crosspath");
        std::fs::create_dir_all(&dir).expect("Failed to create config directory");
        let path = dir.join("config.yaml");
        std::fs::write(&path, contents).expect("Failed to write user config");
        path
    }

    /// Run the command with `args` and return stdout, asserting success.
    pub fn stdout_of(&self, args: &[&str]) -> String {
        let output = self.command().args(args).output().expect("Failed to run crosspath");
        assert!(
            output.status.success(),
            "crosspath {args:?} failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );
        String::from_utf8(output.stdout).expect("Invalid UTF-8 in output")
    }
}
