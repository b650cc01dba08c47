//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing, including:
//! - Test environment setup with temporary directories
//! - Fixture builders for plain files, directories and alias files

use assert_cmd::Command;
use osx_alias::bookmark::BookmarkBuilder;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Environment variables the binary reads, cleared for every test command.
const CONFIG_VARS: &[&str] = &["RESOLVE_OSX_ALIAS_LOG_MODE", "RESOLVE_OSX_ALIAS_DEBUG"];

/// Test environment rooted in a temporary directory.
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

    /// Get a bare command builder with no environment adjustments.
    pub fn command_bare(&self) -> Command {
        Command::cargo_bin("resolve-osx-alias").expect("Failed to find resolve-osx-alias binary")
    }

    /// Get a command running inside the temp directory.
    ///
    /// Both the process working directory and `PWD` point at the temp
    /// directory, and configuration variables from the outer environment are
    /// removed.
    pub fn command(&self) -> Command {
        let mut cmd = self.command_bare();
        cmd.current_dir(&self.temp_path).env("PWD", &self.temp_path);
        for var in CONFIG_VARS {
            cmd.env_remove(var);
        }
        cmd
    }

    /// Get the temp path.
    pub fn path(&self) -> &Path {
        &self.temp_path
    }

    /// Absolute path of `rel` inside the environment, as a string.
    pub fn abs(&self, rel: &str) -> String {
        self.temp_path.join(rel).to_string_lossy().into_owned()
    }

    /// Create a subdirectory and return its absolute path.
    pub fn create_dir(&self, rel: &str) -> String {
        let path = self.temp_path.join(rel);
        std::fs::create_dir_all(&path).expect("Failed to create test directory");
        path.to_string_lossy().into_owned()
    }

    /// Create a file with the given contents and return its absolute path.
    pub fn create_file(&self, rel: &str, contents: &[u8]) -> String {
        let path = self.temp_path.join(rel);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&path, contents).expect("Failed to write test file");
        path.to_string_lossy().into_owned()
    }

    /// Create an alias file recording `target` and return its absolute path.
    pub fn create_alias(&self, rel: &str, target: &str, is_directory: bool) -> String {
        let data = BookmarkBuilder::for_target(target, is_directory).build();
        self.create_file(rel, &data)
    }
}

/// Stdout of a finished command as a string.
#[allow(dead_code)]
pub fn stdout_of(output: &std::process::Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

/// JSON payloads of the `DEBUG:` lines on stderr.
#[allow(dead_code)]
pub fn debug_records(output: &std::process::Output) -> Vec<serde_json::Value> {
    String::from_utf8_lossy(&output.stderr)
        .lines()
        .filter_map(|line| line.strip_prefix("DEBUG: "))
        .map(|json| serde_json::from_str(json).expect("DEBUG line is not JSON"))
        .collect()
}
