//! Test environment - isolated directories for CLI runs.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use tempfile::TempDir;

/// Result of running the arbor CLI
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Combined stdout and stderr for diagnostics
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }
}

/// Isolated test environment.
///
/// The binary runs with the temp directory as working directory and as its
/// home/config root, so neither a real `arbor.toml` nor `ARBOR_*` variables
/// of the developer leak into a test.
pub struct TestEnv {
    root: TempDir,
    arbor_bin: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            root: TempDir::new().expect("Failed to create temp dir"),
            arbor_bin: PathBuf::from(env!("CARGO_BIN_EXE_arbor")),
        }
    }

    pub fn path(&self, rel: &str) -> PathBuf {
        self.root.path().join(rel)
    }

    /// Write a file relative to the environment root
    pub fn write(&self, rel: &str, content: &str) -> PathBuf {
        let path = self.path(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dir");
        }
        fs::write(&path, content).expect("Failed to write file");
        path
    }

    /// Run arbor in this environment
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    /// Run arbor with extra environment variables
    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let mut cmd = Command::new(&self.arbor_bin);
        cmd.current_dir(self.root.path())
            .args(args)
            .with_isolated_config(self.root.path());

        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("Failed to run arbor");
        TestResult {
            success: output.status.success(),
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }
}

trait IsolatedConfig {
    fn with_isolated_config(&mut self, root: &Path) -> &mut Self;
}

impl IsolatedConfig for Command {
    fn with_isolated_config(&mut self, root: &Path) -> &mut Self {
        for key in [
            "ARBOR_ID_FIELD",
            "ARBOR_PARENT_FIELD",
            "ARBOR_PADDING",
            "ARBOR_MAX_DEPTH",
            "ARBOR_ICONS",
            "ARBOR_SUBMENU_OPEN",
            "RUST_LOG",
        ] {
            self.env_remove(key);
        }
        self.env("HOME", root).env("XDG_CONFIG_HOME", root.join(".config"))
    }
}
