//! TestWorld pattern for declarative CLI test setup.
//!
//! Provides a fluent interface for:
//! - Creating an isolated config file location
//! - Starting a fake collaborator store with seeded complaints
//! - Executing CLI commands against that store

use anyhow::Result;
use assert_cmd::Command;
use complaintdesk_types::Complaint;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use tokio::runtime::Runtime;

use crate::fixtures;
use crate::server::FakeStoreServer;

/// Declarative test environment builder.
///
/// The world owns a runtime for the fake store so tests stay plain
/// `#[test]` functions while the CLI process talks to the server.
///
/// # Example
/// ```no_run
/// use complaintdesk_testing::TestWorld;
///
/// let world = TestWorld::new().with_sample_complaints();
///
/// let result = world.run_json(&["list"]).unwrap();
/// assert!(result.success());
/// ```
pub struct TestWorld {
    temp_dir: TempDir,
    config_path: PathBuf,
    env_vars: HashMap<String, String>,
    store: Option<FakeStoreServer>,
    runtime: Runtime,
}

impl Default for TestWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl TestWorld {
    /// Create a new isolated test environment without a store.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let config_path = temp_dir.path().join("config.toml");
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_all()
            .build()
            .expect("Failed to build runtime");

        Self {
            temp_dir,
            config_path,
            env_vars: HashMap::new(),
            store: None,
            runtime,
        }
    }

    /// Start a fake store holding `complaints`.
    pub fn with_store(mut self, complaints: Vec<Complaint>) -> Self {
        let store = self
            .runtime
            .block_on(FakeStoreServer::start_with(complaints));
        self.store = Some(store);
        self
    }

    /// Start a fake store holding the two demo complaints.
    pub fn with_sample_complaints(self) -> Self {
        self.with_store(fixtures::sample_complaints())
    }

    /// Write a config file at the path passed via `--config`.
    pub fn with_config(self, contents: &str) -> Self {
        std::fs::write(&self.config_path, contents).expect("Failed to write config");
        self
    }

    /// Set an environment variable for CLI execution.
    pub fn with_env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env_vars.insert(key.into(), value.into());
        self
    }

    pub fn store(&self) -> &FakeStoreServer {
        self.store.as_ref().expect("TestWorld has no store")
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    pub fn temp_dir(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Write a file under the temp root and return its path.
    pub fn write_file(&self, name: &str, bytes: &[u8]) -> PathBuf {
        let path = self.temp_dir.path().join(name);
        std::fs::write(&path, bytes).expect("Failed to write file");
        path
    }

    /// Configure a CLI command with this test environment's settings.
    ///
    /// The store endpoint is passed through `COMPLAINTDESK_ENDPOINT` so
    /// tests can still override it with `--endpoint`.
    pub fn configure_command<'a>(&self, cmd: &'a mut Command) -> &'a mut Command {
        cmd.arg("--config").arg(&self.config_path);
        cmd.current_dir(self.temp_dir.path());
        cmd.env_remove("RUST_LOG");
        cmd.env_remove("COMPLAINTDESK_CONFIG");
        cmd.env_remove("COMPLAINTDESK_ENDPOINT");

        if let Some(store) = &self.store {
            cmd.env("COMPLAINTDESK_ENDPOINT", store.endpoint());
        }

        for (key, value) in &self.env_vars {
            cmd.env(key, value);
        }

        cmd
    }

    /// Execute a command using the project's binary and return the result.
    ///
    /// # Note
    /// This method uses `Command::cargo_bin()` which requires the binary to be
    /// built and the `CARGO_BIN_EXE_` environment variable to be set (which
    /// cargo test does automatically).
    #[allow(deprecated)]
    pub fn run(&self, args: &[&str]) -> Result<CliResult> {
        let mut cmd = Command::cargo_bin("complaintdesk")
            .map_err(|e| anyhow::anyhow!("Failed to find complaintdesk binary: {}", e))?;

        self.configure_command(&mut cmd);
        cmd.args(args);

        let output = cmd.output()?;

        Ok(CliResult {
            status: output.status,
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }

    /// Execute a command with `--format json`.
    pub fn run_json(&self, args: &[&str]) -> Result<CliResult> {
        let mut full = vec!["--format", "json"];
        full.extend_from_slice(args);
        self.run(&full)
    }
}

/// Result of a CLI command execution.
#[derive(Debug)]
pub struct CliResult {
    pub status: std::process::ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

impl CliResult {
    /// Check if the command succeeded.
    pub fn success(&self) -> bool {
        self.status.success()
    }

    /// Parse stdout as JSON.
    pub fn json(&self) -> Result<serde_json::Value> {
        Ok(serde_json::from_str(&self.stdout)?)
    }

    pub fn stdout(&self) -> &str {
        &self.stdout
    }

    pub fn stderr(&self) -> &str {
        &self.stderr
    }
}
