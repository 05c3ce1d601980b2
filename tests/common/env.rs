//! Isolated CLI runs.
//!
//! Each run gets its own config path and a scrubbed environment so the
//! developer's own Zotero settings never leak into tests.

use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Stdio};
use tempfile::TempDir;

/// Result of running the CLI
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

pub struct TestEnv {
    pub config_dir: TempDir,
    bin: PathBuf,
    env: Vec<(String, String)>,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            config_dir: TempDir::new().expect("temp config dir"),
            bin: PathBuf::from(env!("CARGO_BIN_EXE_zotero-collection")),
            env: Vec::new(),
        }
    }

    pub fn config_path(&self) -> PathBuf {
        self.config_dir.path().join("config.toml")
    }

    pub fn write_config(&self, content: &str) {
        std::fs::write(self.config_path(), content).expect("write config");
    }

    pub fn with_env(mut self, key: &str, value: &str) -> Self {
        self.env.push((key.to_string(), value.to_string()));
        self
    }

    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_stdin(args, "")
    }

    pub fn run_with_stdin(&self, args: &[&str], stdin: &str) -> TestResult {
        let mut cmd = Command::new(&self.bin);
        cmd.args(args)
            .env_remove("ZOTERO_PORT")
            .env_remove("ZOTERO_COLLECTION_FINDER")
            .env_remove("ZOTERO_COLLECTION_NO_FZF")
            .env_remove("ZOTERO_COLLECTION_LOG")
            .env("ZOTERO_COLLECTION_CONFIG", self.config_path())
            .env("NO_COLOR", "1")
            .env("TERM", "xterm-256color")
            .env("LANG", "en_US.UTF-8")
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        for (key, value) in &self.env {
            cmd.env(key, value);
        }

        let mut child = cmd.spawn().expect("spawn zotero-collection");
        if let Some(mut input) = child.stdin.take() {
            let _ = input.write_all(stdin.as_bytes());
        }
        let output = child.wait_with_output().expect("wait for zotero-collection");

        TestResult {
            success: output.status.success(),
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}
