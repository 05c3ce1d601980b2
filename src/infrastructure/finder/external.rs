//! External Fuzzy Finder
//!
//! Spawns a program such as `fzf`, writes the records to its stdin, and
//! reads the chosen line from its stdout. The terminal UI runs on stderr
//! and the controlling tty, so stderr is inherited.

use std::io::Write;
use std::process::{Command, Stdio};

use crate::domain::ports::{FinderError, FuzzyFinder};

pub const DEFAULT_FINDER_PROGRAM: &str = "fzf";

pub const DEFAULT_FINDER_ARGS: &[&str] = &[
    "--height=40%",
    "--reverse",
    "--prompt=Collection> ",
    "--with-nth=2..",
    "--delimiter=:",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExternalFinder {
    program: String,
    args: Vec<String>,
}

impl ExternalFinder {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Check if the program is installed and runs.
    pub fn check_available(program: &str) -> bool {
        Command::new(program)
            .arg("--version")
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map(|s| s.success())
            .unwrap_or(false)
    }
}

impl FuzzyFinder for ExternalFinder {
    fn name(&self) -> &str {
        &self.program
    }

    fn is_available(&self) -> bool {
        Self::check_available(&self.program)
    }

    fn pick(&self, input: &str) -> Result<String, FinderError> {
        tracing::debug!(program = %self.program, args = ?self.args, "spawning fuzzy finder");

        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .spawn()
            .map_err(|e| FinderError::Spawn(e.to_string()))?;

        if let Some(mut stdin) = child.stdin.take() {
            // A finder that exits early closes the pipe; its status says why.
            if let Err(err) = stdin.write_all(input.as_bytes()) {
                tracing::debug!(error = %err, "fuzzy finder closed stdin early");
            }
        }

        let output = child
            .wait_with_output()
            .map_err(|e| FinderError::Spawn(e.to_string()))?;

        if !output.status.success() {
            return Err(FinderError::Exited(output.status.code()));
        }

        let chosen = String::from_utf8_lossy(&output.stdout).trim().to_string();
        if chosen.is_empty() {
            return Err(FinderError::EmptyOutput);
        }
        Ok(chosen)
    }
}
