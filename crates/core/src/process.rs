//! Process execution utilities
//!
//! Provides a unified interface for running external commands with:
//! - Output capture or streaming to the terminal
//! - Directory context
//! - PATH lookup with a clear "command not found" error
//!
//! The build pipeline talks to external tools only through the
//! [`CommandRunner`] trait so tests can substitute a scripted runner.

use crate::error::{Error, Result};
use std::fmt;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

/// Result of a command execution
#[derive(Debug, Clone, Default)]
pub struct CommandResult {
    /// Whether the command succeeded (exit code 0)
    pub success: bool,
    /// Exit code of the command
    pub exit_code: i32,
    /// Standard output (empty when streamed)
    pub stdout: String,
    /// Standard error (empty when streamed)
    pub stderr: String,
}

impl CommandResult {
    /// Create from std::process::Output
    pub fn from_output(output: Output) -> Self {
        Self {
            success: output.status.success(),
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }

    /// Result for a streamed command where only the exit status is known
    pub fn from_status(code: i32) -> Self {
        Self {
            success: code == 0,
            exit_code: code,
            ..Self::default()
        }
    }

    /// Get combined output (stdout + stderr)
    pub fn combined_output(&self) -> String {
        if self.stderr.is_empty() {
            self.stdout.clone()
        } else if self.stdout.is_empty() {
            self.stderr.clone()
        } else {
            format!("{}\n{}", self.stdout, self.stderr)
        }
    }
}

/// Where a child's stdout/stderr go
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Stream to the parent's terminal
    Inherit,
    /// Capture into the [`CommandResult`]
    Capture,
}

/// A fully described command invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    /// Program name or path
    pub program: String,
    /// Arguments
    pub args: Vec<String>,
    /// Working directory, `None` for the current one
    pub dir: Option<PathBuf>,
    /// Output handling
    pub output: OutputMode,
}

impl CommandSpec {
    /// New command streaming its output in the current directory
    pub fn new<I, S>(program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
            dir: None,
            output: OutputMode::Inherit,
        }
    }

    /// Run in a specific directory
    pub fn in_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.dir = Some(dir.into());
        self
    }

    /// Capture output instead of streaming it
    pub fn captured(mut self) -> Self {
        self.output = OutputMode::Capture;
        self
    }
}

impl fmt::Display for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(dir) = &self.dir {
            write!(f, "cd {} && ", dir.display())?;
        }
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

/// Executes [`CommandSpec`]s
pub trait CommandRunner {
    /// Run the command to completion. A non-zero exit is reported in the
    /// result, not as an error; errors mean the command could not start.
    fn run(&self, spec: &CommandSpec) -> Result<CommandResult>;
}

/// Runs commands as real child processes
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, spec: &CommandSpec) -> Result<CommandResult> {
        let program = resolve_program(&spec.program)?;
        tracing::debug!(command = %spec, "Spawning process");

        let mut cmd = Command::new(&program);
        cmd.args(&spec.args);
        if let Some(dir) = &spec.dir {
            cmd.current_dir(dir);
        }

        match spec.output {
            OutputMode::Capture => {
                let output = cmd
                    .stdout(Stdio::piped())
                    .stderr(Stdio::piped())
                    .output()
                    .map_err(|e| spawn_error(&spec.program, e))?;
                Ok(CommandResult::from_output(output))
            }
            OutputMode::Inherit => {
                let status = cmd
                    .stdout(Stdio::inherit())
                    .stderr(Stdio::inherit())
                    .status()
                    .map_err(|e| spawn_error(&spec.program, e))?;
                Ok(CommandResult::from_status(status.code().unwrap_or(-1)))
            }
        }
    }
}

fn spawn_error(program: &str, err: std::io::Error) -> Error {
    Error::process(format!("Failed to execute {}: {}", program, err)).with_source(err)
}

/// Resolve bare program names through PATH (handles `.cmd` shims on
/// Windows); explicit paths are used as given.
fn resolve_program(program: &str) -> Result<PathBuf> {
    let path = Path::new(program);
    if path.components().count() > 1 {
        return if path.exists() {
            Ok(path.to_path_buf())
        } else {
            Err(Error::file_not_found(path))
        };
    }
    which::which(program).map_err(|_| Error::command_not_found(program))
}
