//! External command invocation
//!
//! Every deployment step boils down to launching one external process and
//! inspecting its exit status. `CommandRunner` is the seam between the step
//! sequencing logic and the operating system: production code uses
//! `SystemRunner`, tests substitute a scripted fake.

use std::fmt;
use std::io::Write;
use std::process::{Command, Stdio};

use crate::error::{StagehandError, StagehandResult};

/// One management command: program, args, and an optional script piped to stdin
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManagementCommand {
    pub program: String,
    pub args: Vec<String>,
    pub stdin_script: Option<String>,
}

impl ManagementCommand {
    pub fn new(program: impl Into<String>, args: &[&str]) -> Self {
        Self {
            program: program.into(),
            args: args.iter().map(|a| a.to_string()).collect(),
            stdin_script: None,
        }
    }

    pub fn with_stdin(mut self, script: impl Into<String>) -> Self {
        self.stdin_script = Some(script.into());
        self
    }
}

impl fmt::Display for ManagementCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        if self.stdin_script.is_some() {
            write!(f, " <<script")?;
        }
        Ok(())
    }
}

/// Exit status of a finished command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitOutcome {
    /// Raw exit code; None when the child was terminated by a signal
    pub code: Option<i32>,
}

impl ExitOutcome {
    pub fn success() -> Self {
        Self { code: Some(0) }
    }

    pub fn failure(code: i32) -> Self {
        Self { code: Some(code) }
    }

    pub fn is_success(&self) -> bool {
        self.code == Some(0)
    }
}

/// Runs one command to completion
pub trait CommandRunner {
    fn run(&mut self, step: &str, command: &ManagementCommand) -> StagehandResult<ExitOutcome>;
}

/// Production runner using std::process::Command
///
/// Output streams are inherited so the framework's own progress output reaches
/// the operator unchanged. Steps carrying a stdin script get a piped stdin.
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&mut self, step: &str, command: &ManagementCommand) -> StagehandResult<ExitOutcome> {
        let mut cmd = Command::new(&command.program);
        cmd.args(&command.args)
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());

        let status = if let Some(script) = &command.stdin_script {
            cmd.stdin(Stdio::piped());
            let mut child = cmd.spawn().map_err(|e| StagehandError::Spawn {
                step: step.to_string(),
                program: command.program.clone(),
                source: e,
            })?;
            // stdin is Some because we requested a pipe above
            if let Some(mut stdin) = child.stdin.take() {
                // A child that exits before reading the script closes the
                // pipe; that shows up in its exit status, not as our error
                if let Err(e) = stdin.write_all(script.as_bytes()) {
                    if e.kind() != std::io::ErrorKind::BrokenPipe {
                        return Err(e.into());
                    }
                }
            }
            child.wait()?
        } else {
            cmd.stdin(Stdio::inherit());
            cmd.status().map_err(|e| StagehandError::Spawn {
                step: step.to_string(),
                program: command.program.clone(),
                source: e,
            })?
        };

        Ok(ExitOutcome {
            code: status.code(),
        })
    }
}
