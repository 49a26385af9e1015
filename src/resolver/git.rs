//! Git Command Execution
//!
//! Runs git as an external process in a fixed working directory. Every call is
//! blocking and fully consumes the child's output before returning.

use super::error::{ResolveError, ResolveResult};
use super::types::CommandOutput;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Executes version-control commands on behalf of the resolver
pub trait CommandRunner {
    /// Run the command with the given arguments and capture its outcome.
    ///
    /// A non-zero exit is reported through [`CommandOutput::success`], not as an
    /// error; only a failure to start the process is an `Err`.
    fn run(&self, args: &[&str]) -> ResolveResult<CommandOutput>;

    /// Human readable command line for logs and error messages
    fn describe(&self, args: &[&str]) -> String;
}

/// [`CommandRunner`] backed by a git executable
#[derive(Debug, Clone)]
pub struct GitRunner {
    binary: PathBuf,
    work_dir: PathBuf,
}

impl GitRunner {
    /// Use the `git` found on `PATH`
    pub fn new(work_dir: impl Into<PathBuf>) -> Self {
        Self::with_binary(work_dir, "git")
    }

    pub fn with_binary(work_dir: impl Into<PathBuf>, binary: impl Into<PathBuf>) -> Self {
        Self {
            binary: binary.into(),
            work_dir: work_dir.into(),
        }
    }

    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }
}

impl CommandRunner for GitRunner {
    fn run(&self, args: &[&str]) -> ResolveResult<CommandOutput> {
        let output = Command::new(&self.binary)
            .args(args)
            .current_dir(&self.work_dir)
            .output()
            .map_err(|source| ResolveError::Spawn {
                command: self.describe(args),
                source,
            })?;

        // Both streams land in one buffer, stdout first
        let mut text = String::from_utf8_lossy(&output.stdout).into_owned();
        text.push_str(&String::from_utf8_lossy(&output.stderr));

        Ok(CommandOutput {
            success: output.status.success(),
            code: output.status.code(),
            text,
        })
    }

    fn describe(&self, args: &[&str]) -> String {
        let mut line = self.binary.display().to_string();
        for arg in args {
            line.push(' ');
            line.push_str(arg);
        }
        line
    }
}
