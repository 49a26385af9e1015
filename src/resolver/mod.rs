//! Build version resolution from git
//!
//! A build is a release when `HEAD` carries an exact tag and a snapshot
//! otherwise. Releases are identified by the tag name, snapshots by the short
//! commit hash.

pub mod error;
pub mod git;
pub mod types;

pub use error::{ResolveError, ResolveResult};
pub use git::{CommandRunner, GitRunner};
pub use types::{CommandOutput, VersionInfo};

use std::path::PathBuf;

/// Arguments of the exact-match tag lookup
pub const EXACT_TAG_ARGS: [&str; 3] = ["describe", "--exact-match", "--tags"];

/// Arguments of the short commit hash lookup
pub const SHORT_HASH_ARGS: [&str; 3] = ["rev-parse", "--short", "HEAD"];

/// Determines the version identifier of the repository state seen by a runner
pub struct VersionResolver<R: CommandRunner = GitRunner> {
    runner: R,
}

impl VersionResolver<GitRunner> {
    /// Resolve the repository at `dir` with the `git` found on `PATH`
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self::with_runner(GitRunner::new(dir))
    }

    pub fn with_git(dir: impl Into<PathBuf>, git_binary: impl Into<PathBuf>) -> Self {
        Self::with_runner(GitRunner::with_binary(dir, git_binary))
    }
}

impl<R: CommandRunner> VersionResolver<R> {
    pub fn with_runner(runner: R) -> Self {
        Self { runner }
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    /// Resolve the current version.
    ///
    /// An exact tag on the current commit wins. When the tag lookup exits
    /// non-zero the short commit hash is used instead and the build is a
    /// snapshot. A failing hash lookup is fatal; there is no further fallback.
    pub fn resolve(&self) -> ResolveResult<VersionInfo> {
        if let Some(tag) = self.exact_tag()? {
            log::info!("HEAD is tagged '{}', building a release", tag);
            return Ok(VersionInfo::release(tag));
        }

        let short_hash = self.short_hash()?;
        log::info!("HEAD is untagged, building snapshot '{}'", short_hash);
        Ok(VersionInfo::snapshot(short_hash))
    }

    /// Tag pointing exactly at the current commit, if any
    pub fn exact_tag(&self) -> ResolveResult<Option<String>> {
        let command = self.runner.describe(&EXACT_TAG_ARGS);
        log::debug!("Running {}", command);
        let output = self.runner.run(&EXACT_TAG_ARGS)?;

        if !output.success {
            log::debug!(
                "No exact tag ({} exited with {:?}): {}",
                command,
                output.code,
                output.trimmed()
            );
            return Ok(None);
        }

        non_empty(command, &output).map(Some)
    }

    /// Abbreviated hash of the current commit
    pub fn short_hash(&self) -> ResolveResult<String> {
        let command = self.runner.describe(&SHORT_HASH_ARGS);
        log::debug!("Running {}", command);
        let output = self.runner.run(&SHORT_HASH_ARGS)?;

        if !output.success {
            return Err(ResolveError::CommandFailed {
                command,
                code: output.code,
                output: output.trimmed().to_string(),
            });
        }

        non_empty(command, &output)
    }
}

fn non_empty(command: String, output: &CommandOutput) -> ResolveResult<String> {
    let text = output.trimmed();
    if text.is_empty() {
        Err(ResolveError::EmptyOutput { command })
    } else {
        Ok(text.to_string())
    }
}
