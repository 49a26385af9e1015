//! Resolver Types

use serde::Serialize;
use std::fmt;

/// Version identifier of a build and whether it is a tagged release
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VersionInfo {
    /// Tag name for releases, short commit hash for snapshots
    pub version: String,
    pub is_snapshot: bool,
}

impl VersionInfo {
    pub fn release(tag: impl Into<String>) -> Self {
        Self {
            version: tag.into(),
            is_snapshot: false,
        }
    }

    pub fn snapshot(short_hash: impl Into<String>) -> Self {
        Self {
            version: short_hash.into(),
            is_snapshot: true,
        }
    }
}

impl fmt::Display for VersionInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Version: {}, isSnapshot: {}",
            self.version, self.is_snapshot
        )
    }
}

/// Outcome of a single external command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    pub success: bool,
    /// Exit code, absent when the process was killed by a signal
    pub code: Option<i32>,
    /// Standard output followed by standard error
    pub text: String,
}

impl CommandOutput {
    /// Captured text with surrounding whitespace and newlines removed
    pub fn trimmed(&self) -> &str {
        self.text.trim()
    }
}
