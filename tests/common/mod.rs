//! Common test utilities
//!
//! Builds throwaway git repositories with the git CLI so the resolver runs
//! against real repository state.

#![allow(dead_code)]

use std::path::Path;
use std::process::Command;
use tempfile::TempDir;

/// Run git in `dir` and return trimmed stdout, panicking on failure
pub fn git(dir: &Path, args: &[&str]) -> String {
    let output = Command::new("git")
        .args(args)
        .current_dir(dir)
        .output()
        .expect("Failed to run git");
    assert!(
        output.status.success(),
        "git {:?} failed: {}",
        args,
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout).trim().to_string()
}

/// Create an empty repository with a local identity and signing disabled
pub fn init_repository() -> TempDir {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let repo_path = temp_dir.path();

    git(repo_path, &["init", "-q"]);
    git(repo_path, &["config", "user.name", "Test User"]);
    git(repo_path, &["config", "user.email", "test@example.com"]);
    git(repo_path, &["config", "commit.gpgsign", "false"]);
    git(repo_path, &["config", "tag.gpgsign", "false"]);

    temp_dir
}

/// Write `file` and commit it, returning the full commit hash
pub fn commit_file(repo_path: &Path, file: &str, content: &str, message: &str) -> String {
    std::fs::write(repo_path.join(file), content).expect("Failed to write file");
    git(repo_path, &["add", file]);
    git(repo_path, &["commit", "-q", "-m", message]);
    git(repo_path, &["rev-parse", "HEAD"])
}

/// Repository with a single commit and no tags
pub fn create_untagged_repository() -> TempDir {
    let temp_dir = init_repository();
    commit_file(temp_dir.path(), "README.md", "fortify\n", "Initial commit");
    temp_dir
}

/// Repository whose HEAD carries the lightweight tag `tag`
pub fn create_tagged_repository(tag: &str) -> TempDir {
    let temp_dir = create_untagged_repository();
    git(temp_dir.path(), &["tag", tag]);
    temp_dir
}

pub fn is_hex(text: &str) -> bool {
    !text.is_empty() && text.chars().all(|c| c.is_ascii_hexdigit())
}
