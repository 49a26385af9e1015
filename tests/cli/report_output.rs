//! Report output tests

use super::{run_cli, stderr_of, stdout_of};
use crate::common::*;
use std::process::Command;

#[test]
fn test_release_prints_build_line() {
    let repo = create_tagged_repository("v1.2.3");

    let output = run_cli(repo.path(), &[]);

    assert!(output.status.success(), "stderr: {}", stderr_of(&output));
    assert_eq!(stdout_of(&output), "Version: v1.2.3, isSnapshot: false\n");
}

#[test]
fn test_snapshot_prints_short_hash() {
    let repo = create_untagged_repository();
    let short = git(repo.path(), &["rev-parse", "--short", "HEAD"]);

    let output = run_cli(repo.path(), &[]);

    assert!(output.status.success(), "stderr: {}", stderr_of(&output));
    assert_eq!(
        stdout_of(&output),
        format!("Version: {}, isSnapshot: true\n", short)
    );
}

#[test]
fn test_repo_flag_from_other_directory() {
    let repo = create_tagged_repository("v3.1.0");
    let elsewhere = tempfile::TempDir::new().unwrap();
    let repo_arg = repo.path().to_string_lossy().to_string();

    let output = run_cli(elsewhere.path(), &["--repo", &repo_arg]);

    assert!(output.status.success(), "stderr: {}", stderr_of(&output));
    assert!(stdout_of(&output).starts_with("Version: v3.1.0, isSnapshot: false"));
}

#[test]
fn test_json_output() {
    let repo = create_tagged_repository("v1.2.3");

    let output = run_cli(repo.path(), &["--output", "json"]);

    assert!(output.status.success(), "stderr: {}", stderr_of(&output));
    let value: serde_json::Value = serde_json::from_str(&stdout_of(&output)).unwrap();
    assert_eq!(value["version"], "v1.2.3");
    assert_eq!(value["is_snapshot"], false);
    assert_eq!(value["coordinate"], "net.jirayu.fortify:fortify-plugin:v1.2.3");
}

#[test]
fn test_env_output() {
    let repo = create_untagged_repository();

    let output = run_cli(repo.path(), &["-o", "env"]);

    assert!(output.status.success(), "stderr: {}", stderr_of(&output));
    let stdout = stdout_of(&output);
    assert!(stdout.contains("IS_SNAPSHOT='true'\n"));
    assert!(stdout.contains("GROUP='net.jirayu.fortify'\n"));
}

#[test]
fn test_env_output_is_safe_to_eval() {
    let tag = "v1;echo${IFS}INJECTED";
    let repo = create_tagged_repository(tag);

    let output = run_cli(repo.path(), &["-o", "env"]);
    assert!(output.status.success(), "stderr: {}", stderr_of(&output));

    let env = stdout_of(&output);
    let script = "eval \"$1\"\nprintf '%s|%s\\n' \"$VERSION\" \"$COORDINATE\"";
    let evaluated = Command::new("sh")
        .args(["-c", script, "sh", env.as_str()])
        .output()
        .expect("Failed to run sh");

    assert!(evaluated.status.success(), "stderr: {}", stderr_of(&evaluated));
    assert_eq!(
        stdout_of(&evaluated),
        format!("{}|net.jirayu.fortify:fortify-plugin:{}\n", tag, tag)
    );
}

#[test]
fn test_verbose_lists_repositories() {
    let repo = create_tagged_repository("v1.2.3");

    let output = run_cli(repo.path(), &["--verbose", "--log-level", "off"]);

    assert!(output.status.success(), "stderr: {}", stderr_of(&output));
    let stdout = stdout_of(&output);
    assert!(stdout.starts_with("Version: v1.2.3, isSnapshot: false\n"));
    assert!(stdout.contains("Repository: lavalink-releases https://maven.lavalink.dev/releases"));
}

#[test]
fn test_failure_exits_non_zero() {
    let repo = init_repository();

    let output = run_cli(repo.path(), &[]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout_of(&output).is_empty());
    assert!(stderr_of(&output).contains("FATAL: Resolving build version"));
}

#[test]
fn test_build_info() {
    let dir = tempfile::TempDir::new().unwrap();

    let output = run_cli(dir.path(), &["--build-info"]);

    assert!(output.status.success());
    assert!(stdout_of(&output).starts_with("plugin-version "));
}
