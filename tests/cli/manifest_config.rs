//! Manifest configuration tests

use super::{run_cli, stderr_of, stdout_of};
use crate::common::*;

#[test]
fn test_repository_manifest_is_picked_up() {
    let repo = create_tagged_repository("v1.2.3");
    std::fs::write(
        repo.path().join("plugin-version.toml"),
        r#"
group = "dev.example"

[plugin]
name = "shield"
api_version = "4.0.8"
"#,
    )
    .unwrap();

    let output = run_cli(repo.path(), &["-o", "env"]);

    assert!(output.status.success(), "stderr: {}", stderr_of(&output));
    let stdout = stdout_of(&output);
    assert!(stdout.contains("COORDINATE='dev.example:shield:v1.2.3'\n"));
    assert!(stdout.contains("PLUGIN_API_VERSION='4.0.8'\n"));
}

#[test]
fn test_missing_config_file_is_reported() {
    let repo = create_tagged_repository("v1.2.3");

    let output = run_cli(repo.path(), &["--config-file", "missing.toml"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr_of(&output)
        .contains("FATAL: The specified configuration file does not exist: missing.toml"));
}

#[test]
fn test_invalid_manifest_is_reported() {
    let repo = create_tagged_repository("v1.2.3");
    std::fs::write(
        repo.path().join("build.toml"),
        "[[repositories]]\nname = \"local\"\nurl = \"file:///m2\"\n",
    )
    .unwrap();

    let output = run_cli(repo.path(), &["-c", "build.toml"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr_of(&output).contains("unsupported URL 'file:///m2'"));
}
