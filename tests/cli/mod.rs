//! CLI Integration Test Modules

pub mod manifest_config;
pub mod report_output;

use std::path::Path;
use std::process::{Command, Output};

/// Run the binary in `dir` with color and logging noise disabled
pub fn run_cli(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_plugin-version"))
        .args(["--no-color"])
        .args(args)
        .current_dir(dir)
        .env_remove("NO_COLOR")
        .output()
        .expect("Failed to run plugin-version")
}

pub fn stdout_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

pub fn stderr_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}
