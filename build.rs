use chrono::Utc;
use std::env;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use std::process::Command;

fn main() {
    let out_dir = env::var_os("OUT_DIR").unwrap();
    let dest_path = Path::new(&out_dir).join("version.rs");
    let manifest_dir = env::var("CARGO_MANIFEST_DIR").unwrap();
    let cargo_toml_path = Path::new(&manifest_dir).join("Cargo.toml");

    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=Cargo.toml");
    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=.git/refs/tags");

    let mut f = File::create(&dest_path).unwrap();

    // Default manifest file name from Cargo.toml metadata
    let cargo_toml_content = std::fs::read_to_string(&cargo_toml_path).unwrap();
    let default_manifest = match cargo_toml_content.parse::<toml::Table>() {
        Ok(cargo_toml) => cargo_toml
            .get("package")
            .and_then(|p| p.as_table())
            .and_then(|p| p.get("metadata"))
            .and_then(|m| m.as_table())
            .and_then(|m| m.get("default_manifest"))
            .and_then(|v| v.as_str())
            .map(|v| v.to_string())
            .unwrap_or_else(|| "plugin-version.toml".to_string()),
        Err(_) => "plugin-version.toml".to_string(),
    };
    let build_time = Utc::now().format("%Y-%m-%d %H:%M:%S UTC").to_string();

    // Same rule the tool applies at runtime: exact tag, else short hash
    let (git_version, git_snapshot) = match git_trimmed(&["describe", "--exact-match", "--tags"]) {
        Some(tag) => (tag, false),
        None => (
            git_trimmed(&["rev-parse", "--short", "HEAD"]).unwrap_or_else(|| "unknown".to_string()),
            true,
        ),
    };

    #[allow(clippy::uninlined_format_args)]
    writeln!(
        &mut f,
        r###"pub const DEFAULT_MANIFEST: &str = {:?};
pub const BUILD_TIME: &str = {:?};
pub const GIT_VERSION: &str = {:?};
pub const GIT_SNAPSHOT: bool = {};"###,
        default_manifest, build_time, git_version, git_snapshot
    )
    .unwrap();
}

fn git_trimmed(args: &[&str]) -> Option<String> {
    Command::new("git")
        .args(args)
        .output()
        .ok()
        .and_then(|output| {
            if output.status.success() {
                String::from_utf8(output.stdout).ok()
            } else {
                None
            }
        })
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}
