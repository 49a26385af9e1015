//! Build metadata of the tool itself, generated by the build script.

include!(concat!(env!("OUT_DIR"), "/version.rs"));

/// Build time string from the build script (UTC)
pub fn build_time() -> &'static str {
    BUILD_TIME
}

/// Tag or short hash the tool was built from, `unknown` outside git
pub fn git_version() -> &'static str {
    GIT_VERSION
}

pub fn is_snapshot_build() -> bool {
    GIT_SNAPSHOT
}

/// Manifest file name looked up in the repository and config directory
pub fn default_manifest_name() -> &'static str {
    DEFAULT_MANIFEST
}

/// Multi-line summary printed by `--build-info`
pub fn build_info() -> String {
    format!(
        "{} {}\nGit version: {}\nSnapshot: {}\nBuilt: {}",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
        git_version(),
        is_snapshot_build(),
        build_time()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_info_contains_generated_values() {
        let info = build_info();
        assert!(info.starts_with("plugin-version "));
        assert!(info.contains(git_version()));
        assert!(info.contains(build_time()));
        assert!(info.contains(&format!("Snapshot: {}", is_snapshot_build())));
        assert!(!git_version().is_empty());
    }

    #[test]
    fn test_default_manifest_name() {
        assert_eq!(default_manifest_name(), "plugin-version.toml");
    }
}
