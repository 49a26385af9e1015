//! Plugin build manifest
//!
//! Declarative metadata of the plugin build: Maven group, plugin name, the
//! Lavalink API and server versions it targets, the Java toolchain and the
//! package repositories dependencies are fetched from. Every field has a
//! default, so an empty TOML document yields the stock fortify plugin build.

pub mod error;

pub use error::{ManifestError, ManifestResult};

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

pub const DEFAULT_GROUP: &str = "net.jirayu.fortify";
pub const DEFAULT_PLUGIN_NAME: &str = "fortify-plugin";
pub const DEFAULT_JAVA_VERSION: u32 = 17;
pub const DEFAULT_ENCODING: &str = "UTF-8";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BuildManifest {
    pub group: String,
    pub plugin: PluginInfo,
    pub toolchain: Toolchain,
    pub repositories: Vec<Repository>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PluginInfo {
    pub name: String,
    /// Lavalink plugin API version, when pinned
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_version: Option<String>,
    /// Lavalink server version, when pinned
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server_version: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Toolchain {
    pub java_version: u32,
    pub encoding: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Repository {
    pub name: String,
    pub url: String,
}

impl Repository {
    pub fn new(name: &str, url: &str) -> Self {
        Self {
            name: name.to_string(),
            url: url.to_string(),
        }
    }
}

impl Default for BuildManifest {
    fn default() -> Self {
        Self {
            group: DEFAULT_GROUP.to_string(),
            plugin: PluginInfo::default(),
            toolchain: Toolchain::default(),
            repositories: default_repositories(),
        }
    }
}

impl Default for PluginInfo {
    fn default() -> Self {
        Self {
            name: DEFAULT_PLUGIN_NAME.to_string(),
            api_version: None,
            server_version: None,
        }
    }
}

impl Default for Toolchain {
    fn default() -> Self {
        Self {
            java_version: DEFAULT_JAVA_VERSION,
            encoding: DEFAULT_ENCODING.to_string(),
        }
    }
}

/// Maven Central followed by the Lavalink and JitPack repositories
pub fn default_repositories() -> Vec<Repository> {
    vec![
        Repository::new("mavenCentral", "https://repo.maven.apache.org/maven2"),
        Repository::new("lavalink-releases", "https://maven.lavalink.dev/releases"),
        Repository::new("lavalink-snapshots", "https://maven.lavalink.dev/snapshots"),
        Repository::new("jitpack", "https://jitpack.io"),
    ]
}

impl BuildManifest {
    /// Parse and validate a manifest from TOML text
    pub fn from_toml_str(contents: &str) -> ManifestResult<Self> {
        let manifest: BuildManifest = toml::from_str(contents)?;
        manifest.validate()?;
        Ok(manifest)
    }

    /// Read, parse and validate a manifest file
    pub fn load(path: &Path) -> ManifestResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|source| ManifestError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("Loaded manifest from {}", path.display());
        Self::from_toml_str(&contents)
    }

    pub fn validate(&self) -> ManifestResult<()> {
        if self.group.trim().is_empty() {
            return Err(invalid("group cannot be empty"));
        }
        if self.plugin.name.trim().is_empty() {
            return Err(invalid("plugin.name cannot be empty"));
        }
        if self.toolchain.java_version == 0 {
            return Err(invalid("toolchain.java_version must be greater than 0"));
        }

        let mut seen = HashSet::new();
        for repo in &self.repositories {
            if !(repo.url.starts_with("https://") || repo.url.starts_with("http://")) {
                return Err(invalid(&format!(
                    "repository '{}' has unsupported URL '{}'. Use an http(s) URL",
                    repo.name, repo.url
                )));
            }
            if !seen.insert(repo.url.trim_end_matches('/')) {
                return Err(invalid(&format!(
                    "repository URL '{}' is declared more than once",
                    repo.url
                )));
            }
        }
        Ok(())
    }

    /// Maven coordinate of the plugin artifact for `version`
    pub fn artifact_coordinate(&self, version: &str) -> String {
        format!("{}:{}:{}", self.group, self.plugin.name, version)
    }
}

fn invalid(message: &str) -> ManifestError {
    ManifestError::Invalid {
        message: message.to_string(),
    }
}
