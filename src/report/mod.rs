//! Version report rendering
//!
//! The text format's first line is always `Version: <version>, isSnapshot: <bool>`
//! so scripts that grep the plugin build log keep working.

use crate::core::styles::StyleRole;
use crate::manifest::BuildManifest;
use crate::resolver::VersionInfo;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Supported report formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
    Env,
}

impl ReportFormat {
    pub const NAMES: [&'static str; 3] = ["text", "json", "env"];
}

impl FromStr for ReportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(ReportFormat::Text),
            "json" => Ok(ReportFormat::Json),
            "env" => Ok(ReportFormat::Env),
            other => Err(format!(
                "Unknown output format '{}'. Expected one of: {}",
                other,
                Self::NAMES.join(", ")
            )),
        }
    }
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ReportFormat::Text => "text",
            ReportFormat::Json => "json",
            ReportFormat::Env => "env",
        };
        f.write_str(name)
    }
}

/// Resolved version together with the build manifest it applies to
#[derive(Debug, Clone, Serialize)]
pub struct BuildReport {
    #[serde(flatten)]
    pub version: VersionInfo,
    pub coordinate: String,
    pub manifest: BuildManifest,
}

impl BuildReport {
    pub fn new(version: VersionInfo, manifest: BuildManifest) -> Self {
        let coordinate = manifest.artifact_coordinate(&version.version);
        Self {
            version,
            coordinate,
            manifest,
        }
    }

    /// Render in `format`. `verbose` and `color` only affect the text format.
    pub fn render(&self, format: ReportFormat, verbose: bool, color: bool) -> String {
        match format {
            ReportFormat::Text => self.render_text(verbose, color),
            ReportFormat::Json => self.render_json(),
            ReportFormat::Env => self.render_env(),
        }
    }

    fn render_text(&self, verbose: bool, color: bool) -> String {
        let key = |label: &str| StyleRole::Key.paint(label, color);
        let version_role = if self.version.is_snapshot {
            StyleRole::Snapshot
        } else {
            StyleRole::Release
        };

        let mut out = format!(
            "{}: {}, {}: {}",
            key("Version"),
            version_role.paint(&self.version.version, color),
            key("isSnapshot"),
            self.version.is_snapshot
        );

        if !verbose {
            return out;
        }

        let manifest = &self.manifest;
        let mut line = |label: &str, value: &str| {
            out.push('\n');
            out.push_str(&format!("{}: {}", key(label), value));
        };

        line("Coordinate", &self.coordinate);
        line("Plugin", &manifest.plugin.name);
        if let Some(api) = &manifest.plugin.api_version {
            line("Plugin API", api);
        }
        if let Some(server) = &manifest.plugin.server_version {
            line("Lavalink server", server);
        }
        line(
            "Java toolchain",
            &format!(
                "{} ({})",
                manifest.toolchain.java_version, manifest.toolchain.encoding
            ),
        );
        for repo in &manifest.repositories {
            line(
                "Repository",
                &format!("{} {}", repo.name, StyleRole::Dim.paint(&repo.url, color)),
            );
        }
        out
    }

    fn render_json(&self) -> String {
        // Plain data structs always serialize
        serde_json::to_string_pretty(self).unwrap_or_else(|e| format!("{{\"error\":\"{}\"}}", e))
    }

    fn render_env(&self) -> String {
        let mut lines = vec![
            env_line("VERSION", &self.version.version),
            env_line("IS_SNAPSHOT", &self.version.is_snapshot.to_string()),
            env_line("GROUP", &self.manifest.group),
            env_line("PLUGIN_NAME", &self.manifest.plugin.name),
            env_line("COORDINATE", &self.coordinate),
        ];
        if let Some(api) = &self.manifest.plugin.api_version {
            lines.push(env_line("PLUGIN_API_VERSION", api));
        }
        if let Some(server) = &self.manifest.plugin.server_version {
            lines.push(env_line("LAVALINK_SERVER_VERSION", server));
        }
        lines.push(env_line(
            "JAVA_VERSION",
            &self.manifest.toolchain.java_version.to_string(),
        ));
        lines.join("\n")
    }
}

fn env_line(key: &str, value: &str) -> String {
    format!("{}={}", key, shell_quote(value))
}

/// Quote `value` as a single POSIX shell word.
///
/// Tag names and manifest strings may carry shell metacharacters, so every
/// value is single-quoted and embedded `'` becomes `'\''`.
pub fn shell_quote(value: &str) -> String {
    format!("'{}'", value.replace('\'', "'\\''"))
}
