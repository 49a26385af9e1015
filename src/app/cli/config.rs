//! Build manifest discovery and loading
//!
//! Lookup order: an explicit `--config-file`, then the manifest file in the
//! repository directory, then the one in the user's config directory, then
//! the built-in defaults.

use crate::app::error::{AppError, AppResult};
use crate::core::version::default_manifest_name;
use crate::manifest::BuildManifest;
use std::path::{Path, PathBuf};

use super::args::Args;

/// Where the effective manifest came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ManifestSource {
    Explicit(PathBuf),
    Repository(PathBuf),
    UserConfig(PathBuf),
    Defaults,
}

impl ManifestSource {
    pub fn path(&self) -> Option<&Path> {
        match self {
            ManifestSource::Explicit(p)
            | ManifestSource::Repository(p)
            | ManifestSource::UserConfig(p) => Some(p),
            ManifestSource::Defaults => None,
        }
    }
}

/// Default manifest path under the user's config directory
pub fn user_config_manifest() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("PluginVersion").join(default_manifest_name()))
}

impl Args {
    /// Decide which manifest file applies, without reading it
    pub fn locate_manifest(&self) -> AppResult<ManifestSource> {
        Self::locate_manifest_in(
            self.config_file.as_deref(),
            self.repository_dir(),
            user_config_manifest().as_deref(),
        )
    }

    /// Same as [`Args::locate_manifest`] with the user config path injected
    pub fn locate_manifest_in(
        config_file: Option<&Path>,
        repository_dir: &Path,
        user_config: Option<&Path>,
    ) -> AppResult<ManifestSource> {
        if let Some(path) = config_file {
            // A file the user named must exist
            if !path.is_file() {
                return Err(AppError::ConfigNotFound {
                    message: format!(
                        "The specified configuration file does not exist: {}",
                        path.display()
                    ),
                });
            }
            return Ok(ManifestSource::Explicit(path.to_path_buf()));
        }

        let repo_manifest = repository_dir.join(default_manifest_name());
        if repo_manifest.is_file() {
            return Ok(ManifestSource::Repository(repo_manifest));
        }

        match user_config {
            Some(path) if path.is_file() => Ok(ManifestSource::UserConfig(path.to_path_buf())),
            _ => Ok(ManifestSource::Defaults),
        }
    }

    /// Locate and load the effective build manifest
    pub fn load_manifest(&self) -> AppResult<(BuildManifest, ManifestSource)> {
        let source = self.locate_manifest()?;
        let manifest = match source.path() {
            Some(path) => {
                log::info!("Using build manifest {}", path.display());
                BuildManifest::load(path)?
            }
            None => {
                log::info!("No build manifest found, using defaults");
                BuildManifest::default()
            }
        };
        Ok((manifest, source))
    }
}
