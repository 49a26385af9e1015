//! Manifest Error Types

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ManifestError {
    #[error("Cannot read manifest {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid manifest TOML: {message}")]
    Parse { message: String },

    #[error("Invalid manifest: {message}")]
    Invalid { message: String },
}

impl From<toml::de::Error> for ManifestError {
    fn from(err: toml::de::Error) -> Self {
        // Display carries the line and column of the offending key
        ManifestError::Parse {
            message: err.to_string(),
        }
    }
}

impl crate::core::error_handling::ContextualError for ManifestError {
    fn is_user_actionable(&self) -> bool {
        match self {
            ManifestError::Parse { .. } => true,
            ManifestError::Invalid { .. } => true,
            ManifestError::Read { .. } => false,
        }
    }

    fn user_message(&self) -> Option<&str> {
        match self {
            ManifestError::Parse { message } | ManifestError::Invalid { message } => Some(message),
            ManifestError::Read { .. } => None,
        }
    }
}

pub type ManifestResult<T> = Result<T, ManifestError>;
