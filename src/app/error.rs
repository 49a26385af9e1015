//! Application Error Types

use crate::core::error_handling::ContextualError;
use crate::manifest::ManifestError;
use crate::resolver::ResolveError;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{message}")]
    ConfigNotFound { message: String },

    #[error("{message}")]
    InvalidArgument { message: String },

    #[error(transparent)]
    Manifest(#[from] ManifestError),

    #[error(transparent)]
    Resolve(#[from] ResolveError),

    #[error("Logging setup failed: {message}")]
    Logging { message: String },
}

impl AppError {
    /// Operation label shown in front of system errors
    pub fn operation_context(&self) -> &'static str {
        match self {
            AppError::ConfigNotFound { .. } | AppError::Manifest(_) => "Loading build manifest",
            AppError::InvalidArgument { .. } => "Parsing arguments",
            AppError::Resolve(_) => "Resolving build version",
            AppError::Logging { .. } => "Initialising logging",
        }
    }
}

impl ContextualError for AppError {
    fn is_user_actionable(&self) -> bool {
        match self {
            AppError::ConfigNotFound { .. } | AppError::InvalidArgument { .. } => true,
            AppError::Manifest(e) => e.is_user_actionable(),
            AppError::Resolve(e) => e.is_user_actionable(),
            AppError::Logging { .. } => false,
        }
    }

    fn user_message(&self) -> Option<&str> {
        match self {
            AppError::ConfigNotFound { message } | AppError::InvalidArgument { message } => {
                Some(message)
            }
            AppError::Manifest(e) => e.user_message(),
            AppError::Resolve(e) => e.user_message(),
            AppError::Logging { .. } => None,
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
