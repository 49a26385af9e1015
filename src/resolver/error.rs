//! Resolver Error Types

/// Errors raised while resolving a build version from git
#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    #[error("Failed to run '{command}': {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("'{command}' exited with {}: {output}", exit_label(.code))]
    CommandFailed {
        command: String,
        code: Option<i32>,
        output: String,
    },

    #[error("'{command}' succeeded but printed nothing")]
    EmptyOutput { command: String },
}

fn exit_label(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("status {}", code),
        None => "no status (terminated by signal)".to_string(),
    }
}

impl crate::core::error_handling::ContextualError for ResolveError {
    fn is_user_actionable(&self) -> bool {
        // Git failures are environment problems, not something the caller mistyped
        false
    }

    fn user_message(&self) -> Option<&str> {
        None
    }
}

/// Result type for resolver operations
pub type ResolveResult<T> = Result<T, ResolveError>;
