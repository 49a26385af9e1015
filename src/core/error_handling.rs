//! Generic error handling utilities
//!
//! Lets the startup sequence report any domain error the same way, whether it
//! came from the resolver, the manifest loader or argument handling.

/// Trait for errors that can distinguish between user-actionable and system errors
///
/// User-actionable errors (a bad manifest, a config file that does not exist)
/// are shown with their own message. System errors (git missing, git failing)
/// are shown with the operation that failed followed by the error itself.
///
/// When `is_user_actionable()` returns `true`, `user_message()` must return
/// `Some(message)`; otherwise it returns `None`.
pub trait ContextualError: std::error::Error {
    /// Returns true if the user can fix this error by changing their input
    fn is_user_actionable(&self) -> bool;

    /// The message to show for a user-actionable error
    fn user_message(&self) -> Option<&str>;
}

/// Build the single fatal line reported for `error`
///
/// ```rust
/// # use plugin_version::core::error_handling::format_error_with_context;
/// # use plugin_version::manifest::ManifestError;
/// let err = ManifestError::Invalid { message: "group cannot be empty".to_string() };
/// assert_eq!(
///     format_error_with_context(&err, "Loading build manifest"),
///     "FATAL: group cannot be empty"
/// );
/// ```
pub fn format_error_with_context<E: ContextualError + ?Sized>(
    error: &E,
    operation_context: &str,
) -> String {
    match error.user_message() {
        Some(user_msg) if error.is_user_actionable() => format!("FATAL: {}", user_msg),
        _ => format!("FATAL: {}: {}", operation_context, error),
    }
}

/// Log errors with appropriate detail level based on error specificity
///
/// The fatal line goes out at error level, the debug representation and the
/// source chain at debug level.
pub fn log_error_with_context<E: ContextualError + std::fmt::Debug + ?Sized>(
    error: &E,
    operation_context: &str,
) {
    log::error!("{}", format_error_with_context(error, operation_context));
    log::debug!("DEBUG_DETAILS: {:?}", error);

    let mut source = error.source();
    while let Some(cause) = source {
        log::debug!("CAUSED_BY: {}", cause);
        source = cause.source();
    }
}
