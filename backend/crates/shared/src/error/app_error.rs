//! Application Error - Unified error type for the workspace
//!
//! Defines [`AppError`] struct and [`AppResult<T>`] type alias.

use std::borrow::Cow;
use std::error::Error;
use std::fmt;

use super::kind::ErrorKind;

/// Unified application error
///
/// Every domain error (`AuthError`, `AccountError`, ...) converts into this
/// type so binaries can report failures uniformly.
///
/// ## Fields
/// * `kind` - classification of the failure
/// * `message` - message naming the violated invariant
/// * `action` - what the caller can do about it (optional)
/// * `source` - underlying error (optional, for debugging)
///
/// ## Examples
/// ```rust
/// use kernel::error::{app_error::AppError, kind::ErrorKind};
///
/// let err = AppError::invalid_argument("Client id must be positive")
///     .with_action("Use an id greater than zero");
/// assert_eq!(err.kind(), ErrorKind::InvalidArgument);
/// ```
pub struct AppError {
    kind: ErrorKind,
    message: Cow<'static, str>,
    action: Option<Cow<'static, str>>,
    source: Option<Box<dyn Error + Send + Sync + 'static>>,
}

/// Shorthand for `Result<T, AppError>`
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Create a new error
    #[inline]
    pub fn new(kind: ErrorKind, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            kind,
            message: message.into(),
            action: None,
            source: None,
        }
    }

    #[inline]
    pub fn invalid_argument(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::InvalidArgument, message)
    }

    /// Attach a hint telling the caller how to recover
    #[inline]
    pub fn with_action(mut self, action: impl Into<Cow<'static, str>>) -> Self {
        self.action = Some(action.into());
        self
    }

    /// Attach the underlying error
    #[inline]
    pub fn with_source<E>(mut self, source: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        self.source = Some(Box::new(source));
        self
    }

    #[inline]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[inline]
    pub fn action(&self) -> Option<&str> {
        self.action.as_deref()
    }
}

impl fmt::Debug for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut builder = f.debug_struct("AppError");
        builder.field("kind", &self.kind);
        builder.field("message", &self.message);
        if let Some(action) = &self.action {
            builder.field("action", action);
        }
        if let Some(source) = &self.source {
            builder.field("source", source);
        }
        builder.finish()
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.kind, self.message)?;
        if let Some(action) = &self.action {
            write!(f, " (Action: {})", action)?;
        }
        Ok(())
    }
}

impl Error for AppError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn Error + 'static))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_error() {
        let err = AppError::new(ErrorKind::Forbidden, "Client is locked");
        assert_eq!(err.kind(), ErrorKind::Forbidden);
        assert_eq!(err.message(), "Client is locked");
        assert!(err.action().is_none());
    }

    #[test]
    fn test_invalid_argument() {
        assert_eq!(
            AppError::invalid_argument("test").kind(),
            ErrorKind::InvalidArgument
        );
    }

    #[test]
    fn test_with_action() {
        let err = AppError::invalid_argument("Name must not be blank")
            .with_action("Provide a display name");
        assert_eq!(err.action(), Some("Provide a display name"));
    }

    #[test]
    fn test_with_source() {
        let parse_err = "x".parse::<u32>().unwrap_err();
        let err = AppError::invalid_argument("Bad number").with_source(parse_err);
        assert!(err.source().is_some());
    }

    #[test]
    fn test_display() {
        let err = AppError::invalid_argument("Client id must be positive");
        assert_eq!(
            err.to_string(),
            "[Invalid Argument] Client id must be positive"
        );

        let err_with_action = AppError::new(ErrorKind::Forbidden, "Client is locked")
            .with_action("Wait for an operator");
        assert_eq!(
            err_with_action.to_string(),
            "[Forbidden] Client is locked (Action: Wait for an operator)"
        );
    }
}
