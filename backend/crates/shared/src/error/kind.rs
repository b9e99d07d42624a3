//! Error Kind - Classification of errors
//!
//! Defines the [`ErrorKind`] enum used by every crate of the workspace.

/// Error classification
///
/// Domain crates keep their own `thiserror` enums and map each variant to
/// one of these kinds when converting into [`AppError`](super::app_error::AppError).
///
/// ## Examples
/// ```rust
/// use kernel::error::kind::ErrorKind;
///
/// let kind = ErrorKind::InvalidArgument;
/// assert_eq!(kind.as_str(), "Invalid Argument");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ErrorKind {
    /// A constructor or operation received a value violating an invariant
    InvalidArgument,
    /// Credentials were rejected
    Unauthorized,
    /// The operation is not allowed in the current state (locked, inactive)
    Forbidden,
}

impl ErrorKind {
    /// Human readable name of the kind
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::InvalidArgument => "Invalid Argument",
            ErrorKind::Unauthorized => "Unauthorized",
            ErrorKind::Forbidden => "Forbidden",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_as_str() {
        assert_eq!(ErrorKind::InvalidArgument.as_str(), "Invalid Argument");
        assert_eq!(ErrorKind::Unauthorized.as_str(), "Unauthorized");
        assert_eq!(ErrorKind::Forbidden.to_string(), "Forbidden");
    }
}
