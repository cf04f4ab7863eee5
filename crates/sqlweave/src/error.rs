//! Error types for sqlweave

use thiserror::Error;

/// Result type alias for sqlweave operations
pub type SqlResult<T> = Result<T, SqlError>;

/// Boxed error used to carry collaborator failures.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// The broad category of a [`SqlError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidArgument,
    OutOfRange,
    OutOfBounds,
    Internal,
}

/// Error types for statement building.
///
/// Every error is raised synchronously by the builder that detected it.
/// A failed build never yields partial SQL.
#[derive(Debug, Error)]
pub enum SqlError {
    /// The input has the wrong shape (e.g. an empty required list, a value
    /// that cannot be normalized, no template for an expression).
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        message: String,
        argument: Option<String>,
    },

    /// The input has the right shape but lies outside the allowed domain
    /// (e.g. an empty reference, a negative limit).
    #[error("Out of range: {message}")]
    OutOfRange {
        message: String,
        argument: Option<String>,
        #[source]
        source: Option<BoxError>,
    },

    /// A required lookup found no match.
    #[error("Out of bounds: {message}")]
    OutOfBounds {
        message: String,
        argument: Option<String>,
        #[source]
        source: Option<BoxError>,
    },

    /// A collaborator failed for a reason unrelated to the input.
    #[error("Internal error: {message}")]
    Internal {
        message: String,
        #[source]
        source: BoxError,
    },
}

impl SqlError {
    /// Create an invalid-argument error
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
            argument: None,
        }
    }

    /// Create an out-of-range error
    pub fn out_of_range(message: impl Into<String>) -> Self {
        Self::OutOfRange {
            message: message.into(),
            argument: None,
            source: None,
        }
    }

    /// Create an out-of-bounds error
    pub fn out_of_bounds(message: impl Into<String>) -> Self {
        Self::OutOfBounds {
            message: message.into(),
            argument: None,
            source: None,
        }
    }

    /// Create an internal error wrapping `source`
    pub fn internal(message: impl Into<String>, source: impl Into<BoxError>) -> Self {
        Self::Internal {
            message: message.into(),
            source: source.into(),
        }
    }

    /// Attach the debug rendering of the offending value.
    ///
    /// Has no effect on [`SqlError::Internal`], which never names an argument.
    pub fn with_argument(mut self, value: impl std::fmt::Debug) -> Self {
        match &mut self {
            Self::InvalidArgument { argument, .. }
            | Self::OutOfRange { argument, .. }
            | Self::OutOfBounds { argument, .. } => *argument = Some(format!("{value:?}")),
            Self::Internal { .. } => {}
        }
        self
    }

    /// Attach the error that caused this one.
    ///
    /// Has no effect on [`SqlError::InvalidArgument`]; internal errors always
    /// carry a cause already and have it replaced.
    pub fn with_source(mut self, cause: impl Into<BoxError>) -> Self {
        match &mut self {
            Self::OutOfRange { source, .. } | Self::OutOfBounds { source, .. } => {
                *source = Some(cause.into());
            }
            Self::Internal { source, .. } => *source = cause.into(),
            Self::InvalidArgument { .. } => {}
        }
        self
    }

    /// The category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidArgument { .. } => ErrorKind::InvalidArgument,
            Self::OutOfRange { .. } => ErrorKind::OutOfRange,
            Self::OutOfBounds { .. } => ErrorKind::OutOfBounds,
            Self::Internal { .. } => ErrorKind::Internal,
        }
    }

    /// The human-readable message, without the kind prefix.
    pub fn message(&self) -> &str {
        match self {
            Self::InvalidArgument { message, .. }
            | Self::OutOfRange { message, .. }
            | Self::OutOfBounds { message, .. }
            | Self::Internal { message, .. } => message,
        }
    }

    /// The debug rendering of the offending value, if one was recorded.
    pub fn argument(&self) -> Option<&str> {
        match self {
            Self::InvalidArgument { argument, .. }
            | Self::OutOfRange { argument, .. }
            | Self::OutOfBounds { argument, .. } => argument.as_deref(),
            Self::Internal { .. } => None,
        }
    }

    /// Check if this is an invalid-argument error
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. })
    }

    /// Check if this is an out-of-range error
    pub fn is_out_of_range(&self) -> bool {
        matches!(self, Self::OutOfRange { .. })
    }

    /// Check if this is an out-of-bounds error
    pub fn is_out_of_bounds(&self) -> bool {
        matches!(self, Self::OutOfBounds { .. })
    }

    /// Check if this is an internal error
    pub fn is_internal(&self) -> bool {
        matches!(self, Self::Internal { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn argument_is_recorded_as_debug() {
        let err = SqlError::out_of_range("Limit cannot be negative").with_argument(-3i64);
        assert_eq!(err.kind(), ErrorKind::OutOfRange);
        assert_eq!(err.argument(), Some("-3"));
        assert_eq!(err.to_string(), "Out of range: Limit cannot be negative");
    }

    #[test]
    fn source_chain_is_preserved() {
        let cause = SqlError::invalid_argument("bad");
        let err = SqlError::out_of_range("wrapped").with_source(cause);
        let source = err.source().expect("source");
        let inner = source.downcast_ref::<SqlError>().expect("SqlError source");
        assert!(inner.is_invalid_argument());
    }

    #[test]
    fn invalid_argument_ignores_source() {
        let err = SqlError::invalid_argument("bad").with_source(SqlError::out_of_range("x"));
        assert!(err.source().is_none());
        assert_eq!(err.message(), "bad");
    }

    #[test]
    fn internal_wraps_cause() {
        let err = SqlError::internal("read failed", "disk on fire");
        assert!(err.is_internal());
        assert_eq!(err.source().map(|s| s.to_string()).as_deref(), Some("disk on fire"));
    }
}
