//! Error handling for the container library
//!
//! Every container operation reports failure through [`ContainerError`].
//! Mutating operations validate their arguments before touching storage, so
//! an `Err` always leaves the container exactly as it was.

use thiserror::Error;

/// Main error type for container operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContainerError {
    /// Index outside `[0, size)`
    #[error("Out of bounds: index {index}, size {size}")]
    OutOfBounds {
        /// The invalid index
        index: usize,
        /// The live element count at the time of the call
        size: usize,
    },

    /// Removal or peek attempted on a container with zero elements
    #[error("Empty container: cannot {operation}")]
    EmptyContainer {
        /// The operation that needed an element
        operation: &'static str,
    },

    /// Value-based removal or search found no match
    #[error("Not found: {message}")]
    NotFound {
        /// What was being looked for
        message: String,
    },

    /// The access pattern is incompatible with the structure's capability
    #[error("Unsupported operation on {container}: {operation}")]
    Unsupported {
        /// Name of the structure that rejected the call
        container: &'static str,
        /// Description of the rejected access
        operation: String,
    },

    /// Construction-time misconfiguration
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// Error message describing the bad argument
        message: String,
    },

    /// A reloaded container has a different structure than the one it replaces
    #[error("Mismatched container: expected {expected}, got {actual}")]
    MismatchedContainer {
        /// Structure the owner was configured with
        expected: &'static str,
        /// Structure that was actually supplied
        actual: &'static str,
    },

    /// Configuration loading or validation errors
    #[error("Invalid configuration: {message}")]
    Configuration {
        /// Configuration error message
        message: String,
    },
}

impl ContainerError {
    /// Create an out of bounds error
    pub fn out_of_bounds(index: usize, size: usize) -> Self {
        Self::OutOfBounds { index, size }
    }

    /// Create an empty container error
    pub fn empty(operation: &'static str) -> Self {
        Self::EmptyContainer { operation }
    }

    /// Create a not found error
    pub fn not_found<S: Into<String>>(message: S) -> Self {
        Self::NotFound { message: message.into() }
    }

    /// Create an unsupported operation error
    pub fn unsupported<S: Into<String>>(container: &'static str, operation: S) -> Self {
        Self::Unsupported {
            container,
            operation: operation.into(),
        }
    }

    /// Create an invalid argument error
    pub fn invalid_argument<S: Into<String>>(message: S) -> Self {
        Self::InvalidArgument { message: message.into() }
    }

    /// Create a mismatched container error
    pub fn mismatched(expected: &'static str, actual: &'static str) -> Self {
        Self::MismatchedContainer { expected, actual }
    }

    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration { message: message.into() }
    }

    /// Check if the caller can retry with different arguments on the same container
    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::OutOfBounds { .. } => true,
            Self::EmptyContainer { .. } => true,
            Self::NotFound { .. } => true,
            Self::Unsupported { .. } => false,
            Self::InvalidArgument { .. } => false,
            Self::MismatchedContainer { .. } => false,
            Self::Configuration { .. } => false,
        }
    }

    /// Get the error category for logging
    pub fn category(&self) -> &'static str {
        match self {
            Self::OutOfBounds { .. } => "bounds",
            Self::EmptyContainer { .. } => "empty",
            Self::NotFound { .. } => "not_found",
            Self::Unsupported { .. } => "unsupported",
            Self::InvalidArgument { .. } => "argument",
            Self::MismatchedContainer { .. } => "mismatch",
            Self::Configuration { .. } => "config",
        }
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, ContainerError>;

/// Assert that an index is within bounds
#[inline]
pub fn check_bounds(index: usize, size: usize) -> Result<()> {
    if index >= size {
        Err(ContainerError::out_of_bounds(index, size))
    } else {
        Ok(())
    }
}
