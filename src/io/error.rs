//! Error types for mask generation, pruning and command execution

use crate::io::configuration::{EXIT_DOMAIN_ERROR, EXIT_INTERRUPTED, EXIT_UNEXPECTED};
use std::fmt;
use std::path::PathBuf;

/// Main error type for all crate operations
#[derive(Debug)]
pub enum PruneError {
    /// Requested mask length cannot be classified
    InvalidSize {
        /// Size supplied by the caller
        size: i64,
        /// Explanation of why the size is invalid
        reason: String,
    },

    /// Retention density multiplier is not strictly positive
    ///
    /// A zero scale never accumulates enough density to keep anything past the
    /// initial carry, and a negative one drains the accumulator forever.
    InvalidScale {
        /// Scale supplied by the caller
        scale: f64,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Reading input or writing output failed
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl PruneError {
    /// Whether the error stems from caller-supplied parameters rather than the environment
    pub const fn is_domain_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidSize { .. } | Self::InvalidScale { .. } | Self::InvalidParameter { .. }
        )
    }

    /// Process exit code conventionally reported for this error
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::FileSystem { source, .. }
                if source.kind() == std::io::ErrorKind::Interrupted =>
            {
                EXIT_INTERRUPTED
            }
            _ if self.is_domain_error() => EXIT_DOMAIN_ERROR,
            _ => EXIT_UNEXPECTED,
        }
    }

    /// Short name of the variant, used when reporting unexpected failures
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::InvalidSize { .. } => "InvalidSize",
            Self::InvalidScale { .. } => "InvalidScale",
            Self::InvalidParameter { .. } => "InvalidParameter",
            Self::FileSystem { .. } => "FileSystem",
        }
    }
}

impl fmt::Display for PruneError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize { size, reason } => {
                write!(f, "Invalid size {size}: {reason}")
            }
            Self::InvalidScale { scale } => {
                write!(f, "Invalid scale {scale}: must be a positive number")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for PruneError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for crate results
pub type Result<T> = std::result::Result<T, PruneError>;

impl From<std::io::Error> for PruneError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> PruneError {
    PruneError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an invalid size error
pub fn invalid_size(size: i64, reason: &impl ToString) -> PruneError {
    PruneError::InvalidSize {
        size,
        reason: reason.to_string(),
    }
}

/// Create a file system error bound to a path and operation
pub fn file_system_error(
    path: impl Into<PathBuf>,
    operation: &'static str,
    source: std::io::Error,
) -> PruneError {
    PruneError::FileSystem {
        path: path.into(),
        operation,
        source,
    }
}
