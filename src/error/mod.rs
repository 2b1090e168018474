//! Error types for hashrs.

use thiserror::Error;

/// Errors that can occur while configuring or running a hash computation.
#[derive(Debug, Error)]
pub enum HashError {
    /// An I/O error occurred while reading input data.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid configuration parameter.
    #[error("invalid config: {message}")]
    InvalidConfig {
        /// Description of what was invalid.
        message: &'static str,
    },

    /// The algorithm produces a different size than the one declared for it.
    #[error("hash size mismatch: declared {declared} bits, algorithm produces {actual} bits")]
    HashSizeMismatch {
        /// The size the hash function reports.
        declared: usize,
        /// The size the bound algorithm actually produces.
        actual: usize,
    },

    /// No CRC standard is registered under the given name.
    #[error("unknown CRC standard: {0}")]
    UnknownStandard(String),

    /// No hash algorithm is registered under the given name.
    #[error("unknown hash algorithm: {0}")]
    UnknownAlgorithm(String),

    /// The transformer was already finalized.
    #[error("transformer already finalized")]
    AlreadyFinalized,

    /// The computation was cancelled before it completed.
    #[error("hash computation cancelled")]
    Cancelled,
}

/// Broad classification of a [`HashError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Inconsistent parameters, detected before any data is processed.
    Configuration,
    /// Failure reported by the data source.
    DataSource,
    /// API used out of order (e.g. finalize twice).
    Misuse,
    /// Aborted through a cancellation token.
    Cancelled,
}

impl HashError {
    /// Returns the category this error belongs to.
    pub fn kind(&self) -> ErrorKind {
        match self {
            HashError::Io(_) => ErrorKind::DataSource,
            HashError::InvalidConfig { .. }
            | HashError::HashSizeMismatch { .. }
            | HashError::UnknownStandard(_)
            | HashError::UnknownAlgorithm(_) => ErrorKind::Configuration,
            HashError::AlreadyFinalized => ErrorKind::Misuse,
            HashError::Cancelled => ErrorKind::Cancelled,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "test");
        let err: HashError = io_err.into();
        assert!(matches!(err, HashError::Io(_)));
        assert_eq!(err.kind(), ErrorKind::DataSource);
        assert!(err.source().is_some());
    }

    #[test]
    fn test_display() {
        let err = HashError::HashSizeMismatch {
            declared: 32,
            actual: 16,
        };
        assert!(err.to_string().contains("hash size mismatch"));

        let err = HashError::InvalidConfig {
            message: "bits must be between 1 and 64",
        };
        assert_eq!(err.to_string(), "invalid config: bits must be between 1 and 64");
    }

    #[test]
    fn test_kinds() {
        assert_eq!(HashError::AlreadyFinalized.kind(), ErrorKind::Misuse);
        assert_eq!(HashError::Cancelled.kind(), ErrorKind::Cancelled);
        assert_eq!(
            HashError::UnknownStandard("CRC-99".into()).kind(),
            ErrorKind::Configuration
        );
    }
}
