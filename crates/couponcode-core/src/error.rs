//! Error types for couponcode.
//!
//! Generation never fails. Validation failures and configuration problems
//! are reported through the unified [`Error`] type.

use std::io;

use thiserror::Error;

/// A specialized `Result` type for couponcode operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for couponcode.
#[derive(Error, Debug)]
pub enum Error {
    /// Input did not validate as a code (C001-C003)
    #[error("invalid code '{code}': {reason}")]
    InvalidCode {
        /// The normalized, segmented form that was checked
        code: String,
        /// Why the code was rejected
        #[source]
        reason: ValidationFailure,
    },

    /// Invalid configuration value
    #[error("invalid configuration value for '{key}': {reason}")]
    InvalidConfig {
        /// Configuration key
        key: String,
        /// Reason for invalidity
        reason: String,
    },

    /// Configuration file could not be parsed or written
    #[error("configuration error: {0}")]
    ConfigError(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// The specific reason a code failed validation.
///
/// Part numbers are 1-based, matching the checksum seed of the part.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationFailure {
    /// The code split into the wrong number of parts
    #[error("wrong number of parts: expected {expected}, got {actual}")]
    WrongPartCount {
        /// Configured number of parts
        expected: usize,
        /// Number of parts found after normalization
        actual: usize,
    },

    /// A part has the wrong number of symbols
    #[error("part {part} has wrong length: expected {expected}, got {actual}")]
    WrongPartLength {
        /// 1-based part position
        part: usize,
        /// Configured part length
        expected: usize,
        /// Length found
        actual: usize,
    },

    /// A part's trailing symbol does not match its checksum
    #[error("part {part} has check character '{actual}', expected '{expected}'")]
    ChecksumMismatch {
        /// 1-based part position
        part: usize,
        /// Recomputed check character
        expected: char,
        /// Check character found in the input
        actual: char,
    },
}

impl Error {
    /// Returns the error code associated with this error, if any.
    ///
    /// Error codes follow the pattern CXXX where XXX is a 3-digit number.
    #[must_use]
    pub const fn code(&self) -> Option<&'static str> {
        match self {
            Self::InvalidCode { reason, .. } => Some(reason.code()),
            _ => None,
        }
    }

    /// Returns the normalized code that failed validation.
    ///
    /// Useful for echoing back what was actually checked, e.g. `190D-V467-8D52`
    /// for the input `i9oD/V467/8Dsz`.
    #[must_use]
    pub fn canonical_code(&self) -> Option<&str> {
        match self {
            Self::InvalidCode { code, .. } => Some(code),
            _ => None,
        }
    }

    /// Returns the validation failure, if this is a validation error.
    #[must_use]
    pub const fn failure(&self) -> Option<&ValidationFailure> {
        match self {
            Self::InvalidCode { reason, .. } => Some(reason),
            _ => None,
        }
    }

    pub(crate) fn invalid_config(key: &str, reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            key: key.to_string(),
            reason: reason.into(),
        }
    }
}

impl ValidationFailure {
    /// Stable short identifier for this failure kind.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::WrongPartCount { .. } => "C001",
            Self::WrongPartLength { .. } => "C002",
            Self::ChecksumMismatch { .. } => "C003",
        }
    }

    /// Returns the offending 1-based part, if the failure concerns one part.
    #[must_use]
    pub const fn part(&self) -> Option<usize> {
        match self {
            Self::WrongPartCount { .. } => None,
            Self::WrongPartLength { part, .. } | Self::ChecksumMismatch { part, .. } => Some(*part),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_code_accessors() {
        let err = Error::InvalidCode {
            code: "55G2-DHM0-50NK".to_string(),
            reason: ValidationFailure::ChecksumMismatch {
                part: 3,
                expected: 'N',
                actual: 'K',
            },
        };

        assert_eq!(err.code(), Some("C003"));
        assert_eq!(err.canonical_code(), Some("55G2-DHM0-50NK"));
        assert_eq!(err.failure().and_then(ValidationFailure::part), Some(3));
        assert_eq!(
            err.to_string(),
            "invalid code '55G2-DHM0-50NK': part 3 has check character 'K', expected 'N'"
        );
    }

    #[test]
    fn test_config_error_has_no_code() {
        let err = Error::invalid_config("parts", "must be at least 1");

        assert_eq!(err.code(), None);
        assert_eq!(err.canonical_code(), None);
        assert!(err.failure().is_none());
        assert_eq!(
            err.to_string(),
            "invalid configuration value for 'parts': must be at least 1"
        );
    }

    #[test]
    fn test_part_count_has_no_part() {
        let failure = ValidationFailure::WrongPartCount {
            expected: 3,
            actual: 2,
        };
        assert_eq!(failure.part(), None);
        assert_eq!(failure.code(), "C001");
    }
}
