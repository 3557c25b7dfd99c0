//! Error handling for cryptographic primitives

use std::borrow::Cow;

use hcrypt_api::Error as CoreError;
use thiserror::Error as ThisError;

/// The error type for cryptographic primitives
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum Error {
    /// Parameter validation error
    #[error("Invalid parameter '{name}': {reason}")]
    Parameter {
        /// Name of the invalid parameter
        name: &'static str,
        /// Reason why the parameter is invalid
        reason: Cow<'static, str>,
    },

    /// Length validation error
    #[error("{context}: invalid length (expected {expected}, got {actual})")]
    Length {
        /// Context where the length error occurred
        context: &'static str,
        /// Expected length in bytes
        expected: usize,
        /// Actual length in bytes
        actual: usize,
    },

    /// Point decoding or validation failure
    #[error("Invalid {curve} point: {reason}")]
    Point {
        curve: &'static str,
        reason: &'static str,
    },

    /// Scalar decoding failure (zero or not below the group order)
    #[error("Invalid {curve} scalar")]
    Scalar { curve: &'static str },

    /// Authentication failure (AEAD tag verification)
    #[error("Authentication failed for {algorithm}")]
    Authentication {
        /// Algorithm that failed authentication
        algorithm: &'static str,
    },

    /// Processing error during cryptographic operation
    #[error("{operation} failed: {details}")]
    Processing {
        /// Operation that failed
        operation: &'static str,
        /// Additional details about the failure
        details: &'static str,
    },

    /// Errors bubbling up from the API layer (random source)
    #[error(transparent)]
    Api(#[from] CoreError),
}

/// Result type for cryptographic primitives
pub type Result<T> = core::result::Result<T, Error>;

impl From<Error> for CoreError {
    fn from(err: Error) -> Self {
        match err {
            Error::Parameter { name, reason } => CoreError::InvalidParameter {
                context: name,
                message: reason.into_owned(),
            },
            Error::Length {
                context,
                expected,
                actual,
            } => CoreError::InvalidLength {
                context,
                expected,
                actual,
            },
            Error::Point { curve, .. } => CoreError::InvalidPoint { context: curve },
            Error::Scalar { curve } => CoreError::InvalidKey {
                context: curve,
                message: "scalar out of range".to_string(),
            },
            Error::Authentication { algorithm } => {
                CoreError::AuthenticationFailed { context: algorithm }
            }
            Error::Processing { operation, details } => CoreError::EncryptionFailed {
                context: operation,
                message: details.to_string(),
            },
            Error::Api(e) => e,
        }
    }
}

/// Validation helpers for primitive-level checks
pub mod validate {
    use super::{Error, Result};
    use std::borrow::Cow;

    /// Fail with `Parameter` unless `condition` holds
    pub fn parameter(
        condition: bool,
        name: &'static str,
        reason: impl Into<Cow<'static, str>>,
    ) -> Result<()> {
        if !condition {
            return Err(Error::Parameter {
                name,
                reason: reason.into(),
            });
        }
        Ok(())
    }

    /// Fail with `Length` unless `actual == expected`
    pub fn length(context: &'static str, actual: usize, expected: usize) -> Result<()> {
        if actual != expected {
            return Err(Error::Length {
                context,
                expected,
                actual,
            });
        }
        Ok(())
    }
}
