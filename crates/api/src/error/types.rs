//! Error type definitions for hybrid encryption operations

use thiserror::Error as ThisError;

/// Primary error type for hybrid encryption operations
///
/// Decryption failures are deliberately reported through a single variant,
/// [`Error::DecryptionFailed`], whatever stage rejected the input. Lower
/// layers may produce [`Error::InvalidPoint`] or
/// [`Error::AuthenticationFailed`], but those never cross the ECIES
/// decryption boundary.
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum Error {
    /// Malformed or off-curve elliptic-curve point
    #[error("Invalid point: {context}")]
    InvalidPoint { context: &'static str },

    /// Invalid key material
    #[error("Invalid key: {context}: {message}")]
    InvalidKey {
        context: &'static str,
        message: String,
    },

    /// Invalid parameter error
    #[error("{context}: {message}")]
    InvalidParameter {
        context: &'static str,
        message: String,
    },

    /// Invalid length error with context
    #[error("{context}: invalid length (expected {expected}, got {actual})")]
    InvalidLength {
        context: &'static str,
        expected: usize,
        actual: usize,
    },

    /// AEAD tag verification failed
    #[error("Authentication failed: {context}")]
    AuthenticationFailed { context: &'static str },

    /// Generic decryption failure
    #[error("Decryption failed: {context}")]
    DecryptionFailed { context: &'static str },

    /// Encryption failed for a reason other than the random source
    #[error("Encryption failed: {context}: {message}")]
    EncryptionFailed {
        context: &'static str,
        message: String,
    },

    /// The keyset has no usable primary key
    #[error("No primary key: {context}")]
    NoPrimaryKey { context: &'static str },

    /// Two keyset entries share an identifier
    #[error("Duplicate key id {key_id}")]
    DuplicateKeyId { key_id: u32 },

    /// Key material does not fit the requested operation direction
    #[error("Key material mismatch for key {key_id}: {context}")]
    KeyMaterialMismatch { key_id: u32, context: &'static str },

    /// The secure random source failed
    #[error("Random source error: {context}: {message}")]
    RandomSource {
        context: &'static str,
        message: String,
    },
}

/// Result type for hybrid encryption operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Whether this error originated in the random source
    ///
    /// Random source failures are fatal and must not be retried.
    pub fn is_random_source(&self) -> bool {
        matches!(self, Self::RandomSource { .. })
    }
}
