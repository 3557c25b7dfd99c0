//! Error handling for PKE operations.

use hcrypt_algorithms::error::Error as PrimitiveError;
use hcrypt_api::Error as CoreError;
use thiserror::Error as ThisError;

/// Error type for PKE operations.
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum Error {
    #[error("PKE primitive error: {0}")]
    Primitive(#[from] PrimitiveError),

    #[error("PKE API error: {0}")]
    Api(#[from] CoreError),

    #[error("Invalid PKE ciphertext format: {0}")]
    InvalidCiphertextFormat(&'static str),
}

// Conversion from PKE Error to API Error
impl From<Error> for CoreError {
    fn from(err: Error) -> Self {
        match err {
            Error::Primitive(e) => e.into(),
            Error::Api(e) => e,
            Error::InvalidCiphertextFormat(_) => CoreError::DecryptionFailed { context: "ECIES" },
        }
    }
}

/// Result type for PKE operations.
pub type Result<T> = core::result::Result<T, Error>;
