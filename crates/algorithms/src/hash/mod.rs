//! Hash function selection for HKDF and HMAC

use hcrypt_params::utils::hash::{
    SHA224_OUTPUT_SIZE, SHA256_OUTPUT_SIZE, SHA384_OUTPUT_SIZE, SHA512_OUTPUT_SIZE,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// SHA-2 family members usable by the key derivation and MAC stages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum HashType {
    Sha224,
    Sha256,
    Sha384,
    Sha512,
}

impl HashType {
    /// Digest size in bytes
    pub const fn output_size(self) -> usize {
        match self {
            HashType::Sha224 => SHA224_OUTPUT_SIZE,
            HashType::Sha256 => SHA256_OUTPUT_SIZE,
            HashType::Sha384 => SHA384_OUTPUT_SIZE,
            HashType::Sha512 => SHA512_OUTPUT_SIZE,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            HashType::Sha224 => "SHA224",
            HashType::Sha256 => "SHA256",
            HashType::Sha384 => "SHA384",
            HashType::Sha512 => "SHA512",
        }
    }
}
