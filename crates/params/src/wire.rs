//! Ciphertext framing constants
//!
//! Prefixed ciphertexts start with a one-byte version tag followed by the
//! producing key's identifier as a big-endian `u32`.

/// Size of the non-raw output prefix in bytes
pub const NON_RAW_PREFIX_SIZE: usize = 5;

/// Size of the raw output prefix in bytes
pub const RAW_PREFIX_SIZE: usize = 0;

/// Default version tag for TINK-convention prefixes
pub const TINK_START_BYTE: u8 = 0x01;

/// Default version tag for LEGACY-convention prefixes
pub const LEGACY_START_BYTE: u8 = 0x00;

/// Size of the key identifier inside a prefix
pub const KEY_ID_SIZE: usize = 4;
