//! Constants for symmetric encryption algorithms

/// AES-128 key size in bytes
pub const AES128_KEY_SIZE: usize = 16;

/// AES-256 key size in bytes
pub const AES256_KEY_SIZE: usize = 32;

/// AES block size in bytes
pub const AES_BLOCK_SIZE: usize = 16;

/// AES-GCM IV size in bytes
pub const AES_GCM_IV_SIZE: usize = 12;

/// AES-GCM tag size in bytes
pub const AES_GCM_TAG_SIZE: usize = 16;

/// Smallest IV accepted for AES-CTR in bytes
pub const AES_CTR_MIN_IV_SIZE: usize = 12;

/// Smallest HMAC key accepted by AES-CTR-HMAC in bytes
pub const HMAC_MIN_KEY_SIZE: usize = 16;

/// Smallest HMAC tag accepted by AES-CTR-HMAC in bytes
pub const HMAC_MIN_TAG_SIZE: usize = 10;

/// XChaCha20-Poly1305 key size in bytes
pub const XCHACHA20_POLY1305_KEY_SIZE: usize = 32;

/// XChaCha20-Poly1305 nonce size in bytes
pub const XCHACHA20_POLY1305_NONCE_SIZE: usize = 24;

/// Poly1305 tag size in bytes
pub const POLY1305_TAG_SIZE: usize = 16;
