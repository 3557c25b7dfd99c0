//! Constants for Elliptic Curve Diffie-Hellman over the NIST prime curves
//!
//! Point sizes are given for the three encodings an ECIES key can be
//! configured with: SEC1 compressed (`tag || x`), SEC1 uncompressed
//! (`0x04 || x || y`) and the legacy uncompressed form (`x || y`, no tag).

/// Size of a P-256 field element / scalar in bytes
pub const P256_FIELD_ELEMENT_SIZE: usize = 32;

/// Size of a P-384 field element / scalar in bytes
pub const P384_FIELD_ELEMENT_SIZE: usize = 48;

/// Size of a P-521 field element / scalar in bytes
pub const P521_FIELD_ELEMENT_SIZE: usize = 66;

/// Size of shared secret for ECDH using P-256 in bytes
pub const ECDH_P256_SHARED_SECRET_SIZE: usize = P256_FIELD_ELEMENT_SIZE;

/// Size of shared secret for ECDH using P-384 in bytes
pub const ECDH_P384_SHARED_SECRET_SIZE: usize = P384_FIELD_ELEMENT_SIZE;

/// Size of shared secret for ECDH using P-521 in bytes
pub const ECDH_P521_SHARED_SECRET_SIZE: usize = P521_FIELD_ELEMENT_SIZE;

/// Size of the SEC1 tag byte that precedes compressed and uncompressed points
pub const SEC1_TAG_SIZE: usize = 1;

/// SEC1 tag for an uncompressed point
pub const SEC1_TAG_UNCOMPRESSED: u8 = 0x04;

/// SEC1 tag for a compressed point with even y
pub const SEC1_TAG_COMPRESSED_EVEN: u8 = 0x02;

/// SEC1 tag for a compressed point with odd y
pub const SEC1_TAG_COMPRESSED_ODD: u8 = 0x03;

/// Compressed point size for a curve whose field elements take `field_size` bytes
pub const fn compressed_point_size(field_size: usize) -> usize {
    SEC1_TAG_SIZE + field_size
}

/// Uncompressed point size for a curve whose field elements take `field_size` bytes
pub const fn uncompressed_point_size(field_size: usize) -> usize {
    SEC1_TAG_SIZE + 2 * field_size
}

/// Legacy uncompressed point size (no tag byte)
pub const fn legacy_uncompressed_point_size(field_size: usize) -> usize {
    2 * field_size
}

/// Size of public key for ECDH using P-256 in bytes (uncompressed format)
pub const ECDH_P256_PUBLIC_KEY_SIZE: usize = uncompressed_point_size(P256_FIELD_ELEMENT_SIZE);

/// Size of public key for ECDH using P-384 in bytes (uncompressed format)
pub const ECDH_P384_PUBLIC_KEY_SIZE: usize = uncompressed_point_size(P384_FIELD_ELEMENT_SIZE);

/// Size of public key for ECDH using P-521 in bytes (uncompressed format)
pub const ECDH_P521_PUBLIC_KEY_SIZE: usize = uncompressed_point_size(P521_FIELD_ELEMENT_SIZE);
