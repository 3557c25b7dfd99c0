//! Data-encapsulation mechanisms (DEMs)
//!
//! A DEM is an AEAD keyed by the HKDF output of the ECIES key-encapsulation
//! step. Every DEM here draws its own IV/nonce and emits a self-contained
//! ciphertext of the form `iv || ct || tag`, so the caller only has to carry
//! the bytes around.
//!
//! | DEM                  | key                  | layout                      |
//! |----------------------|----------------------|-----------------------------|
//! | AES-GCM              | 16 or 32             | `iv(12) || ct || tag(16)`   |
//! | AES-CTR-HMAC         | aes key || hmac key  | `iv(12..=16) || ct || tag`  |
//! | XChaCha20-Poly1305   | 32                   | `nonce(24) || ct || tag(16)`|

use hcrypt_api::SecureRandom;
use hcrypt_params::utils::symmetric::{
    AES128_KEY_SIZE, AES256_KEY_SIZE, AES_BLOCK_SIZE, AES_CTR_MIN_IV_SIZE, AES_GCM_IV_SIZE,
    AES_GCM_TAG_SIZE, HMAC_MIN_KEY_SIZE, HMAC_MIN_TAG_SIZE, POLY1305_TAG_SIZE,
    XCHACHA20_POLY1305_KEY_SIZE, XCHACHA20_POLY1305_NONCE_SIZE,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{validate, Result};
use crate::hash::HashType;

pub mod ctr_hmac;
pub mod gcm;
pub mod xchacha20poly1305;

pub use ctr_hmac::AesCtrHmac;
pub use gcm::AesGcm;
pub use xchacha20poly1305::XChaCha20Poly1305;

/// Parameters of a data-encapsulation mechanism
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DemParams {
    /// AES-GCM with a 96-bit random IV and a 128-bit tag
    AesGcm { key_size: usize },
    /// AES-CTR encrypt-then-HMAC
    AesCtrHmac {
        aes_key_size: usize,
        iv_size: usize,
        hmac_key_size: usize,
        hmac_hash: HashType,
        tag_size: usize,
    },
    /// XChaCha20-Poly1305 with a 192-bit random nonce
    XChaCha20Poly1305,
}

impl DemParams {
    /// Number of key bytes the KDF must produce for this DEM
    pub const fn key_size(&self) -> usize {
        match *self {
            DemParams::AesGcm { key_size } => key_size,
            DemParams::AesCtrHmac {
                aes_key_size,
                hmac_key_size,
                ..
            } => aes_key_size + hmac_key_size,
            DemParams::XChaCha20Poly1305 => XCHACHA20_POLY1305_KEY_SIZE,
        }
    }

    /// Bytes added to the plaintext by `seal`
    pub const fn overhead(&self) -> usize {
        match *self {
            DemParams::AesGcm { .. } => AES_GCM_IV_SIZE + AES_GCM_TAG_SIZE,
            DemParams::AesCtrHmac {
                iv_size, tag_size, ..
            } => iv_size + tag_size,
            DemParams::XChaCha20Poly1305 => XCHACHA20_POLY1305_NONCE_SIZE + POLY1305_TAG_SIZE,
        }
    }

    pub const fn name(&self) -> &'static str {
        match self {
            DemParams::AesGcm { .. } => "AES-GCM",
            DemParams::AesCtrHmac { .. } => "AES-CTR-HMAC",
            DemParams::XChaCha20Poly1305 => "XChaCha20-Poly1305",
        }
    }

    /// Check key, IV and tag sizes
    pub fn validate(&self) -> Result<()> {
        match *self {
            DemParams::AesGcm { key_size } => validate::parameter(
                key_size == AES128_KEY_SIZE || key_size == AES256_KEY_SIZE,
                "key_size",
                "AES-GCM key must be 16 or 32 bytes",
            ),
            DemParams::AesCtrHmac {
                aes_key_size,
                iv_size,
                hmac_key_size,
                hmac_hash,
                tag_size,
            } => {
                validate::parameter(
                    aes_key_size == AES128_KEY_SIZE || aes_key_size == AES256_KEY_SIZE,
                    "aes_key_size",
                    "AES-CTR key must be 16 or 32 bytes",
                )?;
                validate::parameter(
                    (AES_CTR_MIN_IV_SIZE..=AES_BLOCK_SIZE).contains(&iv_size),
                    "iv_size",
                    "AES-CTR IV must be between 12 and 16 bytes",
                )?;
                validate::parameter(
                    hmac_key_size >= HMAC_MIN_KEY_SIZE,
                    "hmac_key_size",
                    "HMAC key must be at least 16 bytes",
                )?;
                validate::parameter(
                    (HMAC_MIN_TAG_SIZE..=hmac_hash.output_size()).contains(&tag_size),
                    "tag_size",
                    format!(
                        "HMAC-{} tag must be between {} and {} bytes",
                        hmac_hash.name(),
                        HMAC_MIN_TAG_SIZE,
                        hmac_hash.output_size()
                    ),
                )
            }
            DemParams::XChaCha20Poly1305 => Ok(()),
        }
    }
}

/// A keyed data-encapsulation mechanism
#[derive(Clone)]
pub enum Dem {
    AesGcm(AesGcm),
    AesCtrHmac(AesCtrHmac),
    XChaCha20Poly1305(XChaCha20Poly1305),
}

impl core::fmt::Debug for Dem {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let name = match self {
            Dem::AesGcm(_) => "AES-GCM",
            Dem::AesCtrHmac(_) => "AES-CTR-HMAC",
            Dem::XChaCha20Poly1305(_) => "XChaCha20-Poly1305",
        };
        write!(f, "Dem<{}>[REDACTED]", name)
    }
}

impl Dem {
    /// Key the DEM described by `params` with `key`, which must be exactly
    /// `params.key_size()` bytes.
    pub fn new(params: &DemParams, key: &[u8]) -> Result<Self> {
        params.validate()?;
        validate::length("Dem::new", key.len(), params.key_size())?;

        Ok(match *params {
            DemParams::AesGcm { .. } => Dem::AesGcm(AesGcm::new(key)?),
            DemParams::AesCtrHmac {
                aes_key_size,
                iv_size,
                hmac_hash,
                tag_size,
                ..
            } => {
                let (aes_key, hmac_key) = key.split_at(aes_key_size);
                Dem::AesCtrHmac(AesCtrHmac::new(aes_key, hmac_key, iv_size, hmac_hash, tag_size)?)
            }
            DemParams::XChaCha20Poly1305 => Dem::XChaCha20Poly1305(XChaCha20Poly1305::new(key)?),
        })
    }

    /// Encrypt and authenticate `plaintext`, binding `aad`.
    pub fn seal(&self, plaintext: &[u8], aad: &[u8], rng: &dyn SecureRandom) -> Result<Vec<u8>> {
        match self {
            Dem::AesGcm(dem) => dem.seal(plaintext, aad, rng),
            Dem::AesCtrHmac(dem) => dem.seal(plaintext, aad, rng),
            Dem::XChaCha20Poly1305(dem) => dem.seal(plaintext, aad, rng),
        }
    }

    /// Verify and decrypt. Every failure is `Error::Authentication`.
    pub fn open(&self, ciphertext: &[u8], aad: &[u8]) -> Result<Vec<u8>> {
        match self {
            Dem::AesGcm(dem) => dem.open(ciphertext, aad),
            Dem::AesCtrHmac(dem) => dem.open(ciphertext, aad),
            Dem::XChaCha20Poly1305(dem) => dem.open(ciphertext, aad),
        }
    }
}
