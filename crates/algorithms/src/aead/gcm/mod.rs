//! AES-GCM data encapsulation
//!
//! Output layout is `iv(12) || ciphertext || tag(16)` with a fresh random IV
//! for every message.

use aes_gcm::aead::{Aead, KeyInit, Payload};
use aes_gcm::{Aes128Gcm, Aes256Gcm, Nonce};
use hcrypt_api::SecureRandom;
use hcrypt_params::utils::symmetric::{
    AES128_KEY_SIZE, AES256_KEY_SIZE, AES_GCM_IV_SIZE, AES_GCM_TAG_SIZE,
};

use crate::error::{Error, Result};

const ALGORITHM: &str = "AES-GCM";

/// AES-GCM keyed with a 128- or 256-bit key
#[derive(Clone)]
pub enum AesGcm {
    Aes128(Aes128Gcm),
    Aes256(Aes256Gcm),
}

impl AesGcm {
    pub fn new(key: &[u8]) -> Result<Self> {
        let invalid = |_| Error::Length {
            context: "AesGcm::new",
            expected: AES128_KEY_SIZE,
            actual: key.len(),
        };
        match key.len() {
            AES128_KEY_SIZE => Ok(AesGcm::Aes128(Aes128Gcm::new_from_slice(key).map_err(invalid)?)),
            AES256_KEY_SIZE => Ok(AesGcm::Aes256(Aes256Gcm::new_from_slice(key).map_err(invalid)?)),
            actual => Err(Error::Length {
                context: "AesGcm::new",
                expected: AES128_KEY_SIZE,
                actual,
            }),
        }
    }

    pub fn seal(&self, plaintext: &[u8], aad: &[u8], rng: &dyn SecureRandom) -> Result<Vec<u8>> {
        let mut iv = [0u8; AES_GCM_IV_SIZE];
        rng.fill(&mut iv)?;

        let payload = Payload {
            msg: plaintext,
            aad,
        };
        let nonce = Nonce::from_slice(&iv);
        let sealed = match self {
            AesGcm::Aes128(cipher) => cipher.encrypt(nonce, payload),
            AesGcm::Aes256(cipher) => cipher.encrypt(nonce, payload),
        }
        .map_err(|_| Error::Processing {
            operation: "AES-GCM seal",
            details: "plaintext too long",
        })?;

        let mut out = Vec::with_capacity(AES_GCM_IV_SIZE + sealed.len());
        out.extend_from_slice(&iv);
        out.extend_from_slice(&sealed);
        Ok(out)
    }

    pub fn open(&self, ciphertext: &[u8], aad: &[u8]) -> Result<Vec<u8>> {
        if ciphertext.len() < AES_GCM_IV_SIZE + AES_GCM_TAG_SIZE {
            return Err(Error::Authentication {
                algorithm: ALGORITHM,
            });
        }
        let (iv, sealed) = ciphertext.split_at(AES_GCM_IV_SIZE);

        let payload = Payload { msg: sealed, aad };
        let nonce = Nonce::from_slice(iv);
        match self {
            AesGcm::Aes128(cipher) => cipher.decrypt(nonce, payload),
            AesGcm::Aes256(cipher) => cipher.decrypt(nonce, payload),
        }
        .map_err(|_| Error::Authentication {
            algorithm: ALGORITHM,
        })
    }
}
