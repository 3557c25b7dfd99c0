//! AES-CTR with HMAC, encrypt-then-MAC
//!
//! Output layout is `iv || ciphertext || tag`, where
//!
//! ```text
//! tag = truncate(HMAC(hmac_key, aad || iv || ciphertext || be64(bitlen(aad))), tag_size)
//! ```
//!
//! IVs shorter than a block are zero-padded on the right to form the initial
//! 128-bit big-endian counter block. The tag is verified in constant time
//! before any byte is decrypted.

use aes::{Aes128, Aes256};
use ctr::cipher::{KeyIvInit, StreamCipher};
use ctr::Ctr128BE;
use hcrypt_api::SecureRandom;
use hcrypt_params::utils::symmetric::{AES128_KEY_SIZE, AES256_KEY_SIZE, AES_BLOCK_SIZE};
use hmac::digest::KeyInit;
use hmac::{Hmac, Mac};
use sha2::{Sha224, Sha256, Sha384, Sha512};
use subtle::ConstantTimeEq;
use zeroize::ZeroizeOnDrop;

use crate::error::{validate, Error, Result};
use crate::hash::HashType;

const ALGORITHM: &str = "AES-CTR-HMAC";

/// Both keys are wiped when the value is dropped
#[derive(Clone, ZeroizeOnDrop)]
pub struct AesCtrHmac {
    aes_key: Vec<u8>,
    hmac_key: Vec<u8>,
    #[zeroize(skip)]
    iv_size: usize,
    #[zeroize(skip)]
    hmac_hash: HashType,
    #[zeroize(skip)]
    tag_size: usize,
}

impl AesCtrHmac {
    pub fn new(
        aes_key: &[u8],
        hmac_key: &[u8],
        iv_size: usize,
        hmac_hash: HashType,
        tag_size: usize,
    ) -> Result<Self> {
        validate::parameter(
            aes_key.len() == AES128_KEY_SIZE || aes_key.len() == AES256_KEY_SIZE,
            "aes_key",
            "AES-CTR key must be 16 or 32 bytes",
        )?;
        validate::parameter(
            iv_size <= AES_BLOCK_SIZE && iv_size > 0,
            "iv_size",
            "IV must fit in one AES block",
        )?;
        validate::parameter(
            tag_size > 0 && tag_size <= hmac_hash.output_size(),
            "tag_size",
            "tag longer than the HMAC output",
        )?;

        Ok(Self {
            aes_key: aes_key.to_vec(),
            hmac_key: hmac_key.to_vec(),
            iv_size,
            hmac_hash,
            tag_size,
        })
    }

    pub fn seal(&self, plaintext: &[u8], aad: &[u8], rng: &dyn SecureRandom) -> Result<Vec<u8>> {
        let mut out = vec![0u8; self.iv_size + plaintext.len()];
        rng.fill(&mut out[..self.iv_size])?;
        out[self.iv_size..].copy_from_slice(plaintext);

        let (iv, body) = out.split_at_mut(self.iv_size);
        apply_keystream(&self.aes_key, iv, body)?;

        let tag = self.tag(aad, &out)?;
        out.extend_from_slice(&tag[..self.tag_size]);
        Ok(out)
    }

    pub fn open(&self, ciphertext: &[u8], aad: &[u8]) -> Result<Vec<u8>> {
        if ciphertext.len() < self.iv_size + self.tag_size {
            return Err(Error::Authentication {
                algorithm: ALGORITHM,
            });
        }
        let (authenticated, tag) = ciphertext.split_at(ciphertext.len() - self.tag_size);

        let expected = self.tag(aad, authenticated)?;
        if !bool::from(expected[..self.tag_size].ct_eq(tag)) {
            return Err(Error::Authentication {
                algorithm: ALGORITHM,
            });
        }

        let (iv, body) = authenticated.split_at(self.iv_size);
        let mut plaintext = body.to_vec();
        apply_keystream(&self.aes_key, iv, &mut plaintext)?;
        Ok(plaintext)
    }

    /// Full-length HMAC over `aad || iv_and_ciphertext || be64(bitlen(aad))`
    fn tag(&self, aad: &[u8], iv_and_ciphertext: &[u8]) -> Result<Vec<u8>> {
        let aad_bits = (aad.len() as u64).wrapping_mul(8).to_be_bytes();
        let parts = [aad, iv_and_ciphertext, &aad_bits[..]];
        match self.hmac_hash {
            HashType::Sha224 => hmac::<Hmac<Sha224>>(&self.hmac_key, &parts),
            HashType::Sha256 => hmac::<Hmac<Sha256>>(&self.hmac_key, &parts),
            HashType::Sha384 => hmac::<Hmac<Sha384>>(&self.hmac_key, &parts),
            HashType::Sha512 => hmac::<Hmac<Sha512>>(&self.hmac_key, &parts),
        }
    }
}

fn hmac<M: Mac + KeyInit>(key: &[u8], parts: &[&[u8]]) -> Result<Vec<u8>> {
    let mut mac = <M as KeyInit>::new_from_slice(key).map_err(|_| Error::Parameter {
        name: "hmac_key",
        reason: "rejected by HMAC".into(),
    })?;
    for part in parts {
        mac.update(part);
    }
    Ok(mac.finalize().into_bytes().to_vec())
}

/// XOR the AES-CTR keystream starting at `iv || 0..` into `buf`
pub(crate) fn apply_keystream(key: &[u8], iv: &[u8], buf: &mut [u8]) -> Result<()> {
    let mut counter = [0u8; AES_BLOCK_SIZE];
    counter[..iv.len()].copy_from_slice(iv);

    let invalid = |_| Error::Length {
        context: "AES-CTR key",
        expected: AES128_KEY_SIZE,
        actual: key.len(),
    };
    match key.len() {
        AES128_KEY_SIZE => Ctr128BE::<Aes128>::new_from_slices(key, &counter)
            .map_err(invalid)?
            .apply_keystream(buf),
        AES256_KEY_SIZE => Ctr128BE::<Aes256>::new_from_slices(key, &counter)
            .map_err(invalid)?
            .apply_keystream(buf),
        actual => {
            return Err(Error::Length {
                context: "AES-CTR key",
                expected: AES128_KEY_SIZE,
                actual,
            })
        }
    }
    Ok(())
}
