//! Key encapsulation: ephemeral ECDH followed by HKDF
//!
//! The HKDF input key material is `kem_bytes || shared_secret`, where
//! `kem_bytes` is the encoded ephemeral point that travels in the ciphertext.
//! Binding the point into the derivation ties the DEM key to this exact
//! encapsulation.

use hcrypt_algorithms::ec;
use hcrypt_algorithms::kdf::derive_key;
use hcrypt_api::SecureRandom;
use zeroize::Zeroizing;

use super::{EciesParams, EciesPrivateKey, EciesPublicKey};
use crate::error::Result;

/// Sender-side output
pub struct Encapsulation {
    /// Encoded ephemeral public point
    pub kem_bytes: Vec<u8>,
    /// DEM key, `params.dem.key_size()` bytes
    pub symmetric_key: Zeroizing<Vec<u8>>,
}

/// Generate an ephemeral key pair and derive a DEM key for `recipient`
pub fn encapsulate(
    recipient: &EciesPublicKey,
    context_info: &[u8],
    rng: &dyn SecureRandom,
) -> Result<Encapsulation> {
    let params = recipient.params();
    let agreement = ec::ephemeral_agree(recipient.point(), params.point_format, rng)?;
    let symmetric_key = derive(
        params,
        &agreement.ephemeral_public,
        &agreement.shared_secret,
        context_info,
    )?;

    Ok(Encapsulation {
        kem_bytes: agreement.ephemeral_public,
        symmetric_key,
    })
}

/// Recover the DEM key from the sender's encoded ephemeral point
pub fn decapsulate(
    recipient: &EciesPrivateKey,
    kem_bytes: &[u8],
    context_info: &[u8],
) -> Result<Zeroizing<Vec<u8>>> {
    let params = recipient.params();
    let shared_secret = ec::static_agree(&recipient.scalar, params.point_format, kem_bytes)?;
    derive(params, kem_bytes, &shared_secret, context_info)
}

fn derive(
    params: &EciesParams,
    kem_bytes: &[u8],
    shared_secret: &[u8],
    context_info: &[u8],
) -> Result<Zeroizing<Vec<u8>>> {
    let mut ikm = Zeroizing::new(Vec::with_capacity(kem_bytes.len() + shared_secret.len()));
    ikm.extend_from_slice(kem_bytes);
    ikm.extend_from_slice(shared_secret);

    Ok(derive_key(
        params.hkdf_hash,
        &ikm,
        &params.salt,
        context_info,
        params.dem.key_size(),
    )?)
}
