//! HMAC-based Extract-and-Expand Key Derivation Function (RFC 5869)
//!
//! The ECIES layer feeds `ephemeral_point || shared_secret` as the input key
//! material, the per-key salt as the extract salt and the caller's context
//! info as the expand info. An empty salt behaves like the RFC's default
//! (`HashLen` zero bytes).

use hcrypt_params::utils::hash::HKDF_MAX_OUTPUT_BLOCKS;
use hkdf::Hkdf;
use sha2::{Sha224, Sha256, Sha384, Sha512};
use zeroize::Zeroizing;

use crate::error::{validate, Result};
use crate::hash::HashType;

/// Derive `length` bytes of key material with HKDF over `hash`.
pub fn derive_key(
    hash: HashType,
    ikm: &[u8],
    salt: &[u8],
    info: &[u8],
    length: usize,
) -> Result<Zeroizing<Vec<u8>>> {
    validate::parameter(length > 0, "length", "HKDF output length must be non-zero")?;
    validate::parameter(
        length <= HKDF_MAX_OUTPUT_BLOCKS * hash.output_size(),
        "length",
        "HKDF output length exceeds 255 * HashLen",
    )?;

    let mut okm = Zeroizing::new(vec![0u8; length]);
    let expanded = match hash {
        HashType::Sha224 => Hkdf::<Sha224>::new(Some(salt), ikm).expand(info, &mut okm),
        HashType::Sha256 => Hkdf::<Sha256>::new(Some(salt), ikm).expand(info, &mut okm),
        HashType::Sha384 => Hkdf::<Sha384>::new(Some(salt), ikm).expand(info, &mut okm),
        HashType::Sha512 => Hkdf::<Sha512>::new(Some(salt), ikm).expand(info, &mut okm),
    };
    expanded.map_err(|_| crate::Error::Processing {
        operation: "HKDF expand",
        details: "output length rejected",
    })?;

    Ok(okm)
}
