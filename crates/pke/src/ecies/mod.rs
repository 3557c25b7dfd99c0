//! Elliptic Curve Integrated Encryption Scheme with HKDF and an AEAD DEM
//!
//! Ciphertext layout: `ephemeral_point || dem_ciphertext`. The point is
//! encoded with the key's [`PointFormat`], so its length is fixed per key and
//! the decryptor can split the input without a length field.
//!
//! The caller's context info is used both as the HKDF `info` and as the DEM's
//! associated data.

use std::sync::Arc;

use hcrypt_algorithms::aead::{Dem, DemParams};
use hcrypt_algorithms::ec::{EcPrivateKey, EcPublicKey, EllipticCurve, PointFormat};
use hcrypt_algorithms::error::validate;
use hcrypt_algorithms::hash::HashType;
use hcrypt_api::error::Result as ApiResult;
use hcrypt_api::error::ResultExt;
use hcrypt_api::{Error as CoreError, HybridDecrypt, HybridEncrypt, SecureRandom};
use hcrypt_params::utils::hash::HKDF_MAX_OUTPUT_BLOCKS;
use zeroize::Zeroizing;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

pub mod kem;
pub mod templates;

/// Parameters shared by a private key and its public counterpart
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EciesParams {
    pub curve: EllipticCurve,
    pub hkdf_hash: HashType,
    pub point_format: PointFormat,
    pub dem: DemParams,
    /// HKDF salt; may be empty
    pub salt: Vec<u8>,
}

impl EciesParams {
    /// Replace the HKDF salt
    pub fn with_salt(mut self, salt: impl Into<Vec<u8>>) -> Self {
        self.salt = salt.into();
        self
    }

    /// Check the DEM template and that HKDF can produce a DEM key
    pub fn validate(&self) -> Result<()> {
        self.dem.validate()?;
        validate::parameter(
            self.dem.key_size() <= HKDF_MAX_OUTPUT_BLOCKS * self.hkdf_hash.output_size(),
            "dem",
            "DEM key longer than HKDF can produce",
        )?;
        Ok(())
    }

    /// Length of the encapsulated ephemeral point
    pub fn encapsulated_size(&self) -> usize {
        self.curve.encoded_point_size(self.point_format)
    }

    /// Fixed ciphertext expansion: point plus DEM IV and tag
    pub fn ciphertext_overhead(&self) -> usize {
        self.encapsulated_size() + self.dem.overhead()
    }

    /// Human-readable name, e.g. `ECIES-P-256-HKDF-SHA256-AES-GCM`
    pub fn name(&self) -> String {
        format!(
            "ECIES-{}-HKDF-{}-{}",
            self.curve.name(),
            self.hkdf_hash.name(),
            self.dem.name()
        )
    }
}

/// Recipient public key bound to its parameters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EciesPublicKey {
    params: EciesParams,
    point: EcPublicKey,
}

impl EciesPublicKey {
    /// Decode a point encoded in `params.point_format`
    pub fn from_bytes(params: EciesParams, bytes: &[u8]) -> Result<Self> {
        params.validate()?;
        let point = EcPublicKey::from_bytes(params.curve, params.point_format, bytes)?;
        Ok(Self { params, point })
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        self.point.to_bytes(self.params.point_format)
    }

    pub fn params(&self) -> &EciesParams {
        &self.params
    }

    pub fn point(&self) -> &EcPublicKey {
        &self.point
    }
}

/// Recipient private key bound to its parameters
#[derive(Debug, Clone)]
pub struct EciesPrivateKey {
    params: EciesParams,
    scalar: EcPrivateKey,
}

impl EciesPrivateKey {
    /// Generate a key pair for `params`
    pub fn generate(params: EciesParams, rng: &dyn SecureRandom) -> Result<Self> {
        params.validate()?;
        let scalar = EcPrivateKey::generate(params.curve, rng)?;
        Ok(Self { params, scalar })
    }

    /// Decode a big-endian scalar of exactly one field element
    pub fn from_bytes(params: EciesParams, bytes: &[u8]) -> Result<Self> {
        params.validate()?;
        let scalar = EcPrivateKey::from_bytes(params.curve, bytes)?;
        Ok(Self { params, scalar })
    }

    pub fn to_bytes(&self) -> Zeroizing<Vec<u8>> {
        self.scalar.to_bytes()
    }

    /// The public counterpart, carrying identical parameters
    pub fn public_key(&self) -> EciesPublicKey {
        EciesPublicKey {
            params: self.params.clone(),
            point: self.scalar.public_key(),
        }
    }

    pub fn params(&self) -> &EciesParams {
        &self.params
    }
}

/// Sender side of ECIES-AEAD-HKDF
pub struct EciesAeadHkdfHybridEncrypt {
    recipient: EciesPublicKey,
    rng: Arc<dyn SecureRandom>,
}

impl EciesAeadHkdfHybridEncrypt {
    pub fn new(recipient: EciesPublicKey, rng: Arc<dyn SecureRandom>) -> Self {
        Self { recipient, rng }
    }

    pub fn params(&self) -> &EciesParams {
        self.recipient.params()
    }

    fn seal(&self, plaintext: &[u8], context_info: &[u8]) -> Result<Vec<u8>> {
        let params = self.recipient.params();
        let encapsulated = kem::encapsulate(&self.recipient, context_info, self.rng.as_ref())?;
        let dem = Dem::new(&params.dem, &encapsulated.symmetric_key)?;
        let sealed = dem.seal(plaintext, context_info, self.rng.as_ref())?;

        let mut out = encapsulated.kem_bytes;
        out.extend_from_slice(&sealed);
        Ok(out)
    }
}

impl HybridEncrypt for EciesAeadHkdfHybridEncrypt {
    fn encrypt(&self, plaintext: &[u8], context_info: &[u8]) -> ApiResult<Vec<u8>> {
        Ok(self.seal(plaintext, context_info)?)
    }
}

/// Recipient side of ECIES-AEAD-HKDF
#[derive(Debug)]
pub struct EciesAeadHkdfHybridDecrypt {
    recipient: EciesPrivateKey,
}

impl EciesAeadHkdfHybridDecrypt {
    pub fn new(recipient: EciesPrivateKey) -> Self {
        Self { recipient }
    }

    pub fn params(&self) -> &EciesParams {
        self.recipient.params()
    }

    fn open(&self, ciphertext: &[u8], context_info: &[u8]) -> Result<Vec<u8>> {
        let params = self.recipient.params();
        let point_size = params.encapsulated_size();
        if ciphertext.len() < point_size {
            return Err(Error::InvalidCiphertextFormat(
                "shorter than the encapsulated point",
            ));
        }
        let (kem_bytes, sealed) = ciphertext.split_at(point_size);

        let symmetric_key = kem::decapsulate(&self.recipient, kem_bytes, context_info)?;
        let dem = Dem::new(&params.dem, &symmetric_key)?;
        Ok(dem.open(sealed, context_info)?)
    }
}

impl HybridDecrypt for EciesAeadHkdfHybridDecrypt {
    /// Every failure, whatever its cause, is reported as `DecryptionFailed`.
    fn decrypt(&self, ciphertext: &[u8], context_info: &[u8]) -> ApiResult<Vec<u8>> {
        self.open(ciphertext, context_info)
            .wrap_err(|| CoreError::DecryptionFailed {
                context: "ECIES-AEAD-HKDF",
            })
    }
}
