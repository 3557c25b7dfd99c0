//! Elliptic-curve key agreement
//!
//! Ephemeral-static ECDH as used by ECIES. The sender draws a fresh key pair
//! for every message and publishes its encoded public point; the recipient
//! decodes and validates that point before touching its static private key.
//!
//! The shared secret is the big-endian x-coordinate of the shared point,
//! sized to the curve's field.

use elliptic_curve::sec1::{FromEncodedPoint, ModulusSize, ToEncodedPoint};
use elliptic_curve::{ecdh, AffinePoint, CurveArithmetic, FieldBytesSize, PublicKey, SecretKey};
use hcrypt_api::{RngAdapter, SecureRandom};
use hcrypt_params::traditional::ecdh::{
    compressed_point_size, legacy_uncompressed_point_size, uncompressed_point_size,
    P256_FIELD_ELEMENT_SIZE, P384_FIELD_ELEMENT_SIZE, P521_FIELD_ELEMENT_SIZE,
};
use p256::NistP256;
use p384::NistP384;
use p521::NistP521;
use zeroize::Zeroizing;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

mod point;

/// Supported named curves
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum EllipticCurve {
    NistP256,
    NistP384,
    NistP521,
}

impl EllipticCurve {
    /// Size of a field element (and of the shared secret) in bytes
    pub const fn field_size(self) -> usize {
        match self {
            EllipticCurve::NistP256 => P256_FIELD_ELEMENT_SIZE,
            EllipticCurve::NistP384 => P384_FIELD_ELEMENT_SIZE,
            EllipticCurve::NistP521 => P521_FIELD_ELEMENT_SIZE,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            EllipticCurve::NistP256 => "P-256",
            EllipticCurve::NistP384 => "P-384",
            EllipticCurve::NistP521 => "P-521",
        }
    }

    /// Length of an encoded point in `format`
    pub const fn encoded_point_size(self, format: PointFormat) -> usize {
        let field_size = self.field_size();
        match format {
            PointFormat::Compressed => compressed_point_size(field_size),
            PointFormat::Uncompressed => uncompressed_point_size(field_size),
            PointFormat::LegacyUncompressed => legacy_uncompressed_point_size(field_size),
        }
    }
}

/// Wire encodings for public points
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PointFormat {
    /// SEC1 `0x04 || x || y`
    Uncompressed,
    /// SEC1 `0x02/0x03 || x`
    Compressed,
    /// `x || y` without a tag byte
    LegacyUncompressed,
}

/// A validated public point on one of the supported curves
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EcPublicKey {
    NistP256(PublicKey<NistP256>),
    NistP384(PublicKey<NistP384>),
    NistP521(PublicKey<NistP521>),
}

impl EcPublicKey {
    /// Decode and validate a public point
    pub fn from_bytes(curve: EllipticCurve, format: PointFormat, bytes: &[u8]) -> Result<Self> {
        Ok(match curve {
            EllipticCurve::NistP256 => Self::NistP256(point::decode(curve, format, bytes)?),
            EllipticCurve::NistP384 => Self::NistP384(point::decode(curve, format, bytes)?),
            EllipticCurve::NistP521 => Self::NistP521(point::decode(curve, format, bytes)?),
        })
    }

    pub fn to_bytes(&self, format: PointFormat) -> Vec<u8> {
        match self {
            Self::NistP256(pk) => point::encode(pk, format),
            Self::NistP384(pk) => point::encode(pk, format),
            Self::NistP521(pk) => point::encode(pk, format),
        }
    }

    pub fn curve(&self) -> EllipticCurve {
        match self {
            Self::NistP256(_) => EllipticCurve::NistP256,
            Self::NistP384(_) => EllipticCurve::NistP384,
            Self::NistP521(_) => EllipticCurve::NistP521,
        }
    }
}

/// A static private scalar on one of the supported curves
///
/// The inner `SecretKey` zeroizes itself on drop.
#[derive(Clone)]
pub enum EcPrivateKey {
    NistP256(SecretKey<NistP256>),
    NistP384(SecretKey<NistP384>),
    NistP521(SecretKey<NistP521>),
}

impl core::fmt::Debug for EcPrivateKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "EcPrivateKey<{}>[REDACTED]", self.curve().name())
    }
}

impl EcPrivateKey {
    /// Draw a fresh private key from `rng`
    pub fn generate(curve: EllipticCurve, rng: &dyn SecureRandom) -> Result<Self> {
        let mut adapter = RngAdapter::new(rng);
        let key = match curve {
            EllipticCurve::NistP256 => Self::NistP256(SecretKey::random(&mut adapter)),
            EllipticCurve::NistP384 => Self::NistP384(SecretKey::random(&mut adapter)),
            EllipticCurve::NistP521 => Self::NistP521(SecretKey::random(&mut adapter)),
        };
        adapter.finish()?;
        Ok(key)
    }

    /// Decode a big-endian scalar, which must be exactly one field element long
    /// and lie in `[1, n-1]`
    pub fn from_bytes(curve: EllipticCurve, bytes: &[u8]) -> Result<Self> {
        if bytes.len() != curve.field_size() {
            return Err(Error::Length {
                context: "EcPrivateKey::from_bytes",
                expected: curve.field_size(),
                actual: bytes.len(),
            });
        }
        let invalid = |_| Error::Scalar { curve: curve.name() };
        Ok(match curve {
            EllipticCurve::NistP256 => Self::NistP256(SecretKey::from_slice(bytes).map_err(invalid)?),
            EllipticCurve::NistP384 => Self::NistP384(SecretKey::from_slice(bytes).map_err(invalid)?),
            EllipticCurve::NistP521 => Self::NistP521(SecretKey::from_slice(bytes).map_err(invalid)?),
        })
    }

    pub fn to_bytes(&self) -> Zeroizing<Vec<u8>> {
        match self {
            Self::NistP256(sk) => Zeroizing::new(sk.to_bytes().to_vec()),
            Self::NistP384(sk) => Zeroizing::new(sk.to_bytes().to_vec()),
            Self::NistP521(sk) => Zeroizing::new(sk.to_bytes().to_vec()),
        }
    }

    pub fn public_key(&self) -> EcPublicKey {
        match self {
            Self::NistP256(sk) => EcPublicKey::NistP256(sk.public_key()),
            Self::NistP384(sk) => EcPublicKey::NistP384(sk.public_key()),
            Self::NistP521(sk) => EcPublicKey::NistP521(sk.public_key()),
        }
    }

    pub fn curve(&self) -> EllipticCurve {
        match self {
            Self::NistP256(_) => EllipticCurve::NistP256,
            Self::NistP384(_) => EllipticCurve::NistP384,
            Self::NistP521(_) => EllipticCurve::NistP521,
        }
    }
}

/// Output of the sender side of the key agreement
pub struct EphemeralAgreement {
    /// ECDH shared secret (x-coordinate of the shared point)
    pub shared_secret: Zeroizing<Vec<u8>>,
    /// The ephemeral public point, encoded in the requested format
    pub ephemeral_public: Vec<u8>,
}

/// Sender side: generate an ephemeral key pair and agree with `recipient`.
///
/// The ephemeral private key never leaves this function and is zeroized
/// on return.
pub fn ephemeral_agree(
    recipient: &EcPublicKey,
    format: PointFormat,
    rng: &dyn SecureRandom,
) -> Result<EphemeralAgreement> {
    match recipient {
        EcPublicKey::NistP256(pk) => ephemeral_agree_on(pk, format, rng),
        EcPublicKey::NistP384(pk) => ephemeral_agree_on(pk, format, rng),
        EcPublicKey::NistP521(pk) => ephemeral_agree_on(pk, format, rng),
    }
}

/// Recipient side: decode the sender's ephemeral point and agree with it.
///
/// Fails with [`Error::Point`] before any use of `private` if the point does
/// not decode to a valid, non-identity point on the private key's curve.
pub fn static_agree(
    private: &EcPrivateKey,
    format: PointFormat,
    ephemeral_public: &[u8],
) -> Result<Zeroizing<Vec<u8>>> {
    let curve = private.curve();
    match private {
        EcPrivateKey::NistP256(sk) => static_agree_on(sk, curve, format, ephemeral_public),
        EcPrivateKey::NistP384(sk) => static_agree_on(sk, curve, format, ephemeral_public),
        EcPrivateKey::NistP521(sk) => static_agree_on(sk, curve, format, ephemeral_public),
    }
}

fn ephemeral_agree_on<C>(
    recipient: &PublicKey<C>,
    format: PointFormat,
    rng: &dyn SecureRandom,
) -> Result<EphemeralAgreement>
where
    C: CurveArithmetic,
    AffinePoint<C>: FromEncodedPoint<C> + ToEncodedPoint<C>,
    FieldBytesSize<C>: ModulusSize,
{
    let mut adapter = RngAdapter::new(rng);
    let ephemeral = SecretKey::<C>::random(&mut adapter);
    adapter.finish()?;

    let shared = ecdh::diffie_hellman(ephemeral.to_nonzero_scalar(), recipient.as_affine());

    Ok(EphemeralAgreement {
        shared_secret: Zeroizing::new(shared.raw_secret_bytes().to_vec()),
        ephemeral_public: point::encode(&ephemeral.public_key(), format),
    })
}

fn static_agree_on<C>(
    private: &SecretKey<C>,
    curve: EllipticCurve,
    format: PointFormat,
    ephemeral_public: &[u8],
) -> Result<Zeroizing<Vec<u8>>>
where
    C: CurveArithmetic,
    AffinePoint<C>: FromEncodedPoint<C> + ToEncodedPoint<C>,
    FieldBytesSize<C>: ModulusSize,
{
    let peer = point::decode::<C>(curve, format, ephemeral_public)?;
    let shared = ecdh::diffie_hellman(private.to_nonzero_scalar(), peer.as_affine());
    Ok(Zeroizing::new(shared.raw_secret_bytes().to_vec()))
}
