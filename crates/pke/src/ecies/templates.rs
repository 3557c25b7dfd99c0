//! Named ECIES parameter sets
//!
//! All templates start with an empty HKDF salt; use
//! [`EciesParams::with_salt`] to set one.

use hcrypt_algorithms::aead::DemParams;
use hcrypt_algorithms::ec::{EllipticCurve, PointFormat};
use hcrypt_algorithms::hash::HashType;
use hcrypt_params::utils::symmetric::{AES128_KEY_SIZE, AES256_KEY_SIZE, AES_BLOCK_SIZE};

use super::EciesParams;

fn params(
    curve: EllipticCurve,
    hkdf_hash: HashType,
    point_format: PointFormat,
    dem: DemParams,
) -> EciesParams {
    EciesParams {
        curve,
        hkdf_hash,
        point_format,
        dem,
        salt: Vec::new(),
    }
}

const AES128_CTR_HMAC_SHA256: DemParams = DemParams::AesCtrHmac {
    aes_key_size: AES128_KEY_SIZE,
    iv_size: AES_BLOCK_SIZE,
    hmac_key_size: 32,
    hmac_hash: HashType::Sha256,
    tag_size: 16,
};

pub fn ecies_p256_hkdf_hmac_sha256_aes128_gcm() -> EciesParams {
    params(
        EllipticCurve::NistP256,
        HashType::Sha256,
        PointFormat::Uncompressed,
        DemParams::AesGcm {
            key_size: AES128_KEY_SIZE,
        },
    )
}

pub fn ecies_p256_compressed_hkdf_hmac_sha256_aes128_gcm() -> EciesParams {
    params(
        EllipticCurve::NistP256,
        HashType::Sha256,
        PointFormat::Compressed,
        DemParams::AesGcm {
            key_size: AES128_KEY_SIZE,
        },
    )
}

pub fn ecies_p256_hkdf_hmac_sha256_aes128_ctr_hmac_sha256() -> EciesParams {
    params(
        EllipticCurve::NistP256,
        HashType::Sha256,
        PointFormat::Uncompressed,
        AES128_CTR_HMAC_SHA256,
    )
}

pub fn ecies_p256_compressed_hkdf_hmac_sha256_aes128_ctr_hmac_sha256() -> EciesParams {
    params(
        EllipticCurve::NistP256,
        HashType::Sha256,
        PointFormat::Compressed,
        AES128_CTR_HMAC_SHA256,
    )
}

pub fn ecies_p384_hkdf_hmac_sha384_aes256_gcm() -> EciesParams {
    params(
        EllipticCurve::NistP384,
        HashType::Sha384,
        PointFormat::Uncompressed,
        DemParams::AesGcm {
            key_size: AES256_KEY_SIZE,
        },
    )
}

pub fn ecies_p521_hkdf_hmac_sha512_aes256_gcm() -> EciesParams {
    params(
        EllipticCurve::NistP521,
        HashType::Sha512,
        PointFormat::Uncompressed,
        DemParams::AesGcm {
            key_size: AES256_KEY_SIZE,
        },
    )
}

pub fn ecies_p256_hkdf_hmac_sha256_xchacha20_poly1305() -> EciesParams {
    params(
        EllipticCurve::NistP256,
        HashType::Sha256,
        PointFormat::Uncompressed,
        DemParams::XChaCha20Poly1305,
    )
}

/// Every named template, for iteration in tests and tooling
pub fn all() -> Vec<(&'static str, EciesParams)> {
    vec![
        (
            "ECIES_P256_HKDF_HMAC_SHA256_AES128_GCM",
            ecies_p256_hkdf_hmac_sha256_aes128_gcm(),
        ),
        (
            "ECIES_P256_COMPRESSED_HKDF_HMAC_SHA256_AES128_GCM",
            ecies_p256_compressed_hkdf_hmac_sha256_aes128_gcm(),
        ),
        (
            "ECIES_P256_HKDF_HMAC_SHA256_AES128_CTR_HMAC_SHA256",
            ecies_p256_hkdf_hmac_sha256_aes128_ctr_hmac_sha256(),
        ),
        (
            "ECIES_P256_COMPRESSED_HKDF_HMAC_SHA256_AES128_CTR_HMAC_SHA256",
            ecies_p256_compressed_hkdf_hmac_sha256_aes128_ctr_hmac_sha256(),
        ),
        (
            "ECIES_P384_HKDF_HMAC_SHA384_AES256_GCM",
            ecies_p384_hkdf_hmac_sha384_aes256_gcm(),
        ),
        (
            "ECIES_P521_HKDF_HMAC_SHA512_AES256_GCM",
            ecies_p521_hkdf_hmac_sha512_aes256_gcm(),
        ),
        (
            "ECIES_P256_HKDF_HMAC_SHA256_XCHACHA20_POLY1305",
            ecies_p256_hkdf_hmac_sha256_xchacha20_poly1305(),
        ),
    ]
}
