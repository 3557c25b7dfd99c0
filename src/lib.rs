//! # hcrypt
//!
//! Hybrid public-key encryption (ECIES-AEAD-HKDF) over keysets.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! hcrypt = "0.3"
//! ```
//!
//! ```no_run
//! use std::sync::Arc;
//! use hcrypt::prelude::*;
//!
//! # fn main() -> hcrypt::api::Result<()> {
//! let private = EciesPrivateKey::generate(
//!     templates::ecies_p256_hkdf_hmac_sha256_aes128_gcm(),
//!     &OsRandom,
//! )?;
//! let keyset = Keyset::new(1, vec![KeysetEntry::enabled(1, private, OutputPrefixType::Tink)]);
//!
//! let encrypter = new_hybrid_encrypt(&keyset.public_keyset()?, Arc::new(OsRandom))?;
//! let decrypter = new_hybrid_decrypt(&keyset)?;
//!
//! let ciphertext = encrypter.encrypt(b"secret", b"context")?;
//! assert_eq!(decrypter.decrypt(&ciphertext, b"context")?, b"secret");
//! # Ok(())
//! # }
//! ```
//!
//! ## Features
//!
//! - `hybrid` (default): keyset dispatchers, pulls in `pke` and `algorithms`
//! - `pke`: single-key ECIES primitives
//! - `algorithms`: curve agreement, HKDF and DEM building blocks
//! - `serde`: `Serialize`/`Deserialize` for parameter and keyset metadata types
//! - `full`: all features enabled
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`hcrypt-api`]: error type, hybrid traits, random source
//! - [`hcrypt-params`]: size and wire constants
//! - [`hcrypt-algorithms`]: ECDH, HKDF, AEAD
//! - [`hcrypt-pke`]: ECIES-AEAD-HKDF
//! - [`hcrypt-hybrid`]: keysets and dispatch

// Core re-exports (always available)
pub use hcrypt_api as api;
pub use hcrypt_params as params;

// Feature-gated re-exports
#[cfg(feature = "algorithms")]
pub use hcrypt_algorithms as algorithms;

#[cfg(feature = "pke")]
pub use hcrypt_pke as pke;

#[cfg(feature = "hybrid")]
pub use hcrypt_hybrid as hybrid;

/// Common imports for hcrypt users
pub mod prelude {
    pub use crate::api::{Error, Result};
    pub use crate::api::{HybridDecrypt, HybridEncrypt};
    pub use crate::api::{OsRandom, SecureRandom, SeededRandom};

    // Secret key bytes are handed out in zeroizing buffers
    pub use zeroize::Zeroizing;

    #[cfg(feature = "pke")]
    pub use crate::pke::{
        templates, EciesAeadHkdfHybridDecrypt, EciesAeadHkdfHybridEncrypt, EciesParams,
        EciesPrivateKey, EciesPublicKey,
    };

    #[cfg(feature = "hybrid")]
    pub use crate::hybrid::{
        new_hybrid_decrypt, new_hybrid_decrypt_with_config, new_hybrid_encrypt,
        new_hybrid_encrypt_with_config, KeyId, KeyMaterial, KeyStatus, Keyset, KeysetEntry,
        OutputPrefixType, PrefixConfig,
    };
}
