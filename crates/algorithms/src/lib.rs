//! Building blocks for the hcrypt hybrid encryption scheme
//!
//! - [`ec`]: ephemeral-static ECDH over NIST P-256, P-384 and P-521, with
//!   point validation and the three supported point encodings
//! - [`kdf`]: HKDF extract-then-expand over the SHA-2 family
//! - [`aead`]: the data-encapsulation mechanisms (AES-GCM, AES-CTR-HMAC,
//!   XChaCha20-Poly1305) keyed by HKDF output
//!
//! Everything here is stateless apart from key material; randomness is
//! always passed in as a [`hcrypt_api::SecureRandom`].

pub mod aead;
pub mod ec;
pub mod error;
pub mod hash;
pub mod kdf;

pub use aead::{Dem, DemParams};
pub use ec::{EcPrivateKey, EcPublicKey, EllipticCurve, PointFormat};
pub use error::{Error, Result};
pub use hash::HashType;
