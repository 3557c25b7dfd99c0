//! Public key encryption for the hcrypt library
//!
//! One construction lives here: ECIES with an HKDF key derivation and an
//! AEAD data-encapsulation step (ECIES-AEAD-HKDF). Each primitive is bound to
//! a single key; multi-key dispatch is the job of `hcrypt-hybrid`.

pub mod ecies;
pub mod error;

pub use ecies::{
    templates, EciesAeadHkdfHybridDecrypt, EciesAeadHkdfHybridEncrypt, EciesParams,
    EciesPrivateKey, EciesPublicKey,
};
pub use error::{Error, Result};
