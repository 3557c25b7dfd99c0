//! Key derivation for the ECIES key-encapsulation stage

pub mod hkdf;

pub use self::hkdf::derive_key;
