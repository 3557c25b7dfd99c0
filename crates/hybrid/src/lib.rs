//! Keyset-driven hybrid encryption
//!
//! A [`Keyset`] holds several ECIES keys at once. The factory functions turn
//! it into a dispatcher that encrypts with the primary key and decrypts with
//! whichever key the ciphertext belongs to, so keys can be rotated without
//! invalidating data encrypted under older ones.
//!
//! Ciphertexts carry an optional 5-byte output prefix (`tag || be32(key_id)`)
//! that lets the decryptor jump straight to the right key; RAW keys carry no
//! prefix and are found by trial decryption in keyset order.

pub mod factory;
pub mod keyset;
pub mod prefix;
pub mod primitive_set;
pub mod wrapper;

pub use factory::{
    new_hybrid_decrypt, new_hybrid_decrypt_with_config, new_hybrid_encrypt,
    new_hybrid_encrypt_with_config, KeysetHybridDecrypt, KeysetHybridEncrypt,
};
pub use keyset::{
    KeyId, KeyInfo, KeyMaterial, KeyStatus, Keyset, KeysetEntry, KeysetInfo, OutputPrefixType,
};
pub use prefix::PrefixConfig;
pub use primitive_set::PrimitiveSet;
pub use wrapper::{HybridDecryptWrapper, HybridEncryptWrapper};
