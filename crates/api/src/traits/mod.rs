//! Trait definitions for hybrid encryption

pub mod hybrid;

pub use hybrid::{HybridDecrypt, HybridEncrypt};
