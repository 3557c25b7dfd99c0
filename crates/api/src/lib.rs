//! Public API traits and types for the hcrypt library
//!
//! This crate provides the public API surface for the hcrypt ecosystem: the
//! hybrid encryption traits every primitive and dispatcher implements, the
//! shared error type, and the injectable random source.

pub mod error;
pub mod rng;
pub mod traits;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, Result};
pub use rng::{OsRandom, RngAdapter, SecureRandom, SeededRandom};

// Re-export all traits from the traits module
pub use traits::{HybridDecrypt, HybridEncrypt};
