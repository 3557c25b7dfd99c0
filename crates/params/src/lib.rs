//! Constant values for hcrypt cryptographic operations
//!
//! This crate provides the sizes and wire constants shared by the ECIES
//! primitive and the keyset dispatcher. It has no dependencies and is
//! always `no_std` compatible.

#![no_std]

pub mod traditional;
pub mod utils;
pub mod wire;
