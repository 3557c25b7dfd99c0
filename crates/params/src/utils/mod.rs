//! Constants for the symmetric building blocks

pub mod hash;
pub mod symmetric;
