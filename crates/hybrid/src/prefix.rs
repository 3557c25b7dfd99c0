//! Output prefixes
//!
//! TINK and LEGACY keys prepend `start_byte || be32(key_id)` to every
//! ciphertext; RAW keys prepend nothing. The start bytes are configurable so
//! that deployments with their own framing conventions can interoperate.

use hcrypt_api::error::validation;
use hcrypt_api::Result;
use hcrypt_params::wire::{KEY_ID_SIZE, LEGACY_START_BYTE, NON_RAW_PREFIX_SIZE, TINK_START_BYTE};

use crate::keyset::{KeyId, OutputPrefixType};

/// A 5-byte output prefix
pub type Prefix = [u8; NON_RAW_PREFIX_SIZE];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrefixConfig {
    pub tink_start_byte: u8,
    pub legacy_start_byte: u8,
}

impl Default for PrefixConfig {
    fn default() -> Self {
        Self {
            tink_start_byte: TINK_START_BYTE,
            legacy_start_byte: LEGACY_START_BYTE,
        }
    }
}

impl PrefixConfig {
    /// The two start bytes must differ, otherwise TINK and LEGACY prefixes
    /// for the same key id collide.
    pub fn validate(&self) -> Result<()> {
        validation::parameter(
            self.tink_start_byte != self.legacy_start_byte,
            "PrefixConfig",
            "TINK and LEGACY start bytes must differ",
        )
    }

    /// Prefix for `key_id`, or `None` for RAW keys
    pub fn output_prefix(&self, key_id: KeyId, prefix_type: OutputPrefixType) -> Option<Prefix> {
        let start_byte = match prefix_type {
            OutputPrefixType::Tink => self.tink_start_byte,
            OutputPrefixType::Legacy => self.legacy_start_byte,
            OutputPrefixType::Raw => return None,
        };
        let mut prefix = [0u8; NON_RAW_PREFIX_SIZE];
        prefix[0] = start_byte;
        prefix[1..1 + KEY_ID_SIZE].copy_from_slice(&key_id.to_be_bytes());
        Some(prefix)
    }

    /// Whether `ciphertext` is long enough and starts with a known tag
    pub fn has_recognized_prefix(&self, ciphertext: &[u8]) -> bool {
        ciphertext.len() >= NON_RAW_PREFIX_SIZE
            && (ciphertext[0] == self.tink_start_byte || ciphertext[0] == self.legacy_start_byte)
    }
}
