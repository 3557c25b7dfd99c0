//! In-memory keyset model
//!
//! A keyset is an ordered list of entries plus the id of the primary entry.
//! It is plain data: nothing is checked until a primitive set is built from
//! it, at which point every invariant is enforced at once.

use core::fmt;

use hcrypt_api::{Error, Result};
use hcrypt_pke::{EciesParams, EciesPrivateKey, EciesPublicKey};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Key identifier, unique within a keyset
pub type KeyId = u32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum KeyStatus {
    Enabled,
    Disabled,
}

/// Ciphertext framing for a key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum OutputPrefixType {
    /// `0x01 || be32(key_id)` by default
    Tink,
    /// `0x00 || be32(key_id)` by default
    Legacy,
    /// No prefix
    Raw,
}

/// Public or private ECIES key material
#[derive(Debug, Clone)]
pub enum KeyMaterial {
    Public(EciesPublicKey),
    Private(EciesPrivateKey),
}

impl KeyMaterial {
    pub fn params(&self) -> &EciesParams {
        match self {
            KeyMaterial::Public(key) => key.params(),
            KeyMaterial::Private(key) => key.params(),
        }
    }

    pub fn is_private(&self) -> bool {
        matches!(self, KeyMaterial::Private(_))
    }
}

impl From<EciesPublicKey> for KeyMaterial {
    fn from(key: EciesPublicKey) -> Self {
        KeyMaterial::Public(key)
    }
}

impl From<EciesPrivateKey> for KeyMaterial {
    fn from(key: EciesPrivateKey) -> Self {
        KeyMaterial::Private(key)
    }
}

#[derive(Debug, Clone)]
pub struct KeysetEntry {
    pub key_id: KeyId,
    pub material: KeyMaterial,
    pub status: KeyStatus,
    pub output_prefix_type: OutputPrefixType,
}

impl KeysetEntry {
    pub fn new(
        key_id: KeyId,
        material: impl Into<KeyMaterial>,
        status: KeyStatus,
        output_prefix_type: OutputPrefixType,
    ) -> Self {
        Self {
            key_id,
            material: material.into(),
            status,
            output_prefix_type,
        }
    }

    /// Shorthand for an enabled entry
    pub fn enabled(
        key_id: KeyId,
        material: impl Into<KeyMaterial>,
        output_prefix_type: OutputPrefixType,
    ) -> Self {
        Self::new(key_id, material, KeyStatus::Enabled, output_prefix_type)
    }

    pub fn is_enabled(&self) -> bool {
        self.status == KeyStatus::Enabled
    }
}

/// Ordered keyset entries plus the primary key id
#[derive(Debug, Clone, Default)]
pub struct Keyset {
    primary_key_id: Option<KeyId>,
    entries: Vec<KeysetEntry>,
}

impl Keyset {
    pub fn new(primary_key_id: KeyId, entries: Vec<KeysetEntry>) -> Self {
        Self {
            primary_key_id: Some(primary_key_id),
            entries,
        }
    }

    /// A keyset with no primary designated. Building a primitive set from it
    /// fails until [`Keyset::set_primary`] is called.
    pub fn without_primary(entries: Vec<KeysetEntry>) -> Self {
        Self {
            primary_key_id: None,
            entries,
        }
    }

    pub fn set_primary(&mut self, key_id: KeyId) {
        self.primary_key_id = Some(key_id);
    }

    pub fn add_entry(&mut self, entry: KeysetEntry) {
        self.entries.push(entry);
    }

    pub fn primary_key_id(&self) -> Option<KeyId> {
        self.primary_key_id
    }

    pub fn entries(&self) -> &[KeysetEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Derive the encrypt-side keyset.
    ///
    /// Ids, statuses and prefix types are kept. Fails with
    /// `KeyMaterialMismatch` if any entry is not a private key.
    pub fn public_keyset(&self) -> Result<Keyset> {
        let entries = self
            .entries
            .iter()
            .map(|entry| match &entry.material {
                KeyMaterial::Private(key) => Ok(KeysetEntry {
                    material: KeyMaterial::Public(key.public_key()),
                    ..entry.clone()
                }),
                KeyMaterial::Public(_) => Err(Error::KeyMaterialMismatch {
                    key_id: entry.key_id,
                    context: "public_keyset requires private key material",
                }),
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Keyset {
            primary_key_id: self.primary_key_id,
            entries,
        })
    }

    /// Summary without key material, safe to log
    pub fn info(&self) -> KeysetInfo {
        KeysetInfo {
            primary_key_id: self.primary_key_id,
            keys: self
                .entries
                .iter()
                .map(|entry| KeyInfo {
                    key_id: entry.key_id,
                    status: entry.status,
                    output_prefix_type: entry.output_prefix_type,
                    params: entry.material.params().name(),
                    private: entry.material.is_private(),
                })
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct KeyInfo {
    pub key_id: KeyId,
    pub status: KeyStatus,
    pub output_prefix_type: OutputPrefixType,
    pub params: String,
    pub private: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct KeysetInfo {
    pub primary_key_id: Option<KeyId>,
    pub keys: Vec<KeyInfo>,
}

impl fmt::Display for KeysetInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.primary_key_id {
            Some(id) => write!(f, "primary={}", id)?,
            None => write!(f, "primary=none")?,
        }
        for key in &self.keys {
            write!(
                f,
                " [{} {:?} {:?} {}{}]",
                key.key_id,
                key.status,
                key.output_prefix_type,
                key.params,
                if key.private { " private" } else { "" }
            )?;
        }
        Ok(())
    }
}
