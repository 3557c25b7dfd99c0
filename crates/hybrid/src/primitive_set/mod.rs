//! Immutable, indexed projection of a keyset
//!
//! Every enabled entry is materialized into a primitive exactly once. Entries
//! with an output prefix are indexed by that prefix; RAW entries are kept in
//! keyset order for trial decryption.

use std::collections::{HashMap, HashSet};

use hcrypt_api::{Error, Result};
use tracing::debug;

use crate::keyset::{KeyId, Keyset, KeysetEntry, OutputPrefixType};
use crate::prefix::{Prefix, PrefixConfig};

/// A materialized keyset entry
#[derive(Debug)]
pub struct Entry<P> {
    pub primitive: P,
    pub key_id: KeyId,
    pub output_prefix_type: OutputPrefixType,
    /// `None` for RAW entries
    pub prefix: Option<Prefix>,
}

impl<P> Entry<P> {
    /// Prefix bytes to prepend to ciphertexts (empty for RAW)
    pub fn prefix_bytes(&self) -> &[u8] {
        self.prefix.as_ref().map_or(&[], |p| &p[..])
    }
}

#[derive(Debug)]
pub struct PrimitiveSet<P> {
    entries: Vec<Entry<P>>,
    primary: usize,
    by_prefix: HashMap<Prefix, Vec<usize>>,
    raw: Vec<usize>,
    config: PrefixConfig,
}

impl<P> PrimitiveSet<P> {
    /// Build the set, calling `materialize` once per enabled entry.
    ///
    /// # Errors
    /// - `InvalidParameter` if `config` is unusable
    /// - `DuplicateKeyId` if two entries (enabled or not) share an id
    /// - `NoPrimaryKey` if the keyset is empty, has no primary, or the
    ///   primary is missing or disabled
    /// - whatever `materialize` returns, typically `KeyMaterialMismatch`
    pub fn build<F>(keyset: &Keyset, config: PrefixConfig, mut materialize: F) -> Result<Self>
    where
        F: FnMut(&KeysetEntry) -> Result<P>,
    {
        config.validate()?;

        let mut seen = HashSet::with_capacity(keyset.len());
        for entry in keyset.entries() {
            if !seen.insert(entry.key_id) {
                return Err(Error::DuplicateKeyId {
                    key_id: entry.key_id,
                });
            }
        }

        let primary_id = keyset.primary_key_id().ok_or(Error::NoPrimaryKey {
            context: "keyset designates no primary key",
        })?;
        let primary_enabled = keyset
            .entries()
            .iter()
            .find(|entry| entry.key_id == primary_id)
            .map(KeysetEntry::is_enabled)
            .ok_or(Error::NoPrimaryKey {
                context: "primary key not in keyset",
            })?;
        if !primary_enabled {
            return Err(Error::NoPrimaryKey {
                context: "primary key is disabled",
            });
        }

        let mut entries = Vec::with_capacity(keyset.len());
        let mut by_prefix: HashMap<Prefix, Vec<usize>> = HashMap::new();
        let mut raw = Vec::new();
        let mut primary = None;

        for entry in keyset.entries().iter().filter(|e| e.is_enabled()) {
            let index = entries.len();
            let prefix = config.output_prefix(entry.key_id, entry.output_prefix_type);
            match prefix {
                Some(prefix) => by_prefix.entry(prefix).or_default().push(index),
                None => raw.push(index),
            }
            if entry.key_id == primary_id {
                primary = Some(index);
            }
            entries.push(Entry {
                primitive: materialize(entry)?,
                key_id: entry.key_id,
                output_prefix_type: entry.output_prefix_type,
                prefix,
            });
        }

        let primary = primary.ok_or(Error::NoPrimaryKey {
            context: "primary key not in keyset",
        })?;

        debug!(
            entries = entries.len(),
            prefixed = entries.len() - raw.len(),
            raw = raw.len(),
            primary_key_id = primary_id,
            "built primitive set"
        );

        Ok(Self {
            entries,
            primary,
            by_prefix,
            raw,
            config,
        })
    }

    pub fn primary(&self) -> &Entry<P> {
        &self.entries[self.primary]
    }

    /// Entries registered under exactly `prefix`, in keyset order
    pub fn entries_with_prefix<'a>(
        &'a self,
        prefix: &[u8],
    ) -> impl Iterator<Item = &'a Entry<P>> + 'a {
        let indices = Prefix::try_from(prefix)
            .ok()
            .and_then(|prefix| self.by_prefix.get(&prefix))
            .map_or(&[][..], Vec::as_slice);
        indices.iter().map(move |&i| &self.entries[i])
    }

    /// RAW entries in keyset order
    pub fn raw_entries(&self) -> impl Iterator<Item = &Entry<P>> + '_ {
        self.raw.iter().map(move |&i| &self.entries[i])
    }

    /// All enabled entries in keyset order
    pub fn entries(&self) -> &[Entry<P>] {
        &self.entries
    }

    pub fn config(&self) -> &PrefixConfig {
        &self.config
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests;
