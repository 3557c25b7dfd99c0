//! Injectable secure random source
//!
//! Primitives never reach for ambient randomness. A [`SecureRandom`] is handed
//! to them at construction time and shared behind an `Arc`, which lets tests
//! substitute a seeded generator through [`SeededRandom`].

use std::sync::Mutex;

use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};

use crate::error::{Error, Result};

/// A cryptographically secure source of random bytes, safe for concurrent use.
pub trait SecureRandom: Send + Sync {
    /// Fill `dest` entirely with random bytes.
    fn fill(&self, dest: &mut [u8]) -> Result<()>;
}

/// The operating system's CSPRNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsRandom;

impl SecureRandom for OsRandom {
    fn fill(&self, dest: &mut [u8]) -> Result<()> {
        OsRng.try_fill_bytes(dest).map_err(|e| Error::RandomSource {
            context: "OsRandom",
            message: e.to_string(),
        })
    }
}

/// A caller-supplied generator behind a mutex.
///
/// Intended for deterministic tests with a seeded `CryptoRng`; production
/// code should use [`OsRandom`].
pub struct SeededRandom<R> {
    inner: Mutex<R>,
}

impl<R> SeededRandom<R>
where
    R: RngCore + CryptoRng + Send,
{
    pub fn new(rng: R) -> Self {
        Self {
            inner: Mutex::new(rng),
        }
    }
}

impl<R> SecureRandom for SeededRandom<R>
where
    R: RngCore + CryptoRng + Send,
{
    fn fill(&self, dest: &mut [u8]) -> Result<()> {
        let mut rng = self.inner.lock().map_err(|_| Error::RandomSource {
            context: "SeededRandom",
            message: "generator lock poisoned".to_string(),
        })?;
        rng.try_fill_bytes(dest).map_err(|e| Error::RandomSource {
            context: "SeededRandom",
            message: e.to_string(),
        })
    }
}

/// Exposes a [`SecureRandom`] as a `rand` generator for APIs that take one.
///
/// `RngCore::fill_bytes` cannot fail, so the first failure is recorded and
/// must be collected with [`RngAdapter::finish`] once the borrowing operation
/// returns. After a failure the buffer holds a fixed non-zero pattern so that
/// rejection samplers terminate; any value derived from it must be discarded.
pub struct RngAdapter<'a> {
    source: &'a dyn SecureRandom,
    failure: Option<Error>,
}

impl<'a> RngAdapter<'a> {
    pub fn new(source: &'a dyn SecureRandom) -> Self {
        Self {
            source,
            failure: None,
        }
    }

    /// Report the first failure seen by this adapter, if any.
    pub fn finish(self) -> Result<()> {
        match self.failure {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

impl RngCore for RngAdapter<'_> {
    fn next_u32(&mut self) -> u32 {
        let mut buf = [0u8; 4];
        self.fill_bytes(&mut buf);
        u32::from_le_bytes(buf)
    }

    fn next_u64(&mut self) -> u64 {
        let mut buf = [0u8; 8];
        self.fill_bytes(&mut buf);
        u64::from_le_bytes(buf)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        if let Err(err) = self.source.fill(dest) {
            dest.fill(0x01);
            self.failure.get_or_insert(err);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> core::result::Result<(), rand::Error> {
        self.source.fill(dest).map_err(rand::Error::new)
    }
}

impl CryptoRng for RngAdapter<'_> {}
