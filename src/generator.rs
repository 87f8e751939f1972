//! Byte generators.
//!
//! Two entry points:
//!
//! - **secure**: one OS read XORed with a fresh salt buffer. The
//!   recommended default for key material, nonces and blinding factors.
//! - **system**: the OS read alone, for callers that want nothing but
//!   the OS guarantee.
//!
//! # Security Model
//!
//! - The OS source is the primary guarantee for every output byte
//! - The salt stream is seeded independently from time, environment and pid
//! - If either source is later judged weak, the output still depends on
//!   the other one
//! - A short read or OS error is never papered over: the call fails

use crate::error::{EntropyError, Result};
use crate::salt::{process_state, SaltState};
use crate::source::{EntropySource, OsEntropy};
use rand_core::{CryptoRng, RngCore};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, OnceLock};

static PROCESS_GENERATOR: OnceLock<Generator> = OnceLock::new();

/// Counters describing generator usage.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GeneratorStats {
    /// Secure (salted) requests served.
    pub secure_requests: u64,
    /// System (unsalted) requests served.
    pub system_requests: u64,
    /// Total bytes returned to callers.
    pub bytes_generated: u64,
    /// Requests that failed on the entropy source.
    pub source_failures: u64,
}

#[derive(Debug, Default)]
struct Counters {
    secure_requests: AtomicU64,
    system_requests: AtomicU64,
    bytes_generated: AtomicU64,
    source_failures: AtomicU64,
}

/// Random byte generator combining an entropy source with a salt stream.
///
/// [`Generator::new`] reads the OS and shares the process-wide salt
/// state. [`Generator::with_parts`] injects both, which is how tests run
/// against a [`MockSource`](crate::source::MockSource).
pub struct Generator<S = OsEntropy> {
    source: S,
    salt: Arc<SaltState>,
    counters: Counters,
}

impl Generator<OsEntropy> {
    /// Creates a generator over the OS source and the process salt state.
    ///
    /// Seeds the process salt state if this is its first use.
    pub fn new() -> Self {
        Self::with_parts(OsEntropy, process_state())
    }
}

impl Default for Generator<OsEntropy> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: EntropySource> Generator<S> {
    /// Creates a generator from an explicit source and salt state.
    pub fn with_parts(source: S, salt: Arc<SaltState>) -> Self {
        Self {
            source,
            salt,
            counters: Counters::default(),
        }
    }

    /// Returns the entropy source.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Returns the salt state.
    pub fn salt_state(&self) -> &Arc<SaltState> {
        &self.salt
    }

    /// Returns `n` bytes of OS entropy XORed with `n` salt bytes.
    pub fn secure_bytes(&self, n: usize) -> Result<Vec<u8>> {
        let mut out = vec![0u8; n];
        self.fill_secure(&mut out)?;
        Ok(out)
    }

    /// Returns `n` bytes of raw OS entropy.
    pub fn system_bytes(&self, n: usize) -> Result<Vec<u8>> {
        let mut out = vec![0u8; n];
        self.fill_system(&mut out)?;
        Ok(out)
    }

    /// Fills `dest` with salted entropy.
    ///
    /// On error the contents of `dest` are unspecified and must not be used.
    pub fn fill_secure(&self, dest: &mut [u8]) -> Result<()> {
        self.counters.secure_requests.fetch_add(1, Ordering::Relaxed);
        if dest.is_empty() {
            return Ok(());
        }

        // The OS read happens outside the salt lock.
        self.read_source(dest)?;

        let salt = self.salt.generate_salt(dest.len());
        for (byte, s) in dest.iter_mut().zip(salt.iter()) {
            *byte ^= s;
        }

        self.record_output(dest.len());
        tracing::trace!(bytes = dest.len(), source = self.source.name(), "Generated salted bytes");
        Ok(())
    }

    /// Fills `dest` with raw entropy from the source.
    ///
    /// On error the contents of `dest` are unspecified and must not be used.
    pub fn fill_system(&self, dest: &mut [u8]) -> Result<()> {
        self.counters.system_requests.fetch_add(1, Ordering::Relaxed);
        if dest.is_empty() {
            return Ok(());
        }

        self.read_source(dest)?;

        self.record_output(dest.len());
        tracing::trace!(bytes = dest.len(), source = self.source.name(), "Generated system bytes");
        Ok(())
    }

    /// Returns a snapshot of the usage counters.
    pub fn stats(&self) -> GeneratorStats {
        GeneratorStats {
            secure_requests: self.counters.secure_requests.load(Ordering::Relaxed),
            system_requests: self.counters.system_requests.load(Ordering::Relaxed),
            bytes_generated: self.counters.bytes_generated.load(Ordering::Relaxed),
            source_failures: self.counters.source_failures.load(Ordering::Relaxed),
        }
    }

    /// Single read, no retry. Anything but a full buffer is an error.
    fn read_source(&self, dest: &mut [u8]) -> Result<()> {
        let need = dest.len();
        let result = match self.source.read(dest) {
            Ok(got) if got == need => Ok(()),
            Ok(got) if got < need => Err(EntropyError::ShortRead { got, need }),
            Ok(got) => Err(EntropyError::OverRead { got, need }),
            Err(e) => Err(EntropyError::Source {
                source_name: self.source.name(),
                reason: e.to_string(),
            }),
        };

        if let Err(ref e) = result {
            self.counters.source_failures.fetch_add(1, Ordering::Relaxed);
            tracing::error!(error = %e, "Entropy source failure");
        }
        result
    }

    fn record_output(&self, len: usize) {
        self.counters
            .bytes_generated
            .fetch_add(len as u64, Ordering::Relaxed);
    }
}

impl<S> std::fmt::Debug for Generator<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Generator")
            .field("salt", &self.salt)
            .finish_non_exhaustive()
    }
}

impl<S: EntropySource> RngCore for Generator<S> {
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

    /// Aborts the process if the source fails.
    fn fill_bytes(&mut self, dest: &mut [u8]) {
        if let Err(e) = self.fill_secure(dest) {
            e.abort();
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> std::result::Result<(), rand_core::Error> {
        self.fill_secure(dest).map_err(rand_core::Error::new)
    }
}

impl CryptoRng for Generator<OsEntropy> {}

/// Returns the process-wide generator.
pub fn process_generator() -> &'static Generator {
    PROCESS_GENERATOR.get_or_init(Generator::new)
}

/// Returns `n` bytes of OS entropy salted with the process salt stream.
///
/// This is the default entry point.
pub fn secure_random_bytes(n: usize) -> Result<Vec<u8>> {
    process_generator().secure_bytes(n)
}

/// Returns `n` bytes of raw OS entropy.
pub fn system_random_bytes(n: usize) -> Result<Vec<u8>> {
    process_generator().system_bytes(n)
}

/// Like [`secure_random_bytes`], but aborts the process on failure.
pub fn secure_random_bytes_or_abort(n: usize) -> Vec<u8> {
    secure_random_bytes(n).unwrap_or_else(|e| e.abort())
}

/// Like [`system_random_bytes`], but aborts the process on failure.
pub fn system_random_bytes_or_abort(n: usize) -> Vec<u8> {
    system_random_bytes(n).unwrap_or_else(|e| e.abort())
}
