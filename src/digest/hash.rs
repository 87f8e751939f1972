//! Fixed-width cryptographic digest.
//!
//! Every call builds its own hasher, so the functions here are safe to
//! call from any number of threads without synchronization.

use serde::{Deserialize, Serialize};
use sha2::{Digest as _, Sha256};

/// A 32-byte digest value.
pub type Digest32 = [u8; 32];

/// Supported digest algorithms. Both produce 32 bytes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HashAlgorithm {
    /// SHA-256 - widely deployed, the library default.
    #[default]
    Sha256,
    /// BLAKE3 - faster alternative.
    Blake3,
}

/// Hashes `bytes` with SHA-256.
///
/// Deterministic and infallible.
pub fn digest(bytes: &[u8]) -> Digest32 {
    digest_with(HashAlgorithm::Sha256, bytes)
}

/// Hashes `bytes` with the chosen algorithm.
pub fn digest_with(algorithm: HashAlgorithm, bytes: &[u8]) -> Digest32 {
    match algorithm {
        HashAlgorithm::Sha256 => {
            let mut hasher = Sha256::new();
            hasher.update(bytes);
            let mut out = [0u8; 32];
            out.copy_from_slice(&hasher.finalize());
            out
        }
        HashAlgorithm::Blake3 => *blake3::hash(bytes).as_bytes(),
    }
}

/// Digest function bound to a configured algorithm.
#[derive(Debug, Clone, Copy, Default)]
pub struct Digester {
    algorithm: HashAlgorithm,
}

impl Digester {
    /// Creates a digester for the given algorithm.
    pub fn new(algorithm: HashAlgorithm) -> Self {
        Self { algorithm }
    }

    /// Returns the configured algorithm.
    pub fn algorithm(&self) -> HashAlgorithm {
        self.algorithm
    }

    /// Hashes `bytes` with the configured algorithm.
    pub fn digest(&self, bytes: &[u8]) -> Digest32 {
        digest_with(self.algorithm, bytes)
    }
}
