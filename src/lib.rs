//! Salted Entropy Library
//!
//! Random bytes for key material, nonces and blinding factors. Every
//! secure output byte is an OS entropy byte XORed with a salt byte from
//! an independently seeded stream, so a single weak entropy source does
//! not compromise the output.
//!
//! # Architecture
//!
//! ```text
//! seed (time, env, pid) → salt stream ─┐
//!                                      ├─ XOR → secure bytes
//! OS entropy source ───────────────────┘
//!                   └──────────────────── → system bytes
//! ```
//!
//! # Design Principles
//!
//! - **OS entropy is primary**: the salt stream is defense in depth, not
//!   a replacement for the kernel CSPRNG
//! - **Fail-closed**: a short read or source error is returned as an
//!   [`EntropyError`] and is never retried or replaced with weaker bytes
//! - **Seeded once**: the process salt stream is initialized on first use
//!   and never reset
//! - **No cryptographic claims for the salt layer**: its seed mixer uses
//!   non-cryptographic hashes
//!
//! # Example
//!
//! ```no_run
//! use salted_entropy::{digest, secure_random_bytes, system_random_bytes};
//!
//! let key = secure_random_bytes(32).unwrap_or_else(|e| e.abort());
//! let raw = system_random_bytes(16).unwrap_or_else(|e| e.abort());
//! let id = digest(&key);
//!
//! assert_eq!(key.len(), 32);
//! assert_eq!(raw.len(), 16);
//! assert_eq!(id.len(), 32);
//! ```

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]
#![deny(unsafe_code)]

pub mod analysis;
pub mod config;
pub mod digest;
pub mod error;
pub mod generator;
pub mod metrics;
pub mod salt;
pub mod seed;
pub mod source;

// Re-export commonly used types at crate root
pub use digest::{digest, digest_with, Digest32, HashAlgorithm};
pub use error::EntropyError;
pub use generator::{
    process_generator, secure_random_bytes, secure_random_bytes_or_abort, system_random_bytes,
    system_random_bytes_or_abort, Generator, GeneratorStats,
};
pub use salt::{seeding_count, SaltState};
pub use source::{EntropySource, MockSource, OsEntropy};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
