//! General-purpose hashing primitive.
//!
//! Exposes a fixed-width 32-byte digest to the rest of the library.
//! SHA-256 is the default algorithm; BLAKE3 is available for callers
//! that configure it explicitly.

mod hash;

pub use hash::{digest, digest_with, Digest32, Digester, HashAlgorithm};
