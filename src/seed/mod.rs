//! Seed derivation for the salt stream.
//!
//! Mixes three weak, uncorrelated process inputs (wall-clock time, the
//! environment block and the process id) into a single 64-bit seed.
//! The hashes used here are deliberately non-cryptographic. The seed is
//! a supplementary layer and never replaces OS entropy.

mod inputs;
mod mixer;

pub use inputs::SeedInputs;
pub use mixer::{finalize, iterative_hash};
