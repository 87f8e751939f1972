//! Entropy sources.
//!
//! The operating system is the primary source of unpredictability for
//! every byte this library returns. The trait abstraction lets the
//! generator run against a mock source in tests.

mod mock;
mod os;

pub use mock::MockSource;
pub use os::OsEntropy;

use thiserror::Error;

/// Errors reported by an entropy source.
#[derive(Debug, Clone, Error)]
pub enum SourceError {
    /// The OS interface returned an error.
    #[error("operating system entropy failure: {0}")]
    Os(String),
    /// The source cannot serve reads.
    #[error("entropy source unavailable: {0}")]
    Unavailable(String),
}

/// Trait for entropy source implementations.
///
/// Sources take `&self` and must be safe to read concurrently.
pub trait EntropySource {
    /// Short name used in logs and errors.
    fn name(&self) -> &'static str;

    /// Fills as much of `buf` as possible and returns the byte count.
    ///
    /// Any count other than `buf.len()` is treated as a failure by
    /// callers and never retried.
    fn read(&self, buf: &mut [u8]) -> Result<usize, SourceError>;
}
