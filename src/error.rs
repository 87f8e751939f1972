//! Unrecoverable entropy failures.
//!
//! Every failure of the OS entropy source is reported through
//! [`EntropyError`]. None of them are transient: a caller must never
//! retry or fall back to weaker randomness. The library returns the
//! error and leaves the shutdown decision to the embedding application,
//! which will usually call [`EntropyError::abort`].

use thiserror::Error;

/// Result alias for byte generation.
pub type Result<T> = std::result::Result<T, EntropyError>;

/// Failure to obtain entropy from the operating system.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EntropyError {
    /// The source delivered fewer bytes than requested.
    #[error("short read from entropy source: got {got} bytes, need {need}")]
    ShortRead {
        /// Bytes actually delivered.
        got: usize,
        /// Bytes requested.
        need: usize,
    },

    /// The source claimed more bytes than the buffer holds.
    #[error("entropy source over-reported: claimed {got} bytes for a {need} byte buffer")]
    OverRead {
        /// Bytes the source claimed to deliver.
        got: usize,
        /// Bytes requested.
        need: usize,
    },

    /// The source reported an error.
    #[error("entropy source {source_name} failed: {reason}")]
    Source {
        /// Name of the failing source.
        source_name: &'static str,
        /// Error text reported by the source.
        reason: String,
    },
}

impl EntropyError {
    /// Always true. There is no recoverable entropy failure.
    pub fn is_unrecoverable(&self) -> bool {
        true
    }

    /// Logs the failure and aborts the process.
    pub fn abort(self) -> ! {
        tracing::error!(error = %self, "entropy source failed, aborting");
        std::process::abort()
    }
}
