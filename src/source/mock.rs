//! Mock entropy source for testing.
//!
//! NOT for production. Output is fully predictable.

use super::{EntropySource, SourceError};
use std::sync::atomic::{AtomicU64, Ordering};

#[derive(Debug, Clone)]
enum Behavior {
    /// Fill every read by cycling a fixed pattern from its start.
    Fixed(Vec<u8>),
    /// Deliver at most this many bytes per read.
    Short(usize),
    /// Fill the buffer but claim this many extra bytes.
    Inflated(usize),
    /// Fail every read.
    Failing(String),
}

/// Deterministic source with scripted behavior.
///
/// Only reachable through an explicitly constructed
/// [`Generator`](crate::Generator). The process-wide entry points
/// always read the OS.
#[derive(Debug)]
pub struct MockSource {
    behavior: Behavior,
    reads: AtomicU64,
}

impl MockSource {
    /// Every read returns `pattern` repeated to fill the buffer.
    ///
    /// An empty pattern is treated as a single zero byte.
    pub fn fixed(pattern: impl Into<Vec<u8>>) -> Self {
        let mut pattern = pattern.into();
        if pattern.is_empty() {
            pattern.push(0);
        }
        Self::with_behavior(Behavior::Fixed(pattern))
    }

    /// Every read delivers at most `limit` bytes of zeros.
    pub fn short(limit: usize) -> Self {
        Self::with_behavior(Behavior::Short(limit))
    }

    /// Every read fills the buffer with zeros but reports `extra`
    /// more bytes than it holds.
    pub fn inflated(extra: usize) -> Self {
        Self::with_behavior(Behavior::Inflated(extra))
    }

    /// Every read fails with `reason`.
    pub fn failing(reason: impl Into<String>) -> Self {
        Self::with_behavior(Behavior::Failing(reason.into()))
    }

    fn with_behavior(behavior: Behavior) -> Self {
        Self {
            behavior,
            reads: AtomicU64::new(0),
        }
    }

    /// Number of reads served so far.
    pub fn read_count(&self) -> u64 {
        self.reads.load(Ordering::Relaxed)
    }
}

impl EntropySource for MockSource {
    fn name(&self) -> &'static str {
        "mock"
    }

    fn read(&self, buf: &mut [u8]) -> Result<usize, SourceError> {
        self.reads.fetch_add(1, Ordering::Relaxed);

        match &self.behavior {
            Behavior::Fixed(pattern) => {
                for (dst, src) in buf.iter_mut().zip(pattern.iter().cycle()) {
                    *dst = *src;
                }
                Ok(buf.len())
            }
            Behavior::Short(limit) => {
                let n = buf.len().min(*limit);
                buf[..n].fill(0);
                Ok(n)
            }
            Behavior::Inflated(extra) => {
                buf.fill(0);
                Ok(buf.len() + extra)
            }
            Behavior::Failing(reason) => Err(SourceError::Unavailable(reason.clone())),
        }
    }
}
