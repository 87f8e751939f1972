//! Operating system entropy.

use super::{EntropySource, SourceError};
use rand_core::RngCore;

/// The OS CSPRNG (`getrandom` on Linux, `BCryptGenRandom` on Windows).
///
/// Reads may block early in boot until the kernel pool is ready.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsEntropy;

impl OsEntropy {
    /// Creates a handle to the OS source.
    pub fn new() -> Self {
        Self
    }
}

impl EntropySource for OsEntropy {
    fn name(&self) -> &'static str {
        "os"
    }

    fn read(&self, buf: &mut [u8]) -> Result<usize, SourceError> {
        rand_core::OsRng
            .try_fill_bytes(buf)
            .map_err(|e| SourceError::Os(e.to_string()))?;
        Ok(buf.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fills_whole_buffer() {
        let mut buf = [0u8; 64];
        let n = OsEntropy::new().read(&mut buf).unwrap();
        assert_eq!(n, 64);
        assert!(buf.iter().any(|&b| b != 0));
    }

    #[test]
    fn test_empty_read() {
        assert_eq!(OsEntropy.read(&mut []).unwrap(), 0);
    }
}
