//! Process inputs mixed into the salt seed.

use super::mixer::{finalize, iterative_hash};
use chrono::Utc;

/// Raw inputs for seed derivation.
///
/// Guessing the derived seed requires knowing all three at once.
#[derive(Clone, PartialEq, Eq)]
pub struct SeedInputs {
    /// Wall-clock time in nanoseconds since the Unix epoch.
    pub time_nanos: u64,
    /// Concatenation of every `KEY=VALUE` environment entry.
    pub environment: Vec<u8>,
    /// Current process id.
    pub pid: u32,
}

impl SeedInputs {
    /// Captures the inputs from the running process.
    pub fn gather() -> Self {
        let time_nanos = Utc::now().timestamp_nanos_opt().unwrap_or_default() as u64;

        let mut environment = Vec::new();
        for (key, value) in std::env::vars_os() {
            environment.extend_from_slice(key.as_encoded_bytes());
            environment.push(b'=');
            environment.extend_from_slice(value.as_encoded_bytes());
        }

        Self {
            time_nanos,
            environment,
            pid: std::process::id(),
        }
    }

    /// Derives the 64-bit seed.
    ///
    /// `finalize(time) ^ iterative_hash(environment) ^ finalize(pid)`
    pub fn derive(&self) -> u64 {
        let seed1 = finalize(self.time_nanos);
        let seed2 = iterative_hash(&self.environment);
        let seed3 = finalize(u64::from(self.pid));
        seed1 ^ seed2 ^ seed3
    }
}

// The environment may hold secrets, so only its size is shown.
impl std::fmt::Debug for SeedInputs {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SeedInputs")
            .field("environment_len", &self.environment.len())
            .finish_non_exhaustive()
    }
}
