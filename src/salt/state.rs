//! ChaCha20-backed salt state.
//!
//! # Salt Model
//!
//! Each salt byte consumes one full 63-bit draw from the stream. The
//! eight bytes of the draw are XOR-folded into the output byte, so every
//! salt byte depends on eight fresh stream bytes.
//!
//! The salt stream is seeded from process inputs only. It adds
//! defense in depth on top of OS entropy and is not a CSPRNG seed.

use crate::seed::SeedInputs;
use rand_chacha::ChaCha20Rng;
use rand_core::{RngCore, SeedableRng};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, OnceLock, PoisonError};

static PROCESS_STATE: OnceLock<Arc<SaltState>> = OnceLock::new();
static SEEDINGS: AtomicU64 = AtomicU64::new(0);

/// Lock-guarded salt stream.
///
/// Every draw advances the stream, so all draws are serialized by a
/// single mutex. The lock is held only while drawing.
pub struct SaltState {
    /// The underlying stream.
    rng: Mutex<ChaCha20Rng>,
    /// Total 63-bit values drawn.
    draws: AtomicU64,
}

impl SaltState {
    /// Creates a salt state from a 64-bit seed.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: Mutex::new(ChaCha20Rng::seed_from_u64(seed)),
            draws: AtomicU64::new(0),
        }
    }

    /// Creates a salt state seeded from the given process inputs.
    pub fn from_inputs(inputs: &SeedInputs) -> Self {
        Self::from_seed(inputs.derive())
    }

    /// Returns `n` fresh salt bytes.
    pub fn generate_salt(&self, n: usize) -> Vec<u8> {
        let mut salt = vec![0u8; n];
        self.fill_salt(&mut salt);
        salt
    }

    /// Overwrites `buf` with fresh salt bytes.
    pub fn fill_salt(&self, buf: &mut [u8]) {
        if buf.is_empty() {
            return;
        }

        {
            // A panic cannot leave the stream half-advanced, so a
            // poisoned lock is still usable.
            let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
            for byte in buf.iter_mut() {
                *byte = fold_draw(rng.next_u64() >> 1);
            }
        }

        self.draws.fetch_add(buf.len() as u64, Ordering::Relaxed);
    }

    /// Returns the total number of draws taken from the stream.
    pub fn draw_count(&self) -> u64 {
        self.draws.load(Ordering::Relaxed)
    }
}

impl std::fmt::Debug for SaltState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SaltState")
            .field("draws", &self.draw_count())
            .finish_non_exhaustive()
    }
}

/// XOR-folds the eight bytes of a draw into one.
#[inline]
fn fold_draw(value: u64) -> u8 {
    value.to_le_bytes().iter().fold(0, |acc, b| acc ^ b)
}

/// Returns the process-wide salt state, seeding it on first use.
pub fn process_state() -> Arc<SaltState> {
    Arc::clone(PROCESS_STATE.get_or_init(seed_process_state))
}

/// Number of times the process-wide state has been seeded.
///
/// Zero before first use, one afterwards.
pub fn seeding_count() -> u64 {
    SEEDINGS.load(Ordering::SeqCst)
}

fn seed_process_state() -> Arc<SaltState> {
    SEEDINGS.fetch_add(1, Ordering::SeqCst);

    let inputs = SeedInputs::gather();
    tracing::debug!(
        pid = inputs.pid,
        environment_len = inputs.environment.len(),
        "Seeding process salt stream"
    );

    Arc::new(SaltState::from_inputs(&inputs))
}
