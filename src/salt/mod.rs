//! Process-lifetime salt stream.
//!
//! This module owns the pseudorandom state that salts OS entropy. The
//! process-wide instance is seeded exactly once on first use and is
//! shared by every generator for the life of the process.

mod state;

pub use state::{process_state, seeding_count, SaltState};
