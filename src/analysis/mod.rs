//! Output sanity statistics.
//!
//! Loose statistical checks over generated bytes. They catch gross
//! failures such as a stuck or constant source. Passing them says
//! nothing about unpredictability.

mod statistics;
mod threshold;

pub use statistics::OutputStatistics;
pub use threshold::{Assessment, QualityThresholds, ThresholdViolation};
