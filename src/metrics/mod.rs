//! Prometheus metrics for entropy generation.
//!
//! # Metrics Exposed
//!
//! - `salted_entropy_secure_requests_total` - Salted requests served
//! - `salted_entropy_system_requests_total` - Unsalted requests served
//! - `salted_entropy_bytes_generated_total` - Bytes returned to callers
//! - `salted_entropy_source_failures_total` - Entropy source failures
//! - `salted_entropy_salt_draws_total` - Draws taken from the salt stream
//! - `salted_entropy_salt_seedings` - Times the process salt stream was seeded
//!
//! # Example
//!
//! ```no_run
//! use salted_entropy::metrics::{MetricsRegistry, MetricsSnapshot};
//! use salted_entropy::process_generator;
//!
//! let registry = MetricsRegistry::new().expect("Failed to create registry");
//! registry.update(&MetricsSnapshot::from_generator(process_generator()));
//! println!("{}", registry.encode().expect("Failed to encode"));
//! ```

mod collector;

pub use collector::{MetricsError, MetricsRegistry, MetricsSnapshot};
