//! Metrics collection and registry.

use crate::generator::Generator;
use crate::salt::seeding_count;
use crate::source::EntropySource;
use prometheus::{Encoder, IntCounter, IntGauge, Registry, TextEncoder};
use thiserror::Error;

/// Errors that can occur during metrics operations.
#[derive(Debug, Error)]
pub enum MetricsError {
    /// Registration or encoding failed.
    #[error("prometheus error: {0}")]
    Prometheus(#[from] prometheus::Error),
}

/// A snapshot of generator state for metrics update.
#[derive(Debug, Clone, Default)]
pub struct MetricsSnapshot {
    /// Salted requests served.
    pub secure_requests: u64,
    /// Unsalted requests served.
    pub system_requests: u64,
    /// Bytes returned to callers.
    pub bytes_generated: u64,
    /// Entropy source failures.
    pub source_failures: u64,
    /// Draws taken from the salt stream.
    pub salt_draws: u64,
    /// Times the process salt stream was seeded.
    pub seedings: u64,
}

impl MetricsSnapshot {
    /// Creates a snapshot from a generator and its salt state.
    pub fn from_generator<S: EntropySource>(generator: &Generator<S>) -> Self {
        let stats = generator.stats();
        Self {
            secure_requests: stats.secure_requests,
            system_requests: stats.system_requests,
            bytes_generated: stats.bytes_generated,
            source_failures: stats.source_failures,
            salt_draws: generator.salt_state().draw_count(),
            seedings: seeding_count(),
        }
    }
}

/// Prometheus metrics registry for entropy generation.
pub struct MetricsRegistry {
    registry: Registry,

    secure_requests: IntCounter,
    system_requests: IntCounter,
    bytes_generated: IntCounter,
    source_failures: IntCounter,
    salt_draws: IntCounter,
    seedings: IntGauge,
}

impl MetricsRegistry {
    /// Creates a new registry with all generator metrics registered.
    pub fn new() -> Result<Self, MetricsError> {
        let registry = Registry::new();

        let secure_requests = IntCounter::new(
            "salted_entropy_secure_requests_total",
            "Total salted byte requests served",
        )?;
        let system_requests = IntCounter::new(
            "salted_entropy_system_requests_total",
            "Total unsalted byte requests served",
        )?;
        let bytes_generated = IntCounter::new(
            "salted_entropy_bytes_generated_total",
            "Total bytes returned to callers",
        )?;
        let source_failures = IntCounter::new(
            "salted_entropy_source_failures_total",
            "Total entropy source failures",
        )?;
        let salt_draws = IntCounter::new(
            "salted_entropy_salt_draws_total",
            "Total draws taken from the salt stream",
        )?;
        let seedings = IntGauge::new(
            "salted_entropy_salt_seedings",
            "Times the process salt stream was seeded",
        )?;

        registry.register(Box::new(secure_requests.clone()))?;
        registry.register(Box::new(system_requests.clone()))?;
        registry.register(Box::new(bytes_generated.clone()))?;
        registry.register(Box::new(source_failures.clone()))?;
        registry.register(Box::new(salt_draws.clone()))?;
        registry.register(Box::new(seedings.clone()))?;

        Ok(Self {
            registry,
            secure_requests,
            system_requests,
            bytes_generated,
            source_failures,
            salt_draws,
            seedings,
        })
    }

    /// Updates all metrics from a snapshot.
    pub fn update(&self, snapshot: &MetricsSnapshot) {
        // Counters only move forward, so increment by the difference
        advance(&self.secure_requests, snapshot.secure_requests);
        advance(&self.system_requests, snapshot.system_requests);
        advance(&self.bytes_generated, snapshot.bytes_generated);
        advance(&self.source_failures, snapshot.source_failures);
        advance(&self.salt_draws, snapshot.salt_draws);

        self.seedings.set(snapshot.seedings as i64);
    }

    /// Returns the underlying Prometheus registry.
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Encodes all metrics in Prometheus text format.
    pub fn encode(&self) -> Result<String, MetricsError> {
        let encoder = TextEncoder::new();
        let metric_families = self.registry.gather();
        let mut buffer = Vec::new();
        encoder.encode(&metric_families, &mut buffer)?;
        Ok(String::from_utf8_lossy(&buffer).into_owned())
    }
}

fn advance(counter: &IntCounter, observed: u64) {
    let current = counter.get();
    if observed > current {
        counter.inc_by(observed - current);
    }
}
