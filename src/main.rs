//! Salted Entropy CLI
//!
//! Command-line interface for testing and demonstrating the salted
//! entropy generator.

use clap::Parser;
use salted_entropy::{
    analysis::{Assessment, OutputStatistics},
    config::{FileConfig, OutputMode},
    digest_with,
    metrics::{MetricsRegistry, MetricsSnapshot},
    process_generator,
};
use std::path::PathBuf;
use tracing::{info, warn};

#[derive(Debug, Parser)]
#[command(name = "salted-entropy", version, about = "Generate salted OS entropy")]
struct Args {
    /// TOML configuration file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Bytes per output line (overrides config).
    #[arg(short, long)]
    bytes: Option<usize>,

    /// Number of output lines (overrides config).
    #[arg(short = 'n', long)]
    count: Option<u32>,

    /// Use raw OS entropy without salting.
    #[arg(long)]
    system: bool,

    /// Print the digest of TEXT instead of generating bytes.
    #[arg(long, value_name = "TEXT")]
    digest: Option<String>,

    /// Run sanity statistics over the generated output.
    #[arg(long)]
    analyze: bool,

    /// Print generator metrics in Prometheus text format.
    #[arg(long)]
    metrics: bool,
}

fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => match FileConfig::from_file(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Failed to load config: {}", e);
                std::process::exit(1);
            }
        },
        None => FileConfig::default(),
    };

    if let Some(bytes) = args.bytes {
        config.output.bytes = bytes;
    }
    if let Some(count) = args.count {
        config.output.count = count;
    }
    if args.system {
        config.generator.mode = OutputMode::System;
    }
    if let Err(e) = config.validate() {
        eprintln!("Invalid configuration: {}", e);
        std::process::exit(1);
    }

    if let Some(text) = &args.digest {
        let sum = digest_with(config.generator.digest, text.as_bytes());
        println!("{}", to_hex(&sum));
        return;
    }

    info!("Salted Entropy v{}", salted_entropy::VERSION);

    let generator = process_generator();
    let mut all_output = Vec::new();

    for _ in 0..config.output.count {
        let result = match config.generator.mode {
            OutputMode::Secure => generator.secure_bytes(config.output.bytes),
            OutputMode::System => generator.system_bytes(config.output.bytes),
        };

        let bytes = match result {
            Ok(b) => b,
            Err(e) => {
                eprintln!("Entropy source failed: {}", e);
                std::process::exit(1);
            }
        };

        println!("{}", to_hex(&bytes));
        if args.analyze {
            all_output.extend_from_slice(&bytes);
        }
    }

    if args.analyze {
        let stats = OutputStatistics::analyze(&all_output);
        info!(
            "Analyzed {} bytes: bias={:.4} variance={:.1} autocorrelation={:.4}",
            stats.sample_size, stats.bit_bias, stats.variance, stats.autocorrelation
        );
        match config.analysis.assess(&stats) {
            Assessment::Passed => info!("Output passed sanity checks"),
            Assessment::Failed(violation) => warn!("Output failed sanity check: {}", violation),
            Assessment::Inconclusive {
                sample_size,
                required,
            } => info!(
                "Sample of {} bytes too small to judge (need {})",
                sample_size, required
            ),
        }
    }

    if args.metrics {
        match MetricsRegistry::new() {
            Ok(registry) => {
                registry.update(&MetricsSnapshot::from_generator(generator));
                match registry.encode() {
                    Ok(text) => print!("{}", text),
                    Err(e) => warn!("Failed to encode metrics: {}", e),
                }
            }
            Err(e) => warn!("Failed to create metrics registry: {}", e),
        }
    }
}

fn to_hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}
