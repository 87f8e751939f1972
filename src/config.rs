//! Configuration for the command-line tool.
//!
//! The library entry points take no configuration. These settings only
//! choose what the binary generates and how it checks the output.

use crate::analysis::QualityThresholds;
use crate::digest::HashAlgorithm;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Largest single request the tool accepts.
pub const MAX_OUTPUT_BYTES: usize = 1 << 20;

/// Which byte generator to use.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    /// OS entropy salted with the process salt stream.
    #[default]
    Secure,
    /// Raw OS entropy.
    System,
}

/// Generator settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Byte generator to draw from.
    #[serde(default)]
    pub mode: OutputMode,
    /// Digest algorithm for `--digest`.
    #[serde(default)]
    pub digest: HashAlgorithm,
}

/// Output settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Bytes per output line.
    pub bytes: usize,
    /// Number of output lines.
    pub count: u32,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { bytes: 32, count: 1 }
    }
}

impl OutputConfig {
    /// Validates the output parameters.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.bytes > MAX_OUTPUT_BYTES {
            return Err(ConfigError::OutputTooLarge(self.bytes));
        }
        if self.count == 0 {
            return Err(ConfigError::InvalidCount);
        }
        Ok(())
    }
}

/// Configuration validation errors.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ConfigError {
    /// Requested output is above [`MAX_OUTPUT_BYTES`].
    #[error("output of {0} bytes exceeds the 1048576 byte limit")]
    OutputTooLarge(usize),
    /// Output count is zero.
    #[error("output count must be at least 1")]
    InvalidCount,
    /// Analysis thresholds out of range.
    #[error("invalid analysis thresholds: {0}")]
    InvalidThresholds(String),
    /// Config file could not be read.
    #[error("failed to read config file: {0}")]
    FileReadError(String),
    /// Config file is not valid TOML for this format.
    #[error("failed to parse config file: {0}")]
    ParseError(String),
}

/// Full configuration file format.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FileConfig {
    /// `[generator]` table.
    #[serde(default)]
    pub generator: GeneratorConfig,
    /// `[output]` table.
    #[serde(default)]
    pub output: OutputConfig,
    /// `[analysis]` table.
    #[serde(default)]
    pub analysis: QualityThresholds,
}

impl FileConfig {
    /// Loads configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::FileReadError(e.to_string()))?;
        Self::from_toml(&content)
    }

    /// Parses and validates configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: FileConfig =
            toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Validates every section.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.output.validate()?;

        let t = &self.analysis;
        if !(0.0..=0.5).contains(&t.max_bit_bias) {
            return Err(ConfigError::InvalidThresholds(format!(
                "max_bit_bias {} outside [0, 0.5]",
                t.max_bit_bias
            )));
        }
        if t.min_variance < 0.0 {
            return Err(ConfigError::InvalidThresholds(format!(
                "min_variance {} is negative",
                t.min_variance
            )));
        }
        if !(0.0..=1.0).contains(&t.max_autocorrelation) {
            return Err(ConfigError::InvalidThresholds(format!(
                "max_autocorrelation {} outside [0, 1]",
                t.max_autocorrelation
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_valid() {
        let config = FileConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.generator.mode, OutputMode::Secure);
        assert_eq!(config.generator.digest, HashAlgorithm::Sha256);
    }

    #[test]
    fn test_parse_full_file() {
        let config = FileConfig::from_toml(
            r#"
            [generator]
            mode = "system"
            digest = "blake3"

            [output]
            bytes = 64
            count = 4

            [analysis]
            max_bit_bias = 0.02
            min_variance = 5000.0
            max_autocorrelation = 0.1
            "#,
        )
        .unwrap();

        assert_eq!(config.generator.mode, OutputMode::System);
        assert_eq!(config.generator.digest, HashAlgorithm::Blake3);
        assert_eq!(config.output.bytes, 64);
        assert_eq!(config.output.count, 4);
        assert_eq!(config.analysis.max_bit_bias, 0.02);
    }

    #[test]
    fn test_empty_file_uses_defaults() {
        let config = FileConfig::from_toml("").unwrap();
        assert_eq!(config.output.bytes, 32);
        assert_eq!(config.output.count, 1);
    }

    #[test]
    fn test_partial_analysis_table_keeps_defaults() {
        let config = FileConfig::from_toml("[analysis]\nmin_sample_size = 4096\n").unwrap();
        assert_eq!(config.analysis.min_sample_size, 4096);
        assert_eq!(
            config.analysis.max_bit_bias,
            QualityThresholds::default().max_bit_bias
        );
    }

    #[test]
    fn test_oversized_output_invalid() {
        let err = FileConfig::from_toml("[output]\nbytes = 2000000\ncount = 1\n").unwrap_err();
        assert!(matches!(err, ConfigError::OutputTooLarge(2_000_000)));
    }

    #[test]
    fn test_zero_count_invalid() {
        let err = FileConfig::from_toml("[output]\nbytes = 8\ncount = 0\n").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidCount));
    }

    #[test]
    fn test_bad_thresholds_invalid() {
        let err = FileConfig::from_toml(
            "[analysis]\nmax_bit_bias = 0.9\nmin_variance = 1.0\nmax_autocorrelation = 0.1\n",
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidThresholds(_)));
    }

    #[test]
    fn test_unknown_mode_rejected() {
        let err = FileConfig::from_toml("[generator]\nmode = \"fast\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }
}
