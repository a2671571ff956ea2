//! Configuration module for the risk gate.
//!
//! Provides configuration loading, validation, and environment variable
//! interpolation for the gate, the annealing engine, and batch validation.
//!
//! # Usage
//!
//! ```rust,ignore
//! use risk_gate::config::{Config, load_config};
//!
//! // Load from default path (config.yaml)
//! let config = load_config(None)?;
//!
//! // Load from custom path
//! let config = load_config(Some("custom/config.yaml"))?;
//!
//! println!("threshold: {}", config.gate.risk_threshold);
//! ```

mod batch;
mod gate;
mod observability;

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use crate::domain::annealing::AnnealingParams;
pub use batch::BatchConfig;
pub use gate::GateConfig;
pub use observability::{LOG_FORMATS, LoggingConfig, ObservabilityConfig};

/// Default configuration file path.
pub const DEFAULT_CONFIG_PATH: &str = "config.yaml";

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read configuration file.
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        /// Path to the config file.
        path: String,
        /// The underlying IO error.
        source: std::io::Error,
    },

    /// Failed to parse YAML configuration.
    #[error("Failed to parse config YAML: {0}")]
    ParseError(#[from] serde_yaml_bw::Error),

    /// Configuration validation failed.
    #[error("Config validation failed: {0}")]
    ValidationError(String),
}

/// Root configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Gate decision configuration.
    #[serde(default)]
    pub gate: GateConfig,
    /// Annealing engine configuration.
    #[serde(default)]
    pub annealing: AnnealingParams,
    /// Batch validation configuration.
    #[serde(default)]
    pub batch: BatchConfig,
    /// Observability configuration.
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

// ============================================
// Configuration Loading
// ============================================

/// Load configuration from a YAML file with environment variable interpolation.
///
/// # Arguments
///
/// * `path` - Optional path to the config file. Defaults to "config.yaml".
///
/// # Errors
///
/// Returns a `ConfigError` if the file cannot be read, parsed, or validated.
pub fn load_config(path: Option<&str>) -> Result<Config, ConfigError> {
    let path = path.unwrap_or(DEFAULT_CONFIG_PATH);

    let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
        path: path.to_string(),
        source: e,
    })?;

    load_config_from_string(&contents)
}

/// Load configuration from a YAML string (useful for testing).
///
/// # Errors
///
/// Returns a `ConfigError` if the YAML cannot be parsed or validated.
pub fn load_config_from_string(yaml: &str) -> Result<Config, ConfigError> {
    let interpolated = interpolate_env_vars(yaml);
    let config: Config = serde_yaml_bw::from_str(&interpolated)?;
    validate_config(&config)?;
    Ok(config)
}

/// Load an explicit config file, or `config.yaml` if present, or defaults.
///
/// # Errors
///
/// Returns a `ConfigError` if an explicit or discovered file is invalid.
pub fn load_config_or_default(path: Option<&str>) -> Result<Config, ConfigError> {
    match path {
        Some(path) => load_config(Some(path)),
        None if Path::new(DEFAULT_CONFIG_PATH).exists() => load_config(None),
        None => {
            let config = Config::default();
            validate_config(&config)?;
            Ok(config)
        }
    }
}

/// Interpolate environment variables in a string.
///
/// Supports both `${VAR}` and `${VAR:-default}` syntax.
#[allow(clippy::expect_used)]
fn interpolate_env_vars(input: &str) -> String {
    use std::sync::OnceLock;

    static ENV_VAR_REGEX: OnceLock<regex::Regex> = OnceLock::new();

    let re = ENV_VAR_REGEX.get_or_init(|| {
        regex::Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)(?::-([^}]*))?\}")
            .expect("env var regex is valid")
    });

    re.replace_all(input, |cap: &regex::Captures<'_>| {
        let default_value = cap.get(2).map_or("", |m| m.as_str());
        match std::env::var(&cap[1]) {
            Ok(v) if !v.is_empty() => v,
            _ => default_value.to_string(),
        }
    })
    .into_owned()
}

/// Validate configuration values.
fn validate_config(config: &Config) -> Result<(), ConfigError> {
    if !config.gate.risk_threshold.is_finite() {
        return Err(ConfigError::ValidationError(
            "gate.risk_threshold must be finite".to_string(),
        ));
    }

    config
        .annealing
        .validate()
        .map_err(|e| ConfigError::ValidationError(format!("annealing.{}", e.message())))?;

    let format = config.observability.logging.format.as_str();
    if !LOG_FORMATS.contains(&format) {
        return Err(ConfigError::ValidationError(format!(
            "observability.logging.format must be one of: {LOG_FORMATS:?}"
        )));
    }

    Ok(())
}
