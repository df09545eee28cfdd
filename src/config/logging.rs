// src/config/logging.rs
use std::collections::HashMap;

use log::LevelFilter;
use serde::{Deserialize, Serialize};

use crate::config::settings::{section, ConfigError, ConfigMap};

/// Subset of the dictionary logging schema understood by the backend: a
/// required root level plus per-target overrides. Handler and formatter
/// layout is fixed (stderr, env_logger's default format), so those keys are
/// tolerated but ignored.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub root: RootLogger,
    #[serde(default)]
    pub loggers: HashMap<String, LoggerConfig>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RootLogger {
    pub level: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggerConfig {
    pub level: String,
}

impl LoggingConfig {
    /// Read the `LOGGING` section of a loaded config
    pub fn from_config(config: &ConfigMap) -> Result<Self, ConfigError> {
        section(config, "LOGGING")
    }

    fn builder(&self) -> Result<env_logger::Builder, ConfigError> {
        let mut builder = env_logger::Builder::new();
        builder.filter_level(parse_level(&self.root.level)?);

        for (target, logger) in &self.loggers {
            builder.filter_module(target, parse_level(&logger.level)?);
        }

        Ok(builder)
    }
}

fn parse_level(value: &str) -> Result<LevelFilter, ConfigError> {
    value
        .parse()
        .map_err(|_| ConfigError::InvalidLevel(value.to_string()))
}

/// Apply the `LOGGING` section of a loaded config process-wide
///
/// Fails if the section is absent or malformed, or if a logger has already
/// been installed for this process.
///
/// An example in YAML:
///
/// ```yaml
/// LOGGING:
///   root:
///     level: DEBUG
///   loggers:
///     sqlx:
///       level: INFO
///     redis:
///       level: INFO
/// ```
pub fn configure_logging(config: &ConfigMap) -> Result<(), ConfigError> {
    let logging = LoggingConfig::from_config(config)?;

    logging
        .builder()?
        .try_init()
        .map_err(|e| ConfigError::Logging(e.to_string()))
}
