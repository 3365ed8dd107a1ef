//! Server configuration from environment variables.
//!
//! Load configuration using `Config::from_env()` after calling `dotenvy::dotenv()`.
//! Site address, asset directories and reload settings are not part of this
//! struct; they come from `[package.metadata.leptos]` via `get_configuration`.

use tracing::Level;

/// Errors raised while reading configuration values.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} must be a boolean (true/false, 1/0, yes/no, on/off), got {value:?}")]
    InvalidBool { var: &'static str, value: String },

    #[error("{var} must be one of trace, debug, info, warn, error, got {value:?}")]
    InvalidLogLevel { var: &'static str, value: String },
}

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Maximum level emitted by the tracing subscriber (`LOG_LEVEL`)
    pub log_level: Level,

    /// Whether responses are brotli/gzip compressed (`COMPRESSION`)
    pub compression: bool,
}

impl Config {
    pub const LOG_LEVEL_VAR: &'static str = "LOG_LEVEL";
    pub const COMPRESSION_VAR: &'static str = "COMPRESSION";

    /// Load configuration from environment variables.
    ///
    /// Call `dotenvy::dotenv()` before this to load from `.env` file.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build a config from an arbitrary variable source. Unset or blank
    /// variables fall back to their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let value_of = |var: &str| lookup(var).filter(|v| !v.trim().is_empty());

        let log_level = match value_of(Self::LOG_LEVEL_VAR) {
            Some(value) => parse_log_level(Self::LOG_LEVEL_VAR, &value)?,
            None => defaults.log_level,
        };

        let compression = match value_of(Self::COMPRESSION_VAR) {
            Some(value) => parse_bool(Self::COMPRESSION_VAR, &value)?,
            None => defaults.compression,
        };

        Ok(Self {
            log_level,
            compression,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: Level::INFO,
            compression: true,
        }
    }
}

fn parse_bool(var: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidBool {
            var,
            value: value.to_string(),
        }),
    }
}

fn parse_log_level(var: &'static str, value: &str) -> Result<Level, ConfigError> {
    value
        .trim()
        .parse::<Level>()
        .map_err(|_| ConfigError::InvalidLogLevel {
            var,
            value: value.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |var| map.get(var).cloned()
    }

    #[test]
    fn test_defaults_when_nothing_is_set() {
        let config = Config::from_lookup(|_| None).unwrap();

        assert_eq!(config, Config::default());
        assert_eq!(config.log_level, Level::INFO);
        assert!(config.compression);
    }

    #[test]
    fn test_blank_values_fall_back_to_defaults() {
        let config =
            Config::from_lookup(lookup_from(&[("LOG_LEVEL", "  "), ("COMPRESSION", "")])).unwrap();

        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_log_level_is_case_insensitive() {
        let config = Config::from_lookup(lookup_from(&[("LOG_LEVEL", "DEBUG")])).unwrap();
        assert_eq!(config.log_level, Level::DEBUG);

        let config = Config::from_lookup(lookup_from(&[("LOG_LEVEL", "warn")])).unwrap();
        assert_eq!(config.log_level, Level::WARN);
    }

    #[test]
    fn test_compression_accepts_common_spellings() {
        for value in ["false", "0", "no", "off", "FALSE", " Off "] {
            let config = Config::from_lookup(lookup_from(&[("COMPRESSION", value)])).unwrap();
            assert!(!config.compression, "{value:?} should disable compression");
        }
        for value in ["true", "1", "yes", "on", "True"] {
            let config = Config::from_lookup(lookup_from(&[("COMPRESSION", value)])).unwrap();
            assert!(config.compression, "{value:?} should enable compression");
        }
    }

    #[test]
    fn test_invalid_compression_is_rejected() {
        let err = Config::from_lookup(lookup_from(&[("COMPRESSION", "sometimes")])).unwrap_err();

        assert_eq!(
            err,
            ConfigError::InvalidBool {
                var: "COMPRESSION",
                value: "sometimes".to_string(),
            }
        );
        assert!(err.to_string().contains("COMPRESSION"));
    }

    #[test]
    fn test_invalid_log_level_is_rejected() {
        let err = Config::from_lookup(lookup_from(&[("LOG_LEVEL", "verbose")])).unwrap_err();

        assert!(matches!(
            err,
            ConfigError::InvalidLogLevel { var: "LOG_LEVEL", .. }
        ));
        assert!(err.to_string().contains("\"verbose\""));
    }

    #[test]
    fn test_config_clone() {
        let config = Config {
            log_level: Level::TRACE,
            compression: false,
        };

        let cloned = config.clone();

        assert_eq!(config, cloned);
    }
}
