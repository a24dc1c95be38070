//! CLI configuration management
//!
//! Handles loading configuration from environment variables, TOML files, and CLI arguments.

use pricer_models::analytical::{DiscountConvention, OptionType};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

const ENV_LOG_LEVEL: &str = "IMPVOL_LOG_LEVEL";
const ENV_CONVENTION: &str = "IMPVOL_CONVENTION";
const ENV_OPTION_TYPE: &str = "IMPVOL_OPTION_TYPE";

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Invalid discount convention: {0}. Must be one of: standard, discounted-spot")]
    InvalidConvention(String),

    #[error("Invalid option type: {0}. Must be one of: call, put")]
    InvalidOptionType(String),

    #[error("Configuration file error: {0}")]
    FileError(String),
}

/// Log levels supported by the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(ConfigError::InvalidLogLevel(s.to_string())),
        }
    }
}

impl LogLevel {
    /// Convert log level to tracing filter string
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_filter_str())
    }
}

fn parse_convention(s: &str) -> Result<DiscountConvention, ConfigError> {
    DiscountConvention::from_str(s).map_err(|_| ConfigError::InvalidConvention(s.to_string()))
}

fn parse_option_type(s: &str) -> Result<OptionType, ConfigError> {
    OptionType::from_str(s).map_err(|_| ConfigError::InvalidOptionType(s.to_string()))
}

/// Service configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// Log level
    #[serde(deserialize_with = "deserialize_log_level")]
    pub log_level: LogLevel,
    /// Discount convention of the pricing formula
    #[serde(deserialize_with = "deserialize_convention")]
    pub convention: DiscountConvention,
    /// Payoff used when a command does not specify one
    #[serde(deserialize_with = "deserialize_option_type")]
    pub option_type: OptionType,
}

fn deserialize_log_level<'de, D>(deserializer: D) -> Result<LogLevel, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    LogLevel::from_str(&s).map_err(serde::de::Error::custom)
}

fn deserialize_convention<'de, D>(deserializer: D) -> Result<DiscountConvention, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    parse_convention(&s).map_err(serde::de::Error::custom)
}

fn deserialize_option_type<'de, D>(deserializer: D) -> Result<OptionType, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    parse_option_type(&s).map_err(serde::de::Error::custom)
}

impl ServiceConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileError(format!("Failed to read config file: {}", e)))?;

        Self::from_toml_str(&content)
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::FileError(format!("Failed to parse TOML: {}", e)))
    }

    /// Override fields from an environment lookup
    pub fn apply_env_from<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(log_level) = lookup(ENV_LOG_LEVEL) {
            self.log_level = LogLevel::from_str(&log_level)?;
        }
        if let Some(convention) = lookup(ENV_CONVENTION) {
            self.convention = parse_convention(&convention)?;
        }
        if let Some(option_type) = lookup(ENV_OPTION_TYPE) {
            self.option_type = parse_option_type(&option_type)?;
        }
        Ok(())
    }

    /// Merge with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli: &CliArgs) -> Result<(), ConfigError> {
        if let Some(log_level) = &cli.log_level {
            self.log_level = LogLevel::from_str(log_level)?;
        } else if cli.verbose {
            self.log_level = LogLevel::Debug;
        }
        if let Some(convention) = &cli.convention {
            self.convention = parse_convention(convention)?;
        }
        Ok(())
    }
}

/// CLI arguments structure
#[derive(Debug, Clone, Default)]
pub struct CliArgs {
    /// Config file path
    pub config_file: Option<PathBuf>,
    /// Log level override
    pub log_level: Option<String>,
    /// Discount convention override
    pub convention: Option<String>,
    /// Raise the default log level to debug
    pub verbose: bool,
}

/// Build configuration from all sources
///
/// Priority (highest to lowest):
/// 1. CLI arguments
/// 2. Environment variables
/// 3. Config file
/// 4. Default values
pub fn build_config(cli: &CliArgs) -> Result<ServiceConfig, ConfigError> {
    build_config_with_env(cli, |key| std::env::var(key).ok())
}

fn build_config_with_env<F>(cli: &CliArgs, lookup: F) -> Result<ServiceConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = match &cli.config_file {
        Some(path) => ServiceConfig::from_file(path)?,
        None => ServiceConfig::default(),
    };

    config.apply_env_from(lookup)?;
    config.merge_with_cli(cli)?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = ServiceConfig::default();
        assert_eq!(config.log_level, LogLevel::Info);
        assert_eq!(config.convention, DiscountConvention::Standard);
        assert_eq!(config.option_type, OptionType::Call);
    }

    #[test]
    fn test_log_level_parsing() {
        assert_eq!(LogLevel::from_str("trace").unwrap(), LogLevel::Trace);
        assert_eq!(LogLevel::from_str("DEBUG").unwrap(), LogLevel::Debug);
        assert_eq!(LogLevel::from_str("Info").unwrap(), LogLevel::Info);
        assert_eq!(LogLevel::from_str("WARN").unwrap(), LogLevel::Warn);
        assert_eq!(LogLevel::from_str("error").unwrap(), LogLevel::Error);

        assert!(LogLevel::from_str("invalid").is_err());
    }

    #[test]
    fn test_log_level_display() {
        assert_eq!(format!("{}", LogLevel::Trace), "trace");
        assert_eq!(format!("{}", LogLevel::Warn), "warn");
        assert_eq!(LogLevel::Error.as_filter_str(), "error");
    }

    #[test]
    fn test_toml_deserialization() {
        let toml_str = r#"
            log_level = "debug"
            convention = "discounted-spot"
            option_type = "put"
        "#;

        let config = ServiceConfig::from_toml_str(toml_str).unwrap();
        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.convention, DiscountConvention::DiscountedSpot);
        assert_eq!(config.option_type, OptionType::Put);
    }

    #[test]
    fn test_partial_toml_deserialization() {
        let config = ServiceConfig::from_toml_str(r#"convention = "reference""#).unwrap();
        // Should use defaults for unspecified fields
        assert_eq!(config.log_level, LogLevel::Info);
        assert_eq!(config.convention, DiscountConvention::DiscountedSpot);
        assert_eq!(config.option_type, OptionType::Call);
    }

    #[test]
    fn test_invalid_toml_value() {
        let result = ServiceConfig::from_toml_str(r#"convention = "forward""#);
        assert!(matches!(result, Err(ConfigError::FileError(_))));
    }

    #[test]
    fn test_missing_file() {
        let result = ServiceConfig::from_file(Path::new("/nonexistent/impvol.toml"));
        assert!(matches!(result, Err(ConfigError::FileError(_))));
    }

    #[test]
    fn test_env_overrides() {
        let mut config = ServiceConfig::default();
        config
            .apply_env_from(env(&[
                (ENV_LOG_LEVEL, "warn"),
                (ENV_CONVENTION, "discounted_spot"),
                (ENV_OPTION_TYPE, "p"),
            ]))
            .unwrap();

        assert_eq!(config.log_level, LogLevel::Warn);
        assert_eq!(config.convention, DiscountConvention::DiscountedSpot);
        assert_eq!(config.option_type, OptionType::Put);
    }

    #[test]
    fn test_invalid_env_value() {
        let mut config = ServiceConfig::default();
        let result = config.apply_env_from(env(&[(ENV_OPTION_TYPE, "straddle")]));
        assert!(matches!(result, Err(ConfigError::InvalidOptionType(_))));
    }

    #[test]
    fn test_cli_args_merge() {
        let mut config = ServiceConfig::default();
        let cli = CliArgs {
            log_level: Some("error".to_string()),
            convention: Some("discounted-spot".to_string()),
            ..Default::default()
        };

        config.merge_with_cli(&cli).unwrap();

        assert_eq!(config.log_level, LogLevel::Error);
        assert_eq!(config.convention, DiscountConvention::DiscountedSpot);
    }

    #[test]
    fn test_verbose_yields_to_explicit_level() {
        let mut config = ServiceConfig::default();
        config
            .merge_with_cli(&CliArgs {
                verbose: true,
                ..Default::default()
            })
            .unwrap();
        assert_eq!(config.log_level, LogLevel::Debug);

        config
            .merge_with_cli(&CliArgs {
                verbose: true,
                log_level: Some("warn".to_string()),
                ..Default::default()
            })
            .unwrap();
        assert_eq!(config.log_level, LogLevel::Warn);
    }

    #[test]
    fn test_cli_takes_precedence_over_env() {
        let cli = CliArgs {
            convention: Some("standard".to_string()),
            ..Default::default()
        };
        let config = build_config_with_env(
            &cli,
            env(&[(ENV_CONVENTION, "discounted-spot"), (ENV_LOG_LEVEL, "trace")]),
        )
        .unwrap();

        assert_eq!(config.convention, DiscountConvention::Standard);
        assert_eq!(config.log_level, LogLevel::Trace);
    }

    #[test]
    fn test_build_config_with_defaults() {
        let config = build_config_with_env(&CliArgs::default(), env(&[])).unwrap();
        assert_eq!(config.log_level, LogLevel::Info);
        assert_eq!(config.convention, DiscountConvention::Standard);
    }
}
