//! CLI error types

use pricer_core::types::PricingError;
use pricer_models::analytical::{AnalyticalError, ImpliedVolError};
use thiserror::Error;

use crate::config::ConfigError;

/// CLI error type
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration could not be loaded
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Pricing or implied volatility failure
    #[error("Pricing error: {0}")]
    Pricing(#[from] PricingError),

    /// Invalid command-line argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl From<AnalyticalError> for CliError {
    fn from(err: AnalyticalError) -> Self {
        CliError::Pricing(err.into())
    }
}

impl From<ImpliedVolError> for CliError {
    fn from(err: ImpliedVolError) -> Self {
        CliError::Pricing(err.into())
    }
}

/// Result type alias for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;
