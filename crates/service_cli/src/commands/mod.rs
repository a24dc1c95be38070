//! CLI command implementations
//!
//! Each submodule implements a specific CLI command.

use pricer_models::analytical::OptionType;

use crate::config::ServiceConfig;
use crate::{CliError, Result};

pub mod check;
pub mod demo;
pub mod price;
pub mod solve;

/// Option type from the command line, falling back to the configured one.
fn resolve_option_type(config: &ServiceConfig, arg: Option<&str>) -> Result<OptionType> {
    match arg {
        Some(s) => s
            .parse()
            .map_err(|e| CliError::InvalidArgument(format!("{}", e))),
        None => Ok(config.option_type),
    }
}
