//! Check command implementation
//!
//! Prints the configuration after file, environment and CLI layering.

use pricer_models::analytical::{
    IMPLIED_VOL_MAX_ITERATIONS, IMPLIED_VOL_TOLERANCE, SECANT_SEED_BUMP,
};

use crate::config::ServiceConfig;
use crate::Result;

/// Run the check command
pub fn run(config: &ServiceConfig) -> Result<()> {
    println!("impvol {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Configuration:");
    println!("  log_level:   {}", config.log_level);
    println!("  convention:  {}", config.convention);
    println!("  option_type: {}", config.option_type);
    println!();
    println!("Solver:");
    println!("  tolerance:      {:e}", IMPLIED_VOL_TOLERANCE);
    println!("  max_iterations: {}", IMPLIED_VOL_MAX_ITERATIONS);
    println!("  seed bump:      {}", SECANT_SEED_BUMP);
    Ok(())
}
