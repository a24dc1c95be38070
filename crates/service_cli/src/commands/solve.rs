//! Solve command implementation
//!
//! Recovers the implied volatility of a European option from its market price.

use pricer_models::analytical::ImpliedVolSolver;
use tracing::{error, info};

use crate::config::ServiceConfig;
use crate::{MarketArgs, Result};

/// Run the solve command
pub fn run(
    config: &ServiceConfig,
    market: &MarketArgs,
    price: f64,
    guess: f64,
    option_type: Option<&str>,
) -> Result<()> {
    let option_type = super::resolve_option_type(config, option_type)?;

    info!("Solving implied volatility...");
    info!(
        "  S = {}, K = {}, r = {}, T = {}",
        market.spot, market.strike, market.rate, market.expiry
    );
    info!("  Market price: {} ({})", price, option_type);
    info!("  Initial guess: {}", guess);
    info!("  Convention: {}", config.convention);

    let solver = ImpliedVolSolver::new()
        .option_type(option_type)
        .convention(config.convention);

    let sigma = solver
        .solve(
            market.spot,
            market.strike,
            market.rate,
            market.expiry,
            price,
            guess,
        )
        .map_err(|e| {
            error!("{}", e);
            e
        })?;

    println!("Implied volatility: {:.4}%", sigma * 100.0);
    Ok(())
}
