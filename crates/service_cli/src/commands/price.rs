//! Price command implementation
//!
//! Prices a European option with Black-Scholes and reports its vega.

use pricer_models::analytical::black_scholes::validate_contract;
use pricer_models::analytical::BlackScholes;
use tracing::info;

use crate::config::ServiceConfig;
use crate::{MarketArgs, Result};

/// Run the price command
pub fn run(
    config: &ServiceConfig,
    market: &MarketArgs,
    volatility: f64,
    option_type: Option<&str>,
) -> Result<()> {
    let option_type = super::resolve_option_type(config, option_type)?;

    info!("Starting pricing...");
    info!("  Convention: {}", config.convention);

    validate_contract(market.strike, market.expiry)?;
    let model = BlackScholes::new(market.spot, market.rate, volatility)?
        .with_convention(config.convention);

    let price = model.price(option_type, market.strike, market.expiry);
    let vega = model.vega(market.strike, market.expiry);
    let bounds = model.bounds(option_type, market.strike, market.expiry);

    println!("Option type: {}", option_type);
    println!("Price:       {:.6}", price);
    println!("Vega:        {:.6}", vega);
    println!("Bounds:      ({:.6}, {:.6})", bounds.lower, bounds.upper);

    info!("Pricing complete");
    Ok(())
}
