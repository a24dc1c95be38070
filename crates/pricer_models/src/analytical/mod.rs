//! Analytical pricing formulas for European options.
//!
//! This module provides:
//! - Standard normal CDF and PDF
//! - Black-Scholes model with `Standard` and `DiscountedSpot` conventions
//! - Implied volatility solver built on the secant method
//!
//! ## Design Principles
//!
//! - **Explicit layering**: distributions → black_scholes → implied_vol
//! - **Numerical Stability**: Uses erfc-based CDF for accuracy

pub mod black_scholes;
pub mod distributions;
pub mod error;
pub mod implied_vol;

// Re-export main types at module level
pub use black_scholes::{
    call_price, price_bounds, put_price, BlackScholes, DiscountConvention, OptionType,
    PriceBounds,
};
pub use distributions::{norm_cdf, norm_pdf};
pub use error::{AnalyticalError, ImpliedVolError};
pub use implied_vol::{
    bound_volatility_step, implied_volatility, ImpliedVolSolver, IMPLIED_VOL_MAX_ITERATIONS,
    IMPLIED_VOL_TOLERANCE, MAX_STEP_RATIO, SECANT_SEED_BUMP,
};
