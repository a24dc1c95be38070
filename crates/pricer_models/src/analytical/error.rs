//! Error types for analytical pricing operations.
//!
//! This module provides:
//! - `AnalyticalError`: Invalid model or contract parameters
//! - `ImpliedVolError`: Failures of the implied volatility inversion

use pricer_core::types::{PricingError, SolverError};
use thiserror::Error;

/// Analytical pricing errors.
///
/// Raised when a model or contract parameter is outside the domain of the
/// closed-form formulas, or when a textual option attribute cannot be parsed.
///
/// # Examples
/// ```
/// use pricer_models::analytical::AnalyticalError;
///
/// let err = AnalyticalError::InvalidVolatility { volatility: -0.2 };
/// assert!(format!("{}", err).contains("volatility"));
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
pub enum AnalyticalError {
    /// Invalid volatility (non-positive or non-finite).
    #[error("Invalid volatility: σ = {volatility}")]
    InvalidVolatility {
        /// The invalid volatility value
        volatility: f64,
    },

    /// Invalid spot price (non-positive or non-finite).
    #[error("Invalid spot price: S = {spot}")]
    InvalidSpot {
        /// The invalid spot price value
        spot: f64,
    },

    /// Invalid strike (non-positive or non-finite).
    #[error("Invalid strike: K = {strike}")]
    InvalidStrike {
        /// The invalid strike value
        strike: f64,
    },

    /// Invalid time to expiry (non-positive or non-finite).
    #[error("Invalid expiry: T = {expiry}")]
    InvalidExpiry {
        /// The invalid expiry value
        expiry: f64,
    },

    /// Non-finite risk-free rate.
    #[error("Invalid rate: r = {rate}")]
    InvalidRate {
        /// The invalid rate value
        rate: f64,
    },

    /// Unrecognised option type name.
    #[error("Unknown option type: {0} (expected call or put)")]
    UnknownOptionType(String),

    /// Unrecognised discount convention name.
    #[error("Unknown discount convention: {0} (expected standard or discounted-spot)")]
    UnknownConvention(String),
}

impl From<AnalyticalError> for PricingError {
    fn from(err: AnalyticalError) -> Self {
        PricingError::InvalidInput(err.to_string())
    }
}

/// Implied volatility errors.
///
/// Input problems are detected before the solver runs; the remaining
/// variants describe how the secant iteration ended without a usable
/// volatility.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ImpliedVolError {
    /// Spot, strike, rate or expiry outside the model domain.
    #[error(transparent)]
    InvalidInput(#[from] AnalyticalError),

    /// Market price is not positive and finite.
    #[error("Invalid market price: {price}")]
    InvalidMarketPrice {
        /// The rejected market price
        price: f64,
    },

    /// Initial volatility guess is not positive and finite.
    #[error("Invalid initial guess: σ₀ = {guess}")]
    InvalidInitialGuess {
        /// The rejected guess
        guess: f64,
    },

    /// Market price outside the no-arbitrage range, so no volatility reproduces it.
    #[error("Market price {price} outside no-arbitrage bounds ({lower}, {upper})")]
    PriceOutOfBounds {
        /// The rejected market price
        price: f64,
        /// Price as volatility tends to zero
        lower: f64,
        /// Price as volatility tends to infinity
        upper: f64,
    },

    /// The secant iteration used its full budget.
    #[error("Failed to converge to the required tolerance within max iterations.")]
    NotConverged {
        /// Iteration budget that was exhausted
        iterations: usize,
    },

    /// The iteration converged on a volatility that is not positive.
    #[error("Solver converged to a non-positive volatility: σ = {volatility}")]
    NonPositiveVolatility {
        /// The converged value
        volatility: f64,
    },

    /// Any other solver failure (flat secant, non-finite step or value).
    #[error("Implied volatility solver failed: {0}")]
    Solver(SolverError),
}

impl From<SolverError> for ImpliedVolError {
    fn from(err: SolverError) -> Self {
        match err {
            SolverError::MaxIterationsExceeded { iterations } => {
                ImpliedVolError::NotConverged { iterations }
            }
            other => ImpliedVolError::Solver(other),
        }
    }
}

impl From<ImpliedVolError> for PricingError {
    fn from(err: ImpliedVolError) -> Self {
        match err {
            ImpliedVolError::InvalidInput(inner) => inner.into(),
            ImpliedVolError::InvalidMarketPrice { .. }
            | ImpliedVolError::InvalidInitialGuess { .. }
            | ImpliedVolError::PriceOutOfBounds { .. } => {
                PricingError::InvalidInput(err.to_string())
            }
            ImpliedVolError::NotConverged { .. } | ImpliedVolError::Solver(_) => {
                PricingError::NumericalInstability(err.to_string())
            }
            ImpliedVolError::NonPositiveVolatility { .. } => {
                PricingError::ModelFailure(err.to_string())
            }
        }
    }
}
