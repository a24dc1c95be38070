//! Error types for structured error handling.
//!
//! This module provides:
//! - `PricingError`: Errors from pricing operations
//! - `SolverError`: Errors from root-finding solvers

use std::fmt;
use thiserror::Error;

/// Categorised pricing errors.
///
/// The common error surface of the workspace: model- and solver-specific
/// errors convert into it at crate boundaries.
///
/// # Variants
/// - `InvalidInput`: Invalid market data or parameters
/// - `NumericalInstability`: Computation failed to converge or degenerated
/// - `ModelFailure`: Model produced an unusable result
///
/// # Examples
/// ```
/// use pricer_core::types::PricingError;
///
/// let err = PricingError::InvalidInput("Negative spot price".to_string());
/// assert_eq!(format!("{}", err), "Invalid input: Negative spot price");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PricingError {
    /// Invalid input data or parameters
    InvalidInput(String),

    /// Numerical instability during computation
    NumericalInstability(String),

    /// Model failed to produce valid result
    ModelFailure(String),
}

impl fmt::Display for PricingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PricingError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            PricingError::NumericalInstability(msg) => {
                write!(f, "Numerical instability: {}", msg)
            }
            PricingError::ModelFailure(msg) => write!(f, "Model failure: {}", msg),
        }
    }
}

impl std::error::Error for PricingError {}

/// Root-finding solver errors.
///
/// # Variants
/// - `MaxIterationsExceeded`: Solver failed to converge within iteration limit
/// - `FlatSecant`: Objective values at the two latest iterates are indistinguishable
/// - `NonFiniteValue`: Objective returned NaN or infinity
/// - `NumericalInstability`: A solver step overflowed
/// - `InvalidConfiguration`: Tolerance or iteration budget out of range
///
/// # Examples
/// ```
/// use pricer_core::types::SolverError;
///
/// let err = SolverError::MaxIterationsExceeded { iterations: 100 };
/// assert!(format!("{}", err).contains("100 iterations"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SolverError {
    /// Solver failed to converge within maximum iterations.
    #[error("Failed to converge after {iterations} iterations")]
    MaxIterationsExceeded {
        /// Number of iterations attempted
        iterations: usize,
    },

    /// Secant slope is zero to machine precision.
    #[error("Flat secant: f({x0}) and f({x1}) are indistinguishable")]
    FlatSecant {
        /// Older iterate
        x0: f64,
        /// Newer iterate
        x1: f64,
    },

    /// Objective function returned a non-finite value.
    #[error("Objective is not finite at x = {x}")]
    NonFiniteValue {
        /// The iterate at which the objective was evaluated
        x: f64,
    },

    /// Numerical instability during computation.
    #[error("Numerical instability: {0}")]
    NumericalInstability(String),

    /// Solver configuration out of range.
    #[error("Invalid solver configuration: {0}")]
    InvalidConfiguration(String),
}

impl SolverError {
    /// Whether the solver simply ran out of iterations, as opposed to
    /// hitting a degenerate numerical state.
    pub fn is_not_converged(&self) -> bool {
        matches!(self, SolverError::MaxIterationsExceeded { .. })
    }
}

impl From<SolverError> for PricingError {
    fn from(err: SolverError) -> Self {
        match err {
            SolverError::InvalidConfiguration(_) => PricingError::InvalidInput(err.to_string()),
            _ => PricingError::NumericalInstability(err.to_string()),
        }
    }
}
