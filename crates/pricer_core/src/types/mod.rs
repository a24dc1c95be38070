//! Shared types.
//!
//! - `error`: Structured error types for pricing and solver operations

pub mod error;

pub use error::{PricingError, SolverError};
