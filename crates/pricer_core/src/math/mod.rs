//! Numerical building blocks.
//!
//! - `solvers`: root-finding with injected objective functions

pub mod solvers;
