//! # pricer_core: Numerical Foundation for Implied Volatility
//!
//! ## Layer 1 (Foundation) Role
//!
//! pricer_core is the bottom layer of the workspace, providing:
//! - Root-finding solvers with injected objective functions (`math::solvers`)
//! - Error types: `PricingError`, `SolverError` (`types::error`)
//!
//! It has no dependency on other pricer_* crates and no logging; callers
//! decide how solver failures are reported.
//!
//! ## Usage Examples
//!
//! ```rust
//! use pricer_core::math::solvers::{SecantSolver, SolverConfig};
//! use pricer_core::types::SolverError;
//!
//! let solver = SecantSolver::new(SolverConfig::new(1e-6, 1000));
//! let root = solver.find_root(|x: f64| x * x - 9.0, 2.0, 2.2).unwrap();
//! assert!((root - 3.0).abs() < 1e-6);
//!
//! let flat = solver.find_root(|_x: f64| 1.0, 2.0, 2.2);
//! assert!(matches!(flat, Err(SolverError::FlatSecant { .. })));
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialisation for `SolverConfig` and `SolverError`

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod math;
pub mod types;
