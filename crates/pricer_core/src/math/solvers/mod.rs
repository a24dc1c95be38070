//! Root-finding solvers for numerical computation.
//!
//! The solvers take the objective as an injected closure, so the same
//! implementation serves implied volatility or any other scalar inversion.
//!
//! ## Available Solvers
//!
//! - [`SecantSolver`]: derivative-free, superlinear convergence from two seeds
//!
//! ## Configuration
//!
//! Solvers use [`SolverConfig`] for configuring:
//! - `tolerance`: convergence tolerance (default: 1e-10)
//! - `max_iterations`: maximum iteration count (default: 100)
//!
//! ## Example
//!
//! ```
//! use pricer_core::math::solvers::{SecantSolver, SolverConfig};
//!
//! // Solve e^x - 2 = 0 (find ln 2)
//! let solver = SecantSolver::new(SolverConfig::new(1e-12, 50));
//! let root = solver.find_root_from_guess(|x: f64| x.exp() - 2.0, 0.5).unwrap();
//! assert!((root - 2.0_f64.ln()).abs() < 1e-10);
//! ```

mod config;
mod secant;

pub use config::SolverConfig;
pub use secant::{SecantSolver, DEFAULT_SEED_BUMP};
