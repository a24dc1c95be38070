//! Secant-method root-finding solver.

use super::SolverConfig;
use crate::types::SolverError;
use num_traits::Float;

/// Relative perturbation used to derive the second seed from a single guess.
pub const DEFAULT_SEED_BUMP: f64 = 1.1;

/// Secant-method root finder.
///
/// Derivative-free: the slope at each step is the finite difference through
/// the two most recent iterates,
///
/// ```text
/// x_{n+1} = x_n - f(x_n) · (x_n - x_{n-1}) / (f(x_n) - f(x_{n-1}))
/// ```
///
/// The iteration stops successfully once `|x_{n+1} - x_n| < tolerance`.
/// Unlike a naive secant loop it never launders NaN through the iteration:
/// a flat secant, a non-finite step, or a non-finite objective value ends the
/// solve with a typed [`SolverError`].
///
/// # Example
///
/// ```
/// use pricer_core::math::solvers::{SecantSolver, SolverConfig};
///
/// let solver = SecantSolver::new(SolverConfig::default());
///
/// // Solve x³ - x - 2 = 0
/// let f = |x: f64| x * x * x - x - 2.0;
///
/// let root = solver.find_root(f, 1.0, 2.0).unwrap();
/// assert!(f(root).abs() < 1e-9);
/// ```
#[derive(Debug, Clone)]
pub struct SecantSolver<T: Float> {
    config: SolverConfig<T>,
}

impl<T: Float> SecantSolver<T> {
    /// Create a new secant solver with the given configuration.
    pub fn new(config: SolverConfig<T>) -> Self {
        Self { config }
    }

    /// Create a solver with default configuration.
    pub fn with_defaults() -> Self {
        Self {
            config: SolverConfig::default(),
        }
    }

    /// Find a root of `f` starting from a single guess.
    ///
    /// The second seed is `x0 · 1.1` ([`DEFAULT_SEED_BUMP`]). A zero guess
    /// therefore yields two identical seeds and fails with
    /// `SolverError::FlatSecant`.
    pub fn find_root_from_guess<F>(&self, f: F, x0: T) -> Result<T, SolverError>
    where
        F: Fn(T) -> T,
    {
        let bump = T::from(DEFAULT_SEED_BUMP).unwrap_or_else(T::one);
        self.find_root(f, x0, x0 * bump)
    }

    /// Find a root of `f` from the two seeds `x0` and `x1`.
    ///
    /// `f` is evaluated at most `max_iterations + 1` times: once per seed,
    /// then once per step that does not terminate the solve.
    ///
    /// # Returns
    ///
    /// * `Ok(x)` - first iterate whose step from its predecessor is below tolerance
    /// * `Err(SolverError::MaxIterationsExceeded)` - step budget exhausted
    /// * `Err(SolverError::FlatSecant)` - `f(x0)` and `f(x1)` are indistinguishable
    /// * `Err(SolverError::NonFiniteValue)` - `f` returned NaN or infinity
    /// * `Err(SolverError::NumericalInstability)` - the secant step overflowed
    ///
    /// # Example
    ///
    /// ```
    /// use pricer_core::math::solvers::{SecantSolver, SolverConfig};
    ///
    /// let solver = SecantSolver::new(SolverConfig::default());
    ///
    /// // Solve x² - 2 = 0
    /// let root = solver.find_root(|x: f64| x * x - 2.0, 1.0, 1.1).unwrap();
    /// assert!((root - std::f64::consts::SQRT_2).abs() < 1e-10);
    /// ```
    pub fn find_root<F>(&self, f: F, x0: T, x1: T) -> Result<T, SolverError>
    where
        F: Fn(T) -> T,
    {
        self.find_root_projected(f, x0, x1, |_, x_next| x_next)
    }

    /// Find a root of `f`, passing every secant step through `project`.
    ///
    /// `project(x, x_next)` receives the current iterate and the raw secant
    /// step and returns the iterate actually taken. Use it to keep the
    /// iteration inside the domain of `f`. Convergence is measured on the
    /// projected step, so a projection that always moves by at least the
    /// tolerance only stops at the iteration budget.
    ///
    /// Errors and the evaluation budget are those of [`find_root`](Self::find_root).
    ///
    /// # Example
    ///
    /// ```
    /// use pricer_core::math::solvers::{SecantSolver, SolverConfig};
    ///
    /// let solver = SecantSolver::new(SolverConfig::default());
    ///
    /// // √x = 0.5 is undefined for x < 0; halve instead of crossing zero.
    /// let f = |x: f64| x.sqrt() - 0.5;
    /// let keep_positive = |x: f64, x_next: f64| if x_next > 0.0 { x_next } else { 0.5 * x };
    ///
    /// assert!(solver.find_root(f, 4.0, 3.0).is_err());
    /// let root = solver.find_root_projected(f, 4.0, 3.0, keep_positive).unwrap();
    /// assert!((root - 0.25).abs() < 1e-9);
    /// ```
    pub fn find_root_projected<F, P>(
        &self,
        f: F,
        x0: T,
        x1: T,
        project: P,
    ) -> Result<T, SolverError>
    where
        F: Fn(T) -> T,
        P: Fn(T, T) -> T,
    {
        let mut x0 = x0;
        let mut x1 = x1;
        let mut f0 = evaluate(&f, x0)?;
        let mut f1 = evaluate(&f, x1)?;

        for iteration in 0..self.config.max_iterations {
            // An exact zero ends the solve with a zero-length step.
            if f1 == T::zero() {
                return Ok(x1);
            }

            let denominator = f1 - f0;
            if denominator.abs() <= T::epsilon() * f0.abs().max(f1.abs()) {
                return Err(SolverError::FlatSecant {
                    x0: to_f64(x0),
                    x1: to_f64(x1),
                });
            }

            let x_next = project(x1, x1 - f1 * (x1 - x0) / denominator);
            if !x_next.is_finite() {
                return Err(SolverError::NumericalInstability(format!(
                    "secant step from x = {} produced a non-finite iterate",
                    to_f64(x1)
                )));
            }

            if (x_next - x1).abs() < self.config.tolerance {
                return Ok(x_next);
            }

            if iteration + 1 == self.config.max_iterations {
                break;
            }

            x0 = x1;
            f0 = f1;
            x1 = x_next;
            f1 = evaluate(&f, x1)?;
        }

        Err(SolverError::MaxIterationsExceeded {
            iterations: self.config.max_iterations,
        })
    }

    /// Returns a reference to the solver configuration.
    pub fn config(&self) -> &SolverConfig<T> {
        &self.config
    }
}

#[inline]
fn evaluate<T, F>(f: &F, x: T) -> Result<T, SolverError>
where
    T: Float,
    F: Fn(T) -> T,
{
    let value = f(x);
    if value.is_finite() {
        Ok(value)
    } else {
        Err(SolverError::NonFiniteValue { x: to_f64(x) })
    }
}

#[inline]
fn to_f64<T: Float>(x: T) -> f64 {
    x.to_f64().unwrap_or(f64::NAN)
}
