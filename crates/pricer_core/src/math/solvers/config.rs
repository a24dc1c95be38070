//! Solver configuration types.

use num_traits::Float;

use crate::types::SolverError;

/// Configuration for root-finding algorithms.
///
/// Holds the convergence tolerance and the iteration budget shared by the
/// solvers in this module.
///
/// For the secant solver the tolerance bounds the absolute distance between
/// two successive iterates, not the residual `|f(x)|`.
///
/// # Type Parameters
///
/// * `T` - Floating-point type for tolerance (e.g., `f64`)
///
/// # Example
///
/// ```
/// use pricer_core::math::solvers::SolverConfig;
///
/// let config: SolverConfig<f64> = SolverConfig::default();
/// assert!(config.tolerance < 1e-8);
/// assert_eq!(config.max_iterations, 100);
///
/// let custom = SolverConfig {
///     tolerance: 1e-6,
///     max_iterations: 1000,
/// };
/// assert!(custom.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolverConfig<T: Float> {
    /// Convergence tolerance on the step between successive iterates.
    pub tolerance: T,

    /// Maximum number of solver steps before giving up with
    /// `SolverError::MaxIterationsExceeded`.
    pub max_iterations: usize,
}

impl<T: Float> Default for SolverConfig<T> {
    /// Default values: `tolerance = 1e-10`, `max_iterations = 100`.
    fn default() -> Self {
        Self {
            tolerance: T::from(1e-10).unwrap_or_else(T::epsilon),
            max_iterations: 100,
        }
    }
}

impl<T: Float> SolverConfig<T> {
    /// Create a new configuration with specified values.
    ///
    /// # Panics
    ///
    /// Panics if `tolerance <= 0` or `max_iterations == 0`. Use
    /// [`SolverConfig::try_new`] to get an error instead.
    ///
    /// # Example
    ///
    /// ```
    /// use pricer_core::math::solvers::SolverConfig;
    ///
    /// let config = SolverConfig::new(1e-6, 1000);
    /// assert_eq!(config.max_iterations, 1000);
    /// ```
    pub fn new(tolerance: T, max_iterations: usize) -> Self {
        assert!(tolerance > T::zero(), "tolerance must be positive");
        assert!(max_iterations > 0, "max_iterations must be > 0");
        Self {
            tolerance,
            max_iterations,
        }
    }

    /// Fallible counterpart of [`SolverConfig::new`].
    pub fn try_new(tolerance: T, max_iterations: usize) -> Result<Self, SolverError> {
        let config = Self {
            tolerance,
            max_iterations,
        };
        config.validate()?;
        Ok(config)
    }

    /// Check that the tolerance is positive and finite and that at least one
    /// iteration is allowed.
    pub fn validate(&self) -> Result<(), SolverError> {
        if self.tolerance <= T::zero() || !self.tolerance.is_finite() {
            return Err(SolverError::InvalidConfiguration(format!(
                "tolerance must be positive and finite, got {}",
                self.tolerance.to_f64().unwrap_or(f64::NAN)
            )));
        }
        if self.max_iterations == 0 {
            return Err(SolverError::InvalidConfiguration(
                "max_iterations must be > 0".to_string(),
            ));
        }
        Ok(())
    }

    /// Tight tolerance (1e-14) with a larger budget (500 iterations).
    pub fn high_precision() -> Self {
        Self {
            tolerance: T::from(1e-14).unwrap_or_else(T::epsilon),
            max_iterations: 500,
        }
    }

    /// Relaxed tolerance (1e-6) with a small budget (50 iterations).
    pub fn fast() -> Self {
        Self {
            tolerance: T::from(1e-6).unwrap_or_else(T::epsilon),
            max_iterations: 50,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config: SolverConfig<f64> = SolverConfig::default();
        assert!((config.tolerance - 1e-10).abs() < 1e-15);
        assert_eq!(config.max_iterations, 100);
    }

    #[test]
    fn test_new_config() {
        let config: SolverConfig<f64> = SolverConfig::new(1e-6, 1000);
        assert!((config.tolerance - 1e-6).abs() < 1e-17);
        assert_eq!(config.max_iterations, 1000);
    }

    #[test]
    #[should_panic(expected = "tolerance must be positive")]
    fn test_new_config_zero_tolerance_panics() {
        let _: SolverConfig<f64> = SolverConfig::new(0.0, 100);
    }

    #[test]
    #[should_panic(expected = "max_iterations must be > 0")]
    fn test_new_config_zero_iterations_panics() {
        let _: SolverConfig<f64> = SolverConfig::new(1e-10, 0);
    }

    #[test]
    fn test_try_new_rejects_invalid_values() {
        assert!(SolverConfig::<f64>::try_new(1e-8, 10).is_ok());
        assert!(matches!(
            SolverConfig::<f64>::try_new(-1e-8, 10),
            Err(SolverError::InvalidConfiguration(_))
        ));
        assert!(matches!(
            SolverConfig::<f64>::try_new(f64::NAN, 10),
            Err(SolverError::InvalidConfiguration(_))
        ));
        assert!(matches!(
            SolverConfig::<f64>::try_new(f64::INFINITY, 10),
            Err(SolverError::InvalidConfiguration(_))
        ));
        assert!(matches!(
            SolverConfig::<f64>::try_new(1e-8, 0),
            Err(SolverError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_presets() {
        let precise: SolverConfig<f64> = SolverConfig::high_precision();
        assert!(precise.tolerance < 1e-12);
        assert_eq!(precise.max_iterations, 500);

        let fast: SolverConfig<f64> = SolverConfig::fast();
        assert!(fast.tolerance > 1e-8);
        assert_eq!(fast.max_iterations, 50);
    }

    #[test]
    fn test_config_with_f32() {
        let config: SolverConfig<f32> = SolverConfig::default();
        assert!(config.tolerance > 0.0);
        assert!(config.validate().is_ok());
    }
}
