//! Implied volatility by secant inversion of Black-Scholes.
//!
//! The solve is split into three layers:
//! 1. [`price_difference`] builds the objective σ ↦ price(σ) - market price
//! 2. [`SecantSolver`] finds its root from the seeds (σ₀, 1.1·σ₀), with every
//!    step bounded by [`bound_volatility_step`]
//! 3. [`ImpliedVolSolver::solve`] validates inputs and classifies the outcome
//!
//! ## Example
//!
//! ```
//! use pricer_models::analytical::implied_vol::implied_volatility;
//! use pricer_models::analytical::black_scholes::call_price;
//!
//! let market_price = call_price(100.0, 100.0, 0.05, 1.0, 0.25);
//! let sigma = implied_volatility(100.0, 100.0, 0.05, 1.0, market_price, 0.2).unwrap();
//! assert!((sigma - 0.25).abs() < 1e-6);
//! ```

use pricer_core::math::solvers::{SecantSolver, SolverConfig, DEFAULT_SEED_BUMP};
use pricer_core::types::SolverError;
use tracing::{debug, warn};

use super::black_scholes::{option_price, price_bounds, DiscountConvention, OptionType};
use super::error::{AnalyticalError, ImpliedVolError};

/// Step size below which the secant iteration is considered converged.
pub const IMPLIED_VOL_TOLERANCE: f64 = 1.0e-6;

/// Maximum number of secant steps per solve.
pub const IMPLIED_VOL_MAX_ITERATIONS: usize = 1000;

/// Ratio between the second and first secant seeds.
pub const SECANT_SEED_BUMP: f64 = DEFAULT_SEED_BUMP;

/// Largest factor by which a single secant step may scale σ.
pub const MAX_STEP_RATIO: f64 = 2.0;

/// Objective of the inversion: model price at σ minus the market price.
///
/// All inputs except σ are captured. Non-positive or non-finite σ lies
/// outside the model and maps to NaN; [`bound_volatility_step`] keeps the
/// secant iterates away from it.
pub fn price_difference(
    option_type: OptionType,
    convention: DiscountConvention,
    spot: f64,
    strike: f64,
    rate: f64,
    expiry: f64,
    market_price: f64,
) -> impl Fn(f64) -> f64 {
    move |volatility: f64| {
        if volatility <= 0.0 || !volatility.is_finite() {
            return f64::NAN;
        }
        option_price(option_type, convention, spot, strike, rate, expiry, volatility)
            - market_price
    }
}

/// Limits a secant step from `volatility` to `next` to the band
/// `[volatility / MAX_STEP_RATIO, volatility · MAX_STEP_RATIO]`.
///
/// A step to σ ≤ 0 is pulled back to `volatility / 2`, and a step onto the
/// flat wings of the price curve is cut short. Non-finite steps pass through.
///
/// ```
/// use pricer_models::analytical::implied_vol::bound_volatility_step;
///
/// assert_eq!(bound_volatility_step(0.4, -0.3), 0.2);
/// assert_eq!(bound_volatility_step(0.4, 25.0), 0.8);
/// assert_eq!(bound_volatility_step(0.4, 0.35), 0.35);
/// ```
pub fn bound_volatility_step(volatility: f64, next: f64) -> f64 {
    if !next.is_finite() {
        return next;
    }
    next.max(volatility / MAX_STEP_RATIO).min(volatility * MAX_STEP_RATIO)
}

/// Implied volatility of a European call under the `Standard` convention.
///
/// Uses [`IMPLIED_VOL_TOLERANCE`] and [`IMPLIED_VOL_MAX_ITERATIONS`].
///
/// # Errors
/// See [`ImpliedVolSolver::solve`].
pub fn implied_volatility(
    spot: f64,
    strike: f64,
    rate: f64,
    expiry: f64,
    market_price: f64,
    initial_guess: f64,
) -> Result<f64, ImpliedVolError> {
    ImpliedVolSolver::new().solve(spot, strike, rate, expiry, market_price, initial_guess)
}

/// Configurable implied volatility solver.
///
/// # Examples
/// ```
/// use pricer_models::analytical::{DiscountConvention, ImpliedVolSolver, OptionType};
///
/// let solver = ImpliedVolSolver::new()
///     .option_type(OptionType::Put)
///     .convention(DiscountConvention::Standard);
///
/// let sigma = solver.solve(100.0, 100.0, 0.05, 1.0, 5.573526022256971, 0.3).unwrap();
/// assert!((sigma - 0.2).abs() < 1e-6);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ImpliedVolSolver {
    config: SolverConfig<f64>,
    option_type: OptionType,
    convention: DiscountConvention,
}

impl Default for ImpliedVolSolver {
    fn default() -> Self {
        Self::new()
    }
}

impl ImpliedVolSolver {
    /// Solver for calls under the `Standard` convention with the fixed
    /// tolerance and iteration budget.
    pub fn new() -> Self {
        Self::with_config(SolverConfig::new(
            IMPLIED_VOL_TOLERANCE,
            IMPLIED_VOL_MAX_ITERATIONS,
        ))
    }

    /// Solver with a custom secant configuration.
    pub fn with_config(config: SolverConfig<f64>) -> Self {
        Self {
            config,
            option_type: OptionType::default(),
            convention: DiscountConvention::default(),
        }
    }

    /// Sets the payoff being inverted.
    pub fn option_type(mut self, option_type: OptionType) -> Self {
        self.option_type = option_type;
        self
    }

    /// Sets the discount convention of the pricing formula.
    pub fn convention(mut self, convention: DiscountConvention) -> Self {
        self.convention = convention;
        self
    }

    /// Returns the secant configuration.
    pub fn config(&self) -> &SolverConfig<f64> {
        &self.config
    }

    /// Solves for the volatility that reproduces `market_price`.
    ///
    /// # Errors
    /// - `InvalidInput` if spot, strike or expiry is not positive and finite,
    ///   or rate is not finite
    /// - `InvalidMarketPrice` / `InvalidInitialGuess` for non-positive or
    ///   non-finite values
    /// - `PriceOutOfBounds` if no volatility can produce `market_price`
    /// - `NotConverged` if the secant budget runs out
    /// - `NonPositiveVolatility` if the iteration settles on σ ≤ 0
    /// - `Solver` for a flat secant or a non-finite iterate or objective value
    pub fn solve(
        &self,
        spot: f64,
        strike: f64,
        rate: f64,
        expiry: f64,
        market_price: f64,
        initial_guess: f64,
    ) -> Result<f64, ImpliedVolError> {
        validate_inputs(spot, strike, rate, expiry, market_price, initial_guess)?;

        let bounds = price_bounds(
            self.option_type,
            self.convention,
            spot,
            strike,
            rate,
            expiry,
        );
        if !bounds.contains(market_price) {
            return Err(ImpliedVolError::PriceOutOfBounds {
                price: market_price,
                lower: bounds.lower,
                upper: bounds.upper,
            });
        }

        let objective = price_difference(
            self.option_type,
            self.convention,
            spot,
            strike,
            rate,
            expiry,
            market_price,
        );
        let solver = SecantSolver::new(self.config);

        let outcome = solver.find_root_projected(
            objective,
            initial_guess,
            initial_guess * SECANT_SEED_BUMP,
            bound_volatility_step,
        );

        match outcome {
            Ok(volatility) if volatility > 0.0 => {
                debug!(
                    volatility,
                    option_type = %self.option_type,
                    convention = %self.convention,
                    "implied volatility converged"
                );
                Ok(volatility)
            }
            Ok(volatility) => {
                warn!(volatility, "implied volatility converged to a non-positive value");
                Err(ImpliedVolError::NonPositiveVolatility { volatility })
            }
            Err(err @ SolverError::MaxIterationsExceeded { .. }) => {
                let err = ImpliedVolError::from(err);
                warn!("{}", err);
                Err(err)
            }
            Err(err) => {
                warn!(error = %err, initial_guess, "implied volatility solve failed");
                Err(err.into())
            }
        }
    }
}

fn validate_inputs(
    spot: f64,
    strike: f64,
    rate: f64,
    expiry: f64,
    market_price: f64,
    initial_guess: f64,
) -> Result<(), ImpliedVolError> {
    if !(spot.is_finite() && spot > 0.0) {
        return Err(AnalyticalError::InvalidSpot { spot }.into());
    }
    super::black_scholes::validate_contract(strike, expiry)?;
    if !rate.is_finite() {
        return Err(AnalyticalError::InvalidRate { rate }.into());
    }
    if !(market_price.is_finite() && market_price > 0.0) {
        return Err(ImpliedVolError::InvalidMarketPrice {
            price: market_price,
        });
    }
    if !(initial_guess.is_finite() && initial_guess > 0.0) {
        return Err(ImpliedVolError::InvalidInitialGuess {
            guess: initial_guess,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytical::black_scholes::call_price;
    use approx::assert_relative_eq;

    #[test]
    fn test_recovers_reference_volatility() {
        let sigma = implied_volatility(100.0, 100.0, 0.05, 1.0, 10.450583572185565, 0.2).unwrap();
        assert_relative_eq!(sigma, 0.2, epsilon = 1e-8);
    }

    #[test]
    fn test_documented_scenario_both_conventions() {
        let standard = implied_volatility(100.0, 100.0, 0.05, 1.0, 5.0, 0.2).unwrap();
        assert_relative_eq!(standard, 0.0353848, epsilon = 1e-4);

        let discounted = ImpliedVolSolver::new()
            .convention(DiscountConvention::DiscountedSpot)
            .solve(100.0, 100.0, 0.05, 1.0, 5.0, 0.2)
            .unwrap();
        assert_relative_eq!(discounted, 0.1404743, epsilon = 1e-4);
    }

    #[test]
    fn test_price_difference_rejects_non_positive_volatility() {
        let f = price_difference(
            OptionType::Call,
            DiscountConvention::Standard,
            100.0,
            100.0,
            0.05,
            1.0,
            5.0,
        );
        assert!(f(0.0).is_nan());
        assert!(f(-0.2).is_nan());
        assert!(f(f64::INFINITY).is_nan());
        assert_relative_eq!(f(0.2), 10.450583572185565 - 5.0, epsilon = 1e-12);
    }

    #[test]
    fn test_invalid_inputs() {
        assert!(matches!(
            implied_volatility(-100.0, 100.0, 0.05, 1.0, 5.0, 0.2),
            Err(ImpliedVolError::InvalidInput(AnalyticalError::InvalidSpot { .. }))
        ));
        assert!(matches!(
            implied_volatility(100.0, 0.0, 0.05, 1.0, 5.0, 0.2),
            Err(ImpliedVolError::InvalidInput(AnalyticalError::InvalidStrike { .. }))
        ));
        assert!(matches!(
            implied_volatility(100.0, 100.0, 0.05, 0.0, 5.0, 0.2),
            Err(ImpliedVolError::InvalidInput(AnalyticalError::InvalidExpiry { .. }))
        ));
        assert!(matches!(
            implied_volatility(100.0, 100.0, f64::NAN, 1.0, 5.0, 0.2),
            Err(ImpliedVolError::InvalidInput(AnalyticalError::InvalidRate { .. }))
        ));
        assert_eq!(
            implied_volatility(100.0, 100.0, 0.05, 1.0, -5.0, 0.2),
            Err(ImpliedVolError::InvalidMarketPrice { price: -5.0 })
        );
        assert_eq!(
            implied_volatility(100.0, 100.0, 0.05, 1.0, 5.0, 0.0),
            Err(ImpliedVolError::InvalidInitialGuess { guess: 0.0 })
        );
    }

    #[test]
    fn test_price_above_spot_is_out_of_bounds() {
        match implied_volatility(100.0, 100.0, 0.05, 1.0, 150.0, 0.2) {
            Err(ImpliedVolError::PriceOutOfBounds { price, lower, upper }) => {
                assert_eq!(price, 150.0);
                assert_relative_eq!(lower, 4.877057549928594, epsilon = 1e-12);
                assert_eq!(upper, 100.0);
            }
            other => panic!("Expected PriceOutOfBounds, got {:?}", other),
        }
    }

    #[test]
    fn test_price_below_intrinsic_is_out_of_bounds() {
        let result = implied_volatility(100.0, 100.0, 0.05, 1.0, 4.0, 0.2);
        assert!(matches!(result, Err(ImpliedVolError::PriceOutOfBounds { .. })));
    }

    #[test]
    fn test_step_below_zero_is_pulled_back() {
        // From σ₀ = 2 the raw secant step lands below zero.
        let sigma = implied_volatility(100.0, 100.0, 0.05, 1.0, 5.0, 2.0).unwrap();
        assert_relative_eq!(sigma, 0.0353848, epsilon = 1e-4);
    }

    #[test]
    fn test_distant_guesses_converge() {
        // (strike, σ, guess)
        let cases = [(100.0, 0.059, 1.0), (100.0, 0.255, 1.5), (150.0, 2.0, 0.2)];

        for (strike, sigma, guess) in cases {
            let market_price = call_price(100.0, strike, 0.05, 1.0, sigma);
            let recovered =
                implied_volatility(100.0, strike, 0.05, 1.0, market_price, guess).unwrap();
            assert_relative_eq!(recovered, sigma, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_bound_volatility_step() {
        assert_eq!(bound_volatility_step(1.0, 0.0), 0.5);
        assert_eq!(bound_volatility_step(1.0, -3.0), 0.5);
        assert_eq!(bound_volatility_step(1.0, 14073.0), 2.0);
        assert_eq!(bound_volatility_step(1.0, 1.7), 1.7);
        assert!(bound_volatility_step(1.0, f64::NAN).is_nan());
        assert_eq!(bound_volatility_step(1.0, f64::INFINITY), f64::INFINITY);
    }

    #[test]
    fn test_iteration_budget_exhausted() {
        let solver = ImpliedVolSolver::with_config(SolverConfig::new(1e-300, 3));
        let err = solver.solve(100.0, 100.0, 0.05, 1.0, 5.0, 0.2).unwrap_err();
        assert_eq!(err, ImpliedVolError::NotConverged { iterations: 3 });
        assert_eq!(
            err.to_string(),
            "Failed to converge to the required tolerance within max iterations."
        );
    }

    #[test]
    fn test_default_solver_settings() {
        let solver = ImpliedVolSolver::default();
        assert_eq!(solver.config().tolerance, IMPLIED_VOL_TOLERANCE);
        assert_eq!(solver.config().max_iterations, IMPLIED_VOL_MAX_ITERATIONS);
        assert_eq!(SECANT_SEED_BUMP, 1.1);
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig::with_cases(300))]

            #[test]
            fn test_round_trip(
                sigma in 0.05f64..3.0,
                strike in 80.0f64..120.0,
                guess in 0.05f64..1.5,
            ) {
                let market_price = call_price(100.0, strike, 0.05, 1.0, sigma);
                let recovered =
                    implied_volatility(100.0, strike, 0.05, 1.0, market_price, guess).unwrap();
                prop_assert!(
                    (recovered - sigma).abs() < 1e-4,
                    "K={} σ₀={} σ={} recovered {}",
                    strike,
                    guess,
                    sigma,
                    recovered
                );
            }

            #[test]
            fn test_negative_or_excessive_price_fails(
                price in prop_oneof![-50.0f64..0.0, 100.0f64..500.0],
            ) {
                prop_assert!(implied_volatility(100.0, 100.0, 0.05, 1.0, price, 0.2).is_err());
            }
        }
    }
}
