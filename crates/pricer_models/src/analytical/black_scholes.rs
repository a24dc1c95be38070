//! Black-Scholes pricing model for European options.
//!
//! ## Mathematical Formulas
//!
//! **Call Price**: C = S·N(d₁) - K·e^(-rT)·N(d₂)
//! **Put Price**: P = K·e^(-rT)·N(-d₂) - S·N(-d₁)
//!
//! Where:
//! - d₁ = (ln(S/K) + (r + σ²/2)T) / (σ√T)
//! - d₂ = d₁ - σ√T
//!
//! The free functions are the bare formulas: they do not validate inputs and
//! let IEEE-754 carry σ = 0 or T = 0 through as infinities or NaN. The
//! [`BlackScholes`] model validates its parameters on construction and adds
//! the choice of [`DiscountConvention`].

use std::fmt;
use std::str::FromStr;

use super::distributions::{norm_cdf, norm_pdf};
use super::error::AnalyticalError;

/// European option payoff type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum OptionType {
    /// Right to buy at the strike.
    #[default]
    Call,
    /// Right to sell at the strike.
    Put,
}

impl FromStr for OptionType {
    type Err = AnalyticalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "call" | "c" => Ok(OptionType::Call),
            "put" | "p" => Ok(OptionType::Put),
            _ => Err(AnalyticalError::UnknownOptionType(s.to_string())),
        }
    }
}

impl fmt::Display for OptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionType::Call => write!(f, "call"),
            OptionType::Put => write!(f, "put"),
        }
    }
}

/// Which legs of the formula are discounted by e^(-rT).
///
/// `Standard` is textbook Black-Scholes: the spot is already a present value
/// and only the strike is discounted. `DiscountedSpot` also discounts the
/// spot term, i.e. C = e^(-rT)·(S·N(d₁) - K·N(d₂)).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum DiscountConvention {
    /// Only the strike is discounted.
    #[default]
    Standard,
    /// Spot and strike are both discounted.
    DiscountedSpot,
}

impl DiscountConvention {
    /// Factor applied to the spot term for a given discount factor.
    #[inline]
    fn spot_factor(self, discount: f64) -> f64 {
        match self {
            DiscountConvention::Standard => 1.0,
            DiscountConvention::DiscountedSpot => discount,
        }
    }
}

impl FromStr for DiscountConvention {
    type Err = AnalyticalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "standard" => Ok(DiscountConvention::Standard),
            "discounted-spot" | "discounted_spot" | "reference" => {
                Ok(DiscountConvention::DiscountedSpot)
            }
            _ => Err(AnalyticalError::UnknownConvention(s.to_string())),
        }
    }
}

impl fmt::Display for DiscountConvention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiscountConvention::Standard => write!(f, "standard"),
            DiscountConvention::DiscountedSpot => write!(f, "discounted-spot"),
        }
    }
}

/// d₁ = (ln(S/K) + (r + σ²/2)T) / (σ√T)
#[inline]
pub fn d1(spot: f64, strike: f64, rate: f64, expiry: f64, volatility: f64) -> f64 {
    let log_moneyness = (spot / strike).ln();
    let drift = (rate + 0.5 * volatility * volatility) * expiry;
    (log_moneyness + drift) / (volatility * expiry.sqrt())
}

/// d₂ = d₁ - σ√T
#[inline]
pub fn d2(spot: f64, strike: f64, rate: f64, expiry: f64, volatility: f64) -> f64 {
    d1(spot, strike, rate, expiry, volatility) - volatility * expiry.sqrt()
}

/// European call price, C = S·N(d₁) - K·e^(-rT)·N(d₂).
///
/// Pure and unguarded: σ = 0 or T = 0 yield a degenerate (possibly NaN)
/// price instead of an error.
///
/// # Examples
/// ```
/// use pricer_models::analytical::black_scholes::call_price;
///
/// let price = call_price(100.0, 100.0, 0.05, 1.0, 0.2);
/// assert!((price - 10.4506).abs() < 1e-4);
/// ```
#[inline]
pub fn call_price(spot: f64, strike: f64, rate: f64, expiry: f64, volatility: f64) -> f64 {
    option_price(
        OptionType::Call,
        DiscountConvention::Standard,
        spot,
        strike,
        rate,
        expiry,
        volatility,
    )
}

/// European put price, P = K·e^(-rT)·N(-d₂) - S·N(-d₁).
///
/// Unguarded like [`call_price`].
#[inline]
pub fn put_price(spot: f64, strike: f64, rate: f64, expiry: f64, volatility: f64) -> f64 {
    option_price(
        OptionType::Put,
        DiscountConvention::Standard,
        spot,
        strike,
        rate,
        expiry,
        volatility,
    )
}

/// European option price under a discount convention.
///
/// Unguarded like [`call_price`]; [`call_price`] and [`put_price`] are this
/// function with the `Standard` convention.
pub fn option_price(
    option_type: OptionType,
    convention: DiscountConvention,
    spot: f64,
    strike: f64,
    rate: f64,
    expiry: f64,
    volatility: f64,
) -> f64 {
    let d1 = d1(spot, strike, rate, expiry, volatility);
    let d2 = d1 - volatility * expiry.sqrt();
    let discount = (-rate * expiry).exp();
    let spot_term = spot * convention.spot_factor(discount);
    let strike_term = strike * discount;

    match option_type {
        OptionType::Call => spot_term * norm_cdf(d1) - strike_term * norm_cdf(d2),
        OptionType::Put => strike_term * norm_cdf(-d2) - spot_term * norm_cdf(-d1),
    }
}

/// No-arbitrage price range of a European option.
///
/// `lower` is the σ → 0 limit of the price and `upper` the σ → ∞ limit.
/// Every strictly positive volatility maps into the open interval
/// `(lower, upper)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceBounds {
    /// Price as volatility tends to zero.
    pub lower: f64,
    /// Price as volatility tends to infinity.
    pub upper: f64,
}

impl PriceBounds {
    /// Whether `price` lies strictly inside the bounds.
    #[inline]
    pub fn contains(&self, price: f64) -> bool {
        price > self.lower && price < self.upper
    }
}

/// Volatility limits of the option price under a discount convention.
///
/// | | lower | upper |
/// |---|---|---|
/// | Standard call | max(S - K·df, 0) | S |
/// | Standard put | max(K·df - S, 0) | K·df |
/// | DiscountedSpot call | df·max(S - K, 0) | df·S |
/// | DiscountedSpot put | df·max(K - S, 0) | df·K |
///
/// with df = e^(-rT).
pub fn price_bounds(
    option_type: OptionType,
    convention: DiscountConvention,
    spot: f64,
    strike: f64,
    rate: f64,
    expiry: f64,
) -> PriceBounds {
    let discount = (-rate * expiry).exp();
    let spot_term = spot * convention.spot_factor(discount);
    let strike_term = strike * discount;

    match option_type {
        OptionType::Call => PriceBounds {
            lower: (spot_term - strike_term).max(0.0),
            upper: spot_term,
        },
        OptionType::Put => PriceBounds {
            lower: (strike_term - spot_term).max(0.0),
            upper: strike_term,
        },
    }
}

/// Validates the contract terms shared by every pricing entry point.
pub fn validate_contract(strike: f64, expiry: f64) -> Result<(), AnalyticalError> {
    if !(strike.is_finite() && strike > 0.0) {
        return Err(AnalyticalError::InvalidStrike { strike });
    }
    if !(expiry.is_finite() && expiry > 0.0) {
        return Err(AnalyticalError::InvalidExpiry { expiry });
    }
    Ok(())
}

/// Black-Scholes model for European option pricing.
///
/// Holds the market state (spot, rate, volatility) and prices any strike and
/// expiry against it.
///
/// # Examples
/// ```
/// use pricer_models::analytical::BlackScholes;
///
/// let bs = BlackScholes::new(100.0, 0.05, 0.2).unwrap();
/// let call_price = bs.price_call(100.0, 1.0);
/// let put_price = bs.price_put(100.0, 1.0);
///
/// // Put-call parity: C - P = S - K*exp(-rT)
/// let parity = call_price - put_price - (100.0 - 100.0 * (-0.05_f64).exp());
/// assert!(parity.abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlackScholes {
    spot: f64,
    rate: f64,
    volatility: f64,
    convention: DiscountConvention,
}

impl BlackScholes {
    /// Creates a new Black-Scholes model with the `Standard` convention.
    ///
    /// # Errors
    /// - `AnalyticalError::InvalidSpot` if spot is not positive and finite
    /// - `AnalyticalError::InvalidRate` if rate is not finite
    /// - `AnalyticalError::InvalidVolatility` if volatility is not positive and finite
    ///
    /// # Examples
    /// ```
    /// use pricer_models::analytical::BlackScholes;
    ///
    /// assert!(BlackScholes::new(100.0, 0.05, 0.2).is_ok());
    /// assert!(BlackScholes::new(-100.0, 0.05, 0.2).is_err());
    /// assert!(BlackScholes::new(100.0, 0.05, 0.0).is_err());
    /// // Negative rates are allowed.
    /// assert!(BlackScholes::new(100.0, -0.01, 0.2).is_ok());
    /// ```
    pub fn new(spot: f64, rate: f64, volatility: f64) -> Result<Self, AnalyticalError> {
        if !(spot.is_finite() && spot > 0.0) {
            return Err(AnalyticalError::InvalidSpot { spot });
        }

        if !rate.is_finite() {
            return Err(AnalyticalError::InvalidRate { rate });
        }

        if !(volatility.is_finite() && volatility > 0.0) {
            return Err(AnalyticalError::InvalidVolatility { volatility });
        }

        Ok(Self {
            spot,
            rate,
            volatility,
            convention: DiscountConvention::Standard,
        })
    }

    /// Returns the model with a different discount convention.
    pub fn with_convention(mut self, convention: DiscountConvention) -> Self {
        self.convention = convention;
        self
    }

    /// Returns the spot price.
    #[inline]
    pub fn spot(&self) -> f64 {
        self.spot
    }

    /// Returns the risk-free rate.
    #[inline]
    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Returns the volatility.
    #[inline]
    pub fn volatility(&self) -> f64 {
        self.volatility
    }

    /// Returns the discount convention.
    #[inline]
    pub fn convention(&self) -> DiscountConvention {
        self.convention
    }

    /// The d1 term for a given strike and expiry.
    #[inline]
    pub fn d1(&self, strike: f64, expiry: f64) -> f64 {
        d1(self.spot, strike, self.rate, expiry, self.volatility)
    }

    /// The d2 term for a given strike and expiry.
    #[inline]
    pub fn d2(&self, strike: f64, expiry: f64) -> f64 {
        d2(self.spot, strike, self.rate, expiry, self.volatility)
    }

    /// European call price.
    #[inline]
    pub fn price_call(&self, strike: f64, expiry: f64) -> f64 {
        self.price(OptionType::Call, strike, expiry)
    }

    /// European put price.
    #[inline]
    pub fn price_put(&self, strike: f64, expiry: f64) -> f64 {
        self.price(OptionType::Put, strike, expiry)
    }

    /// European option price for the given payoff type.
    ///
    /// `expiry` is not validated here; see [`validate_contract`].
    pub fn price(&self, option_type: OptionType, strike: f64, expiry: f64) -> f64 {
        option_price(
            option_type,
            self.convention,
            self.spot,
            strike,
            self.rate,
            expiry,
            self.volatility,
        )
    }

    /// Vega (∂V/∂σ), identical for calls and puts.
    ///
    /// Vega = S·√T·φ(d₁), with S discounted under `DiscountedSpot`.
    pub fn vega(&self, strike: f64, expiry: f64) -> f64 {
        let discount = (-self.rate * expiry).exp();
        let spot_term = self.spot * self.convention.spot_factor(discount);
        spot_term * expiry.sqrt() * norm_pdf(self.d1(strike, expiry))
    }

    /// No-arbitrage bounds for an option on this model's spot and rate.
    pub fn bounds(&self, option_type: OptionType, strike: f64, expiry: f64) -> PriceBounds {
        price_bounds(
            option_type,
            self.convention,
            self.spot,
            strike,
            self.rate,
            expiry,
        )
    }
}
