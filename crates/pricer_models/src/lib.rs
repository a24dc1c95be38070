//! # Pricer Models (L2: Business Logic)
//!
//! Closed-form option pricing and its inversion.
//!
//! This crate provides:
//! - Standard normal distribution functions
//! - Black-Scholes pricing of European calls and puts under two discount
//!   conventions, with vega and no-arbitrage bounds
//! - Implied volatility by secant inversion of the pricer
//!
//! ## Design Principles
//!
//! - **Pure pricer**: the formulas never fail; IEEE-754 carries degenerate inputs
//! - **Validation at the boundary**: the implied volatility API checks its
//!   inputs before the solver runs
//! - **Tagged outcomes**: every failure is an `ImpliedVolError`, never a NaN
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialisation for `OptionType` and `DiscountConvention`

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod analytical;
