//! Standard normal distribution primitives.
//!
//! The CDF is evaluated through its closed-form relationship with the
//! error function, `N(x) = ½·(1 + erf(x/√2)) = ½·erfc(-x/√2)`. The `erfc`
//! form from `statrs` avoids cancellation in the left tail, so deep
//! out-of-the-money prices keep full relative precision.

use statrs::function::erf::erfc;
use std::f64::consts::{PI, SQRT_2};

/// Standard normal cumulative distribution function (CDF).
///
/// Calculates P(Z ≤ x) where Z is a standard normal random variable.
/// Underflows to exactly 0 below about x = -38 and rounds to 1 above about x = 8.3.
///
/// # Arguments
/// - `x`: Input value
///
/// # Returns
/// Probability that a standard normal variable is less than or equal to x
#[must_use]
pub fn norm_cdf(x: f64) -> f64 {
    0.5 * erfc(-x / SQRT_2)
}

/// Standard normal probability density function (PDF).
///
/// # Arguments
/// - `x`: Input value
///
/// # Returns
/// Density value at x
#[must_use]
pub fn norm_pdf(x: f64) -> f64 {
    (-0.5 * x * x).exp() / (2.0 * PI).sqrt()
}
