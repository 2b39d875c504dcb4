//! Continuous distributions on the real line.
//!
//! Densities are defined for every finite point and are 0 off the support,
//! so only NaN is rejected as a [`Error::DomainViolation`].

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::distribution::{Cumulative, Distribution};
use crate::error::{Error, Result};

fn real(x: f64) -> Result<f64> {
    if x.is_nan() {
        return Err(Error::domain(x, "evaluation point is NaN"));
    }
    Ok(x)
}

/// Continuous uniform distribution on the closed interval `[a, b]`.
///
/// # Examples
///
/// ```
/// use kstats::continuous::Uniform;
/// use kstats::distribution::Distribution;
///
/// let unit = Uniform::new(0.0, 1.0).unwrap();
/// assert_eq!(unit.probability(0.5).unwrap(), 1.0);
/// assert_eq!(unit.probability(2.0).unwrap(), 0.0);
/// assert_eq!(unit.probability(-1.0).unwrap(), 0.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Uniform {
    a: f64,
    b: f64,
}

impl Uniform {
    /// Creates a uniform distribution on `[a, b]`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] if either bound is not finite,
    /// `a >= b`, or the width `b - a` overflows.
    pub fn new(a: f64, b: f64) -> Result<Self> {
        if !a.is_finite() || !b.is_finite() {
            return Err(Error::invalid_parameter(
                "Uniform",
                format!("bounds must be finite, got [{a}, {b}]"),
            ));
        }
        if a >= b {
            return Err(Error::invalid_parameter(
                "Uniform",
                format!("lower bound ({a}) must be less than upper bound ({b})"),
            ));
        }
        if !(b - a).is_finite() {
            return Err(Error::invalid_parameter(
                "Uniform",
                format!("width of [{a}, {b}] is not representable"),
            ));
        }

        trace_debug!(a, b, "constructed uniform distribution");
        Ok(Self { a, b })
    }

    /// Lower bound of the support.
    #[must_use]
    pub fn a(&self) -> f64 {
        self.a
    }

    /// Upper bound of the support.
    #[must_use]
    pub fn b(&self) -> f64 {
        self.b
    }

    fn contains(&self, x: f64) -> bool {
        self.a <= x && x <= self.b
    }
}

impl Distribution for Uniform {
    type Point = f64;

    /// `1 / (b - a)` inside `[a, b]`, 0 elsewhere.
    fn probability(&self, x: f64) -> Result<f64> {
        let x = real(x)?;
        if self.contains(x) {
            Ok(1.0 / (self.b - self.a))
        } else {
            Ok(0.0)
        }
    }

    fn expected_value(&self) -> f64 {
        (self.a + self.b) / 2.0
    }

    fn variance(&self) -> f64 {
        (self.b - self.a).powi(2) / 12.0
    }
}

impl Cumulative for Uniform {
    fn cdf(&self, x: f64) -> Result<f64> {
        let x = real(x)?;
        Ok(((x - self.a) / (self.b - self.a)).clamp(0.0, 1.0))
    }
}

/// Exponential distribution with rate `lambda`.
///
/// Density `λ·e^(-λx)` and CDF `1 - e^(-λx)` for `x >= 0`; both are 0 for
/// negative `x`.
///
/// # Examples
///
/// ```
/// use kstats::continuous::Exponential;
/// use kstats::distribution::{Cumulative, Distribution};
///
/// let wait = Exponential::new(2.0).unwrap();
/// assert_eq!(wait.probability(0.0).unwrap(), 2.0);
/// assert_eq!(wait.cdf(0.0).unwrap(), 0.0);
/// assert_eq!(wait.expected_value(), 0.5);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Exponential {
    lambda: f64,
}

impl Exponential {
    /// Creates an exponential distribution with rate `lambda`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] if `lambda` is not finite and positive.
    pub fn new(lambda: f64) -> Result<Self> {
        if !lambda.is_finite() || lambda <= 0.0 {
            return Err(Error::invalid_parameter(
                "Exponential",
                format!("rate must be finite and positive, got {lambda}"),
            ));
        }

        trace_debug!(lambda, "constructed exponential distribution");
        Ok(Self { lambda })
    }

    /// The rate parameter.
    #[must_use]
    pub fn lambda(&self) -> f64 {
        self.lambda
    }
}

impl Distribution for Exponential {
    type Point = f64;

    fn probability(&self, x: f64) -> Result<f64> {
        let x = real(x)?;
        if x < 0.0 {
            return Ok(0.0);
        }
        Ok(self.lambda * (-self.lambda * x).exp())
    }

    fn expected_value(&self) -> f64 {
        1.0 / self.lambda
    }

    fn variance(&self) -> f64 {
        1.0 / self.lambda.powi(2)
    }
}

impl Cumulative for Exponential {
    fn cdf(&self, x: f64) -> Result<f64> {
        let x = real(x)?;
        if x < 0.0 {
            return Ok(0.0);
        }
        Ok(-(-self.lambda * x).exp_m1())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform_rejects_invalid_bounds() {
        assert!(Uniform::new(1.0, 1.0).is_err());
        assert!(Uniform::new(2.0, 1.0).is_err());
        assert!(Uniform::new(f64::NEG_INFINITY, 1.0).is_err());
        assert!(Uniform::new(0.0, f64::NAN).is_err());
    }

    #[test]
    fn test_uniform_rejects_overflowing_width() {
        assert!(matches!(
            Uniform::new(-1e308, 1e308),
            Err(Error::InvalidParameter { .. })
        ));
        let wide = Uniform::new(-1e307, 1e307).unwrap();
        assert!(wide.probability(0.0).unwrap() > 0.0);
    }

    #[test]
    fn test_uniform_density_is_zero_on_both_sides() {
        let dist = Uniform::new(2.0, 6.0).unwrap();
        assert_eq!(dist.probability(4.0).unwrap(), 0.25);
        assert_eq!(dist.probability(2.0).unwrap(), 0.25);
        assert_eq!(dist.probability(6.0).unwrap(), 0.25);
        assert_eq!(dist.probability(1.999).unwrap(), 0.0);
        assert_eq!(dist.probability(6.001).unwrap(), 0.0);
        assert_eq!(dist.probability(f64::INFINITY).unwrap(), 0.0);
    }

    #[test]
    fn test_uniform_moments() {
        let dist = Uniform::new(2.0, 6.0).unwrap();
        assert_eq!(dist.expected_value(), 4.0);
        assert!((dist.variance() - 16.0 / 12.0).abs() < 1e-15);
    }

    #[test]
    fn test_uniform_cdf_clamps() {
        let dist = Uniform::new(0.0, 4.0).unwrap();
        assert_eq!(dist.cdf(-1.0).unwrap(), 0.0);
        assert_eq!(dist.cdf(1.0).unwrap(), 0.25);
        assert_eq!(dist.cdf(9.0).unwrap(), 1.0);
    }

    #[test]
    fn test_nan_is_a_domain_violation() {
        let uniform = Uniform::new(0.0, 1.0).unwrap();
        let exponential = Exponential::new(1.0).unwrap();
        assert!(matches!(
            uniform.probability(f64::NAN),
            Err(Error::DomainViolation { .. })
        ));
        assert!(exponential.probability(f64::NAN).is_err());
        assert!(exponential.cdf(f64::NAN).is_err());
    }

    #[test]
    fn test_exponential_rejects_invalid_rate() {
        assert!(Exponential::new(0.0).is_err());
        assert!(Exponential::new(-1.0).is_err());
        assert!(Exponential::new(f64::NAN).is_err());
    }

    #[test]
    fn test_exponential_density() {
        let dist = Exponential::new(0.5).unwrap();
        assert_eq!(dist.probability(-3.0).unwrap(), 0.0);
        assert_eq!(dist.probability(0.0).unwrap(), 0.5);
        assert!((dist.probability(2.0).unwrap() - 0.5 * (-1.0f64).exp()).abs() < 1e-15);
    }

    #[test]
    fn test_exponential_cdf_limits() {
        let dist = Exponential::new(1.0).unwrap();
        assert_eq!(dist.cdf(-5.0).unwrap(), 0.0);
        assert_eq!(dist.cdf(0.0).unwrap(), 0.0);
        assert!(dist.cdf(20.0).unwrap() > 0.999_999_9);
        assert!((dist.cdf(1.0).unwrap() - (1.0 - (-1.0f64).exp())).abs() < 1e-15);
    }

    #[test]
    fn test_exponential_moments_use_rate() {
        let dist = Exponential::new(4.0).unwrap();
        assert_eq!(dist.expected_value(), 0.25);
        assert_eq!(dist.variance(), 0.0625);
        assert_eq!(dist.std_dev(), 0.25);
    }
}
