//! Capability traits shared by every distribution.

use crate::error::Result;

/// A probability distribution exposing a point evaluator and its first two moments.
///
/// Discrete distributions use `Point = i64` and return a probability mass;
/// continuous distributions use `Point = f64` and return a density.
/// Parameters are validated once at construction, so the moment methods
/// are infallible.
///
/// # Implementing a custom distribution
///
/// ```
/// use kstats::Result;
/// use kstats::distribution::Distribution;
///
/// /// A fair six-sided die.
/// struct Die;
///
/// impl Distribution for Die {
///     type Point = i64;
///
///     fn probability(&self, x: i64) -> Result<f64> {
///         Ok(if (1..=6).contains(&x) { 1.0 / 6.0 } else { 0.0 })
///     }
///
///     fn expected_value(&self) -> f64 {
///         3.5
///     }
///
///     fn variance(&self) -> f64 {
///         35.0 / 12.0
///     }
/// }
///
/// assert!((Die.probability(3).unwrap() - 1.0 / 6.0).abs() < 1e-15);
/// ```
pub trait Distribution {
    /// The type of point the distribution is evaluated at.
    type Point: Copy;

    /// Probability mass (discrete) or density (continuous) at `x`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DomainViolation`](crate::Error::DomainViolation) if `x`
    /// is outside the distribution's natural domain.
    fn probability(&self, x: Self::Point) -> Result<f64>;

    /// The closed-form mean.
    fn expected_value(&self) -> f64;

    /// The closed-form variance.
    fn variance(&self) -> f64;

    /// The standard deviation, `sqrt(variance)`.
    fn std_dev(&self) -> f64 {
        self.variance().sqrt()
    }
}

/// Distributions that can also evaluate their cumulative distribution function.
pub trait Cumulative: Distribution {
    /// Probability that the random variable is less than or equal to `x`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DomainViolation`](crate::Error::DomainViolation) if `x`
    /// is outside the distribution's natural domain.
    fn cdf(&self, x: Self::Point) -> Result<f64>;
}
