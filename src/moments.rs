//! Generic moments of discrete distributions by truncated summation.
//!
//! Given only a probability-mass evaluator and a caller-chosen inclusive
//! support `[low, high]`, the engine computes
//!
//! - expected value: `sum_{x=low}^{high} x·f(x)`
//! - variance: `sum_{x=low}^{high} (x - mean)²·f(x)`
//!
//! The engine knows nothing about the true support of the distribution.
//! For unbounded supports (e.g. Poisson) the caller must pick a range wide
//! enough that the omitted tail mass is negligible; there is no adaptive
//! extension, convergence check, or error bound. Each call is O(high - low).
//!
//! # Example
//!
//! ```
//! use kstats::discrete::Poisson;
//! use kstats::moments::{MomentEngine, Summation};
//!
//! let engine = MomentEngine::builder()
//!     .support(0, 60)
//!     .summation(Summation::Compensated)
//!     .build()
//!     .unwrap();
//!
//! // The tail beyond 60 is below 1e-40 for λ = 3.
//! let mean = engine.expected_value_of(&Poisson::new(3.0).unwrap()).unwrap();
//! assert!((mean - 3.0).abs() < 1e-12);
//! ```

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::distribution::Distribution;
use crate::error::{Error, Result};

/// How the terms of a truncated sum are accumulated.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Summation {
    /// Plain left-to-right floating-point addition.
    #[default]
    Naive,
    /// Kahan compensated summation; error stays O(ε) regardless of range width.
    Compensated,
}

struct Accumulator {
    summation: Summation,
    sum: f64,
    compensation: f64,
}

impl Accumulator {
    fn new(summation: Summation) -> Self {
        Self {
            summation,
            sum: 0.0,
            compensation: 0.0,
        }
    }

    fn add(&mut self, value: f64) {
        match self.summation {
            Summation::Naive => self.sum += value,
            Summation::Compensated => {
                let y = value - self.compensation;
                let t = self.sum + y;
                self.compensation = (t - self.sum) - y;
                self.sum = t;
            }
        }
    }

    fn total(&self) -> f64 {
        self.sum
    }
}

/// Computes moments of a discrete distribution over a fixed inclusive support.
///
/// Created via [`MomentEngine::new`] or [`MomentEngine::builder`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MomentEngine {
    low: i64,
    high: i64,
    summation: Summation,
}

impl MomentEngine {
    /// Creates an engine over `[low, high]` with [`Summation::Naive`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRange`] if `low > high`.
    pub fn new(low: i64, high: i64) -> Result<Self> {
        Self::builder().support(low, high).build()
    }

    /// Returns a builder with support `[0, 0]` and [`Summation::Naive`].
    #[must_use]
    pub fn builder() -> MomentEngineBuilder {
        MomentEngineBuilder::default()
    }

    /// Lower bound of the summation range (inclusive).
    #[must_use]
    pub fn low(&self) -> i64 {
        self.low
    }

    /// Upper bound of the summation range (inclusive).
    #[must_use]
    pub fn high(&self) -> i64 {
        self.high
    }

    /// The configured summation strategy.
    #[must_use]
    pub fn summation(&self) -> Summation {
        self.summation
    }

    /// Number of points in the support, saturating at `u64::MAX` for the
    /// full `i64` range.
    #[must_use]
    pub fn terms(&self) -> u64 {
        self.high.abs_diff(self.low).saturating_add(1)
    }

    fn sum<F>(&self, mut term: F) -> Result<f64>
    where
        F: FnMut(i64) -> Result<f64>,
    {
        trace_debug!(
            low = self.low,
            high = self.high,
            terms = self.terms(),
            summation = ?self.summation,
            "summing over truncated support"
        );

        let mut acc = Accumulator::new(self.summation);
        for x in self.low..=self.high {
            acc.add(term(x)?);
        }
        trace_info!(
            terms = self.terms(),
            total = acc.total(),
            "truncated summation finished"
        );
        Ok(acc.total())
    }

    /// Total probability mass inside the support, `sum f(x)`.
    ///
    /// Useful to check how much mass a truncation drops.
    ///
    /// # Errors
    ///
    /// Propagates any error returned by `f`.
    pub fn total_probability<F>(&self, f: F) -> Result<f64>
    where
        F: FnMut(i64) -> Result<f64>,
    {
        self.sum(f)
    }

    /// Expected value `sum x·f(x)` over the support.
    ///
    /// # Errors
    ///
    /// Propagates any error returned by `f`.
    #[allow(clippy::cast_precision_loss)]
    pub fn expected_value<F>(&self, mut f: F) -> Result<f64>
    where
        F: FnMut(i64) -> Result<f64>,
    {
        self.sum(|x| Ok(x as f64 * f(x)?))
    }

    /// Variance `sum (x - mean)²·f(x)` where `mean` is [`expected_value`](Self::expected_value)
    /// over the same support.
    ///
    /// # Errors
    ///
    /// Propagates any error returned by `f`.
    #[allow(clippy::cast_precision_loss)]
    pub fn variance<F>(&self, mut f: F) -> Result<f64>
    where
        F: FnMut(i64) -> Result<f64>,
    {
        let mean = self.expected_value(&mut f)?;
        self.sum(|x| {
            let deviation = x as f64 - mean;
            Ok(deviation * deviation * f(x)?)
        })
    }

    /// [`expected_value`](Self::expected_value) of a discrete distribution's mass function.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DomainViolation`] if the support reaches outside the
    /// distribution's domain (e.g. negative counts).
    pub fn expected_value_of<D>(&self, dist: &D) -> Result<f64>
    where
        D: Distribution<Point = i64> + ?Sized,
    {
        self.expected_value(|x| dist.probability(x))
    }

    /// [`variance`](Self::variance) of a discrete distribution's mass function.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DomainViolation`] if the support reaches outside the
    /// distribution's domain (e.g. negative counts).
    pub fn variance_of<D>(&self, dist: &D) -> Result<f64>
    where
        D: Distribution<Point = i64> + ?Sized,
    {
        self.variance(|x| dist.probability(x))
    }
}

/// Builder for [`MomentEngine`].
#[derive(Clone, Copy, Debug, Default)]
pub struct MomentEngineBuilder {
    low: i64,
    high: i64,
    summation: Summation,
}

impl MomentEngineBuilder {
    /// Sets the inclusive summation range.
    #[must_use]
    pub fn support(mut self, low: i64, high: i64) -> Self {
        self.low = low;
        self.high = high;
        self
    }

    /// Sets the summation strategy.
    #[must_use]
    pub fn summation(mut self, summation: Summation) -> Self {
        self.summation = summation;
        self
    }

    /// Builds the engine.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRange`] if `low > high`.
    pub fn build(self) -> Result<MomentEngine> {
        if self.low > self.high {
            return Err(Error::InvalidRange {
                low: self.low,
                high: self.high,
            });
        }
        Ok(MomentEngine {
            low: self.low,
            high: self.high,
            summation: self.summation,
        })
    }
}

/// `sum_{x=low}^{high} x·f(x)` for any probability-mass evaluator `f`.
///
/// Truncation error for unbounded supports is the caller's responsibility.
///
/// # Errors
///
/// Returns [`Error::InvalidRange`] if `low > high`, and propagates any error
/// returned by `f`.
///
/// # Examples
///
/// ```
/// use kstats::discrete::Binomial;
/// use kstats::distribution::Distribution;
/// use kstats::moments::discrete_expected_value;
///
/// let dist = Binomial::new(10, 0.3).unwrap();
/// let mean = discrete_expected_value(0, 10, |k| dist.probability(k)).unwrap();
/// assert!((mean - dist.expected_value()).abs() < 1e-12);
/// ```
pub fn discrete_expected_value<F>(low: i64, high: i64, f: F) -> Result<f64>
where
    F: FnMut(i64) -> Result<f64>,
{
    MomentEngine::new(low, high)?.expected_value(f)
}

/// `sum_{x=low}^{high} (x - mean)²·f(x)`, with `mean` from [`discrete_expected_value`]
/// over the same range.
///
/// # Errors
///
/// Returns [`Error::InvalidRange`] if `low > high`, and propagates any error
/// returned by `f`.
pub fn discrete_variance<F>(low: i64, high: i64, f: F) -> Result<f64>
where
    F: FnMut(i64) -> Result<f64>,
{
    MomentEngine::new(low, high)?.variance(f)
}

/// `sum_{x=low}^{high} f(x)`: the mass captured by a truncated support.
///
/// # Errors
///
/// Returns [`Error::InvalidRange`] if `low > high`, and propagates any error
/// returned by `f`.
pub fn discrete_total_probability<F>(low: i64, high: i64, f: F) -> Result<f64>
where
    F: FnMut(i64) -> Result<f64>,
{
    MomentEngine::new(low, high)?.total_probability(f)
}
