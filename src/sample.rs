//! Descriptive statistics over finite samples.
//!
//! These are plain reductions over slices. Functions that divide by a
//! degrees-of-freedom term take an [`Estimator`] choosing between the
//! unbiased sample divisor `n - 1` and the population divisor `n`.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Divisor used by variance-like statistics.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Estimator {
    /// Bessel-corrected, divides by `n - 1`.
    #[default]
    Sample,
    /// Divides by `n`.
    Population,
}

impl Estimator {
    fn min_len(self) -> usize {
        match self {
            Estimator::Sample => 2,
            Estimator::Population => 1,
        }
    }

    #[allow(clippy::cast_precision_loss)]
    fn divisor(self, n: usize) -> f64 {
        match self {
            Estimator::Sample => (n - 1) as f64,
            Estimator::Population => n as f64,
        }
    }

    fn check(self, n: usize) -> Result<()> {
        if n == 0 {
            return Err(Error::EmptySample);
        }
        if n < self.min_len() {
            return Err(Error::InsufficientData {
                required: self.min_len(),
                got: n,
            });
        }
        Ok(())
    }
}

fn paired(x: &[f64], y: &[f64]) -> Result<()> {
    if x.len() != y.len() {
        return Err(Error::LengthMismatch {
            left: x.len(),
            right: y.len(),
        });
    }
    Ok(())
}

/// Arithmetic mean of `data`.
///
/// # Errors
///
/// Returns [`Error::EmptySample`] if `data` is empty.
///
/// # Examples
///
/// ```
/// use kstats::sample::mean;
///
/// assert_eq!(mean(&[1.0, 2.0, 3.0, 4.0]).unwrap(), 2.5);
/// ```
#[allow(clippy::cast_precision_loss)]
pub fn mean(data: &[f64]) -> Result<f64> {
    if data.is_empty() {
        return Err(Error::EmptySample);
    }
    Ok(data.iter().sum::<f64>() / data.len() as f64)
}

/// Variance of `data` around its mean.
///
/// # Errors
///
/// Returns [`Error::EmptySample`] for an empty slice and
/// [`Error::InsufficientData`] for a single value with [`Estimator::Sample`].
pub fn variance(data: &[f64], estimator: Estimator) -> Result<f64> {
    estimator.check(data.len())?;
    let m = mean(data)?;
    let squares: f64 = data.iter().map(|x| (x - m).powi(2)).sum();
    Ok(squares / estimator.divisor(data.len()))
}

/// Standard deviation, `sqrt(variance)`.
///
/// # Errors
///
/// Same as [`variance`].
pub fn std_dev(data: &[f64], estimator: Estimator) -> Result<f64> {
    variance(data, estimator).map(f64::sqrt)
}

/// Covariance of two paired samples.
///
/// # Errors
///
/// Returns [`Error::LengthMismatch`] if the slices differ in length, and the
/// same size errors as [`variance`].
pub fn covariance(x: &[f64], y: &[f64], estimator: Estimator) -> Result<f64> {
    paired(x, y)?;
    estimator.check(x.len())?;
    let mx = mean(x)?;
    let my = mean(y)?;
    let cross: f64 = x.iter().zip(y).map(|(a, b)| (a - mx) * (b - my)).sum();
    Ok(cross / estimator.divisor(x.len()))
}

/// Pearson correlation coefficient of two paired samples, in `[-1, 1]`.
///
/// The divisor cancels, so no [`Estimator`] is needed.
///
/// # Errors
///
/// Returns [`Error::LengthMismatch`], [`Error::InsufficientData`] for fewer
/// than two pairs, or [`Error::ZeroVariance`] if either sample is constant.
pub fn correlation(x: &[f64], y: &[f64]) -> Result<f64> {
    let cov = covariance(x, y, Estimator::Sample)?;
    let sx = std_dev(x, Estimator::Sample)?;
    let sy = std_dev(y, Estimator::Sample)?;
    if sx == 0.0 || sy == 0.0 {
        return Err(Error::ZeroVariance);
    }
    Ok((cov / (sx * sy)).clamp(-1.0, 1.0))
}

/// Mean of `values` weighted by `weights`.
///
/// # Errors
///
/// Returns [`Error::LengthMismatch`], [`Error::EmptySample`], or
/// [`Error::InvalidWeights`] if any weight is negative or non-finite or the
/// weights sum to zero.
pub fn weighted_mean(values: &[f64], weights: &[f64]) -> Result<f64> {
    paired(values, weights)?;
    if values.is_empty() {
        return Err(Error::EmptySample);
    }
    if weights.iter().any(|w| !w.is_finite() || *w < 0.0) {
        return Err(Error::InvalidWeights);
    }
    let total: f64 = weights.iter().sum();
    if total <= 0.0 {
        return Err(Error::InvalidWeights);
    }
    let weighted: f64 = values.iter().zip(weights).map(|(v, w)| v * w).sum();
    Ok(weighted / total)
}

/// Geometric mean, `exp(mean(ln x))`.
///
/// # Errors
///
/// Returns [`Error::EmptySample`] or [`Error::NonPositiveValue`] for the
/// first value that is not strictly positive.
#[allow(clippy::cast_precision_loss)]
pub fn geometric_mean(data: &[f64]) -> Result<f64> {
    if data.is_empty() {
        return Err(Error::EmptySample);
    }
    if let Some(&bad) = data.iter().find(|x| x.is_nan() || **x <= 0.0) {
        return Err(Error::NonPositiveValue(bad));
    }
    let log_sum: f64 = data.iter().map(|x| x.ln()).sum();
    Ok((log_sum / data.len() as f64).exp())
}

/// Standard error of the mean, `s / sqrt(n)`, using the sample standard deviation.
///
/// # Errors
///
/// Returns [`Error::EmptySample`] or [`Error::InsufficientData`] for fewer
/// than two observations.
#[allow(clippy::cast_precision_loss)]
pub fn standard_error(data: &[f64]) -> Result<f64> {
    let s = std_dev(data, Estimator::Sample)?;
    Ok(s / (data.len() as f64).sqrt())
}

/// Standard error of the mean for a sample drawn without replacement from a
/// finite population of size `population`:
/// `s / sqrt(n) · sqrt((N - n) / (N - 1))`.
///
/// # Errors
///
/// Returns the errors of [`standard_error`], or [`Error::InvalidParameter`]
/// if the sample is larger than the population.
#[allow(clippy::cast_precision_loss)]
pub fn finite_population_standard_error(data: &[f64], population: usize) -> Result<f64> {
    let se = standard_error(data)?;
    let n = data.len();
    if population < n {
        return Err(Error::invalid_parameter(
            "finite population",
            format!("population ({population}) is smaller than the sample ({n})"),
        ));
    }
    let correction = ((population - n) as f64 / (population - 1) as f64).sqrt();
    Ok(se * correction)
}

/// Number of standard deviations `x` lies from `mean`.
///
/// # Errors
///
/// Returns [`Error::ZeroVariance`] if `std_dev` is zero, or
/// [`Error::InvalidParameter`] if it is negative or not finite.
pub fn z_score(x: f64, mean: f64, std_dev: f64) -> Result<f64> {
    if !std_dev.is_finite() || std_dev < 0.0 {
        return Err(Error::invalid_parameter(
            "z-score",
            format!("standard deviation must be finite and non-negative, got {std_dev}"),
        ));
    }
    if std_dev == 0.0 {
        return Err(Error::ZeroVariance);
    }
    Ok((x - mean) / std_dev)
}
