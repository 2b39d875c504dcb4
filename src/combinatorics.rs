//! Exact permutation and combination counts.
//!
//! Counts are computed in `u64` without ever forming a full factorial, so the
//! results are exact for every input whose answer fits in 64 bits. When it
//! does not, [`Error::Overflow`] is returned instead of a wrapped value.
//!
//! [`ln_factorial`] and [`ln_combinations`] are the log-domain extension point
//! for callers (and the distributions in this crate) that need counts well
//! beyond the 64-bit range and can tolerate floating-point rounding.

use statrs::function::gamma::ln_gamma;

use crate::error::{Error, Result};

/// Number of ordered selections of `k` items from `n`: `n·(n-1)·…·(n-k+1)`.
///
/// Returns 1 for `k == 0` and 0 for `k > n`.
///
/// # Errors
///
/// Returns [`Error::Overflow`] if the product exceeds `u64::MAX`.
///
/// # Examples
///
/// ```
/// use kstats::combinatorics::permutations;
///
/// assert_eq!(permutations(5, 2).unwrap(), 20);
/// assert_eq!(permutations(5, 0).unwrap(), 1);
/// ```
pub fn permutations(n: u64, k: u64) -> Result<u64> {
    if k > n {
        return Ok(0);
    }

    (0..k).try_fold(1u64, |acc, i| {
        acc.checked_mul(n - i).ok_or(Error::Overflow {
            operation: "permutations",
            n,
            k,
        })
    })
}

/// Number of unordered selections of `k` items from `n`, `n! / (k!·(n-k)!)`.
///
/// Uses the multiplicative form over `min(k, n-k)` factors. Each partial
/// product is itself a binomial coefficient, so every division is exact.
///
/// Returns 1 for `k == 0` or `k == n` and 0 for `k > n`.
///
/// # Errors
///
/// Returns [`Error::Overflow`] if the coefficient exceeds `u64::MAX`.
///
/// # Examples
///
/// ```
/// use kstats::combinatorics::combinations;
///
/// assert_eq!(combinations(10, 3).unwrap(), 120);
/// assert_eq!(combinations(52, 5).unwrap(), 2_598_960);
/// ```
pub fn combinations(n: u64, k: u64) -> Result<u64> {
    if k > n {
        return Ok(0);
    }

    let k_small = k.min(n - k);
    let base = u128::from(n - k_small);
    let mut acc: u128 = 1;

    for i in 1..=u128::from(k_small) {
        // acc = C(base + i - 1, i - 1) < 2^64, so the product fits in u128.
        acc = acc * (base + i) / i;
        if acc > u128::from(u64::MAX) {
            return Err(Error::Overflow {
                operation: "combinations",
                n,
                k,
            });
        }
    }

    u64::try_from(acc).map_err(|_| Error::Overflow {
        operation: "combinations",
        n,
        k,
    })
}

/// Natural log of `n!`, computed in O(1) as `ln Γ(n + 1)`.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn ln_factorial(n: u64) -> f64 {
    if n < 2 {
        return 0.0;
    }
    ln_gamma(n as f64 + 1.0)
}

/// Natural log of `C(n, k)`, or negative infinity when `k > n`.
///
/// `ln Γ(n+1) - ln Γ(k+1) - ln Γ(n-k+1)`: constant time and never overflows,
/// with rounding error relative to the magnitude of `ln n!`.
#[must_use]
pub fn ln_combinations(n: u64, k: u64) -> f64 {
    if k > n {
        return f64::NEG_INFINITY;
    }
    if k == 0 || k == n {
        return 0.0;
    }
    ln_factorial(n) - ln_factorial(k) - ln_factorial(n - k)
}
