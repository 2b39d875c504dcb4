//! Discrete distributions over the non-negative integers.
//!
//! - [`Binomial`] - successes in `n` independent trials
//! - [`Poisson`] - event counts at a fixed rate
//! - [`Hypergeometric`] - successes when drawing without replacement
//!
//! Evaluation points are `i64` so that callers summing over an arbitrary
//! integer range get a typed [`Error::DomainViolation`] for negative counts
//! rather than a silently wrong probability. Points above the support are
//! in-domain and have probability 0.

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::combinatorics::{combinations, ln_combinations, ln_factorial};
use crate::distribution::{Cumulative, Distribution};
use crate::error::{Error, Result};

fn count(k: i64) -> Result<u64> {
    u64::try_from(k).map_err(|_| Error::domain(k, "count must be non-negative"))
}

/// Binomial distribution: the number of successes in `n` Bernoulli trials
/// with success probability `p`.
///
/// # Examples
///
/// ```
/// use kstats::discrete::Binomial;
/// use kstats::distribution::Distribution;
///
/// let coin = Binomial::new(10, 0.5).unwrap();
/// let p5 = coin.probability(5).unwrap();
/// assert!((p5 - 252.0 / 1024.0).abs() < 1e-12);
/// assert_eq!(coin.expected_value(), 5.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Binomial {
    n: u64,
    p: f64,
}

impl Binomial {
    /// Creates a binomial distribution with `n` trials and success probability `p`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] if `n` is zero or `p` is not a
    /// finite value in `[0, 1]`.
    pub fn new(n: u64, p: f64) -> Result<Self> {
        if n == 0 {
            return Err(Error::invalid_parameter(
                "Binomial",
                "trial count must be positive",
            ));
        }
        if !(0.0..=1.0).contains(&p) {
            return Err(Error::invalid_parameter(
                "Binomial",
                format!("p must lie in [0, 1], got {p}"),
            ));
        }

        trace_debug!(n, p, "constructed binomial distribution");
        Ok(Self { n, p })
    }

    /// Number of trials.
    #[must_use]
    pub fn n(&self) -> u64 {
        self.n
    }

    /// Success probability of a single trial.
    #[must_use]
    pub fn p(&self) -> f64 {
        self.p
    }

    /// `C(n, k) · p^k · (1-p)^(n-k)`.
    ///
    /// The coefficient is exact while it fits in a `u64`; past that the whole
    /// term is evaluated in the log domain.
    #[allow(clippy::cast_precision_loss)]
    fn mass(&self, k: u64) -> f64 {
        if k > self.n {
            return 0.0;
        }

        // Point masses at the edges; avoids 0 * ln(0) in the log branch.
        if self.p <= 0.0 {
            return if k == 0 { 1.0 } else { 0.0 };
        }
        if self.p >= 1.0 {
            return if k == self.n { 1.0 } else { 0.0 };
        }

        let successes = k as f64;
        let failures = (self.n - k) as f64;
        let q = 1.0 - self.p;

        if let Ok(coefficient) = combinations(self.n, k) {
            coefficient as f64 * self.p.powf(successes) * q.powf(failures)
        } else {
            trace_debug!(n = self.n, k, "binomial coefficient overflowed, using log domain");
            let ln_pmf =
                ln_combinations(self.n, k) + successes * self.p.ln() + failures * q.ln();
            ln_pmf.exp()
        }
    }
}

impl Distribution for Binomial {
    type Point = i64;

    fn probability(&self, k: i64) -> Result<f64> {
        Ok(self.mass(count(k)?))
    }

    #[allow(clippy::cast_precision_loss)]
    fn expected_value(&self) -> f64 {
        self.n as f64 * self.p
    }

    #[allow(clippy::cast_precision_loss)]
    fn variance(&self) -> f64 {
        self.n as f64 * self.p * (1.0 - self.p)
    }
}

impl Cumulative for Binomial {
    /// Walks the mass upward with `f(i+1) = f(i) · (n-i)/(i+1) · p/(1-p)`,
    /// carried in the log domain so the leading `(1-p)^n` cannot underflow.
    /// O(k).
    #[allow(clippy::cast_precision_loss)]
    fn cdf(&self, k: i64) -> Result<f64> {
        let upper = count(k)?.min(self.n);
        if self.p <= 0.0 {
            return Ok(1.0);
        }
        if self.p >= 1.0 {
            return Ok(if upper == self.n { 1.0 } else { 0.0 });
        }

        let n = self.n as f64;
        let ln_q = (-self.p).ln_1p();
        let ln_odds = self.p.ln() - ln_q;
        let mut ln_term = n * ln_q;
        let mut total = ln_term.exp();
        for i in 0..upper {
            let i = i as f64;
            ln_term += ((n - i) / (i + 1.0)).ln() + ln_odds;
            total += ln_term.exp();
        }
        Ok(total.min(1.0))
    }
}

/// Poisson distribution with rate `lambda`.
///
/// # Examples
///
/// ```
/// use kstats::discrete::Poisson;
/// use kstats::distribution::Distribution;
///
/// let arrivals = Poisson::new(3.0).unwrap();
/// assert!((arrivals.probability(0).unwrap() - (-3.0f64).exp()).abs() < 1e-15);
/// assert_eq!(arrivals.variance(), 3.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Poisson {
    lambda: f64,
}

impl Poisson {
    /// Creates a Poisson distribution with rate `lambda`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] if `lambda` is not finite and positive.
    pub fn new(lambda: f64) -> Result<Self> {
        if !lambda.is_finite() || lambda <= 0.0 {
            return Err(Error::invalid_parameter(
                "Poisson",
                format!("rate must be finite and positive, got {lambda}"),
            ));
        }

        trace_debug!(lambda, "constructed poisson distribution");
        Ok(Self { lambda })
    }

    /// The rate parameter.
    #[must_use]
    pub fn lambda(&self) -> f64 {
        self.lambda
    }
}

impl Distribution for Poisson {
    type Point = i64;

    /// `λ^k · e^(-λ) / k!`, evaluated as `exp(k·ln λ - λ - ln k!)`.
    ///
    /// Very large `k` underflows to 0 rather than overflowing.
    #[allow(clippy::cast_precision_loss)]
    fn probability(&self, k: i64) -> Result<f64> {
        let k = count(k)?;
        let ln_pmf = k as f64 * self.lambda.ln() - self.lambda - ln_factorial(k);
        Ok(ln_pmf.exp())
    }

    fn expected_value(&self) -> f64 {
        self.lambda
    }

    fn variance(&self) -> f64 {
        self.lambda
    }
}

impl Cumulative for Poisson {
    #[allow(clippy::cast_precision_loss)]
    fn cdf(&self, k: i64) -> Result<f64> {
        let upper = count(k)?;
        let ln_lambda = self.lambda.ln();
        let mut ln_term = -self.lambda;
        let mut total = ln_term.exp();
        for i in 1..=upper {
            let i = i as f64;
            ln_term += ln_lambda - i.ln();
            let term = ln_term.exp();
            total += term;
            // Past 2λ each term is at most half the previous one.
            if i > 2.0 * self.lambda && term < f64::EPSILON * total {
                break;
            }
        }
        Ok(total.min(1.0))
    }
}

/// Hypergeometric distribution: successes among `draws` items taken without
/// replacement from a population of `population` items, `successes` of
/// which count as successes.
///
/// [`probability`](Distribution::probability) and the moments use the draw
/// size fixed at construction. [`probability_with_draws`](Self::probability_with_draws)
/// evaluates the mass for a different draw size without changing the
/// distribution.
///
/// # Examples
///
/// ```
/// use kstats::discrete::Hypergeometric;
/// use kstats::distribution::Distribution;
///
/// // 4 cards from a 10-card hand with 5 hearts.
/// let hearts = Hypergeometric::new(10, 5, 4).unwrap();
/// let two = hearts.probability(2).unwrap();
/// assert!((two - 100.0 / 210.0).abs() < 1e-12);
///
/// let two_of_three = hearts.probability_with_draws(3, 2).unwrap();
/// assert!((two_of_three - 50.0 / 120.0).abs() < 1e-12);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Hypergeometric {
    population: u64,
    successes: u64,
    draws: u64,
}

impl Hypergeometric {
    /// Creates a hypergeometric distribution.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] if `population` is zero or if
    /// `successes` or `draws` exceeds `population`.
    pub fn new(population: u64, successes: u64, draws: u64) -> Result<Self> {
        if population == 0 {
            return Err(Error::invalid_parameter(
                "Hypergeometric",
                "population must be positive",
            ));
        }
        if successes > population {
            return Err(Error::invalid_parameter(
                "Hypergeometric",
                format!("successes ({successes}) exceed population ({population})"),
            ));
        }
        if draws > population {
            return Err(Error::invalid_parameter(
                "Hypergeometric",
                format!("draws ({draws}) exceed population ({population})"),
            ));
        }

        trace_debug!(
            population,
            successes,
            draws,
            "constructed hypergeometric distribution"
        );
        Ok(Self {
            population,
            successes,
            draws,
        })
    }

    /// Population size `N`.
    #[must_use]
    pub fn population(&self) -> u64 {
        self.population
    }

    /// Successes in the population `K`.
    #[must_use]
    pub fn successes(&self) -> u64 {
        self.successes
    }

    /// Draw size `n` fixed at construction.
    #[must_use]
    pub fn draws(&self) -> u64 {
        self.draws
    }

    /// Probability of observing `k` successes in `draws` draws:
    /// `C(K, k) · C(N-K, draws-k) / C(N, draws)`.
    ///
    /// `draws` applies to this call only. Values of `k` outside
    /// `[max(0, draws - (N - K)), min(draws, K)]` have probability 0.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DomainViolation`] if `k` is negative or `draws`
    /// exceeds the population.
    pub fn probability_with_draws(&self, draws: u64, k: i64) -> Result<f64> {
        if draws > self.population {
            return Err(Error::domain(draws, "draw size exceeds the population"));
        }
        Ok(self.mass(draws, count(k)?))
    }

    #[allow(clippy::cast_precision_loss)]
    fn mass(&self, draws: u64, k: u64) -> f64 {
        let failures = self.population - self.successes;
        let lowest = draws.saturating_sub(failures);
        let highest = draws.min(self.successes);
        if k < lowest || k > highest {
            return 0.0;
        }

        let exact = (
            combinations(self.successes, k),
            combinations(failures, draws - k),
            combinations(self.population, draws),
        );
        match exact {
            (Ok(hits), Ok(misses), Ok(total)) => hits as f64 * misses as f64 / total as f64,
            _ => {
                trace_debug!(
                    population = self.population,
                    successes = self.successes,
                    draws,
                    k,
                    "hypergeometric coefficient overflowed, using log domain"
                );
                let ln_pmf = ln_combinations(self.successes, k)
                    + ln_combinations(failures, draws - k)
                    - ln_combinations(self.population, draws);
                ln_pmf.exp()
            }
        }
    }
}

impl Distribution for Hypergeometric {
    type Point = i64;

    fn probability(&self, k: i64) -> Result<f64> {
        self.probability_with_draws(self.draws, k)
    }

    #[allow(clippy::cast_precision_loss)]
    fn expected_value(&self) -> f64 {
        self.draws as f64 * self.successes as f64 / self.population as f64
    }

    /// `n·K·(N-K)·(N-n) / (N²·(N-1))`, or 0 for a single-item population.
    #[allow(clippy::cast_precision_loss)]
    fn variance(&self) -> f64 {
        if self.population < 2 {
            return 0.0;
        }
        let n = self.draws as f64;
        let big_k = self.successes as f64;
        let big_n = self.population as f64;
        n * big_k * (big_n - big_k) * (big_n - n) / (big_n * big_n * (big_n - 1.0))
    }
}

impl Cumulative for Hypergeometric {
    /// Starts at the lowest reachable count and walks upward with
    /// `f(i+1) = f(i) · (K-i)/(i+1) · (n-i)/(N-K-n+i+1)` in the log domain. O(k).
    #[allow(clippy::cast_precision_loss)]
    fn cdf(&self, k: i64) -> Result<f64> {
        let k = count(k)?;
        let failures = self.population - self.successes;
        let lowest = self.draws.saturating_sub(failures);
        if k < lowest {
            return Ok(0.0);
        }
        let upper = k.min(self.draws.min(self.successes));

        let big_k = self.successes as f64;
        let n = self.draws as f64;
        // N - K - n, negative when every draw beyond the failures must hit.
        let slack = failures as f64 - n;
        let mut ln_term = ln_combinations(self.successes, lowest)
            + ln_combinations(failures, self.draws - lowest)
            - ln_combinations(self.population, self.draws);
        let mut total = ln_term.exp();
        for i in lowest..upper {
            let i = i as f64;
            ln_term += ((big_k - i) / (i + 1.0)).ln() + ((n - i) / (slack + i + 1.0)).ln();
            total += ln_term.exp();
        }
        Ok(total.min(1.0))
    }
}
