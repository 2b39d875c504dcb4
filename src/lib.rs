#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![deny(unreachable_pub)]
#![deny(clippy::correctness)]
#![deny(clippy::suspicious)]
#![deny(clippy::style)]
#![deny(clippy::complexity)]
#![deny(clippy::perf)]
#![deny(clippy::pedantic)]
#![deny(clippy::std_instead_of_core)]

//! Classical probability primitives: exact combinatorial counts, discrete
//! and continuous distributions behind one capability trait, generic moments
//! by truncated summation, and descriptive sample statistics. Every value is
//! immutable and every operation is a pure function of its inputs.
//!
//! # Getting Started
//!
//! ```
//! use kstats::prelude::*;
//!
//! let dist = Binomial::new(10, 0.3)?;
//! let p3 = dist.probability(3)?;
//! assert!(p3 > 0.26 && p3 < 0.27);
//!
//! // Cross-check the closed-form mean by summing over the support.
//! let summed = discrete_expected_value(0, 10, |k| dist.probability(k))?;
//! assert!((summed - dist.expected_value()).abs() < 1e-12);
//! # Ok::<(), kstats::Error>(())
//! ```
//!
//! # Core Concepts
//!
//! | Type | Role |
//! |------|------|
//! | [`Distribution`](distribution::Distribution) | Point evaluator plus closed-form mean and variance. |
//! | [`Cumulative`](distribution::Cumulative) | Optional CDF capability. |
//! | [`MomentEngine`](moments::MomentEngine) | Moments of any mass function over a caller-chosen support. |
//! | [`Error`] | Invalid parameters, domain violations, and integer overflow. |
//!
//! # Distributions
//!
//! | Distribution | Point | Parameters | CDF |
//! |--------------|-------|------------|-----|
//! | [`Binomial`](discrete::Binomial) | `i64` | trials `n >= 1`, `p` in `[0, 1]` | yes |
//! | [`Poisson`](discrete::Poisson) | `i64` | rate `λ > 0` | yes |
//! | [`Hypergeometric`](discrete::Hypergeometric) | `i64` | `N >= 1`, `K <= N`, `n <= N` | yes |
//! | [`Uniform`](continuous::Uniform) | `f64` | `a < b` | yes |
//! | [`Exponential`](continuous::Exponential) | `f64` | rate `λ > 0` | yes |
//!
//! # Feature Flags
//!
//! | Flag | What it enables | Default |
//! |------|----------------|---------|
//! | `serde` | `Serialize` on distributions, `Serialize`/`Deserialize` on [`Estimator`](sample::Estimator) and [`Summation`](moments::Summation) | off |
//! | `tracing` | Structured log events via [`tracing`](https://docs.rs/tracing) on construction and summation | off |

/// Emit a `tracing::debug!` event when the `tracing` feature is enabled.
/// No-op otherwise.
#[cfg(feature = "tracing")]
macro_rules! trace_debug {
    ($($arg:tt)*) => { tracing::debug!($($arg)*) };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_debug {
    ($($arg:tt)*) => {};
}

/// Emit a `tracing::info!` event when the `tracing` feature is enabled.
/// No-op otherwise.
#[cfg(feature = "tracing")]
macro_rules! trace_info {
    ($($arg:tt)*) => { tracing::info!($($arg)*) };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_info {
    ($($arg:tt)*) => {};
}

pub mod combinatorics;
pub mod continuous;
pub mod discrete;
pub mod distribution;
mod error;
pub mod moments;
pub mod sample;

pub use error::{Error, Result};

/// Convenient wildcard import for the most common types.
///
/// ```
/// use kstats::prelude::*;
/// ```
pub mod prelude {
    pub use crate::combinatorics::{combinations, permutations};
    pub use crate::continuous::{Exponential, Uniform};
    pub use crate::discrete::{Binomial, Hypergeometric, Poisson};
    pub use crate::distribution::{Cumulative, Distribution};
    pub use crate::error::{Error, Result};
    pub use crate::moments::{
        MomentEngine, Summation, discrete_expected_value, discrete_total_probability,
        discrete_variance,
    };
    pub use crate::sample::Estimator;
}
