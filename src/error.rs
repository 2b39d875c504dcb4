#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// Returned when a distribution is constructed with parameters that break its invariant.
    #[error("invalid {distribution} parameters: {reason}")]
    InvalidParameter {
        /// The distribution being constructed.
        distribution: &'static str,
        /// Which invariant was violated.
        reason: String,
    },

    /// Returned when an evaluator is called outside its natural domain.
    #[error("point {point} is outside the domain: {reason}")]
    DomainViolation {
        /// The offending evaluation point, rendered for display.
        point: String,
        /// Why the point is not admissible.
        reason: &'static str,
    },

    /// Returned when an exact integer count does not fit in a `u64`.
    #[error("{operation}({n}, {k}) overflows a 64-bit integer")]
    Overflow {
        /// The counting operation that overflowed.
        operation: &'static str,
        /// Number of items available.
        n: u64,
        /// Number of items selected.
        k: u64,
    },

    /// Returned when a summation range has its bounds reversed.
    #[error("invalid support range: low ({low}) must be less than or equal to high ({high})")]
    InvalidRange {
        /// The lower bound.
        low: i64,
        /// The upper bound.
        high: i64,
    },

    /// Returned when a statistic is requested over an empty sequence.
    #[error("sample is empty")]
    EmptySample,

    /// Returned when a statistic needs more observations than were supplied.
    #[error("insufficient data: need at least {required} observations, got {got}")]
    InsufficientData {
        /// Minimum number of observations.
        required: usize,
        /// Number of observations supplied.
        got: usize,
    },

    /// Returned when paired sequences differ in length.
    #[error("length mismatch: {left} values paired with {right} values")]
    LengthMismatch {
        /// Length of the first sequence.
        left: usize,
        /// Length of the second sequence.
        right: usize,
    },

    /// Returned when a value must be strictly positive (e.g. for the geometric mean).
    #[error("value {0} must be positive")]
    NonPositiveValue(f64),

    /// Returned when a statistic divides by a zero spread.
    #[error("sequence has zero variance")]
    ZeroVariance,

    /// Returned when weights are negative, non-finite, or sum to zero.
    #[error("weights must be non-negative, finite and sum to a positive value")]
    InvalidWeights,
}

pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    pub(crate) fn invalid_parameter(distribution: &'static str, reason: impl Into<String>) -> Self {
        Error::InvalidParameter {
            distribution,
            reason: reason.into(),
        }
    }

    pub(crate) fn domain(point: impl core::fmt::Display, reason: &'static str) -> Self {
        Error::DomainViolation {
            point: point.to_string(),
            reason,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_failure() {
        let err = Error::invalid_parameter("Binomial", "p must lie in [0, 1], got 1.5");
        assert_eq!(
            err.to_string(),
            "invalid Binomial parameters: p must lie in [0, 1], got 1.5"
        );

        let err = Error::Overflow {
            operation: "combinations",
            n: 70,
            k: 35,
        };
        assert_eq!(err.to_string(), "combinations(70, 35) overflows a 64-bit integer");

        let err = Error::domain(-3, "count must be non-negative");
        assert!(err.to_string().contains("-3"));
    }
}
