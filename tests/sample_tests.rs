//! Integration tests for descriptive sample statistics.

use kstats::Error;
use kstats::sample::{
    Estimator, correlation, covariance, finite_population_standard_error, geometric_mean, mean,
    standard_error, std_dev, variance, weighted_mean, z_score,
};

#[test]
fn summary_of_a_small_sample() {
    let heights = [170.0, 165.0, 180.0, 175.0, 160.0];
    let m = mean(&heights).unwrap();
    let s = std_dev(&heights, Estimator::Sample).unwrap();
    assert_eq!(m, 170.0);
    assert!((variance(&heights, Estimator::Sample).unwrap() - 62.5).abs() < 1e-10);
    assert!((variance(&heights, Estimator::Population).unwrap() - 50.0).abs() < 1e-10);
    assert!((z_score(180.0, m, s).unwrap() - 10.0 / 62.5f64.sqrt()).abs() < 1e-10);
}

#[test]
fn default_estimator_is_sample() {
    assert_eq!(Estimator::default(), Estimator::Sample);
}

#[test]
fn covariance_matches_variance_on_identical_inputs() {
    let data = [1.5, 2.5, 4.0, 8.0, 9.5];
    for estimator in [Estimator::Sample, Estimator::Population] {
        let cov = covariance(&data, &data, estimator).unwrap();
        let var = variance(&data, estimator).unwrap();
        assert!((cov - var).abs() < 1e-12);
    }
    assert!((correlation(&data, &data).unwrap() - 1.0).abs() < 1e-12);
}

#[test]
fn uncorrelated_pairs() {
    let x = [1.0, 2.0, 3.0, 4.0];
    let y = [1.0, -1.0, -1.0, 1.0];
    assert!(correlation(&x, &y).unwrap().abs() < 1e-12);
}

#[test]
fn weighted_and_geometric_means() {
    let uniform_weights = weighted_mean(&[2.0, 4.0, 9.0], &[1.0, 1.0, 1.0]).unwrap();
    assert!((uniform_weights - 5.0).abs() < 1e-12);
    assert!((geometric_mean(&[2.0, 8.0]).unwrap() - 4.0).abs() < 1e-12);
    assert!(geometric_mean(&[2.0, -8.0]).is_err());
}

#[test]
fn standard_error_shrinks_with_finite_population() {
    let data = [3.0, 7.0, 7.0, 19.0];
    let se = standard_error(&data).unwrap();
    let fpc = finite_population_standard_error(&data, 10).unwrap();
    assert!(fpc < se);
    assert!((fpc - se * (6.0f64 / 9.0).sqrt()).abs() < 1e-12);
}

#[test]
fn errors_are_typed() {
    assert_eq!(mean(&[]), Err(Error::EmptySample));
    assert_eq!(
        standard_error(&[1.0]),
        Err(Error::InsufficientData { required: 2, got: 1 })
    );
    assert_eq!(
        covariance(&[1.0, 2.0, 3.0], &[1.0, 2.0], Estimator::Population),
        Err(Error::LengthMismatch { left: 3, right: 2 })
    );
    assert_eq!(weighted_mean(&[], &[]), Err(Error::EmptySample));
}
