//! Property tests for permutation and combination counts.

use kstats::combinatorics::{combinations, ln_combinations, permutations};
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn combinations_are_symmetric(n in 0_u64..=20, k in 0_u64..=20) {
        prop_assume!(k <= n);
        prop_assert_eq!(combinations(n, k).unwrap(), combinations(n, n - k).unwrap());
    }

    #[test]
    fn empty_selection_counts_once(n in 0_u64..=1_000_000) {
        prop_assert_eq!(combinations(n, 0).unwrap(), 1);
        prop_assert_eq!(permutations(n, 0).unwrap(), 1);
    }

    #[test]
    fn pascal_rule(n in 1_u64..=60, k in 1_u64..=60) {
        prop_assume!(k <= n);
        let lhs = combinations(n, k).unwrap();
        let rhs = combinations(n - 1, k - 1).unwrap() + combinations(n - 1, k).unwrap();
        prop_assert_eq!(lhs, rhs);
    }

    #[test]
    fn permutations_factor_through_combinations(n in 0_u64..=20, k in 0_u64..=20) {
        prop_assume!(k <= n);
        let ordered = permutations(n, k).unwrap();
        let unordered = combinations(n, k).unwrap();
        prop_assert_eq!(ordered, unordered * permutations(k, k).unwrap());
    }

    #[test]
    fn selecting_more_than_available_is_zero(n in 0_u64..=100, extra in 1_u64..=100) {
        prop_assert_eq!(combinations(n, n + extra).unwrap(), 0);
        prop_assert_eq!(permutations(n, n + extra).unwrap(), 0);
    }

    #[test]
    fn log_domain_tracks_exact_counts(n in 0_u64..=60, k in 0_u64..=60) {
        prop_assume!(k <= n);
        #[allow(clippy::cast_precision_loss)]
        let exact = combinations(n, k).unwrap() as f64;
        let approx = ln_combinations(n, k).exp();
        prop_assert!((approx - exact).abs() <= 1e-10 * exact, "C({}, {}): {} vs {}", n, k, approx, exact);
    }
}

#[test]
fn counts_at_the_overflow_boundary() {
    assert_eq!(permutations(20, 20).unwrap(), 2_432_902_008_176_640_000);
    assert!(permutations(21, 21).is_err());
    assert_eq!(combinations(67, 33).unwrap(), 14_226_520_737_620_288_370);
    assert!(combinations(68, 34).is_err());
}
