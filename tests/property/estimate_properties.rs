use monte_carlo_pi::{count_inside, estimate_pi, EstimateError, UniformSquare};
use proptest::prelude::*;

proptest! {
    #[test]
    fn estimate_is_within_zero_and_four(points in 1i64..5_000, seed in any::<u64>()) {
        let value = estimate_pi(points, &mut UniformSquare::seeded(seed)).unwrap();
        prop_assert!((0.0..=4.0).contains(&value), "estimate {} out of range", value);
    }

    #[test]
    fn inside_never_exceeds_points(points in 1i64..5_000, seed in any::<u64>()) {
        let estimate = count_inside(points, &mut UniformSquare::seeded(seed)).unwrap();
        prop_assert_eq!(estimate.points, points as u64);
        prop_assert!(estimate.inside <= estimate.points);
    }

    #[test]
    fn non_positive_counts_fail(points in i64::MIN..=0) {
        let result = estimate_pi(points, &mut UniformSquare::seeded(0));
        prop_assert_eq!(result, Err(EstimateError::InvalidArgument { num_points: points }));
    }

    #[test]
    fn same_seed_same_bits(points in 1i64..2_000, seed in any::<u64>()) {
        let a = estimate_pi(points, &mut UniformSquare::seeded(seed)).unwrap();
        let b = estimate_pi(points, &mut UniformSquare::seeded(seed)).unwrap();
        prop_assert_eq!(a.to_bits(), b.to_bits());
    }

    #[test]
    fn stubbed_points_match_manual_count(
        pts in prop::collection::vec((-1.0f64..=1.0, -1.0f64..=1.0), 1..200)
    ) {
        let expected = pts.iter().filter(|(x, y)| x * x + y * y <= 1.0).count() as f64;
        let n = pts.len() as i64;
        let mut iter = pts.into_iter();
        let mut sampler = move || iter.next().unwrap();
        let value = estimate_pi(n, &mut sampler).unwrap();
        prop_assert_eq!(value, 4.0 * (expected / n as f64));
    }
}
