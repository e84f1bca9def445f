use rand::Rng;

/// Uniform integer in `[min, max]`, both ends included.
///
/// With no bounds the range is `[0, 100]`; with only `min` it is `[0, min]`.
/// Reversed bounds are swapped.
pub fn random_int<R: Rng + ?Sized>(rng: &mut R, min: Option<i64>, max: Option<i64>) -> i64 {
    let (lo, hi) = match (min, max) {
        (None, None) => (0, 100),
        (Some(bound), None) | (None, Some(bound)) => (0, bound),
        (Some(lo), Some(hi)) => (lo, hi),
    };
    let (lo, hi) = if lo <= hi { (lo, hi) } else { (hi, lo) };
    rng.random_range(lo..=hi)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    #[test]
    fn default_range_is_zero_to_hundred() {
        let mut rng = rng();
        for _ in 0..500 {
            assert!((0..=100).contains(&random_int(&mut rng, None, None)));
        }
    }

    #[test]
    fn single_bound_is_the_maximum() {
        let mut rng = rng();
        let values: Vec<i64> = (0..500).map(|_| random_int(&mut rng, Some(3), None)).collect();
        assert!(values.iter().all(|v| (0..=3).contains(v)));
        // Both ends are reachable.
        assert!(values.contains(&0));
        assert!(values.contains(&3));
    }

    #[test]
    fn reversed_and_degenerate_bounds() {
        let mut rng = rng();
        assert!((-5..=5).contains(&random_int(&mut rng, Some(5), Some(-5))));
        assert_eq!(random_int(&mut rng, Some(4), Some(4)), 4);
        assert!((-8..=0).contains(&random_int(&mut rng, Some(-8), None)));
    }
}
