//! Weighted sampler - inverse-square skew toward low values
//!
//! weight(v) = (high + 1 - v)^2
//!
//! With the default defense range 0-50 a roll of 0 is 2601 times more
//! likely than a roll of 50, which keeps perfect defenses rare.

use rand::distributions::{Distribution, WeightedIndex};
use rand::Rng;

/// Weight of `value` within `[low, high]`
pub fn weight(value: u32, high: u32) -> u64 {
    let distance = u64::from(high) + 1 - u64::from(value);
    distance * distance
}

/// Draw from `[low, high]` with quadratically decaying weight
///
/// An inverted range collapses to `low`.
pub fn sample_weighted(low: u32, high: u32, rng: &mut impl Rng) -> u32 {
    if high <= low {
        return low;
    }

    match WeightedIndex::new((low..=high).map(|v| weight(v, high))) {
        Ok(dist) => low + dist.sample(rng) as u32,
        Err(err) => {
            tracing::warn!("weighted sample over {low}..={high} failed: {err}");
            low
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_weights_decay_quadratically() {
        assert_eq!(weight(0, 50), 51 * 51);
        assert_eq!(weight(25, 50), 26 * 26);
        assert_eq!(weight(50, 50), 1);
    }

    #[test]
    fn test_degenerate_range() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        assert_eq!(sample_weighted(7, 7, &mut rng), 7);
        assert_eq!(sample_weighted(9, 3, &mut rng), 9);
    }

    #[test]
    fn test_frequency_decreases_with_value() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let mut counts = [0u32; 5];
        for _ in 0..200_000 {
            counts[sample_weighted(0, 4, &mut rng) as usize] += 1;
        }

        // Expected shares 25:16:9:4:1 out of 55
        for pair in counts.windows(2) {
            assert!(pair[0] > pair[1], "counts not decreasing: {:?}", counts);
        }
        let share_of_zero = counts[0] as f64 / 200_000.0;
        assert!((share_of_zero - 25.0 / 55.0).abs() < 0.01);
    }

    #[test]
    fn test_defense_mean_is_low() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let draws = 50_000;
        let sum: u64 = (0..draws)
            .map(|_| u64::from(sample_weighted(0, 50, &mut rng)))
            .sum();
        let mean = sum as f64 / draws as f64;
        // Analytic mean for (51 - v)^2 over 0..=50 is 51 - 1758276/45526, about 12.38
        assert!((mean - 12.38).abs() < 0.5, "mean was {}", mean);
    }

    proptest! {
        #[test]
        fn prop_sample_in_range(low in 0u32..100, span in 0u32..100, seed in any::<u64>()) {
            let high = low + span;
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let v = sample_weighted(low, high, &mut rng);
            prop_assert!(v >= low && v <= high);
        }
    }
}
