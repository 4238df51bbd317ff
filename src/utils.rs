//! Sampling and weight utilities

use rand::{Rng, distr::StandardUniform};

/// Performs weighted random sampling from a collection of items.
///
/// Draws a random threshold in `[0, total)` and walks the items, subtracting
/// weights until the threshold crosses zero. Selection probability is
/// proportional to weight. Items with zero weight are never selected while
/// any positive weight remains.
///
/// Returns `None` if the slice is empty or the total weight is not positive.
///
/// # Examples
///
/// ```
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
/// use matchbox::utils::weighted_sample;
///
/// let mut rng = StdRng::seed_from_u64(42);
/// let items = vec![("a", 1u32), ("b", 2u32), ("c", 1u32)];
/// assert!(weighted_sample(&mut rng, &items).is_some());
/// ```
pub fn weighted_sample<R, T, W>(rng: &mut R, items: &[(T, W)]) -> Option<T>
where
    R: Rng,
    T: Clone,
    W: Into<f64> + Copy,
{
    if items.is_empty() {
        return None;
    }

    let total: f64 = items.iter().map(|(_, w)| (*w).into()).sum();
    if total <= 0.0 {
        return None;
    }

    let mut threshold = rng.sample::<f64, _>(StandardUniform) * total;

    for (item, weight) in items {
        let w = (*weight).into();
        if threshold < w {
            return Some(item.clone());
        }
        threshold -= w;
    }

    // Numerical-stability fallback: return the last positively weighted item.
    items
        .iter()
        .rev()
        .find(|(_, w)| (*w).into() > 0.0)
        .map(|(item, _)| item.clone())
}

/// Normalize weighted key-value pairs into a probability distribution.
///
/// Returns `None` when the total weight is zero or negative.
pub fn normalize_weighted_pairs<K>(weighted_items: Vec<(K, f64)>) -> Option<Vec<(K, f64)>> {
    let total: f64 = weighted_items.iter().map(|(_, w)| *w).sum();
    if !total.is_finite() || total <= 0.0 {
        return None;
    }

    Some(
        weighted_items
            .into_iter()
            .map(|(key, weight)| (key, weight / total))
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;

    #[test]
    fn weighted_sample_empty_returns_none() {
        let mut rng = StdRng::seed_from_u64(42);
        let items: Vec<(i32, u32)> = vec![];
        assert_eq!(weighted_sample(&mut rng, &items), None);
    }

    #[test]
    fn weighted_sample_single_item() {
        let mut rng = StdRng::seed_from_u64(42);
        let items = vec![("a", 1u32)];
        assert_eq!(weighted_sample(&mut rng, &items), Some("a"));
    }

    #[test]
    fn weighted_sample_zero_total_returns_none() {
        let mut rng = StdRng::seed_from_u64(42);
        let items = vec![("a", 0u32), ("b", 0u32)];
        assert_eq!(weighted_sample(&mut rng, &items), None);
    }

    #[test]
    fn weighted_sample_skips_zero_weight_items() {
        let mut rng = StdRng::seed_from_u64(42);
        let items = vec![("a", 0u32), ("b", 3u32), ("c", 0u32)];
        for _ in 0..100 {
            assert_eq!(weighted_sample(&mut rng, &items), Some("b"));
        }
    }

    #[test]
    fn weighted_sample_distribution_follows_weights() {
        let mut rng = StdRng::seed_from_u64(42);
        let items = vec![("a", 1u32), ("b", 2u32), ("c", 1u32)];

        let mut counts = std::collections::HashMap::new();
        for _ in 0..1000 {
            let sample = weighted_sample(&mut rng, &items).unwrap();
            *counts.entry(sample).or_insert(0) += 1;
        }

        let count_a = counts.get(&"a").copied().unwrap_or(0);
        let count_b = counts.get(&"b").copied().unwrap_or(0);
        let count_c = counts.get(&"c").copied().unwrap_or(0);

        assert!(count_b > count_a, "b should appear more than a");
        assert!(count_b > count_c, "b should appear more than c");
        assert!(count_a > 0 && count_c > 0, "all items should appear");
    }

    #[test]
    fn weighted_sample_deterministic_under_fixed_seed() {
        let items = vec![("a", 1u32), ("b", 2u32), ("c", 1u32)];

        let mut rng1 = StdRng::seed_from_u64(12345);
        let mut rng2 = StdRng::seed_from_u64(12345);

        assert_eq!(
            weighted_sample(&mut rng1, &items),
            weighted_sample(&mut rng2, &items)
        );
    }

    #[test]
    fn normalize_weighted_pairs_sums_to_one() {
        let normalized = normalize_weighted_pairs(vec![(0, 1.0), (1, 2.0), (2, 1.0)]).unwrap();
        assert_eq!(normalized, vec![(0, 0.25), (1, 0.5), (2, 0.25)]);
    }

    #[test]
    fn normalize_weighted_pairs_none_when_zero_total() {
        assert!(normalize_weighted_pairs(vec![(0, 0.0), (1, 0.0)]).is_none());
    }
}
