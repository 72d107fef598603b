//! Utility functions shared by the ranking code

use std::collections::BTreeMap;

use rand::{Rng, distr::StandardUniform, prelude::IndexedRandom};

/// Tolerance used when checking that a distribution sums to one.
pub const PROBABILITY_TOLERANCE: f64 = 1e-5;

/// Sum the values of a keyed distribution.
pub fn distribution_sum<K>(distribution: &BTreeMap<K, f64>) -> f64 {
    distribution.values().sum()
}

/// Check whether a keyed distribution sums to one within [`PROBABILITY_TOLERANCE`].
pub fn sums_to_one<K>(distribution: &BTreeMap<K, f64>) -> bool {
    (distribution_sum(distribution) - 1.0).abs() <= PROBABILITY_TOLERANCE
}

/// Rescale a keyed distribution in place so its values sum to exactly 1.0.
///
/// Returns `false` and leaves the values untouched when the total is zero,
/// negative, or not finite.
///
/// # Examples
///
/// ```
/// use std::collections::BTreeMap;
/// use rankmax::utils::normalize_distribution;
///
/// let mut ranks = BTreeMap::from([("a", 1.0), ("b", 3.0)]);
/// assert!(normalize_distribution(&mut ranks));
/// assert_eq!(ranks["a"], 0.25);
/// assert_eq!(ranks["b"], 0.75);
/// ```
pub fn normalize_distribution<K>(distribution: &mut BTreeMap<K, f64>) -> bool {
    let total = distribution_sum(distribution);
    if !total.is_finite() || total <= 0.0 {
        return false;
    }
    for value in distribution.values_mut() {
        *value /= total;
    }
    true
}

/// Performs weighted random sampling from a collection of items.
///
/// A threshold is drawn uniformly in `[0, total)` and the items are walked,
/// subtracting each weight until the threshold falls inside one of them.
///
/// # Behavior
///
/// - Returns `None` if `items` is empty
/// - If all weights are zero or negative, falls back to uniform random selection
/// - The last item is returned if the threshold never crosses zero (rounding)
///
/// # Examples
///
/// ```
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
/// use rankmax::utils::weighted_sample;
///
/// let mut rng = StdRng::seed_from_u64(42);
/// let items = vec![("1.html", 0.2), ("2.html", 0.8)];
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
        return items.choose(rng).map(|(item, _)| item.clone());
    }

    let mut threshold = rng.sample::<f64, _>(StandardUniform) * total;
    for (item, weight) in items {
        let w = (*weight).into();
        if threshold < w {
            return Some(item.clone());
        }
        threshold -= w;
    }

    items.last().map(|(item, _)| item.clone())
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;

    #[test]
    fn test_weighted_sample_empty() {
        let mut rng = StdRng::seed_from_u64(42);
        let items: Vec<(&str, f64)> = vec![];
        assert_eq!(weighted_sample(&mut rng, &items), None);
    }

    #[test]
    fn test_weighted_sample_single_item() {
        let mut rng = StdRng::seed_from_u64(42);
        let items = vec![("a", 1.0)];
        assert_eq!(weighted_sample(&mut rng, &items), Some("a"));
    }

    #[test]
    fn test_weighted_sample_zero_weights_falls_back_to_uniform() {
        let mut rng = StdRng::seed_from_u64(7);
        let items = vec![("a", 0.0), ("b", 0.0)];
        assert!(weighted_sample(&mut rng, &items).is_some());
    }

    #[test]
    fn test_weighted_sample_never_picks_zero_weight() {
        let mut rng = StdRng::seed_from_u64(3);
        let items = vec![("a", 0.0), ("b", 1.0), ("c", 0.0)];
        for _ in 0..500 {
            assert_eq!(weighted_sample(&mut rng, &items), Some("b"));
        }
    }

    #[test]
    fn test_weighted_sample_distribution() {
        let mut rng = StdRng::seed_from_u64(42);
        let items = vec![("a", 1.0), ("b", 2.0), ("c", 1.0)];

        let mut counts = BTreeMap::new();
        for _ in 0..2000 {
            let sample = weighted_sample(&mut rng, &items).unwrap();
            *counts.entry(sample).or_insert(0usize) += 1;
        }

        let count_a = counts.get("a").copied().unwrap_or(0);
        let count_b = counts.get("b").copied().unwrap_or(0);
        let count_c = counts.get("c").copied().unwrap_or(0);
        assert!(count_b > count_a, "b should appear more than a");
        assert!(count_b > count_c, "b should appear more than c");
    }

    #[test]
    fn normalize_distribution_rejects_zero_total() {
        let mut ranks = BTreeMap::from([("a", 0.0), ("b", 0.0)]);
        assert!(!normalize_distribution(&mut ranks));
        assert_eq!(ranks["a"], 0.0);
    }

    #[test]
    fn sums_to_one_respects_tolerance() {
        let ranks = BTreeMap::from([("a", 0.5), ("b", 0.500_001)]);
        assert!(sums_to_one(&ranks));
        let ranks = BTreeMap::from([("a", 0.5), ("b", 0.6)]);
        assert!(!sums_to_one(&ranks));
    }
}
