//! Choosing which targets receive an instance.
//!
//! [`select_targets`] returns indices into the target list. Full coverage keeps every
//! target in input order; partial coverage draws `floor(len * percent / 100)` distinct
//! targets uniformly without replacement using a partial Fisher-Yates shuffle. Each
//! step picks uniformly among the indices not yet chosen, so every `k`-subset is equally
//! likely, exactly as with rejection sampling of repeated indices, but in `k` draws.
use rand::RngCore;

use crate::random::rand_index;
use crate::scatter::config::FULL_COVERAGE;

/// Number of targets covered by `coverage_percent` of `len`.
pub fn target_count(len: usize, coverage_percent: f32) -> usize {
    if coverage_percent <= 0.0 || len == 0 {
        return 0;
    }
    if coverage_percent >= FULL_COVERAGE {
        return len;
    }
    let k = (len as f64 * coverage_percent as f64 / FULL_COVERAGE as f64).floor();
    (k as usize).min(len)
}

/// Indices of the selected targets, in selection order.
pub fn select_targets(len: usize, coverage_percent: f32, rng: &mut dyn RngCore) -> Vec<usize> {
    let k = target_count(len, coverage_percent);
    if k == len {
        return (0..len).collect();
    }

    let mut pool: Vec<usize> = (0..len).collect();
    for i in 0..k {
        let j = i + rand_index(rng, len - i);
        pool.swap(i, j);
    }
    pool.truncate(k);
    pool
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn count_floors_partial_coverage() {
        assert_eq!(target_count(10, 50.0), 5);
        assert_eq!(target_count(10, 55.0), 5);
        assert_eq!(target_count(3, 50.0), 1);
        assert_eq!(target_count(1, 99.0), 0);
        assert_eq!(target_count(7, 100.0), 7);
        assert_eq!(target_count(7, 0.0), 0);
        assert_eq!(target_count(0, 50.0), 0);
    }

    #[test]
    fn full_coverage_keeps_input_order() {
        let mut rng = StdRng::seed_from_u64(3);
        assert_eq!(select_targets(5, 100.0, &mut rng), vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn zero_coverage_selects_nothing() {
        let mut rng = StdRng::seed_from_u64(3);
        assert!(select_targets(50, 0.0, &mut rng).is_empty());
    }

    #[test]
    fn partial_coverage_selects_distinct_indices() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..200 {
            let picked = select_targets(10, 50.0, &mut rng);
            assert_eq!(picked.len(), 5);
            let unique: HashSet<_> = picked.iter().copied().collect();
            assert_eq!(unique.len(), 5);
            assert!(picked.iter().all(|&i| i < 10));
        }
    }

    #[test]
    fn partial_coverage_is_uniform_over_targets() {
        // Each of 10 targets should be picked with probability 1/2.
        let mut rng = StdRng::seed_from_u64(0xC0FFEE);
        let runs = 20_000;
        let mut hits = [0usize; 10];
        for _ in 0..runs {
            for i in select_targets(10, 50.0, &mut rng) {
                hits[i] += 1;
            }
        }
        let expected = runs as f64 * 0.5;
        for (i, &h) in hits.iter().enumerate() {
            let deviation = (h as f64 - expected).abs() / expected;
            assert!(deviation < 0.03, "target {i} hit {h} times");
        }
    }

    #[test]
    fn partial_coverage_is_uniform_over_subsets() {
        // 4 choose 2 = 6 subsets, each expected 1/6 of the time.
        let mut rng = StdRng::seed_from_u64(99);
        let runs = 30_000;
        let mut counts = std::collections::HashMap::new();
        for _ in 0..runs {
            let mut picked = select_targets(4, 50.0, &mut rng);
            picked.sort_unstable();
            *counts.entry(picked).or_insert(0usize) += 1;
        }
        assert_eq!(counts.len(), 6);
        let expected = runs as f64 / 6.0;
        for (subset, &c) in &counts {
            let deviation = (c as f64 - expected).abs() / expected;
            assert!(deviation < 0.05, "subset {subset:?} seen {c} times");
        }
    }

    #[test]
    fn same_seed_same_selection() {
        let mut a = StdRng::seed_from_u64(5);
        let mut b = StdRng::seed_from_u64(5);
        assert_eq!(
            select_targets(100, 30.0, &mut a),
            select_targets(100, 30.0, &mut b)
        );
    }
}
