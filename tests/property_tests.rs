use hyohon::apportion::apportion;
use hyohon::nonprobability::{convenience_sample, haphazard_sample_with_rng, quota_sample};
use hyohon::probability::{
    simple_random, simple_random_with_rng, stratified_with_rng, systematic_with_rng,
};
use hyohon::reservoir::Reservoir;
use indexmap::IndexMap;
use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Multiset containment: every value of `sample` can be matched to a distinct
/// value of `population`.
fn is_submultiset(sample: &[u32], population: &[u32]) -> bool {
    let mut pool = population.to_vec();
    for v in sample {
        match pool.iter().position(|p| p == v) {
            Some(i) => {
                pool.swap_remove(i);
            }
            None => return false,
        }
    }
    true
}

proptest! {
    #[test]
    fn prop_reservoir_size_invariant(
        k in 0usize..20,
        items in prop::collection::vec(0u32..1000, 0..50)
    ) {
        let mut s = Reservoir::new(k);
        let mut rng = ChaCha8Rng::seed_from_u64(17);
        for &item in &items {
            s.add_with_rng(item, &mut rng);
        }

        let n = items.len();
        prop_assert_eq!(s.samples().len(), std::cmp::min(n, k));
        prop_assert_eq!(s.seen(), n);
    }

    #[test]
    fn prop_simple_random_size_and_membership(
        items in prop::collection::vec(0u32..50, 0..60),
        k in 0usize..80,
        seed in any::<u64>(),
    ) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let sample = simple_random_with_rng(&items, k, &mut rng);

        prop_assert_eq!(sample.len(), std::cmp::min(k, items.len()));
        prop_assert!(is_submultiset(&sample, &items));
    }

    #[test]
    fn prop_degenerate_requests_are_empty(items in prop::collection::vec(0u32..50, 0..20)) {
        prop_assert!(simple_random(&items, 0).is_empty());
        prop_assert!(simple_random(&Vec::<u32>::new(), items.len() + 1).is_empty());
    }

    #[test]
    fn prop_systematic_visits_fixed_stride(
        n in 1usize..200,
        count in 1usize..50,
        seed in any::<u64>(),
    ) {
        let items: Vec<usize> = (0..n).collect();
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let sample = systematic_with_rng(&items, count, &mut rng);

        let step = (n / count).max(1);
        let start = sample[0];
        prop_assert!(start < step);
        prop_assert_eq!(sample.len(), (n - start).div_ceil(step));
        for (i, &idx) in sample.iter().enumerate() {
            prop_assert_eq!(idx, start + i * step);
        }
    }

    #[test]
    fn prop_apportionment_bounds(
        sizes in prop::collection::vec(0usize..30, 1..12),
        target in 0usize..100,
    ) {
        let allocation = apportion(sizes.iter().copied().enumerate(), target);
        let population: usize = sizes.iter().sum();
        let non_empty = sizes.iter().filter(|&&s| s > 0).count();

        if population == 0 {
            prop_assert!(allocation.is_empty());
        } else {
            for (label, quota) in allocation.iter() {
                let size = sizes[*label];
                prop_assert!(quota <= size);
                if size > 0 {
                    prop_assert!(quota >= 1);
                }
            }
            // Never short of the target unless the population itself is.
            prop_assert!(allocation.total() >= std::cmp::min(target, population));
            // Only the one-per-group minimum can push past the target.
            prop_assert!(allocation.total() <= target + non_empty);
            if allocation.total() > target {
                prop_assert!(sizes.iter().any(|&s| s > 0 && s * target < population));
            }
        }
    }

    #[test]
    fn prop_stratified_respects_strata(
        labels in prop::collection::vec(0u8..5, 1..60),
        target in 1usize..40,
        seed in any::<u64>(),
    ) {
        // Value encodes its own stratum: 1000 * label + position.
        let items: Vec<u32> = labels
            .iter()
            .enumerate()
            .map(|(i, &l)| 1000 * l as u32 + i as u32)
            .collect();
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let sample = stratified_with_rng(&items, &labels, target, &mut rng);

        prop_assert!(is_submultiset(&sample, &items));
        for label in 0u8..5 {
            let present = labels.contains(&label);
            let drawn = sample.iter().any(|v| v / 1000 == label as u32);
            prop_assert_eq!(present, drawn);
        }
        prop_assert!(sample.len() >= std::cmp::min(target, items.len()));
    }

    #[test]
    fn prop_haphazard_is_permutation_prefix(
        items in prop::collection::vec(0u32..100, 1..40),
        k in 1usize..60,
        seed in any::<u64>(),
    ) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let sample = haphazard_sample_with_rng(&items, k, &mut rng);
        prop_assert_eq!(sample.len(), std::cmp::min(k, items.len()));
        prop_assert!(is_submultiset(&sample, &items));
    }

    #[test]
    fn prop_convenience_is_prefix(
        items in prop::collection::vec(0u32..100, 0..40),
        k in 0usize..60,
    ) {
        let sample = convenience_sample(&items, k);
        let expected: Vec<u32> = items.iter().copied().take(k).collect();
        prop_assert_eq!(sample, expected);
    }

    #[test]
    fn prop_quota_sizes(
        groups in prop::collection::vec(prop::collection::vec(0u32..100, 0..10), 1..6),
        quotas in prop::collection::vec(0usize..12, 1..6),
    ) {
        let population: IndexMap<usize, Vec<u32>> = groups.into_iter().enumerate().collect();
        let table: IndexMap<usize, usize> = quotas.into_iter().enumerate().collect();
        let sample = quota_sample(&population, &table);

        let expected: usize = population
            .iter()
            .map(|(label, group)| table.get(label).map_or(0, |&q| q.min(group.len())))
            .sum();
        prop_assert_eq!(sample.len(), expected);
    }
}
