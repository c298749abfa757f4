//! Largest-remainder apportionment.
//!
//! Turns group sizes `s_1..s_k` (sum `N`) and a target total `T` into integer
//! quotas:
//!
//! 1. exact share `t_i = T * s_i / N`, base quota `floor(t_i)`;
//! 2. every non-empty group gets at least 1;
//! 3. the `T - Σ base` leftover units go, one each, to the groups with the
//!    largest fractional remainder `t_i - base_i` (ties: encounter order);
//! 4. each quota is clamped to its group size.
//!
//! Step 2 runs before the leftover is computed, so with many small groups the
//! quotas can sum to more than `T` (even when `T == 0`). That is intended:
//! stratified callers rely on every non-empty stratum being represented.
//! [`Allocation::overshoot`] reports by how much.

use std::hash::Hash;

use indexmap::IndexMap;
use tracing::trace;

/// Per-label quotas produced by [`apportion`], in input label order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Allocation<K: Hash + Eq> {
    quotas: IndexMap<K, usize>,
    target: usize,
}

impl<K: Hash + Eq> Allocation<K> {
    fn empty(target: usize) -> Self {
        Self {
            quotas: IndexMap::new(),
            target,
        }
    }

    /// Quota assigned to `label`.
    pub fn quota(&self, label: &K) -> Option<usize> {
        self.quotas.get(label).copied()
    }

    /// `(label, quota)` pairs in input order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, usize)> {
        self.quotas.iter().map(|(label, &q)| (label, q))
    }

    /// Sum of all quotas.
    pub fn total(&self) -> usize {
        self.quotas.values().sum()
    }

    /// The requested total.
    pub fn target(&self) -> usize {
        self.target
    }

    /// How far [`total`](Self::total) exceeds the target because of the
    /// one-per-group minimum.
    pub fn overshoot(&self) -> usize {
        self.total().saturating_sub(self.target)
    }

    /// Number of groups (empty ones included).
    pub fn len(&self) -> usize {
        self.quotas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quotas.is_empty()
    }
}

/// Apportion `target` units across groups of the given sizes.
///
/// Repeated labels are merged by summing their sizes. Groups of size 0 keep a
/// quota of 0. If all groups are empty the allocation is empty.
pub fn apportion<K, I>(sizes: I, target: usize) -> Allocation<K>
where
    K: Hash + Eq,
    I: IntoIterator<Item = (K, usize)>,
{
    let mut groups: IndexMap<K, usize> = IndexMap::new();
    for (label, size) in sizes {
        *groups.entry(label).or_insert(0) += size;
    }

    let population: usize = groups.values().sum();
    if population == 0 {
        return Allocation::empty(target);
    }

    let mut base = Vec::with_capacity(groups.len());
    // (group index, fractional remainder); empty groups never rank.
    let mut remainders: Vec<(usize, f64)> = Vec::with_capacity(groups.len());

    for (idx, &size) in groups.values().enumerate() {
        if size == 0 {
            base.push(0);
            continue;
        }
        let exact = target as f64 * size as f64 / population as f64;
        let mut quota = exact.floor() as usize;
        if quota == 0 {
            quota = 1;
        }
        remainders.push((idx, exact - quota as f64));
        base.push(quota);
    }

    let assigned: usize = base.iter().sum();
    let leftover = target.saturating_sub(assigned);

    // Stable: equal remainders keep encounter order.
    remainders.sort_by(|a, b| b.1.total_cmp(&a.1));
    for &(idx, _) in remainders.iter().take(leftover) {
        base[idx] += 1;
    }

    let quotas: IndexMap<K, usize> = groups
        .into_iter()
        .zip(base)
        .map(|((label, size), quota)| (label, quota.min(size)))
        .collect();

    let allocation = Allocation { quotas, target };
    trace!(
        groups = allocation.len(),
        target,
        total = allocation.total(),
        "apportioned sample across groups"
    );
    allocation
}
