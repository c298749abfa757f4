//! Probability sampling: simple random, systematic, stratified.
//!
//! Notes:
//! - Each operation has a `*_with_rng` form for deterministic tests. The plain
//!   form draws from [`thread_source`].
//! - Degenerate input (empty population, zero size, label length mismatch)
//!   yields an empty sample. Oversized requests are clamped.

use std::cmp::Ordering;
use std::hash::Hash;

use indexmap::IndexMap;
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::trace;

use crate::apportion::apportion;
use crate::error::{check_labels, check_sample_request, degenerate};
use crate::population::{GroupedPopulation, Population};
use crate::random::thread_source;
use crate::reservoir::select_without_replacement;

/// Uniform sample of `min(sample_size, n)` elements without replacement.
pub fn simple_random<P>(population: &P, sample_size: usize) -> Vec<P::Item>
where
    P: Population + ?Sized,
    P::Item: Clone,
{
    let mut rng = thread_source();
    simple_random_with_rng(population, sample_size, &mut rng)
}

/// [`simple_random`] with a caller-supplied RNG.
///
/// Single reservoir pass over the population, then a full shuffle of the
/// selection so its order carries no trace of scan position.
pub fn simple_random_with_rng<P, R>(population: &P, sample_size: usize, rng: &mut R) -> Vec<P::Item>
where
    P: Population + ?Sized,
    P::Item: Clone,
    R: Rng + ?Sized,
{
    if let Err(err) = check_sample_request(population.len(), sample_size) {
        return degenerate("simple_random", err);
    }

    let k = sample_size.min(population.len());
    let mut out: Vec<P::Item> = select_without_replacement(population.iter(), k, rng)
        .into_iter()
        .cloned()
        .collect();
    out.shuffle(rng);
    out
}

/// Every `n / sample_count`-th element, in caller order, from a random start.
pub fn systematic<P>(population: &P, sample_count: usize) -> Vec<P::Item>
where
    P: Population + ?Sized,
    P::Item: Clone,
{
    let mut rng = thread_source();
    systematic_with_rng(population, sample_count, &mut rng)
}

/// [`systematic`] with a caller-supplied RNG.
///
/// With `step = n / sample_count`:
/// - the start is uniform in `[0, step - 1]` when `step > 1`, else 0;
/// - the walk visits `start, start + step, start + 2*step, ...` while `< n`;
/// - if `sample_count > n` the stride is 1 and the whole population comes back.
///
/// The result holds `ceil((n - start) / step)` elements, which can be one more
/// than `sample_count` when `step` does not divide `n`.
pub fn systematic_with_rng<P, R>(population: &P, sample_count: usize, rng: &mut R) -> Vec<P::Item>
where
    P: Population + ?Sized,
    P::Item: Clone,
    R: Rng + ?Sized,
{
    if let Err(err) = check_sample_request(population.len(), sample_count) {
        return degenerate("systematic", err);
    }

    let n = population.len();
    let step = n / sample_count;
    let start = if step > 1 {
        rng.random_range(0..step.min(n))
    } else {
        0
    };
    trace!(n, step, start, "systematic walk");

    (start..n)
        .step_by(step.max(1))
        .filter_map(|idx| population.get(idx).cloned())
        .collect()
}

/// [`systematic`] over an ascending-sorted copy of the population.
///
/// Values that do not compare (e.g. NaN) are treated as equal to anything.
pub fn systematic_sorted<P>(population: &P, sample_count: usize) -> Vec<P::Item>
where
    P: Population + ?Sized,
    P::Item: Clone + PartialOrd,
{
    let mut rng = thread_source();
    systematic_sorted_with_rng(population, sample_count, &mut rng)
}

/// [`systematic_sorted`] with a caller-supplied RNG.
pub fn systematic_sorted_with_rng<P, R>(
    population: &P,
    sample_count: usize,
    rng: &mut R,
) -> Vec<P::Item>
where
    P: Population + ?Sized,
    P::Item: Clone + PartialOrd,
    R: Rng + ?Sized,
{
    if let Err(err) = check_sample_request(population.len(), sample_count) {
        return degenerate("systematic_sorted", err);
    }

    let mut sorted: Vec<P::Item> = population.iter().cloned().collect();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
    systematic_with_rng(&sorted, sample_count, rng)
}

/// Stratified sample of a flat population; `labels[i]` is the stratum of
/// element `i`.
pub fn stratified<P, L>(population: &P, labels: &[L], sample_size: usize) -> Vec<P::Item>
where
    P: Population + ?Sized,
    P::Item: Clone,
    L: Hash + Eq,
{
    let mut rng = thread_source();
    stratified_with_rng(population, labels, sample_size, &mut rng)
}

/// [`stratified`] with a caller-supplied RNG.
///
/// Strata are formed in first-appearance order of their labels, quotas come
/// from [`apportion`], and each stratum is sampled without replacement. The
/// concatenated draws are shuffled once at the end.
///
/// The result can be larger than `sample_size`: every non-empty stratum
/// contributes at least one element.
pub fn stratified_with_rng<P, L, R>(
    population: &P,
    labels: &[L],
    sample_size: usize,
    rng: &mut R,
) -> Vec<P::Item>
where
    P: Population + ?Sized,
    P::Item: Clone,
    L: Hash + Eq,
    R: Rng + ?Sized,
{
    let preflight = check_labels(population.len(), labels.len())
        .and_then(|()| check_sample_request(population.len(), sample_size));
    if let Err(err) = preflight {
        return degenerate("stratified", err);
    }

    let mut strata: IndexMap<&L, Vec<usize>> = IndexMap::new();
    for (idx, label) in labels.iter().enumerate() {
        strata.entry(label).or_default().push(idx);
    }

    let allocation = apportion(strata.values().map(Vec::len).enumerate(), sample_size);

    let mut out = Vec::with_capacity(allocation.total());
    for (stratum, members) in strata.values().enumerate() {
        let quota = allocation.quota(&stratum).unwrap_or(0);
        let elements = members.iter().filter_map(|&idx| population.get(idx));
        out.extend(select_without_replacement(elements, quota, rng).into_iter().cloned());
    }

    out.shuffle(rng);
    out
}

/// Stratified sample where each group of `population` is a stratum.
pub fn stratified_grouped<G>(population: &G, sample_size: usize) -> Vec<G::Item>
where
    G: GroupedPopulation + ?Sized,
    G::Item: Clone,
{
    let mut rng = thread_source();
    stratified_grouped_with_rng(population, sample_size, &mut rng)
}

/// [`stratified_grouped`] with a caller-supplied RNG.
///
/// Leftover units go to strata in the mapping's iteration order on ties, so
/// with a `HashMap` that part is arbitrary.
pub fn stratified_grouped_with_rng<G, R>(population: &G, sample_size: usize, rng: &mut R) -> Vec<G::Item>
where
    G: GroupedPopulation + ?Sized,
    G::Item: Clone,
    R: Rng + ?Sized,
{
    if let Err(err) = check_sample_request(population.total_len(), sample_size) {
        return degenerate("stratified_grouped", err);
    }

    let allocation = apportion(
        population.groups().map(|(_, group)| group.len()).enumerate(),
        sample_size,
    );

    let mut out = Vec::with_capacity(allocation.total());
    for (stratum, (_, group)) in population.groups().enumerate() {
        let quota = allocation.quota(&stratum).unwrap_or(0);
        out.extend(select_without_replacement(group.iter(), quota, rng).into_iter().cloned());
    }

    out.shuffle(rng);
    out
}
