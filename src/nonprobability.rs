//! Non-probability sampling: quota, haphazard, convenience.
//!
//! Quota and convenience sampling are positional and fully deterministic for
//! a deterministically ordered population. Haphazard sampling shuffles a copy
//! of the population and keeps a prefix.

use std::hash::Hash;

use indexmap::IndexMap;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::{check_labels, check_quotas, check_sample_request, degenerate};
use crate::population::{GroupedPopulation, Population, QuotaTable};
use crate::random::thread_source;

/// The first `min(quota, group size)` elements of every group that has a
/// quota, concatenated in the population's group order.
///
/// Groups without a quota are skipped; quota labels with no matching group
/// are ignored.
pub fn quota_sample<G, Q>(population: &G, quotas: &Q) -> Vec<G::Item>
where
    G: GroupedPopulation + ?Sized,
    G::Item: Clone,
    Q: QuotaTable<G::Label> + ?Sized,
{
    if let Err(err) = check_quotas(population.total_len(), quotas.is_empty()) {
        return degenerate("quota_sample", err);
    }

    let mut out = Vec::new();
    for (label, group) in population.groups() {
        let Some(quota) = quotas.quota(label) else {
            continue;
        };
        if group.is_empty() {
            continue;
        }
        out.extend(group.iter().take(quota).cloned());
    }
    out
}

/// [`quota_sample`] over a flat population with a parallel label slice.
///
/// Groups are formed in first-appearance order of their labels and keep the
/// population order inside each group.
pub fn quota_sample_by_labels<P, L, Q>(population: &P, labels: &[L], quotas: &Q) -> Vec<P::Item>
where
    P: Population + ?Sized,
    P::Item: Clone,
    L: Hash + Eq,
    Q: QuotaTable<L> + ?Sized,
{
    let preflight = check_labels(population.len(), labels.len())
        .and_then(|()| check_quotas(population.len(), quotas.is_empty()));
    if let Err(err) = preflight {
        return degenerate("quota_sample_by_labels", err);
    }

    let mut groups: IndexMap<&L, Vec<usize>> = IndexMap::new();
    for (idx, label) in labels.iter().enumerate() {
        groups.entry(label).or_default().push(idx);
    }

    let mut out = Vec::new();
    for (label, members) in &groups {
        let Some(quota) = quotas.quota(label) else {
            continue;
        };
        out.extend(
            members
                .iter()
                .take(quota)
                .filter_map(|&idx| population.get(idx).cloned()),
        );
    }
    out
}

/// Shuffle a copy of the population and keep the first `sample_size`
/// elements (all of them if `sample_size >= n`).
pub fn haphazard_sample<P>(population: &P, sample_size: usize) -> Vec<P::Item>
where
    P: Population + ?Sized,
    P::Item: Clone,
{
    let mut rng = thread_source();
    haphazard_sample_with_rng(population, sample_size, &mut rng)
}

/// [`haphazard_sample`] with a caller-supplied RNG.
pub fn haphazard_sample_with_rng<P, R>(population: &P, sample_size: usize, rng: &mut R) -> Vec<P::Item>
where
    P: Population + ?Sized,
    P::Item: Clone,
    R: Rng + ?Sized,
{
    if let Err(err) = check_sample_request(population.len(), sample_size) {
        return degenerate("haphazard_sample", err);
    }
    shuffled_prefix(population.iter().cloned().collect(), sample_size, rng)
}

/// [`haphazard_sample`] over every element of every group.
pub fn haphazard_sample_grouped<G>(population: &G, sample_size: usize) -> Vec<G::Item>
where
    G: GroupedPopulation + ?Sized,
    G::Item: Clone,
{
    let mut rng = thread_source();
    haphazard_sample_grouped_with_rng(population, sample_size, &mut rng)
}

/// [`haphazard_sample_grouped`] with a caller-supplied RNG.
pub fn haphazard_sample_grouped_with_rng<G, R>(
    population: &G,
    sample_size: usize,
    rng: &mut R,
) -> Vec<G::Item>
where
    G: GroupedPopulation + ?Sized,
    G::Item: Clone,
    R: Rng + ?Sized,
{
    let total = population.total_len();
    if let Err(err) = check_sample_request(total, sample_size) {
        return degenerate("haphazard_sample_grouped", err);
    }

    let mut pool = Vec::with_capacity(total);
    for (_, group) in population.groups() {
        pool.extend(group.iter().cloned());
    }
    shuffled_prefix(pool, sample_size, rng)
}

fn shuffled_prefix<T, R: Rng + ?Sized>(mut pool: Vec<T>, sample_size: usize, rng: &mut R) -> Vec<T> {
    pool.shuffle(rng);
    pool.truncate(sample_size);
    pool
}

/// The first `min(sample_size, n)` elements, in population order.
pub fn convenience_sample<P>(population: &P, sample_size: usize) -> Vec<P::Item>
where
    P: Population + ?Sized,
    P::Item: Clone,
{
    if let Err(err) = check_sample_request(population.len(), sample_size) {
        return degenerate("convenience_sample", err);
    }
    population.iter().take(sample_size).cloned().collect()
}

/// The first `sample_size` elements met while walking the groups in mapping
/// order.
pub fn convenience_sample_grouped<G>(population: &G, sample_size: usize) -> Vec<G::Item>
where
    G: GroupedPopulation + ?Sized,
    G::Item: Clone,
{
    if let Err(err) = check_sample_request(population.total_len(), sample_size) {
        return degenerate("convenience_sample_grouped", err);
    }
    population
        .groups()
        .flat_map(|(_, group)| group.iter())
        .take(sample_size)
        .cloned()
        .collect()
}
