//! Configured front-end over the sampling functions.

use std::hash::Hash;

use rand::prelude::*;

use crate::nonprobability;
use crate::population::{GroupedPopulation, Population, QuotaTable};
use crate::probability;
use crate::random::thread_source;

/// Runs every sampling strategy against one random-source configuration.
///
/// By default each call draws from the calling thread's generator, so results
/// differ call to call. With [`with_seed`](Self::with_seed) each call starts a
/// fresh `StdRng` from that seed and the same input gives the same sample.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Sampler {
    seed: Option<u64>,
}

impl Sampler {
    /// A sampler backed by the thread random source.
    pub fn new() -> Self {
        Self { seed: None }
    }

    /// Set random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    fn rng(&self) -> Box<dyn RngCore> {
        match self.seed {
            Some(s) => Box::new(StdRng::seed_from_u64(s)),
            None => Box::new(thread_source()),
        }
    }

    /// See [`probability::simple_random`].
    pub fn simple_random<P>(&self, population: &P, sample_size: usize) -> Vec<P::Item>
    where
        P: Population + ?Sized,
        P::Item: Clone,
    {
        probability::simple_random_with_rng(population, sample_size, &mut self.rng())
    }

    /// See [`probability::systematic`].
    pub fn systematic<P>(&self, population: &P, sample_count: usize) -> Vec<P::Item>
    where
        P: Population + ?Sized,
        P::Item: Clone,
    {
        probability::systematic_with_rng(population, sample_count, &mut self.rng())
    }

    /// See [`probability::systematic_sorted`].
    pub fn systematic_sorted<P>(&self, population: &P, sample_count: usize) -> Vec<P::Item>
    where
        P: Population + ?Sized,
        P::Item: Clone + PartialOrd,
    {
        probability::systematic_sorted_with_rng(population, sample_count, &mut self.rng())
    }

    /// See [`probability::stratified`].
    pub fn stratified<P, L>(&self, population: &P, labels: &[L], sample_size: usize) -> Vec<P::Item>
    where
        P: Population + ?Sized,
        P::Item: Clone,
        L: Hash + Eq,
    {
        probability::stratified_with_rng(population, labels, sample_size, &mut self.rng())
    }

    /// See [`probability::stratified_grouped`].
    pub fn stratified_grouped<G>(&self, population: &G, sample_size: usize) -> Vec<G::Item>
    where
        G: GroupedPopulation + ?Sized,
        G::Item: Clone,
    {
        probability::stratified_grouped_with_rng(population, sample_size, &mut self.rng())
    }

    /// See [`nonprobability::quota_sample`]. Deterministic; the seed is unused.
    pub fn quota_sample<G, Q>(&self, population: &G, quotas: &Q) -> Vec<G::Item>
    where
        G: GroupedPopulation + ?Sized,
        G::Item: Clone,
        Q: QuotaTable<G::Label> + ?Sized,
    {
        nonprobability::quota_sample(population, quotas)
    }

    /// See [`nonprobability::quota_sample_by_labels`].
    pub fn quota_sample_by_labels<P, L, Q>(&self, population: &P, labels: &[L], quotas: &Q) -> Vec<P::Item>
    where
        P: Population + ?Sized,
        P::Item: Clone,
        L: Hash + Eq,
        Q: QuotaTable<L> + ?Sized,
    {
        nonprobability::quota_sample_by_labels(population, labels, quotas)
    }

    /// See [`nonprobability::haphazard_sample`].
    pub fn haphazard_sample<P>(&self, population: &P, sample_size: usize) -> Vec<P::Item>
    where
        P: Population + ?Sized,
        P::Item: Clone,
    {
        nonprobability::haphazard_sample_with_rng(population, sample_size, &mut self.rng())
    }

    /// See [`nonprobability::haphazard_sample_grouped`].
    pub fn haphazard_sample_grouped<G>(&self, population: &G, sample_size: usize) -> Vec<G::Item>
    where
        G: GroupedPopulation + ?Sized,
        G::Item: Clone,
    {
        nonprobability::haphazard_sample_grouped_with_rng(population, sample_size, &mut self.rng())
    }

    /// See [`nonprobability::convenience_sample`].
    pub fn convenience_sample<P>(&self, population: &P, sample_size: usize) -> Vec<P::Item>
    where
        P: Population + ?Sized,
        P::Item: Clone,
    {
        nonprobability::convenience_sample(population, sample_size)
    }

    /// See [`nonprobability::convenience_sample_grouped`].
    pub fn convenience_sample_grouped<G>(&self, population: &G, sample_size: usize) -> Vec<G::Item>
    where
        G: GroupedPopulation + ?Sized,
        G::Item: Clone,
    {
        nonprobability::convenience_sample_grouped(population, sample_size)
    }
}
