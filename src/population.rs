//! Read-only views over the data being sampled.
//!
//! The sampling algorithms are written once against these traits; concrete
//! containers are adapted here.
//!
//! - [`Population`]: an ordered, indexable sequence.
//! - [`GroupedPopulation`]: label → `Population`, iterated in mapping order.
//! - [`QuotaTable`]: label → requested count.
//!
//! Iteration order of a grouped population drives tie-breaking in
//! apportionment and the output order of quota/convenience sampling. Use
//! `IndexMap` (insertion order) or `BTreeMap` (key order) when that order has
//! to be reproducible; `HashMap` order is arbitrary.

use std::collections::{BTreeMap, HashMap, VecDeque};
use std::hash::{BuildHasher, Hash};

use indexmap::IndexMap;

/// An ordered, finite, indexable sequence of elements.
pub trait Population {
    type Item;

    /// Number of elements.
    fn len(&self) -> usize;

    /// Element at `index`, in O(1).
    fn get(&self, index: usize) -> Option<&Self::Item>;

    /// Elements in population order.
    fn iter(&self) -> impl Iterator<Item = &Self::Item>;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T> Population for [T] {
    type Item = T;

    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    fn get(&self, index: usize) -> Option<&T> {
        <[T]>::get(self, index)
    }

    fn iter(&self) -> impl Iterator<Item = &T> {
        <[T]>::iter(self)
    }
}

impl<T, const N: usize> Population for [T; N] {
    type Item = T;

    fn len(&self) -> usize {
        N
    }

    fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }

    fn iter(&self) -> impl Iterator<Item = &T> {
        self.as_slice().iter()
    }
}

impl<T> Population for Vec<T> {
    type Item = T;

    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }

    fn iter(&self) -> impl Iterator<Item = &T> {
        self.as_slice().iter()
    }
}

impl<T> Population for VecDeque<T> {
    type Item = T;

    fn len(&self) -> usize {
        VecDeque::len(self)
    }

    fn get(&self, index: usize) -> Option<&T> {
        VecDeque::get(self, index)
    }

    fn iter(&self) -> impl Iterator<Item = &T> {
        VecDeque::iter(self)
    }
}

/// A mapping from a label to a [`Population`].
///
/// Empty groups still appear in [`groups`](GroupedPopulation::groups).
pub trait GroupedPopulation {
    type Label;
    type Item;
    type Group: Population<Item = Self::Item> + ?Sized;

    /// `(label, group)` pairs in mapping order.
    fn groups(&self) -> impl Iterator<Item = (&Self::Label, &Self::Group)>;

    /// The group stored under `label`.
    fn group(&self, label: &Self::Label) -> Option<&Self::Group>;

    /// Total number of elements across all groups.
    fn total_len(&self) -> usize {
        self.groups().map(|(_, group)| group.len()).sum()
    }
}

impl<K, P, S> GroupedPopulation for IndexMap<K, P, S>
where
    K: Hash + Eq,
    P: Population,
    S: BuildHasher,
{
    type Label = K;
    type Item = P::Item;
    type Group = P;

    fn groups(&self) -> impl Iterator<Item = (&K, &P)> {
        IndexMap::iter(self)
    }

    fn group(&self, label: &K) -> Option<&P> {
        IndexMap::get(self, label)
    }
}

impl<K, P> GroupedPopulation for BTreeMap<K, P>
where
    K: Ord,
    P: Population,
{
    type Label = K;
    type Item = P::Item;
    type Group = P;

    fn groups(&self) -> impl Iterator<Item = (&K, &P)> {
        BTreeMap::iter(self)
    }

    fn group(&self, label: &K) -> Option<&P> {
        BTreeMap::get(self, label)
    }
}

impl<K, P, S> GroupedPopulation for HashMap<K, P, S>
where
    K: Hash + Eq,
    P: Population,
    S: BuildHasher,
{
    type Label = K;
    type Item = P::Item;
    type Group = P;

    fn groups(&self) -> impl Iterator<Item = (&K, &P)> {
        HashMap::iter(self)
    }

    fn group(&self, label: &K) -> Option<&P> {
        HashMap::get(self, label)
    }
}

/// Requested per-label counts for quota sampling.
pub trait QuotaTable<K> {
    /// Quota for `label`, if one was requested.
    fn quota(&self, label: &K) -> Option<usize>;

    fn is_empty(&self) -> bool;
}

impl<K, S> QuotaTable<K> for IndexMap<K, usize, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
    fn quota(&self, label: &K) -> Option<usize> {
        IndexMap::get(self, label).copied()
    }

    fn is_empty(&self) -> bool {
        IndexMap::is_empty(self)
    }
}

impl<K: Ord> QuotaTable<K> for BTreeMap<K, usize> {
    fn quota(&self, label: &K) -> Option<usize> {
        BTreeMap::get(self, label).copied()
    }

    fn is_empty(&self) -> bool {
        BTreeMap::is_empty(self)
    }
}

impl<K, S> QuotaTable<K> for HashMap<K, usize, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
    fn quota(&self, label: &K) -> Option<usize> {
        HashMap::get(self, label).copied()
    }

    fn is_empty(&self) -> bool {
        HashMap::is_empty(self)
    }
}
