//! `hyohon`: survey sampling over in-memory populations.
//!
//! Draws a subset of a requested size from a flat population, or from a
//! population partitioned into labelled groups (strata), using the classic
//! survey-methodology strategies.
//!
//! Exposed modules:
//! - `probability`: simple random, systematic (caller order or sorted), stratified.
//! - `nonprobability`: quota, haphazard, convenience.
//! - `apportion`: largest-remainder allocation of a total across groups.
//! - `reservoir`: single-pass selection without replacement.
//! - `population`: the container traits every algorithm is written against.
//! - `random`: the lazily seeded per-thread random source.
//! - `sampler`: a configured front-end (optional fixed seed).
//!
//! Operations are fail-soft: degenerate input gives an empty sample and
//! oversized requests are clamped. See [`SamplingError`] for the preflight
//! checks behind that.
//!
//! ```
//! use hyohon::{convenience_sample, simple_random};
//!
//! let data = vec![10, 11, 12, 13, 20, 21, 22, 23, 24, 30];
//! assert_eq!(simple_random(&data, 4).len(), 4);
//! assert_eq!(convenience_sample(&data, 3), vec![10, 11, 12]);
//! ```

#![forbid(unsafe_code)]

pub mod apportion;
mod error;
pub mod nonprobability;
pub mod population;
pub mod probability;
pub mod random;
pub mod reservoir;
pub mod sampler;

pub use apportion::{apportion, Allocation};
pub use error::{check_labels, check_quotas, check_sample_request, SamplingError};
pub use nonprobability::{
    convenience_sample, convenience_sample_grouped, haphazard_sample, haphazard_sample_grouped,
    haphazard_sample_grouped_with_rng, haphazard_sample_with_rng, quota_sample,
    quota_sample_by_labels,
};
pub use population::{GroupedPopulation, Population, QuotaTable};
pub use probability::{
    simple_random, simple_random_with_rng, stratified, stratified_grouped,
    stratified_grouped_with_rng, stratified_with_rng, systematic, systematic_sorted,
    systematic_sorted_with_rng, systematic_with_rng,
};
pub use random::{thread_source, ThreadSource};
pub use reservoir::{select_without_replacement, Reservoir};
pub use sampler::Sampler;
