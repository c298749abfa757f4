//! Diagnostics for degenerate sampling requests.
//!
//! Sampling operations are fail-soft: they never return these errors, they
//! return an empty sample instead. The `check_*` preflights are public so a
//! caller can find out why a sample came back empty.

use thiserror::Error;
use tracing::debug;

/// Why a sampling request cannot produce any elements.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SamplingError {
    #[error("population is empty")]
    EmptyPopulation,
    #[error("requested sample size is zero")]
    ZeroSampleSize,
    #[error("label count ({labels}) does not match population size ({population})")]
    LabelLengthMismatch { population: usize, labels: usize },
    #[error("quota table is empty")]
    EmptyQuotaTable,
    #[error("OS entropy unavailable: {0}")]
    EntropyUnavailable(String),
}

/// Preflight shared by every size-driven operation.
pub fn check_sample_request(population_len: usize, sample_size: usize) -> Result<(), SamplingError> {
    if population_len == 0 {
        return Err(SamplingError::EmptyPopulation);
    }
    if sample_size == 0 {
        return Err(SamplingError::ZeroSampleSize);
    }
    Ok(())
}

/// Preflight for label-parallel operations.
pub fn check_labels(population_len: usize, labels_len: usize) -> Result<(), SamplingError> {
    if population_len == 0 {
        return Err(SamplingError::EmptyPopulation);
    }
    if population_len != labels_len {
        return Err(SamplingError::LabelLengthMismatch {
            population: population_len,
            labels: labels_len,
        });
    }
    Ok(())
}

/// Preflight for quota sampling.
pub fn check_quotas(population_len: usize, quotas_empty: bool) -> Result<(), SamplingError> {
    if population_len == 0 {
        return Err(SamplingError::EmptyPopulation);
    }
    if quotas_empty {
        return Err(SamplingError::EmptyQuotaTable);
    }
    Ok(())
}

/// Log a failed preflight and hand back the empty sample.
pub(crate) fn degenerate<T>(operation: &'static str, err: SamplingError) -> Vec<T> {
    debug!(operation, error = %err, "degenerate input, returning empty sample");
    Vec::new()
}
