//! Selection without replacement.
//!
//! Keeps a uniform sample of size `k` from a sequence in a single pass, with
//! O(k) extra space: every element ends up in the sample with probability
//! `k / n` and every `k`-subset is equally likely.
//!
//! Uses **Algorithm L** (Li, 1994): once the reservoir is full, draw how many
//! elements to *skip* before the next replacement instead of one random number
//! per element.
//!
//! ## References
//!
//! - Vitter (1985): reservoir sampling "Algorithm R".
//! - Li (1994): reservoir sampling "Algorithm L" (skip-based).

use rand::Rng;

use crate::random::thread_source;

/// A reservoir that keeps a uniform sample of at most `k` items.
#[derive(Debug, Clone)]
pub struct Reservoir<T> {
    k: usize,
    seen: usize,
    samples: Vec<T>,
    skip_counter: usize,
    w: f64,
}

impl<T> Reservoir<T> {
    /// Create a reservoir that keeps at most `k` items.
    pub fn new(k: usize) -> Self {
        Self {
            k,
            seen: 0,
            samples: Vec::with_capacity(k),
            skip_counter: 0,
            w: 0.0,
        }
    }

    /// Offer an item, drawing from this thread's random source.
    #[inline]
    pub fn add(&mut self, item: T) {
        let mut rng = thread_source();
        self.add_with_rng(item, &mut rng);
    }

    /// Offer an item, using a caller-supplied RNG.
    ///
    /// If `k == 0`, every item is discarded.
    #[inline]
    pub fn add_with_rng<R: Rng + ?Sized>(&mut self, item: T, rng: &mut R) {
        self.seen += 1;

        if self.k == 0 {
            return;
        }

        if self.samples.len() < self.k {
            self.samples.push(item);

            if self.samples.len() == self.k {
                // W = exp(log(u) / k)
                self.w = (rng.random::<f64>().ln() / self.k as f64).exp();
                self.update_skip(rng);
            }
            return;
        }

        if self.skip_counter > 0 {
            self.skip_counter -= 1;
            return;
        }

        let replace_idx = rng.random_range(0..self.k);
        self.samples[replace_idx] = item;

        self.w *= (rng.random::<f64>().ln() / self.k as f64).exp();
        self.update_skip(rng);
    }

    /// S = floor(log(U) / log(1 - W)), U ~ Uniform(0, 1).
    fn update_skip<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let u = rng.random::<f64>();
        let denom = (1.0 - self.w).max(1e-10).ln();
        let num = u.max(1e-10).ln();
        let skip = (num / denom).floor();
        self.skip_counter = skip as usize;
    }

    /// The current sample (size ≤ k).
    pub fn samples(&self) -> &[T] {
        &self.samples
    }

    /// Number of items offered so far.
    pub fn seen(&self) -> usize {
        self.seen
    }

    pub fn into_samples(self) -> Vec<T> {
        self.samples
    }
}

/// Select `min(k, n)` items from `items` uniformly without replacement.
///
/// The output order follows reservoir slots, not input order; callers that
/// need an unbiased order shuffle afterwards.
pub fn select_without_replacement<I, R>(items: I, k: usize, rng: &mut R) -> Vec<I::Item>
where
    I: IntoIterator,
    R: Rng + ?Sized,
{
    let mut reservoir = Reservoir::new(k);
    for item in items {
        reservoir.add_with_rng(item, rng);
    }
    reservoir.into_samples()
}
