//! Thread-exclusive random source.
//!
//! Each thread lazily builds its own `StdRng` the first time it asks for one,
//! seeded from OS entropy XOR-mixed with a nanosecond clock reading. Handles
//! are `!Send`, so a generator never leaves the thread that created it and no
//! locking is needed.
//!
//! Every sampling operation also has a `*_with_rng` form; pass any `Rng` there
//! (e.g. a seeded `ChaCha8Rng`) to make a run reproducible.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::{SystemTime, UNIX_EPOCH};

use rand::rngs::{OsRng, StdRng};
use rand::{RngCore, SeedableRng, TryRngCore};
use tracing::warn;

use crate::error::SamplingError;

thread_local! {
    static THREAD_SOURCE: Rc<RefCell<StdRng>> = Rc::new(RefCell::new(StdRng::from_seed(entropy_seed())));
}

/// Handle to the calling thread's generator.
///
/// Cheap to clone; all clones on one thread share a single generator state.
#[derive(Clone, Debug)]
pub struct ThreadSource {
    rng: Rc<RefCell<StdRng>>,
}

/// The calling thread's random source, created on first use.
pub fn thread_source() -> ThreadSource {
    ThreadSource {
        rng: THREAD_SOURCE.with(Rc::clone),
    }
}

impl RngCore for ThreadSource {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        self.rng.borrow_mut().next_u32()
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        self.rng.borrow_mut().next_u64()
    }

    #[inline]
    fn fill_bytes(&mut self, dst: &mut [u8]) {
        self.rng.borrow_mut().fill_bytes(dst)
    }
}

fn os_entropy(seed: &mut [u8]) -> Result<(), SamplingError> {
    OsRng
        .try_fill_bytes(seed)
        .map_err(|err| SamplingError::EntropyUnavailable(err.to_string()))
}

/// 32 seed bytes: OS entropy with the wall clock folded in, so threads started
/// back to back still diverge if the OS source is weak.
fn entropy_seed() -> [u8; 32] {
    let mut seed = [0u8; 32];
    if let Err(err) = os_entropy(&mut seed) {
        warn!(error = %err, "seeding thread random source from clock only");
    }

    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or_default();
    for (i, byte) in seed.iter_mut().enumerate() {
        *byte ^= (nanos >> ((i % 16) * 8)) as u8;
    }
    seed
}
