use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of uniformly random indices for canned-reply selection.
///
/// Implementations must be safe to call from several threads at once.
pub trait IndexPicker: Send + Sync {
    /// Returns an index in `0..len`. `len` is never zero for the built-in tables;
    /// implementations return 0 when it is.
    fn pick(&self, len: usize) -> usize;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRngPicker;

impl IndexPicker for ThreadRngPicker {
    fn pick(&self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        rand::thread_rng().gen_range(0..len)
    }
}

/// Reproducible picker backed by a seeded `StdRng`.
#[derive(Debug)]
pub struct SeededPicker {
    rng: Mutex<StdRng>,
}

impl SeededPicker {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl IndexPicker for SeededPicker {
    fn pick(&self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        self.rng.lock().gen_range(0..len)
    }
}

/// Always returns the same index, clamped to the table length.
#[derive(Debug, Clone, Copy)]
pub struct FixedPicker(pub usize);

impl IndexPicker for FixedPicker {
    fn pick(&self, len: usize) -> usize {
        self.0.min(len.saturating_sub(1))
    }
}
