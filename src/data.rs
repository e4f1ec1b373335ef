// The reference dataset every comparison run is measured against.
//
// The dataset is an explicit value the driver owns and threads through;
// there is no module-level state.

use rand::Rng;

use crate::error::SortBenchError;

/// Default element count, large enough that the O(n²) sorts are visibly
/// slower than the O(n log n) ones.
pub const DEFAULT_LEN: usize = 20_000;

/// Values are drawn uniformly from `[0, DEFAULT_BOUND)`.
pub const DEFAULT_BOUND: i32 = 10_000;

/// A randomly generated sequence of integers plus the bound it was drawn
/// from. Regenerated wholesale on resize.
#[derive(Debug, Clone)]
pub struct Dataset {
    values: Vec<i32>,
    bound: i32,
}

impl Dataset {
    /// Generate `len` integers uniformly from `[0, bound)`. Seeding comes
    /// from the thread RNG, so runs are not reproducible across invocations.
    pub fn generate(len: usize, bound: i32) -> Result<Self, SortBenchError> {
        if bound <= 0 {
            return Err(SortBenchError::InvalidBound { bound });
        }
        let mut values: Vec<i32> = Vec::new();
        values
            .try_reserve_exact(len)
            .map_err(|source| SortBenchError::allocation("dataset storage", source))?;

        let mut rng = rand::thread_rng();
        values.extend((0..len).map(|_| rng.gen_range(0..bound)));
        Ok(Self { values, bound })
    }

    /// Replace the dataset with a fresh one of the requested length, drawn
    /// from the same bound.
    pub fn resize(&mut self, len: usize) -> Result<(), SortBenchError> {
        *self = Self::generate(len, self.bound)?;
        Ok(())
    }

    pub fn values(&self) -> &[i32] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn bound(&self) -> i32 {
        self.bound
    }
}
