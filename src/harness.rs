// Fair-measurement harness.
//
// The timed window covers exactly the algorithm's execution: the caller
// copies the reference dataset beforehand, so allocation and copy cost
// never leak into the measurement.

use std::time::{Duration, Instant};

use crate::algorithm::Algorithm;
use crate::error::SortBenchError;

/// One timed run: which algorithm, and how long it took. Rendered and
/// dropped; never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Measurement {
    pub algorithm: Algorithm,
    pub elapsed: Duration,
}

impl Measurement {
    pub fn seconds(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }
}

/// Time `algorithm` sorting `data` in place. `Instant` is monotonic, so
/// elapsed is always non-negative. The sorted slice is a byproduct the
/// caller may inspect or discard; on error the measurement is discarded.
pub fn measure(algorithm: Algorithm, data: &mut [i32]) -> Result<Measurement, SortBenchError> {
    let start = Instant::now();
    algorithm.sort(data)?;
    let elapsed = start.elapsed();
    Ok(Measurement { algorithm, elapsed })
}
