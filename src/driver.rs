// Comparison driver: run every algorithm against an independent copy of
// one reference dataset and collect the timings in the fixed order.

use crate::algorithm::Algorithm;
use crate::error::SortBenchError;
use crate::harness::{measure, Measurement};

/// Run all six algorithms, each against a private copy of `reference`,
/// sequentially and in `Algorithm::ALL` order. The copy happens outside
/// the timed window. A failed run aborts the whole comparison; results
/// already computed are dropped rather than reported partially.
pub fn run_all(reference: &[i32]) -> Result<Vec<Measurement>, SortBenchError> {
    let mut results = Vec::with_capacity(Algorithm::ALL.len());
    for algorithm in Algorithm::ALL {
        let mut working_copy = make_working_copy(reference)?;
        results.push(measure(algorithm, &mut working_copy)?);
    }
    Ok(results)
}

fn make_working_copy(reference: &[i32]) -> Result<Vec<i32>, SortBenchError> {
    let mut copy: Vec<i32> = Vec::new();
    copy.try_reserve_exact(reference.len())
        .map_err(|source| SortBenchError::allocation("working copy", source))?;
    copy.extend_from_slice(reference);
    Ok(copy)
}
