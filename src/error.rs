// Error taxonomy for the comparator.
//
// The domain is a closed arithmetic operation over in-memory integers, so
// the taxonomy is narrow: allocation can fail (merge buffers, dataset
// storage) and a generator bound can be nonsensical. Empty or inverted
// ranges are valid no-op base cases for the recursive sorts, not errors.

use std::collections::TryReserveError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SortBenchError {
    #[error("failed to allocate {context}: {source}")]
    Allocation {
        context: &'static str,
        source: TryReserveError,
    },

    #[error("value bound must be positive, got {bound}")]
    InvalidBound { bound: i32 },
}

impl SortBenchError {
    pub fn allocation(context: &'static str, source: TryReserveError) -> Self {
        Self::Allocation { context, source }
    }
}
