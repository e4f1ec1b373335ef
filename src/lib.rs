//! Interactive comparator for six classic in-memory sorting algorithms.
//!
//! The core is the set of algorithm implementations plus a fair-measurement
//! harness: every algorithm is timed against an independent copy of the
//! same randomly generated reference dataset, so the timings differ only by
//! algorithm. The binary wraps this in a small menu loop.

pub mod algorithm;
pub mod data;
pub mod driver;
pub mod error;
pub mod harness;
pub mod sorts;

pub use algorithm::Algorithm;
pub use data::{Dataset, DEFAULT_BOUND, DEFAULT_LEN};
pub use driver::run_all;
pub use error::SortBenchError;
pub use harness::{measure, Measurement};
