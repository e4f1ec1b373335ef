// Algorithm selection as an enum dispatch table.
//
// The comparator always reports in one fixed order, so the order of
// `Algorithm::ALL` is part of the interface.

use std::fmt;

use crate::error::SortBenchError;
use crate::sorts;

/// One of the six comparison sorts, exposing the single capability the
/// harness needs: sort a slice of integers in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Bubble,
    Selection,
    Insertion,
    Shell,
    Merge,
    Quick,
}

impl Algorithm {
    /// Every algorithm, in the fixed reporting order.
    pub const ALL: [Algorithm; 6] = [
        Algorithm::Bubble,
        Algorithm::Selection,
        Algorithm::Insertion,
        Algorithm::Shell,
        Algorithm::Merge,
        Algorithm::Quick,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Bubble => "Bubble Sort",
            Algorithm::Selection => "Selection Sort",
            Algorithm::Insertion => "Insertion Sort",
            Algorithm::Shell => "Shell Sort",
            Algorithm::Merge => "Merge Sort",
            Algorithm::Quick => "Quick Sort",
        }
    }

    /// Sort `data` ascending, in place. Only merge sort allocates, so only
    /// merge sort can fail.
    pub fn sort(&self, data: &mut [i32]) -> Result<(), SortBenchError> {
        match self {
            Algorithm::Bubble => sorts::bubble_sort(data),
            Algorithm::Selection => sorts::selection_sort(data),
            Algorithm::Insertion => sorts::insertion_sort(data),
            Algorithm::Shell => sorts::shell_sort(data),
            Algorithm::Merge => sorts::merge_sort(data)?,
            Algorithm::Quick => sorts::quick_sort(data),
        }
        Ok(())
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
