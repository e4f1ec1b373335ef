// The six sorting algorithms, as textbook slice routines.
//
// Each operates in place and treats slices of length 0 or 1 as a no-op.
// The routines are generic over `T: Ord` (merge additionally needs `Clone`
// for its temporary buffers); the benchmarked surface in `algorithm.rs`
// instantiates them at `i32` only.

use crate::error::SortBenchError;

// ============================================================================
// Elementary O(n²) sorts
// ============================================================================

/// Bubble sort: n−1 full passes of adjacent-pair swaps. Each pass floats the
/// next-largest unsorted element into its final position. Deliberately no
/// early-exit on an already-sorted pass, to keep the baseline honest. Stable.
pub fn bubble_sort<T: Ord>(arr: &mut [T]) {
    let n = arr.len();
    for i in 0..n.saturating_sub(1) {
        for j in 0..n - i - 1 {
            if arr[j] > arr[j + 1] {
                arr.swap(j, j + 1);
            }
        }
    }
}

/// Selection sort: scan the unsorted suffix for its minimum and swap it into
/// place. Exactly n−1 swaps regardless of initial order. Not stable.
pub fn selection_sort<T: Ord>(arr: &mut [T]) {
    let n = arr.len();
    for i in 0..n.saturating_sub(1) {
        let mut min_idx = i;
        for j in i + 1..n {
            if arr[j] < arr[min_idx] {
                min_idx = j;
            }
        }
        arr.swap(i, min_idx);
    }
}

/// Insertion sort: grow a sorted prefix, shifting each new element left
/// until it finds its slot. Stable.
pub fn insertion_sort<T: Ord>(arr: &mut [T]) {
    for i in 1..arr.len() {
        let mut j = i;
        while j > 0 && arr[j - 1] > arr[j] {
            arr.swap(j - 1, j);
            j -= 1;
        }
    }
}

// ============================================================================
// Shell sort
// ============================================================================

/// Gapped insertion passes with the gap sequence n/2, n/4, …, 1 (integer
/// halving, so the loop terminates). Long-distance moves first, then shorter
/// ones, finishing with a plain insertion pass at gap 1. Not stable.
pub fn shell_sort<T: Ord>(arr: &mut [T]) {
    let n = arr.len();
    let mut gap = n / 2;
    while gap > 0 {
        for i in gap..n {
            let mut j = i;
            while j >= gap && arr[j - gap] > arr[j] {
                arr.swap(j - gap, j);
                j -= gap;
            }
        }
        gap /= 2;
    }
}

// ============================================================================
// Merge sort
// ============================================================================

/// Merge sort: split at the midpoint, sort each half, merge. O(n log n)
/// guaranteed, O(n) auxiliary space, stable.
///
/// The merge step allocates its two half-buffers fallibly; an allocation
/// failure aborts this run with `SortBenchError::Allocation` and leaves the
/// slice a permutation of its input (possibly partially sorted).
pub fn merge_sort<T: Ord + Clone>(arr: &mut [T]) -> Result<(), SortBenchError> {
    if arr.len() <= 1 {
        return Ok(());
    }
    let mid = arr.len() / 2;
    let (left, right) = arr.split_at_mut(mid);
    merge_sort(left)?;
    merge_sort(right)?;
    merge(arr, mid)
}

/// Merge the two sorted halves `arr[..mid]` and `arr[mid..]` back into
/// `arr`. Ties take the left element first, which is what makes the overall
/// sort stable. The half-buffers live only for this one step.
fn merge<T: Ord + Clone>(arr: &mut [T], mid: usize) -> Result<(), SortBenchError> {
    let mut left: Vec<T> = Vec::new();
    left.try_reserve_exact(mid)
        .map_err(|source| SortBenchError::allocation("merge left buffer", source))?;
    left.extend_from_slice(&arr[..mid]);

    let mut right: Vec<T> = Vec::new();
    right
        .try_reserve_exact(arr.len() - mid)
        .map_err(|source| SortBenchError::allocation("merge right buffer", source))?;
    right.extend_from_slice(&arr[mid..]);

    let mut i = 0;
    let mut j = 0;
    for slot in arr.iter_mut() {
        let from_left = j >= right.len() || (i < left.len() && left[i] <= right[j]);
        if from_left {
            *slot = left[i].clone();
            i += 1;
        } else {
            *slot = right[j].clone();
            j += 1;
        }
    }
    Ok(())
}

// ============================================================================
// Quick sort
// ============================================================================

/// Quick sort with the Lomuto partition scheme, pivot = last element.
///
/// Known weakness, kept on purpose: this pivot choice degrades to O(n²) on
/// already-sorted or reverse-sorted input. The comparator exists to expose
/// exactly this kind of behavior, so the textbook version stays. Average
/// O(n log n). Not stable.
pub fn quick_sort<T: Ord>(arr: &mut [T]) {
    if arr.len() <= 1 {
        return;
    }
    let pivot_idx = lomuto_partition(arr);
    let (left, right) = arr.split_at_mut(pivot_idx);
    quick_sort(left);
    quick_sort(&mut right[1..]);
}

/// Lomuto partition: pivot is the last element; one scan index moves every
/// smaller element into the growing prefix. Returns the pivot's final
/// index. Requires `arr.len() >= 1`.
pub fn lomuto_partition<T: Ord>(arr: &mut [T]) -> usize {
    let last = arr.len() - 1;
    let mut i = 0;
    for j in 0..last {
        if arr[j] < arr[last] {
            arr.swap(i, j);
            i += 1;
        }
    }
    arr.swap(i, last);
    i
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::cmp::Ordering;

    // A value whose ordering ignores its tag, for observing stability.
    #[derive(Debug, Clone)]
    struct Tagged {
        key: i32,
        tag: char,
    }

    impl PartialEq for Tagged {
        fn eq(&self, other: &Self) -> bool {
            self.key == other.key
        }
    }

    impl Eq for Tagged {}

    impl PartialOrd for Tagged {
        fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
            Some(self.cmp(other))
        }
    }

    impl Ord for Tagged {
        fn cmp(&self, other: &Self) -> Ordering {
            self.key.cmp(&other.key)
        }
    }

    fn tagged(pairs: &[(i32, char)]) -> Vec<Tagged> {
        pairs.iter().map(|&(key, tag)| Tagged { key, tag }).collect()
    }

    fn tags(data: &[Tagged]) -> String {
        data.iter().map(|t| t.tag).collect()
    }

    const SCENARIO: [i32; 5] = [5, 3, 8, 1, 1];
    const SCENARIO_SORTED: [i32; 5] = [1, 1, 3, 5, 8];

    #[test]
    fn all_sorts_handle_empty_and_singleton() {
        let empty: Vec<i32> = vec![];
        let one = vec![42];

        macro_rules! check {
            ($sort:expr) => {
                let mut e = empty.clone();
                let mut s = one.clone();
                $sort(&mut e);
                $sort(&mut s);
                assert!(e.is_empty());
                assert_eq!(s, vec![42]);
            };
        }

        check!(bubble_sort::<i32>);
        check!(selection_sort::<i32>);
        check!(insertion_sort::<i32>);
        check!(shell_sort::<i32>);
        check!(|a: &mut [i32]| merge_sort(a).unwrap());
        check!(quick_sort::<i32>);
    }

    #[test]
    fn all_sorts_agree_on_the_scenario_array() {
        let sorts: Vec<(&str, Box<dyn Fn(&mut [i32])>)> = vec![
            ("bubble", Box::new(bubble_sort)),
            ("selection", Box::new(selection_sort)),
            ("insertion", Box::new(insertion_sort)),
            ("shell", Box::new(shell_sort)),
            ("merge", Box::new(|a: &mut [i32]| merge_sort(a).unwrap())),
            ("quick", Box::new(quick_sort)),
        ];
        for (name, sort) in sorts {
            let mut data = SCENARIO.to_vec();
            sort(&mut data);
            assert_eq!(data, SCENARIO_SORTED, "{name} sort disagreed");
        }
    }

    #[test]
    fn sorting_a_sorted_sequence_is_the_identity() {
        let sorted: Vec<i32> = (0..100).collect();

        let mut data = sorted.clone();
        bubble_sort(&mut data);
        assert_eq!(data, sorted);

        let mut data = sorted.clone();
        selection_sort(&mut data);
        assert_eq!(data, sorted);

        let mut data = sorted.clone();
        insertion_sort(&mut data);
        assert_eq!(data, sorted);

        let mut data = sorted.clone();
        shell_sort(&mut data);
        assert_eq!(data, sorted);

        let mut data = sorted.clone();
        merge_sort(&mut data).unwrap();
        assert_eq!(data, sorted);

        // Worst case for last-element-pivot quick sort, still correct.
        let mut data = sorted.clone();
        quick_sort(&mut data);
        assert_eq!(data, sorted);
    }

    #[test]
    fn bubble_sort_is_stable() {
        let mut data = tagged(&[(2, 'a'), (1, 'b'), (2, 'c'), (1, 'd'), (2, 'e')]);
        bubble_sort(&mut data);
        assert_eq!(tags(&data), "bdace");
    }

    #[test]
    fn insertion_sort_is_stable() {
        let mut data = tagged(&[(2, 'a'), (1, 'b'), (2, 'c'), (1, 'd'), (2, 'e')]);
        insertion_sort(&mut data);
        assert_eq!(tags(&data), "bdace");
    }

    #[test]
    fn merge_sort_is_stable() {
        let mut data = tagged(&[(2, 'a'), (1, 'b'), (2, 'c'), (1, 'd'), (2, 'e')]);
        merge_sort(&mut data).unwrap();
        assert_eq!(tags(&data), "bdace");
    }

    #[test]
    fn merge_step_interleaves_sorted_halves() {
        // Left half [5, 7, 9] and right half [1, 3], already sorted.
        let mut arr = [5, 7, 9, 1, 3];
        merge(&mut arr, 3).unwrap();
        assert_eq!(arr, [1, 3, 5, 7, 9]);
    }

    #[test]
    fn merge_step_takes_left_element_on_ties() {
        let mut arr = tagged(&[(1, 'a'), (3, 'b'), (1, 'c'), (3, 'd')]);
        merge(&mut arr, 2).unwrap();
        assert_eq!(tags(&arr), "acbd");
    }

    #[test]
    fn lomuto_partition_puts_pivot_at_its_final_index() {
        // Pivot 9 is already the maximum: everything stays put.
        let mut arr = [4, 2, 7, 1, 9];
        assert_eq!(lomuto_partition(&mut arr), 4);
        assert_eq!(arr, [4, 2, 7, 1, 9]);

        let mut arr = [3, 8, 1, 5];
        let p = lomuto_partition(&mut arr);
        assert_eq!(arr[p], 5);
        assert!(arr[..p].iter().all(|&x| x < 5));
        assert!(arr[p + 1..].iter().all(|&x| x >= 5));
    }

    proptest! {
        #[test]
        fn bubble_sort_matches_std(mut data: Vec<i32>) {
            let mut expected = data.clone();
            expected.sort();
            bubble_sort(&mut data);
            prop_assert_eq!(data, expected);
        }

        #[test]
        fn selection_sort_matches_std(mut data: Vec<i32>) {
            let mut expected = data.clone();
            expected.sort();
            selection_sort(&mut data);
            prop_assert_eq!(data, expected);
        }

        #[test]
        fn insertion_sort_matches_std(mut data: Vec<i32>) {
            let mut expected = data.clone();
            expected.sort();
            insertion_sort(&mut data);
            prop_assert_eq!(data, expected);
        }

        #[test]
        fn shell_sort_matches_std(mut data: Vec<i32>) {
            let mut expected = data.clone();
            expected.sort();
            shell_sort(&mut data);
            prop_assert_eq!(data, expected);
        }

        #[test]
        fn merge_sort_matches_std(mut data: Vec<i32>) {
            let mut expected = data.clone();
            expected.sort();
            merge_sort(&mut data).unwrap();
            prop_assert_eq!(data, expected);
        }

        #[test]
        fn quick_sort_matches_std(mut data: Vec<i32>) {
            let mut expected = data.clone();
            expected.sort();
            quick_sort(&mut data);
            prop_assert_eq!(data, expected);
        }
    }
}
