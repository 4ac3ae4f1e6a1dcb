use std::cmp::Ordering;

use tracing::debug;

use crate::Sorter;

/// Classic O(n²) bubble sort.
///
/// Each pass carries the largest unplaced element to the end of the unsorted
/// region, so pass `p` only scans `0..n - p`. Stable, since only strictly
/// out-of-order neighbours are swapped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BubbleSorter {
    /// Stop after the first pass that performs no swaps.
    pub early_exit: bool,
}

impl Default for BubbleSorter {
    fn default() -> Self {
        Self { early_exit: true }
    }
}

impl Sorter for BubbleSorter {
    fn name(&self) -> &'static str {
        "bubble"
    }

    fn is_stable(&self) -> bool {
        true
    }

    fn sort_with<T, E, F>(&self, data: &mut [T], mut is_less: F) -> Result<(), E>
    where
        F: FnMut(&[T], usize, usize) -> Result<bool, E>,
    {
        let n = data.len();
        if n <= 1 {
            return Ok(());
        }

        for pass in 0..n - 1 {
            let mut swapped = false;
            for j in 0..n - 1 - pass {
                if is_less(&*data, j + 1, j)? {
                    data.swap(j, j + 1);
                    swapped = true;
                }
            }
            if self.early_exit && !swapped {
                debug!(passes = pass + 1, len = n, "bubble sort settled early");
                break;
            }
        }
        Ok(())
    }
}

/// Sort `v` in place with bubble sort, stopping early once a pass makes no swaps.
pub fn bubble_sort<T: Ord>(v: &mut [T]) {
    BubbleSorter::default().sort(v);
}

pub fn bubble_sort_by<T, F>(v: &mut [T], compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    BubbleSorter::default().sort_by(v, compare);
}

pub fn bubble_sort_by_key<T, K, F>(v: &mut [T], key: F)
where
    K: Ord,
    F: FnMut(&T) -> K,
{
    BubbleSorter::default().sort_by_key(v, key);
}
