use std::cmp::Ordering;

use crate::Sorter;

/// Selection sort: repeatedly moves the minimum of the unsorted suffix to
/// the front of it.
///
/// Not stable: the swap into position `i` can jump an element over an equal
/// one. Always n(n-1)/2 comparisons, at most n-1 swaps.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SelectionSorter;

impl Sorter for SelectionSorter {
    fn name(&self) -> &'static str {
        "selection"
    }

    fn is_stable(&self) -> bool {
        false
    }

    fn sort_with<T, E, F>(&self, data: &mut [T], mut is_less: F) -> Result<(), E>
    where
        F: FnMut(&[T], usize, usize) -> Result<bool, E>,
    {
        let n = data.len();
        for i in 0..n {
            // Strict comparison keeps the first occurrence on ties.
            let mut min = i;
            for j in i + 1..n {
                if is_less(&*data, j, min)? {
                    min = j;
                }
            }
            if min != i {
                data.swap(i, min);
            }
        }
        Ok(())
    }
}

/// Sort `v` in place with selection sort.
pub fn selection_sort<T: Ord>(v: &mut [T]) {
    SelectionSorter.sort(v);
}

pub fn selection_sort_by<T, F>(v: &mut [T], compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    SelectionSorter.sort_by(v, compare);
}

pub fn selection_sort_by_key<T, K, F>(v: &mut [T], key: F)
where
    K: Ord,
    F: FnMut(&T) -> K,
{
    SelectionSorter.sort_by_key(v, key);
}
