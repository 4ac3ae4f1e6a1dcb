use std::cmp::Ordering;

use crate::Sorter;

/// Insertion sort: grows a sorted prefix one element at a time.
///
/// Stable. O(n²) comparisons in the worst case, n-1 on sorted input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InsertionSorter;

impl Sorter for InsertionSorter {
    fn name(&self) -> &'static str {
        "insertion"
    }

    fn is_stable(&self) -> bool {
        true
    }

    fn sort_with<T, E, F>(&self, data: &mut [T], mut is_less: F) -> Result<(), E>
    where
        F: FnMut(&[T], usize, usize) -> Result<bool, E>,
    {
        // Every element from the second through the last gets inserted;
        // stopping short leaves the tail unsorted.
        for i in 1..data.len() {
            let mut j = i;
            while j > 0 && is_less(&*data, j, j - 1)? {
                data.swap(j - 1, j);
                j -= 1;
            }
        }
        Ok(())
    }
}

/// Sort `v` in place with insertion sort.
pub fn insertion_sort<T: Ord>(v: &mut [T]) {
    InsertionSorter.sort(v);
}

pub fn insertion_sort_by<T, F>(v: &mut [T], compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    InsertionSorter.sort_by(v, compare);
}

pub fn insertion_sort_by_key<T, K, F>(v: &mut [T], key: F)
where
    K: Ord,
    F: FnMut(&T) -> K,
{
    InsertionSorter.sort_by_key(v, key);
}
