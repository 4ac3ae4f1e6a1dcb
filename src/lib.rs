//! Elementary Sorts
//!
//! The three quadratic comparison sorts (insertion, selection, bubble) behind
//! one `Sorter` trait. Every sorter works in place on a caller-owned slice and
//! only ever swaps elements, so an aborted sort still leaves a permutation of
//! the input behind.

use std::cmp::Ordering;
use std::convert::Infallible;

use tracing::warn;

pub mod algorithm;
pub mod bubble;
pub mod error;
pub mod insertion;
pub mod selection;

pub use algorithm::{Algorithm, SortConfig};
pub use bubble::{bubble_sort, bubble_sort_by, bubble_sort_by_key, BubbleSorter};
pub use error::{SortError, SortResult};
pub use insertion::{insertion_sort, insertion_sort_by, insertion_sort_by_key, InsertionSorter};
pub use selection::{selection_sort, selection_sort_by, selection_sort_by_key, SelectionSorter};

/// Trait for sorting implementations
///
/// Implementors provide `sort_with`; everything else is derived from it.
/// All methods sort in place and mutate the caller's slice, except `sorted`
/// which works on a copy.
pub trait Sorter {
    /// Short identifier, e.g. `"insertion"`.
    fn name(&self) -> &'static str;

    /// Whether equal elements keep their relative order.
    fn is_stable(&self) -> bool;

    /// Sort `data` in place ascending.
    ///
    /// `is_less(data, a, b)` reports whether the element at position `a`
    /// orders strictly before the element at position `b`. The first `Err` it
    /// returns aborts the sort and is handed back unchanged.
    fn sort_with<T, E, F>(&self, data: &mut [T], is_less: F) -> Result<(), E>
    where
        F: FnMut(&[T], usize, usize) -> Result<bool, E>;

    /// Sort with a total-order comparator.
    fn sort_by<T, F>(&self, data: &mut [T], mut compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        let result: Result<(), Infallible> =
            self.sort_with(data, |v, a, b| Ok(compare(&v[a], &v[b]) == Ordering::Less));
        match result {
            Ok(()) => {}
            Err(never) => match never {},
        }
    }

    /// Sort by a key extracted from each element.
    fn sort_by_key<T, K, F>(&self, data: &mut [T], mut key: F)
    where
        K: Ord,
        F: FnMut(&T) -> K,
    {
        self.sort_by(data, |a, b| key(a).cmp(&key(b)));
    }

    /// Sort by the natural ordering of `T`.
    fn sort<T: Ord>(&self, data: &mut [T]) {
        self.sort_by(data, T::cmp);
    }

    /// Sort a partially ordered slice, failing on the first pair of elements
    /// that cannot be ordered against each other (a NaN, for instance).
    ///
    /// On error the slice holds a permutation of its input in no particular
    /// order.
    fn try_sort<T: PartialOrd>(&self, data: &mut [T]) -> SortResult<()> {
        let result = self.sort_with(data, |v, a, b| match v[a].partial_cmp(&v[b]) {
            Some(ord) => Ok(ord == Ordering::Less),
            None => Err(SortError::Incomparable {
                left: a.min(b),
                right: a.max(b),
            }),
        });
        if let Err(err) = &result {
            warn!(sorter = self.name(), len = data.len(), "sort aborted: {err}");
        }
        result
    }

    /// Return a sorted copy, leaving `data` untouched.
    fn sorted<T: Ord + Clone>(&self, data: &[T]) -> Vec<T> {
        let mut out = data.to_vec();
        self.sort(&mut out);
        out
    }
}
