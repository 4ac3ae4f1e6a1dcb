//! Runtime selection of a sorting strategy.
//!
//! `Sorter` has generic methods and cannot be boxed, so strategies picked at
//! runtime (from a string or a config file) go through the `Algorithm` enum.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::{BubbleSorter, InsertionSorter, SelectionSorter, SortError, SortResult, Sorter};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    #[default]
    Insertion,
    Selection,
    Bubble,
}

impl Algorithm {
    pub const ALL: [Algorithm; 3] = [Algorithm::Insertion, Algorithm::Selection, Algorithm::Bubble];

    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Insertion => InsertionSorter.name(),
            Algorithm::Selection => SelectionSorter.name(),
            Algorithm::Bubble => BubbleSorter::default().name(),
        }
    }

    pub fn is_stable(self) -> bool {
        match self {
            Algorithm::Insertion => InsertionSorter.is_stable(),
            Algorithm::Selection => SelectionSorter.is_stable(),
            Algorithm::Bubble => BubbleSorter::default().is_stable(),
        }
    }

    pub fn sort<T: Ord>(self, data: &mut [T]) {
        self.sort_by(data, T::cmp);
    }

    pub fn sort_by<T, F>(self, data: &mut [T], compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        SortConfig::from(self).sort_by(data, compare);
    }

    pub fn try_sort<T: PartialOrd>(self, data: &mut [T]) -> SortResult<()> {
        SortConfig::from(self).try_sort(data)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = SortError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Algorithm::ALL
            .into_iter()
            .find(|algo| algo.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| SortError::UnknownAlgorithm(s.to_string()))
    }
}

fn default_early_exit() -> bool {
    true
}

/// Sorting options a host application can embed in its own config.
///
/// ```toml
/// algorithm = "bubble"
/// early_exit = false
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortConfig {
    #[serde(default)]
    pub algorithm: Algorithm,

    /// Only consulted by bubble sort.
    #[serde(default = "default_early_exit")]
    pub early_exit: bool,
}

impl Default for SortConfig {
    fn default() -> Self {
        Self {
            algorithm: Algorithm::default(),
            early_exit: default_early_exit(),
        }
    }
}

impl From<Algorithm> for SortConfig {
    fn from(algorithm: Algorithm) -> Self {
        Self {
            algorithm,
            ..Self::default()
        }
    }
}

impl SortConfig {
    pub fn sort<T: Ord>(&self, data: &mut [T]) {
        self.sort_by(data, T::cmp);
    }

    pub fn sort_by<T, F>(&self, data: &mut [T], compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        trace!(algorithm = %self.algorithm, len = data.len(), "sorting");
        match self.algorithm {
            Algorithm::Insertion => InsertionSorter.sort_by(data, compare),
            Algorithm::Selection => SelectionSorter.sort_by(data, compare),
            Algorithm::Bubble => self.bubble().sort_by(data, compare),
        }
    }

    pub fn try_sort<T: PartialOrd>(&self, data: &mut [T]) -> SortResult<()> {
        trace!(algorithm = %self.algorithm, len = data.len(), "sorting partial order");
        match self.algorithm {
            Algorithm::Insertion => InsertionSorter.try_sort(data),
            Algorithm::Selection => SelectionSorter.try_sort(data),
            Algorithm::Bubble => self.bubble().try_sort(data),
        }
    }

    fn bubble(&self) -> BubbleSorter {
        BubbleSorter {
            early_exit: self.early_exit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        for algo in Algorithm::ALL {
            assert_eq!(algo.to_string().parse::<Algorithm>().unwrap(), algo);
        }
        assert_eq!(" Bubble ".parse::<Algorithm>().unwrap(), Algorithm::Bubble);
    }

    #[test]
    fn unknown_name() {
        let err = "quick".parse::<Algorithm>().unwrap_err();
        assert_eq!(err, SortError::UnknownAlgorithm("quick".into()));
        assert_eq!(err.to_string(), "unknown sort algorithm: quick");
    }

    #[test]
    fn every_algorithm_sorts() {
        for algo in Algorithm::ALL {
            let mut arr = [8, 4, 3, 9, 10, 2];
            algo.sort(&mut arr);
            assert_eq!(arr, [2, 3, 4, 8, 9, 10], "{algo}");
        }
    }

    #[test]
    fn stability_flags() {
        assert!(Algorithm::Insertion.is_stable());
        assert!(!Algorithm::Selection.is_stable());
        assert!(Algorithm::Bubble.is_stable());
    }

    #[test]
    fn try_sort_dispatches() {
        for algo in Algorithm::ALL {
            let mut ok = [0.5, -2.0, 1.5];
            algo.try_sort(&mut ok).unwrap();
            assert_eq!(ok, [-2.0, 0.5, 1.5]);

            let mut bad = [1.0, 2.0, f64::NAN];
            assert!(matches!(
                algo.try_sort(&mut bad),
                Err(SortError::Incomparable { .. })
            ));
        }
    }

    #[test]
    fn config_from_json() {
        let config: SortConfig =
            serde_json::from_str(r#"{"algorithm": "bubble", "early_exit": false}"#).unwrap();
        assert_eq!(
            config,
            SortConfig {
                algorithm: Algorithm::Bubble,
                early_exit: false
            }
        );

        let defaults: SortConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(defaults, SortConfig::default());
        assert!(defaults.early_exit);
        assert_eq!(defaults.algorithm, Algorithm::Insertion);

        assert!(serde_json::from_str::<SortConfig>(r#"{"algorithm": "heap"}"#).is_err());
    }

    #[test]
    fn algorithm_serializes_lowercase() {
        let json = serde_json::to_string(&Algorithm::ALL).unwrap();
        assert_eq!(json, r#"["insertion","selection","bubble"]"#);
    }

    #[test]
    fn config_sort_by() {
        let config = SortConfig {
            algorithm: Algorithm::Bubble,
            early_exit: false,
        };
        let mut words = ["delta", "alpha", "charlie", "bravo"];
        config.sort_by(&mut words, |a, b| b.cmp(a));
        assert_eq!(words, ["delta", "charlie", "bravo", "alpha"]);
    }
}
