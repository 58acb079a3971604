//! Sorting engines
//!
//! Each engine sorts a copy of its input and records a [`Trace`] of the whole
//! run. Engines also keep explicit [`SortCounters`] so comparison metrics never
//! depend on description wording.
//!
//! | Engine            | Comparison            | Swap recorded when          |
//! |-------------------|-----------------------|-----------------------------|
//! | [`BubbleSort`]    | `a[j] > a[j+1]`       | the pair is out of order    |
//! | [`SelectionSort`] | `a[j] < a[min]`       | the minimum moved           |
//! | [`QuickSort`]     | `a[j] <= pivot`       | Lomuto exchange, `i != j`   |

pub mod bubble;
pub mod quick;
pub mod selection;

pub use bubble::BubbleSort;
pub use quick::QuickSort;
pub use selection::SelectionSort;

use crate::errors::{Error, Result};
use crate::trace::Trace;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

/// Work performed by one sort run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SortCounters {
    pub comparisons: usize,
    pub swaps: usize,
}

/// A sorting algorithm that records its own execution
pub trait SortAlgorithm {
    /// Display name
    fn name(&self) -> &'static str;

    /// Sort a copy of `input`, returning the trace and the work counters
    fn sort_counted<T>(&self, input: &[T]) -> (Trace<Vec<T>>, SortCounters)
    where
        T: Ord + Clone + Display;

    fn sort<T>(&self, input: &[T]) -> Trace<Vec<T>>
    where
        T: Ord + Clone + Display,
    {
        self.sort_counted(input).0
    }
}

/// Tagged dispatch over the available sorting engines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKind {
    Bubble,
    Selection,
    Quick,
}

impl SortKind {
    pub const ALL: [SortKind; 3] = [SortKind::Bubble, SortKind::Selection, SortKind::Quick];

    pub fn name(self) -> &'static str {
        match self {
            SortKind::Bubble => BubbleSort.name(),
            SortKind::Selection => SelectionSort.name(),
            SortKind::Quick => QuickSort.name(),
        }
    }

    pub fn sort_counted<T>(self, input: &[T]) -> (Trace<Vec<T>>, SortCounters)
    where
        T: Ord + Clone + Display,
    {
        match self {
            SortKind::Bubble => BubbleSort.sort_counted(input),
            SortKind::Selection => SelectionSort.sort_counted(input),
            SortKind::Quick => QuickSort.sort_counted(input),
        }
    }

    pub fn sort<T>(self, input: &[T]) -> Trace<Vec<T>>
    where
        T: Ord + Clone + Display,
    {
        self.sort_counted(input).0
    }
}

impl FromStr for SortKind {
    type Err = Error;

    /// Case-insensitive: `bubble`, `selection` or `quick`
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bubble" => Ok(SortKind::Bubble),
            "selection" => Ok(SortKind::Selection),
            "quick" => Ok(SortKind::Quick),
            _ => Err(Error::unknown_algorithm(s)),
        }
    }
}
