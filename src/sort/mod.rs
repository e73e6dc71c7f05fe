//! Comparison sorts over `f64` slices
//!
//! All sorters order values by [`f64::total_cmp`], so every algorithm
//! produces the same bit pattern for the same input, including signed
//! zeros and NaN.

mod heap;
mod insertion;
mod merge;
mod quick;
mod shell;

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

pub use heap::HeapSort;
pub use insertion::InsertionSort;
pub use merge::MergeSort;
pub use quick::QuickSort;
pub use shell::ShellSort;

/// Trait for sorting implementations
pub trait Sorter {
    /// Sort the slice in-place in ascending order
    fn sort(&self, data: &mut [f64]);
}

/// The five benchmarked algorithms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Insertion,
    Shell,
    Merge,
    Quick,
    Heap,
}

impl Algorithm {
    /// Fixed run order
    pub const ALL: [Algorithm; 5] = [
        Algorithm::Insertion,
        Algorithm::Shell,
        Algorithm::Merge,
        Algorithm::Quick,
        Algorithm::Heap,
    ];

    /// Display name used in reports
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Insertion => "Insertion Sort",
            Algorithm::Shell => "Shell Sort",
            Algorithm::Merge => "Merge Sort",
            Algorithm::Quick => "Quick Sort",
            Algorithm::Heap => "Heap Sort",
        }
    }

    pub fn sorter(self) -> &'static dyn Sorter {
        match self {
            Algorithm::Insertion => &InsertionSort,
            Algorithm::Shell => &ShellSort,
            Algorithm::Merge => &MergeSort,
            Algorithm::Quick => &QuickSort,
            Algorithm::Heap => &HeapSort,
        }
    }

    /// Sort a copy of `values`, leaving the input untouched
    pub fn sorted(self, values: &[f64]) -> Vec<f64> {
        let mut data = values.to_vec();
        self.sorter().sort(&mut data);
        data
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase();
        let key = key.strip_suffix("sort").unwrap_or(&key).trim_end_matches(&[' ', '-', '_'][..]);
        match key {
            "insertion" => Ok(Algorithm::Insertion),
            "shell" => Ok(Algorithm::Shell),
            "merge" => Ok(Algorithm::Merge),
            "quick" => Ok(Algorithm::Quick),
            "heap" => Ok(Algorithm::Heap),
            _ => Err(format!("Unknown algorithm: {}", s)),
        }
    }
}

/// `a > b` under the total order
#[inline]
pub(crate) fn greater(a: f64, b: f64) -> bool {
    a.total_cmp(&b) == Ordering::Greater
}

/// Check that a slice is non-decreasing under the total order
pub fn is_sorted(data: &[f64]) -> bool {
    data.windows(2).all(|w| !greater(w[0], w[1]))
}
