//! Benchmark harness: times every sorter on its own copy of a column

mod result;

use std::time::Instant;

use indexmap::IndexSet;

use crate::error::{Error, Result};
use crate::model::NumericColumn;
use crate::sort::{is_sorted, Algorithm};

pub use result::{BenchmarkReport, BenchmarkResult, Timing};

/// Runs a fixed list of algorithms over a column and records timings.
///
/// By default each algorithm runs exactly once with no warm-up, so a single
/// timing is subject to scheduler and cache noise. [`Harness::with_runs`]
/// repeats every algorithm and reports the median instead.
#[derive(Debug, Clone)]
pub struct Harness {
    algorithms: Vec<Algorithm>,
    runs: usize,
    verify: bool,
}

impl Default for Harness {
    fn default() -> Self {
        Self::new()
    }
}

impl Harness {
    /// All five algorithms, one run each, with output verification
    pub fn new() -> Self {
        Self {
            algorithms: Algorithm::ALL.to_vec(),
            runs: 1,
            verify: true,
        }
    }

    /// Restrict the run to these algorithms, in the given order.
    /// Each algorithm runs once even if it is listed twice.
    pub fn with_algorithms(mut self, algorithms: Vec<Algorithm>) -> Self {
        let unique: IndexSet<Algorithm> = algorithms.into_iter().collect();
        self.algorithms = unique.into_iter().collect();
        self
    }

    /// Number of timed runs per algorithm (at least one)
    pub fn with_runs(mut self, runs: usize) -> Self {
        self.runs = runs.max(1);
        self
    }

    /// Check every sorted copy before accepting its timing
    pub fn with_verify(mut self, verify: bool) -> Self {
        self.verify = verify;
        self
    }

    pub fn runs(&self) -> usize {
        self.runs
    }

    pub fn algorithms(&self) -> &[Algorithm] {
        &self.algorithms
    }

    /// Time every algorithm on a fresh clone of the column
    pub fn run_all(&self, column: &NumericColumn) -> Result<BenchmarkResult> {
        let mut result = BenchmarkResult::new();

        for &algorithm in &self.algorithms {
            let sorter = algorithm.sorter();
            let mut samples = Vec::with_capacity(self.runs);

            for _ in 0..self.runs {
                let mut data = column.to_vec();

                let start = Instant::now();
                sorter.sort(&mut data);
                let elapsed = start.elapsed();

                if self.verify && !is_sorted(&data) {
                    return Err(Error::SortFailed { algorithm });
                }
                samples.push(elapsed);
            }

            let timing = Timing::new(samples);
            log::debug!(
                "{}: {} ns over {} value(s), {} run(s)",
                algorithm,
                timing.median().as_nanos(),
                column.len(),
                self.runs
            );
            result.insert(algorithm, timing);
        }

        Ok(result)
    }

    /// Run all algorithms and assemble the report for display.
    ///
    /// The load summary only knows about this column; use
    /// [`BenchmarkReport::with_table`] to describe the whole table.
    pub fn benchmark(&self, column: &NumericColumn, preview_len: usize) -> Result<BenchmarkReport> {
        let results = self.run_all(column)?;
        let fastest = results.fastest();
        if let Some(algorithm) = fastest {
            log::info!("fastest on '{}': {}", column.name(), algorithm);
        }

        Ok(BenchmarkReport {
            column: column.name().to_string(),
            value_count: column.len(),
            runs: self.runs,
            results,
            fastest,
            preview: preview(column, preview_len),
            row_count: column.len(),
            numeric_columns: vec![column.name().to_string()],
        })
    }
}

/// Time all five algorithms once each
pub fn run_all(column: &NumericColumn) -> Result<BenchmarkResult> {
    Harness::new().run_all(column)
}

/// The first `k` values of the column once sorted
pub fn preview(column: &NumericColumn, k: usize) -> Vec<f64> {
    let mut sorted = Algorithm::Merge.sorted(column.values());
    sorted.truncate(k);
    sorted
}
