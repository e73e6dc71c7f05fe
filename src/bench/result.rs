//! Timing results and the report handed to renderers

use std::time::Duration;

use indexmap::IndexMap;

use crate::model::Table;
use crate::sort::Algorithm;

/// Elapsed-time samples for one algorithm
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Timing {
    samples: Vec<Duration>,
}

impl Timing {
    pub fn new(samples: Vec<Duration>) -> Self {
        Self { samples }
    }

    /// A timing made of a single run
    pub fn single(elapsed: Duration) -> Self {
        Self::new(vec![elapsed])
    }

    pub fn samples(&self) -> &[Duration] {
        &self.samples
    }

    /// Median sample; the mean of the two middle samples for an even count
    pub fn median(&self) -> Duration {
        let mut sorted = self.samples.clone();
        sorted.sort_unstable();
        match sorted.len() {
            0 => Duration::ZERO,
            n if n % 2 == 1 => sorted[n / 2],
            n => (sorted[n / 2 - 1] + sorted[n / 2]) / 2,
        }
    }
}

/// Timings keyed by algorithm, in the order the algorithms ran
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BenchmarkResult {
    timings: IndexMap<Algorithm, Timing>,
}

impl BenchmarkResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the timing for an algorithm
    pub fn insert(&mut self, algorithm: Algorithm, timing: Timing) {
        self.timings.insert(algorithm, timing);
    }

    /// Reported (median) duration for an algorithm
    pub fn duration(&self, algorithm: Algorithm) -> Option<Duration> {
        self.timings.get(&algorithm).map(Timing::median)
    }

    pub fn timing(&self, algorithm: Algorithm) -> Option<&Timing> {
        self.timings.get(&algorithm)
    }

    /// Algorithms with their reported duration, in run order
    pub fn iter(&self) -> impl Iterator<Item = (Algorithm, Duration)> + '_ {
        self.timings.iter().map(|(a, t)| (*a, t.median()))
    }

    pub fn algorithms(&self) -> impl Iterator<Item = Algorithm> + '_ {
        self.timings.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.timings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timings.is_empty()
    }

    /// Algorithm with the smallest duration. Ties go to the one that ran first.
    pub fn fastest(&self) -> Option<Algorithm> {
        let mut best: Option<(Algorithm, Duration)> = None;
        for (algorithm, elapsed) in self.iter() {
            match best {
                Some((_, current)) if elapsed >= current => {}
                _ => best = Some((algorithm, elapsed)),
            }
        }
        best.map(|(algorithm, _)| algorithm)
    }

    /// Entries ordered from fastest to slowest, run order kept on ties
    pub fn ranked(&self) -> Vec<(Algorithm, Duration)> {
        let mut entries: Vec<_> = self.iter().collect();
        entries.sort_by_key(|(_, elapsed)| *elapsed);
        entries
    }
}

/// Everything the presentation layer needs to render one benchmark
#[derive(Debug, Clone)]
pub struct BenchmarkReport {
    /// Column name (from header)
    pub column: String,
    /// Number of values sorted by each algorithm
    pub value_count: usize,
    /// Runs per algorithm
    pub runs: usize,
    pub results: BenchmarkResult,
    pub fastest: Option<Algorithm>,
    /// Leading values of the sorted column
    pub preview: Vec<f64>,
    /// Data rows in the loaded table
    pub row_count: usize,
    /// Every numeric column of the loaded table, in header order
    pub numeric_columns: Vec<String>,
}

impl BenchmarkReport {
    /// Fill in the load summary from the table the column came from
    pub fn with_table(mut self, table: &Table) -> Self {
        self.row_count = table.row_count();
        self.numeric_columns = table.numeric_columns();
        self
    }
}
