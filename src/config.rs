//! Configuration handling for sortbench

use std::path::PathBuf;

use indexmap::IndexSet;

use crate::bench::Harness;
use crate::parser::LoadOptions;
use crate::sort::Algorithm;

/// Number of sorted values shown after the timings
pub const DEFAULT_PREVIEW_LEN: usize = 10;

/// Output format for benchmark reports
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Terminal,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "terminal" => Ok(OutputFormat::Terminal),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown output format: {}", s)),
        }
    }
}

/// Configuration for a benchmark session
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to the CSV file
    pub input: PathBuf,
    /// Column to benchmark
    pub column: Option<String>,
    /// Output format
    pub output_format: OutputFormat,
    /// How many sorted values to show
    pub preview_len: usize,
    /// Timed runs per algorithm
    pub runs: usize,
    /// Algorithms to run, in run order
    pub algorithms: Vec<Algorithm>,
    /// Reject rows whose width differs from the header
    pub strict: bool,
    /// Check each sorted copy before accepting its timing
    pub verify: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: PathBuf::new(),
            column: None,
            output_format: OutputFormat::default(),
            preview_len: DEFAULT_PREVIEW_LEN,
            runs: 1,
            algorithms: Algorithm::ALL.to_vec(),
            strict: false,
            verify: true,
        }
    }
}

impl Config {
    /// Create a new Config for an input file
    pub fn new(input: PathBuf) -> Self {
        Self {
            input,
            ..Default::default()
        }
    }

    /// Set the column to benchmark
    pub fn with_column(mut self, column: String) -> Self {
        self.column = Some(column);
        self
    }

    /// Set output format
    pub fn with_output_format(mut self, format: OutputFormat) -> Self {
        self.output_format = format;
        self
    }

    /// Set preview length
    pub fn with_preview_len(mut self, len: usize) -> Self {
        self.preview_len = len;
        self
    }

    /// Set timed runs per algorithm
    pub fn with_runs(mut self, runs: usize) -> Self {
        self.runs = runs;
        self
    }

    /// Restrict which algorithms run; an empty list keeps all five.
    /// Repeats are dropped, keeping the first position of each.
    pub fn with_algorithms(mut self, algorithms: Vec<Algorithm>) -> Self {
        if !algorithms.is_empty() {
            let unique: IndexSet<Algorithm> = algorithms.into_iter().collect();
            self.algorithms = unique.into_iter().collect();
        }
        self
    }

    /// Enable strict row-width checking
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Enable output verification
    pub fn with_verify(mut self, verify: bool) -> Self {
        self.verify = verify;
        self
    }

    pub fn load_options(&self) -> LoadOptions {
        LoadOptions {
            strict: self.strict,
        }
    }

    /// Harness configured from this config
    pub fn harness(&self) -> Harness {
        Harness::new()
            .with_algorithms(self.algorithms.clone())
            .with_runs(self.runs)
            .with_verify(self.verify)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_format_from_str() {
        assert_eq!("JSON".parse::<OutputFormat>(), Ok(OutputFormat::Json));
        assert_eq!("terminal".parse::<OutputFormat>(), Ok(OutputFormat::Terminal));
        assert!("html".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_defaults() {
        let config = Config::new(PathBuf::from("data.csv"));
        assert_eq!(config.preview_len, DEFAULT_PREVIEW_LEN);
        assert_eq!(config.runs, 1);
        assert!(config.verify);
        assert!(!config.load_options().strict);
        assert_eq!(config.harness().algorithms(), &Algorithm::ALL);
    }

    #[test]
    fn test_empty_algorithm_list_keeps_all() {
        let config = Config::default().with_algorithms(Vec::new());
        assert_eq!(config.algorithms.len(), 5);

        let config = Config::default().with_algorithms(vec![Algorithm::Quick]);
        assert_eq!(config.harness().algorithms(), &[Algorithm::Quick]);
    }

    #[test]
    fn test_duplicate_algorithms_dropped() {
        let config = Config::default().with_algorithms(vec![
            Algorithm::Quick,
            Algorithm::Heap,
            Algorithm::Quick,
        ]);
        assert_eq!(config.algorithms, vec![Algorithm::Quick, Algorithm::Heap]);
        assert_eq!(
            config.harness().algorithms(),
            &[Algorithm::Quick, Algorithm::Heap]
        );
    }
}
