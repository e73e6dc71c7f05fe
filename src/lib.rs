//! sortbench - Sorting algorithm benchmarks over CSV columns
//!
//! Loads comma-separated text, finds the columns whose every cell is a
//! number, and times insertion, shell, merge, quick and heap sort over one
//! of them.

pub mod bench;
pub mod config;
pub mod error;
pub mod model;
pub mod output;
pub mod parser;
pub mod sort;

pub use bench::{BenchmarkReport, BenchmarkResult, Harness};
pub use config::Config;
pub use error::{Error, Result};
pub use model::{NumericColumn, Table};
pub use sort::{Algorithm, Sorter};
