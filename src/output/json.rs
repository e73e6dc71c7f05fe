//! JSON output format

use anyhow::Result;
use serde::Serialize;
use termcolor::WriteColor;

use crate::bench::BenchmarkReport;

use super::{duration_nanos, OutputFormatter};

/// JSON output formatter
pub struct JsonOutput {
    pretty: bool,
}

impl JsonOutput {
    pub fn new() -> Self {
        Self { pretty: true }
    }

    pub fn compact() -> Self {
        Self { pretty: false }
    }
}

impl Default for JsonOutput {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Serialize)]
struct JsonTiming {
    algorithm: &'static str,
    nanos: u64,
    samples: Vec<u64>,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    column: &'a str,
    value_count: usize,
    row_count: usize,
    numeric_columns: &'a [String],
    runs: usize,
    /// Timings in run order
    results: Vec<JsonTiming>,
    /// Algorithm names, fastest first
    ranking: Vec<&'static str>,
    fastest: Option<&'static str>,
    preview: &'a [f64],
}

impl OutputFormatter for JsonOutput {
    fn render(&self, report: &BenchmarkReport, writer: &mut dyn WriteColor) -> Result<()> {
        let results = report
            .results
            .algorithms()
            .filter_map(|algorithm| {
                let timing = report.results.timing(algorithm)?;
                Some(JsonTiming {
                    algorithm: algorithm.name(),
                    nanos: duration_nanos(timing.median()),
                    samples: timing.samples().iter().copied().map(duration_nanos).collect(),
                })
            })
            .collect();

        let output = JsonReport {
            column: &report.column,
            value_count: report.value_count,
            row_count: report.row_count,
            numeric_columns: &report.numeric_columns,
            runs: report.runs,
            results,
            ranking: report
                .results
                .ranked()
                .into_iter()
                .map(|(algorithm, _)| algorithm.name())
                .collect(),
            fastest: report.fastest.map(|a| a.name()),
            preview: &report.preview,
        };

        if self.pretty {
            serde_json::to_writer_pretty(&mut *writer, &output)?;
        } else {
            serde_json::to_writer(&mut *writer, &output)?;
        }
        writeln!(writer)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use termcolor::NoColor;

    use super::*;
    use crate::bench::{BenchmarkResult, Timing};
    use crate::sort::Algorithm;

    fn report() -> BenchmarkReport {
        let mut results = BenchmarkResult::new();
        results.insert(
            Algorithm::Merge,
            Timing::new(vec![Duration::from_nanos(300), Duration::from_nanos(100)]),
        );
        results.insert(Algorithm::Heap, Timing::single(Duration::from_nanos(150)));
        BenchmarkReport {
            column: "x".to_string(),
            value_count: 2,
            runs: 2,
            fastest: results.fastest(),
            results,
            preview: vec![1.0, 2.0],
            row_count: 4,
            numeric_columns: vec!["x".to_string(), "y".to_string()],
        }
    }

    fn render(formatter: &JsonOutput) -> serde_json::Value {
        let mut writer = NoColor::new(Vec::new());
        formatter.render(&report(), &mut writer).unwrap();
        serde_json::from_slice(&writer.into_inner()).unwrap()
    }

    #[test]
    fn test_json_fields() {
        let value = render(&JsonOutput::new());
        assert_eq!(value["column"], "x");
        assert_eq!(value["value_count"], 2);
        assert_eq!(value["row_count"], 4);
        assert_eq!(value["numeric_columns"], serde_json::json!(["x", "y"]));
        assert_eq!(value["results"][0]["algorithm"], "Merge Sort");
        assert_eq!(value["results"][0]["nanos"], 200);
        assert_eq!(value["results"][0]["samples"], serde_json::json!([300, 100]));
        assert_eq!(value["ranking"], serde_json::json!(["Heap Sort", "Merge Sort"]));
        assert_eq!(value["fastest"], "Heap Sort");
        assert_eq!(value["preview"], serde_json::json!([1.0, 2.0]));
    }

    #[test]
    fn test_compact_is_single_line() {
        let mut writer = NoColor::new(Vec::new());
        JsonOutput::compact().render(&report(), &mut writer).unwrap();
        let text = String::from_utf8(writer.into_inner()).unwrap();
        assert_eq!(text.trim_end().lines().count(), 1);
    }
}
