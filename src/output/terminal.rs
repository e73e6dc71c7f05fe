//! Plain-text report for the terminal

use anyhow::Result;
use tabled::settings::Style;
use tabled::{Table as TextTable, Tabled};
use termcolor::{Color, ColorSpec, WriteColor};

use crate::bench::BenchmarkReport;

use super::{duration_nanos, format_millis, OutputFormatter};

const RULE: &str = "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━";

/// Terminal output with a highlighted winner
pub struct TerminalOutput {
    highlight: ColorSpec,
}

impl TerminalOutput {
    pub fn new() -> Self {
        let mut highlight = ColorSpec::new();
        highlight.set_fg(Some(Color::Green)).set_bold(true);
        Self { highlight }
    }

    fn write_header(&self, report: &BenchmarkReport, writer: &mut dyn WriteColor) -> Result<()> {
        writeln!(writer, "{}", RULE)?;
        writeln!(
            writer,
            " sortbench: column '{}' ({} values, {} run(s) per algorithm)",
            report.column, report.value_count, report.runs
        )?;
        writeln!(writer, "{}", RULE)?;
        writeln!(writer)?;
        Ok(())
    }

    fn write_summary(&self, report: &BenchmarkReport, writer: &mut dyn WriteColor) -> Result<()> {
        writeln!(writer, "CSV loaded: {} rows", report.row_count)?;
        writeln!(writer, "Numeric columns found:")?;
        for name in &report.numeric_columns {
            writeln!(writer, "- {}", name)?;
        }
        writeln!(writer)?;
        Ok(())
    }

    fn write_ranking(&self, report: &BenchmarkReport, writer: &mut dyn WriteColor) -> Result<()> {
        let rows: Vec<RankRow> = report
            .results
            .ranked()
            .into_iter()
            .enumerate()
            .map(|(i, (algorithm, elapsed))| RankRow {
                rank: i + 1,
                algorithm: algorithm.name(),
                millis: format_millis(elapsed),
                nanos: duration_nanos(elapsed),
            })
            .collect();

        writeln!(writer, "Results (fastest first):")?;
        let mut table = TextTable::new(rows);
        table.with(Style::modern());
        writeln!(writer, "{}", table)?;
        writeln!(writer)?;
        Ok(())
    }

    fn write_fastest(&self, report: &BenchmarkReport, writer: &mut dyn WriteColor) -> Result<()> {
        let Some(algorithm) = report.fastest else {
            return Ok(());
        };
        let elapsed = report.results.duration(algorithm).unwrap_or_default();

        write!(writer, "Fastest: ")?;
        writer.set_color(&self.highlight)?;
        write!(writer, "{}", algorithm)?;
        writer.reset()?;
        writeln!(writer, " ({} ms)", format_millis(elapsed))?;
        writeln!(writer)?;
        Ok(())
    }

    fn write_preview(&self, report: &BenchmarkReport, writer: &mut dyn WriteColor) -> Result<()> {
        writeln!(
            writer,
            "Sorted preview (first {} of {}):",
            report.preview.len(),
            report.value_count
        )?;
        for value in &report.preview {
            writeln!(writer, "  {:?}", value)?;
        }
        Ok(())
    }
}

impl Default for TerminalOutput {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Tabled)]
struct RankRow {
    #[tabled(rename = "Rank")]
    rank: usize,
    #[tabled(rename = "Algorithm")]
    algorithm: &'static str,
    #[tabled(rename = "Time (ms)")]
    millis: String,
    #[tabled(rename = "Nanoseconds")]
    nanos: u64,
}

impl OutputFormatter for TerminalOutput {
    fn render(&self, report: &BenchmarkReport, writer: &mut dyn WriteColor) -> Result<()> {
        self.write_header(report, writer)?;
        self.write_summary(report, writer)?;

        if report.results.is_empty() {
            writeln!(writer, "No algorithms were run.")?;
            return Ok(());
        }

        self.write_ranking(report, writer)?;
        self.write_fastest(report, writer)?;
        self.write_preview(report, writer)?;
        Ok(())
    }
}
