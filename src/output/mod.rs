//! Output formatting for benchmark reports

mod json;
mod terminal;

use std::io::IsTerminal;
use std::time::Duration;

use anyhow::Result;
use termcolor::{ColorChoice, StandardStream, WriteColor};

use crate::bench::BenchmarkReport;
use crate::config::OutputFormat;

pub use json::JsonOutput;
pub use terminal::TerminalOutput;

/// Trait for output formatters
pub trait OutputFormatter {
    /// Render a benchmark report to a writer
    fn render(&self, report: &BenchmarkReport, writer: &mut dyn WriteColor) -> Result<()>;
}

/// Factory for creating output formatters
pub struct OutputFactory;

impl OutputFactory {
    /// Create an output formatter based on format type
    pub fn create(format: OutputFormat) -> Box<dyn OutputFormatter> {
        match format {
            OutputFormat::Terminal => Box::new(TerminalOutput::new()),
            OutputFormat::Json => Box::new(JsonOutput::new()),
        }
    }
}

/// Render a report to stdout, colouring only when stdout is a terminal
pub fn render_to_stdout(report: &BenchmarkReport, format: OutputFormat) -> Result<()> {
    let formatter = OutputFactory::create(format);
    let choice = if std::io::stdout().is_terminal() {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };
    let mut stdout = StandardStream::stdout(choice);
    formatter.render(report, &mut stdout)
}

/// Nanoseconds as an integer that fits JSON numbers
pub(crate) fn duration_nanos(elapsed: Duration) -> u64 {
    u64::try_from(elapsed.as_nanos()).unwrap_or(u64::MAX)
}

/// Milliseconds with microsecond precision
pub(crate) fn format_millis(elapsed: Duration) -> String {
    format!("{:.3}", elapsed.as_secs_f64() * 1000.0)
}
