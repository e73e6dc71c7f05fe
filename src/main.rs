//! sortbench - Sorting algorithm benchmarks over CSV columns

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use clap::{ArgAction, Parser, ValueEnum};

use sortbench::config::{Config, OutputFormat, DEFAULT_PREVIEW_LEN};
use sortbench::output::render_to_stdout;
use sortbench::parser::load_path;
use sortbench::sort::Algorithm;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum CliOutputFormat {
    Terminal,
    Json,
}

impl From<CliOutputFormat> for OutputFormat {
    fn from(f: CliOutputFormat) -> Self {
        match f {
            CliOutputFormat::Terminal => OutputFormat::Terminal,
            CliOutputFormat::Json => OutputFormat::Json,
        }
    }
}

/// Time insertion, shell, merge, quick and heap sort on a numeric CSV column
#[derive(Parser, Debug)]
#[command(name = "sortbench")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// CSV file to load
    file: PathBuf,

    /// Numeric column to sort
    column: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "terminal")]
    format: CliOutputFormat,

    /// Number of sorted values to show
    #[arg(short, long, default_value_t = DEFAULT_PREVIEW_LEN)]
    preview: usize,

    /// Timed runs per algorithm; more than one reports the median
    #[arg(short, long, default_value_t = 1)]
    runs: usize,

    /// Algorithm(s) to run (comma-separated), default all five
    #[arg(short, long, value_delimiter = ',')]
    algorithm: Vec<Algorithm>,

    /// Fail on rows whose cell count differs from the header
    #[arg(long)]
    strict: bool,

    /// Skip checking that each sorted copy is in order
    #[arg(long)]
    no_verify: bool,

    /// Only list the numeric columns
    #[arg(long)]
    list_columns: bool,

    /// More log output (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(2)
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let mut config = Config::new(cli.file)
        .with_output_format(cli.format.into())
        .with_preview_len(cli.preview)
        .with_runs(cli.runs)
        .with_algorithms(cli.algorithm)
        .with_strict(cli.strict)
        .with_verify(!cli.no_verify);
    if let Some(column) = cli.column {
        config = config.with_column(column);
    }

    let table = load_path(&config.input, &config.load_options())
        .with_context(|| format!("Failed to load {}", config.input.display()))?;
    let numeric = table.numeric_columns();
    log::info!(
        "loaded {} row(s), {} of {} column(s) numeric",
        table.row_count(),
        numeric.len(),
        table.column_count()
    );

    if cli.list_columns {
        println!("CSV loaded: {} ({} rows)", config.input.display(), table.row_count());
        println!();
        println!("Numeric columns found:");
        for name in &numeric {
            println!("- {}", name);
        }
        return Ok(());
    }

    let Some(column_name) = config.column.as_deref() else {
        if numeric.is_empty() {
            bail!("No column selected and the file has no numeric columns");
        }
        bail!(
            "No column selected; numeric columns: {}",
            numeric.join(", ")
        );
    };

    let column = table
        .column_values(column_name)
        .with_context(|| format!("Failed to read column '{}'", column_name))?;

    let report = config
        .harness()
        .benchmark(&column, config.preview_len)
        .context("Benchmark failed")?
        .with_table(&table);

    render_to_stdout(&report, config.output_format)
}
