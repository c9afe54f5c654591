mod config;
mod logging;

use std::io::{self, BufWriter};
use std::path::{Path, PathBuf};

use clap::{Parser, ValueEnum};
use config::{FileConfig, OutputConfig, load_config};
use logging::init_logging;
use sqlfixture_generate::{GenerationEngine, GenerationError, GenerationReport, PassKind};
use thiserror::Error;

#[derive(Debug, Error)]
enum CliError {
    #[error("generation error: {0}")]
    Generation(#[from] GenerationError),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("config error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("json serialization error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("logging error: {0}")]
    Logging(String),
}

/// Emit synthetic SQL row literals for reading and position fixtures.
///
/// With no arguments, both passes run over minutes 0..2880 in steps of 5 and
/// each row is printed as `(...),` for splicing into an `INSERT ... VALUES`.
#[derive(Parser, Debug)]
#[command(name = "sqlfixture", version, about)]
struct Cli {
    /// Base seed for reproducible output.
    #[arg(long)]
    seed: Option<u64>,
    /// Exclusive upper bound of the minute index.
    #[arg(long)]
    upper_bound: Option<u64>,
    /// Minute index step.
    #[arg(long)]
    step: Option<u64>,
    /// Pass to run; repeat to select several. Defaults to all.
    #[arg(long = "pass", value_enum, value_name = "PASS")]
    passes: Vec<PassArg>,
    /// Wrap each pass in a complete INSERT statement.
    #[arg(long, default_value_t = false)]
    insert_statement: bool,
    /// Target table for reading rows in statement mode.
    #[arg(long)]
    reading_table: Option<String>,
    /// Target table for position rows in statement mode.
    #[arg(long)]
    position_table: Option<String>,
    /// TOML config file; flags take precedence over it.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Write the run report as JSON.
    #[arg(long)]
    report: Option<PathBuf>,
    /// Append JSON logs to this file instead of stderr.
    #[arg(long)]
    log_file: Option<PathBuf>,
    /// Log run progress at info level.
    #[arg(short, long, default_value_t = false)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum PassArg {
    Readings,
    Positions,
}

impl From<PassArg> for PassKind {
    fn from(value: PassArg) -> Self {
        match value {
            PassArg::Readings => PassKind::Readings,
            PassArg::Positions => PassKind::Positions,
        }
    }
}

impl Cli {
    fn overrides(&self) -> FileConfig {
        FileConfig {
            seed: self.seed,
            upper_bound: self.upper_bound,
            step: self.step,
            passes: Some(self.passes.iter().copied().map(PassKind::from).collect()),
            output: OutputConfig {
                insert_statement: self.insert_statement.then_some(true),
                reading_table: self.reading_table.clone(),
                position_table: self.position_table.clone(),
            },
        }
    }
}

fn main() -> Result<(), CliError> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.log_file.as_deref())?;

    let file_config = match cli.config.as_deref() {
        Some(path) => {
            let config = load_config(path)?;
            tracing::info!(event = "config_loaded", path = %path.display());
            config
        }
        None => FileConfig::default(),
    };
    let options = file_config.resolve(cli.overrides());

    tracing::info!(
        event = "run_started",
        seed = ?options.seed,
        upper_bound = options.upper_bound,
        step = options.step,
        output = ?options.output
    );

    let stdout = io::stdout();
    let report = GenerationEngine::new(options).run(BufWriter::new(stdout.lock()))?;

    if let Some(path) = cli.report.as_deref() {
        write_report(path, &report)?;
        tracing::info!(event = "report_written", path = %path.display());
    }

    tracing::info!(
        event = "run_finished",
        status = "success",
        run_id = %report.run_id,
        seed = report.seed,
        rows = report.rows_total(),
        duration_ms = report.duration_ms
    );

    Ok(())
}

fn write_report(path: &Path, report: &GenerationReport) -> Result<(), CliError> {
    let encoded = serde_json::to_vec_pretty(report)?;
    std::fs::write(path, encoded)?;
    Ok(())
}
