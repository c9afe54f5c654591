use std::env;
use std::io;

use sqlfixture_generate::{GenerateOptions, GenerationEngine, OutputMode};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let mut options = GenerateOptions {
        upper_bound: 60,
        ..GenerateOptions::default()
    };
    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--seed" => options.seed = args.next().map(|value| value.parse()).transpose()?,
            "--statement" => options.output = OutputMode::insert_statement(),
            _ => return Err(format!("unexpected argument: {arg}").into()),
        }
    }

    let stdout = io::stdout();
    let report = GenerationEngine::new(options).run(stdout.lock())?;
    eprintln!("seed={} rows={}", report.seed, report.rows_total());
    Ok(())
}
