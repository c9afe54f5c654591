use std::io::Write;
use std::time::Instant;

use tracing::{debug, info};

use crate::errors::GenerationError;
use crate::generators::RowGenerator;
use crate::model::{GenerateOptions, GenerationReport, OutputMode, PassKind, PassReport};
use crate::output::sql::PassWriter;

/// Largest exclusive upper bound: every loop index must fit the `u32` row index.
pub const MAX_UPPER_BOUND: u64 = u32::MAX as u64 + 1;

/// Runs the selected passes and streams their rows to a writer.
#[derive(Debug, Clone)]
pub struct GenerationEngine {
    options: GenerateOptions,
}

impl GenerationEngine {
    pub fn new(options: GenerateOptions) -> Self {
        Self { options }
    }

    pub fn run<W: Write>(&self, mut out: W) -> Result<GenerationReport, GenerationError> {
        validate_options(&self.options)?;

        let start = Instant::now();
        let run_id = uuid::Uuid::new_v4().to_string();
        let seed = self.options.seed.unwrap_or_else(rand::random);
        let generator = RowGenerator::new(seed);
        let passes = selected_passes(&self.options.passes);
        let mut report = GenerationReport::new(run_id.clone(), seed, chrono::Utc::now());

        info!(
            run_id = %run_id,
            seed,
            seeded = self.options.seed.is_some(),
            passes = ?passes,
            upper_bound = self.options.upper_bound,
            step = self.options.step,
            "generation started"
        );

        for pass in passes {
            let pass_start = Instant::now();
            info!(pass = pass.key(), "generating pass");

            let (mut writer, render): (_, fn(&RowGenerator, PassKind, u32) -> String) =
                match self.options.output.table_for(pass) {
                    Some(table) => (
                        PassWriter::insert_statement(&mut out, table, pass.columns()),
                        RowGenerator::row_literal,
                    ),
                    None => (PassWriter::row_literals(&mut out), RowGenerator::row_line),
                };
            for index in (0..self.options.upper_bound).step_by(self.options.step as usize) {
                let index = u32::try_from(index).map_err(|_| {
                    GenerationError::InvalidOptions(format!("row index {index} exceeds u32"))
                })?;
                writer.write_row(&render(&generator, pass, index))?;
            }
            let (rows, bytes_written) = writer.finish()?;

            let duration_ms = pass_start.elapsed().as_millis() as u64;
            info!(
                pass = pass.key(),
                rows,
                bytes_written,
                duration_ms,
                "pass finished"
            );
            report.passes.push(PassReport {
                pass,
                rows,
                bytes_written,
                duration_ms,
            });
        }

        report.duration_ms = start.elapsed().as_millis() as u64;
        info!(
            run_id = %run_id,
            rows = report.rows_total(),
            bytes = report.bytes_total(),
            duration_ms = report.duration_ms,
            "generation finished"
        );

        Ok(report)
    }
}

/// Requested passes in run order, deduplicated.
fn selected_passes(requested: &[PassKind]) -> Vec<PassKind> {
    PassKind::ALL
        .into_iter()
        .filter(|pass| requested.contains(pass))
        .collect()
}

fn validate_options(options: &GenerateOptions) -> Result<(), GenerationError> {
    if options.step == 0 {
        return Err(GenerationError::InvalidOptions(
            "step must be greater than zero".to_string(),
        ));
    }
    if usize::try_from(options.step).is_err() {
        return Err(GenerationError::InvalidOptions(format!(
            "step {} is too large",
            options.step
        )));
    }
    if options.upper_bound > MAX_UPPER_BOUND {
        return Err(GenerationError::InvalidOptions(format!(
            "upper bound must be at most {MAX_UPPER_BOUND}"
        )));
    }
    if options.passes.is_empty() {
        return Err(GenerationError::InvalidOptions(
            "at least one pass must be selected".to_string(),
        ));
    }
    if let OutputMode::InsertStatement {
        reading_table,
        position_table,
    } = &options.output
    {
        validate_table_name(reading_table)?;
        validate_table_name(position_table)?;
    }
    debug!(rows_per_pass = options.rows_per_pass(), "options validated");
    Ok(())
}

/// Accepts plain and schema-qualified identifiers (`schema.table`).
fn validate_table_name(name: &str) -> Result<(), GenerationError> {
    let valid = !name.is_empty()
        && name.split('.').all(|part| {
            let mut chars = part.chars();
            matches!(chars.next(), Some(c) if c.is_ascii_alphabetic() || c == '_')
                && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        });
    if valid {
        Ok(())
    } else {
        Err(GenerationError::InvalidOptions(format!(
            "invalid table name '{name}'"
        )))
    }
}
