use std::path::Path;

use serde::Deserialize;
use sqlfixture_generate::model::{DEFAULT_POSITION_TABLE, DEFAULT_READING_TABLE};
use sqlfixture_generate::{GenerateOptions, OutputMode, PassKind};

use crate::CliError;

/// Optional TOML config. Every key may be omitted.
///
/// ```toml
/// seed = 42
/// upper_bound = 2880
/// step = 5
/// passes = ["readings", "positions"]
///
/// [output]
/// insert_statement = true
/// reading_table = "btc_usd_price"
/// position_table = "trader_order"
/// ```
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub seed: Option<u64>,
    pub upper_bound: Option<u64>,
    pub step: Option<u64>,
    pub passes: Option<Vec<PassKind>>,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    pub insert_statement: Option<bool>,
    pub reading_table: Option<String>,
    pub position_table: Option<String>,
}

pub fn load_config(path: &Path) -> Result<FileConfig, CliError> {
    let content = std::fs::read_to_string(path)?;
    parse_config(&content)
}

pub fn parse_config(content: &str) -> Result<FileConfig, CliError> {
    Ok(toml::from_str(content)?)
}

impl FileConfig {
    /// Layer `overrides` on top of this file; both fall back to the defaults.
    pub fn resolve(self, overrides: FileConfig) -> GenerateOptions {
        let defaults = GenerateOptions::default();
        let passes = overrides
            .passes
            .filter(|passes| !passes.is_empty())
            .or(self.passes)
            .unwrap_or(defaults.passes);

        let insert_statement = overrides
            .output
            .insert_statement
            .or(self.output.insert_statement)
            .unwrap_or(false);
        let output = if insert_statement {
            OutputMode::InsertStatement {
                reading_table: overrides
                    .output
                    .reading_table
                    .or(self.output.reading_table)
                    .unwrap_or_else(|| DEFAULT_READING_TABLE.to_string()),
                position_table: overrides
                    .output
                    .position_table
                    .or(self.output.position_table)
                    .unwrap_or_else(|| DEFAULT_POSITION_TABLE.to_string()),
            }
        } else {
            let ignored = ignored_table_names(&self.output, &overrides.output);
            if !ignored.is_empty() {
                tracing::warn!(
                    event = "table_names_ignored",
                    keys = ?ignored,
                    "table names only apply when insert_statement is enabled"
                );
            }
            OutputMode::RowLiterals
        };

        GenerateOptions {
            seed: overrides.seed.or(self.seed),
            upper_bound: overrides
                .upper_bound
                .or(self.upper_bound)
                .unwrap_or(defaults.upper_bound),
            step: overrides.step.or(self.step).unwrap_or(defaults.step),
            passes,
            output,
        }
    }
}

/// Table name keys set in either layer, for use when statement mode is off.
fn ignored_table_names(file: &OutputConfig, overrides: &OutputConfig) -> Vec<&'static str> {
    let mut ignored = Vec::new();
    if file.reading_table.is_some() || overrides.reading_table.is_some() {
        ignored.push("reading_table");
    }
    if file.position_table.is_some() || overrides.position_table.is_some() {
        ignored.push("position_table");
    }
    ignored
}
