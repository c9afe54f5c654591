use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use sqlfixture_core::{POSITION_COLUMNS, READING_COLUMNS};

pub const DEFAULT_UPPER_BOUND: u64 = 2880;
pub const DEFAULT_STEP: u64 = 5;
pub const DEFAULT_READING_TABLE: &str = "btc_usd_price";
pub const DEFAULT_POSITION_TABLE: &str = "trader_order";

/// One loop over the index range for a single record shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PassKind {
    Readings,
    Positions,
}

impl PassKind {
    /// Passes in the order they are always run.
    pub const ALL: [PassKind; 2] = [PassKind::Readings, PassKind::Positions];

    pub fn key(self) -> &'static str {
        match self {
            PassKind::Readings => "readings",
            PassKind::Positions => "positions",
        }
    }

    pub fn columns(self) -> &'static [&'static str] {
        match self {
            PassKind::Readings => READING_COLUMNS,
            PassKind::Positions => POSITION_COLUMNS,
        }
    }
}

/// How rows are framed on the output stream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputMode {
    /// One `(...),` line per row, left for the caller to splice into a statement.
    RowLiterals,
    /// Each pass wrapped in a complete `INSERT INTO ... VALUES ...;` statement.
    InsertStatement {
        reading_table: String,
        position_table: String,
    },
}

impl OutputMode {
    pub fn insert_statement() -> Self {
        OutputMode::InsertStatement {
            reading_table: DEFAULT_READING_TABLE.to_string(),
            position_table: DEFAULT_POSITION_TABLE.to_string(),
        }
    }

    pub fn table_for(&self, pass: PassKind) -> Option<&str> {
        match self {
            OutputMode::RowLiterals => None,
            OutputMode::InsertStatement {
                reading_table,
                position_table,
            } => match pass {
                PassKind::Readings => Some(reading_table),
                PassKind::Positions => Some(position_table),
            },
        }
    }
}

/// Options for the generation engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerateOptions {
    /// Base seed. When absent one is drawn from OS entropy for every run.
    pub seed: Option<u64>,
    /// Exclusive upper bound of the loop index.
    pub upper_bound: u64,
    /// Loop index increment; also the minute spacing between rows.
    pub step: u64,
    /// Passes to run. Duplicates are ignored and order is fixed.
    pub passes: Vec<PassKind>,
    pub output: OutputMode,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            seed: None,
            upper_bound: DEFAULT_UPPER_BOUND,
            step: DEFAULT_STEP,
            passes: PassKind::ALL.to_vec(),
            output: OutputMode::RowLiterals,
        }
    }
}

impl GenerateOptions {
    /// Rows each pass emits: `ceil(upper_bound / step)`.
    pub fn rows_per_pass(&self) -> u64 {
        if self.step == 0 {
            return 0;
        }
        self.upper_bound.div_ceil(self.step)
    }
}

/// Summary of a single pass.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PassReport {
    pub pass: PassKind,
    pub rows: u64,
    pub bytes_written: u64,
    pub duration_ms: u64,
}

/// Report for a generation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationReport {
    pub run_id: String,
    /// Base seed actually used; pass it back as `seed` to replay the run.
    pub seed: u64,
    pub started_at: DateTime<Utc>,
    pub passes: Vec<PassReport>,
    pub duration_ms: u64,
}

impl GenerationReport {
    pub fn new(run_id: String, seed: u64, started_at: DateTime<Utc>) -> Self {
        Self {
            run_id,
            seed,
            started_at,
            passes: Vec::new(),
            duration_ms: 0,
        }
    }

    pub fn rows_total(&self) -> u64 {
        self.passes.iter().map(|pass| pass.rows).sum()
    }

    pub fn bytes_total(&self) -> u64 {
        self.passes.iter().map(|pass| pass.bytes_written).sum()
    }
}
