mod position;
mod reading;

pub use position::{
    ENTRY_PRICE_MAX, EXECUTION_JITTER, EXIT_NONCE_GAP_MAX, EXIT_NONCE_GAP_MIN, LEVERAGE_MAX,
    LEVERAGE_MIN, MARGIN_MAX, MARGIN_MIN, NONCE_STRIDE, POSITION_SIZE_MAX, POSITION_SIZE_MIN,
    VALUATION_MAX, draw_position,
};
pub use reading::{READING_VALUE_MAX, READING_VALUE_MIN, draw_reading};

use rand::Rng;

use sqlfixture_core::{PositionRecord, TimeSeriesReading};

use crate::model::PassKind;
use crate::seed::{hash_seed, row_rng};

/// Reading row for loop index `index`, trailing comma included.
///
/// This is the line format written in [`OutputMode::RowLiterals`] mode.
///
/// [`OutputMode::RowLiterals`]: crate::model::OutputMode::RowLiterals
pub fn generate_reading_row<R: Rng + ?Sized>(index: u32, rng: &mut R) -> String {
    format!("{},", draw_reading(index, rng).to_row_literal())
}

/// Position row for loop index `index`, trailing comma included.
pub fn generate_position_row<R: Rng + ?Sized>(index: u32, rng: &mut R) -> String {
    format!("{},", draw_position(index, rng).to_row_literal())
}

/// Seeded row source: the same base seed and index always yield the same row.
#[derive(Debug, Clone, Copy)]
pub struct RowGenerator {
    base_seed: u64,
    reading_seed: u64,
    position_seed: u64,
}

impl RowGenerator {
    pub fn new(base_seed: u64) -> Self {
        Self {
            base_seed,
            reading_seed: hash_seed(base_seed, PassKind::Readings.key()),
            position_seed: hash_seed(base_seed, PassKind::Positions.key()),
        }
    }

    pub fn base_seed(&self) -> u64 {
        self.base_seed
    }

    pub fn reading(&self, index: u32) -> TimeSeriesReading {
        draw_reading(index, &mut row_rng(self.reading_seed, u64::from(index)))
    }

    pub fn position(&self, index: u32) -> PositionRecord {
        draw_position(index, &mut row_rng(self.position_seed, u64::from(index)))
    }

    pub fn reading_row(&self, index: u32) -> String {
        generate_reading_row(index, &mut row_rng(self.reading_seed, u64::from(index)))
    }

    pub fn position_row(&self, index: u32) -> String {
        generate_position_row(index, &mut row_rng(self.position_seed, u64::from(index)))
    }

    /// Complete output line for `pass` at `index`, trailing comma included.
    pub fn row_line(&self, pass: PassKind, index: u32) -> String {
        match pass {
            PassKind::Readings => self.reading_row(index),
            PassKind::Positions => self.position_row(index),
        }
    }

    /// Tuple literal for `pass` at `index`, without the trailing comma.
    pub fn row_literal(&self, pass: PassKind, index: u32) -> String {
        match pass {
            PassKind::Readings => self.reading(index).to_row_literal(),
            PassKind::Positions => self.position(index).to_row_literal(),
        }
    }
}
