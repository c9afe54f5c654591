//! Core contracts for sqlfixture.
//!
//! This crate defines the fixture record shapes, their enum vocabularies and
//! the SQL literal values they render to.

pub mod error;
pub mod literal;
pub mod records;
pub mod types;

pub use error::{Error, Result};
pub use literal::{SqlValue, row_literal};
pub use records::{POSITION_COLUMNS, PositionRecord, READING_COLUMNS, TimeSeriesReading};
pub use types::{Account, OrderType, PositionStatus, PositionType};
