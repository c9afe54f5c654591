use serde::{Deserialize, Serialize};

use crate::literal::{SqlValue, row_literal};
use crate::types::{Account, OrderType, PositionStatus, PositionType};

/// Target columns for reading rows, in tuple order.
pub const READING_COLUMNS: &[&str] = &["price", "timestamp"];

/// Target columns for position rows, in tuple order.
pub const POSITION_COLUMNS: &[&str] = &[
    "uuid",
    "account_id",
    "position_type",
    "order_status",
    "order_type",
    "entryprice",
    "execution_price",
    "positionsize",
    "leverage",
    "initial_margin",
    "available_margin",
    "timestamp",
    "bankruptcy_price",
    "bankruptcy_value",
    "maintenance_margin",
    "liquidation_price",
    "unrealized_pnl",
    "settlement_price",
    "entry_nonce",
    "exit_nonce",
    "entry_sequence",
];

/// One integer reading of a time series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeSeriesReading {
    pub value: i64,
    /// Offset from `now()` on the SQL side.
    pub timestamp_offset_minutes: u64,
}

impl TimeSeriesReading {
    pub fn to_values(&self) -> Vec<SqlValue> {
        vec![
            SqlValue::Int(self.value),
            SqlValue::now_plus_minutes(self.timestamp_offset_minutes),
        ]
    }

    pub fn to_row_literal(&self) -> String {
        row_literal(&self.to_values())
    }
}

/// A trading position fixture.
///
/// Fields are independent draws: prices, margins and valuations are not
/// expected to agree with each other.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PositionRecord {
    pub account: Account,
    pub position_type: PositionType,
    pub status: PositionStatus,
    pub order_type: OrderType,
    pub entry_price: f64,
    pub execution_price: f64,
    pub position_size: i64,
    pub leverage: i64,
    pub initial_margin: i64,
    pub available_margin: i64,
    pub timestamp_offset_minutes: u64,
    pub bankruptcy_price: f64,
    pub bankruptcy_value: f64,
    pub maintenance_margin: f64,
    pub liquidation_price: f64,
    pub unrealized_pnl: f64,
    pub settlement_price: f64,
    pub entry_nonce: i64,
    pub exit_nonce: i64,
    pub entry_sequence: i64,
}

impl PositionRecord {
    /// Values in [`POSITION_COLUMNS`] order. The identifier is always the
    /// SQL-side UUID expression.
    pub fn to_values(&self) -> Vec<SqlValue> {
        vec![
            SqlValue::random_uuid(),
            SqlValue::text(self.account.label()),
            SqlValue::text(self.position_type.label()),
            SqlValue::text(self.status.label()),
            SqlValue::text(self.order_type.label()),
            SqlValue::Float(self.entry_price),
            SqlValue::Float(self.execution_price),
            SqlValue::Int(self.position_size),
            SqlValue::Int(self.leverage),
            SqlValue::Int(self.initial_margin),
            SqlValue::Int(self.available_margin),
            SqlValue::now_plus_minutes(self.timestamp_offset_minutes),
            SqlValue::Float(self.bankruptcy_price),
            SqlValue::Float(self.bankruptcy_value),
            SqlValue::Float(self.maintenance_margin),
            SqlValue::Float(self.liquidation_price),
            SqlValue::Float(self.unrealized_pnl),
            SqlValue::Float(self.settlement_price),
            SqlValue::Int(self.entry_nonce),
            SqlValue::Int(self.exit_nonce),
            SqlValue::Int(self.entry_sequence),
        ]
    }

    pub fn to_row_literal(&self) -> String {
        row_literal(&self.to_values())
    }
}
