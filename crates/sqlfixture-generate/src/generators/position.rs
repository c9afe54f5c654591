use rand::Rng;
use rand::seq::IndexedRandom;

use sqlfixture_core::{Account, OrderType, PositionRecord, PositionStatus, PositionType};

pub const ENTRY_PRICE_MAX: f64 = 5000.0;
/// Execution price is entry price plus a jitter in `[-EXECUTION_JITTER, EXECUTION_JITTER)`.
pub const EXECUTION_JITTER: f64 = 50.0;
pub const POSITION_SIZE_MIN: i64 = 200;
pub const POSITION_SIZE_MAX: i64 = 5000;
pub const LEVERAGE_MIN: i64 = 1;
pub const LEVERAGE_MAX: i64 = 10;
pub const MARGIN_MIN: i64 = 1;
pub const MARGIN_MAX: i64 = 10;
pub const VALUATION_MAX: f64 = 2000.0;
pub const NONCE_STRIDE: i64 = 10;
pub const EXIT_NONCE_GAP_MIN: i64 = 3;
pub const EXIT_NONCE_GAP_MAX: i64 = 20;

/// Draw one position. Integer ranges are inclusive, real ranges half-open.
///
/// Any `u32` index keeps `index * NONCE_STRIDE + EXIT_NONCE_GAP_MAX` well inside `i64`.
pub fn draw_position<R: Rng + ?Sized>(index: u32, rng: &mut R) -> PositionRecord {
    let account = pick(Account::ALL, Account::One, rng);
    let position_type = pick(PositionType::ALL, PositionType::Long, rng);
    let status = pick(PositionStatus::ALL, PositionStatus::Pending, rng);
    let order_type = pick(OrderType::ALL, OrderType::Limit, rng);

    let entry_price = rng.random_range(0.0..ENTRY_PRICE_MAX);
    let execution_price = entry_price + rng.random_range(-EXECUTION_JITTER..EXECUTION_JITTER);
    let position_size = rng.random_range(POSITION_SIZE_MIN..=POSITION_SIZE_MAX);
    let leverage = rng.random_range(LEVERAGE_MIN..=LEVERAGE_MAX);
    let initial_margin = rng.random_range(MARGIN_MIN..=MARGIN_MAX);
    let available_margin = rng.random_range(MARGIN_MIN..=MARGIN_MAX);

    let bankruptcy_price = valuation(rng);
    let bankruptcy_value = valuation(rng);
    let maintenance_margin = valuation(rng);
    let liquidation_price = valuation(rng);
    let unrealized_pnl = valuation(rng);
    let settlement_price = valuation(rng);

    let entry_sequence = i64::from(index);
    let entry_nonce = entry_sequence * NONCE_STRIDE;
    let exit_nonce = entry_nonce + rng.random_range(EXIT_NONCE_GAP_MIN..=EXIT_NONCE_GAP_MAX);

    PositionRecord {
        account,
        position_type,
        status,
        order_type,
        entry_price,
        execution_price,
        position_size,
        leverage,
        initial_margin,
        available_margin,
        timestamp_offset_minutes: u64::from(index),
        bankruptcy_price,
        bankruptcy_value,
        maintenance_margin,
        liquidation_price,
        unrealized_pnl,
        settlement_price,
        entry_nonce,
        exit_nonce,
        entry_sequence,
    }
}

fn pick<T: Copy, R: Rng + ?Sized>(values: &[T], fallback: T, rng: &mut R) -> T {
    values.choose(rng).copied().unwrap_or(fallback)
}

fn valuation<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    rng.random_range(0.0..VALUATION_MAX)
}
