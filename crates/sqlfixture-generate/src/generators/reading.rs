use rand::Rng;

use sqlfixture_core::TimeSeriesReading;

/// Readings are drawn from `[READING_VALUE_MIN, READING_VALUE_MAX)`.
pub const READING_VALUE_MIN: i64 = 0;
pub const READING_VALUE_MAX: i64 = 30000;

/// Draw one reading; `index` doubles as the minute offset.
pub fn draw_reading<R: Rng + ?Sized>(index: u32, rng: &mut R) -> TimeSeriesReading {
    TimeSeriesReading {
        value: rng.random_range(READING_VALUE_MIN..READING_VALUE_MAX),
        timestamp_offset_minutes: u64::from(index),
    }
}
