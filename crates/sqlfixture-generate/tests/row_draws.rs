use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use sqlfixture_core::{Account, OrderType, PositionStatus, PositionType};
use sqlfixture_generate::generators::{
    ENTRY_PRICE_MAX, EXECUTION_JITTER, EXIT_NONCE_GAP_MAX, EXIT_NONCE_GAP_MIN, LEVERAGE_MAX,
    LEVERAGE_MIN, MARGIN_MAX, MARGIN_MIN, NONCE_STRIDE, POSITION_SIZE_MAX, POSITION_SIZE_MIN,
    READING_VALUE_MAX, VALUATION_MAX, draw_position, draw_reading,
};
use sqlfixture_generate::{PassKind, RowGenerator, generate_position_row, generate_reading_row};

#[test]
fn reading_values_stay_in_half_open_range() {
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    for index in (0..2880).step_by(5) {
        let reading = draw_reading(index, &mut rng);
        assert!((0..READING_VALUE_MAX).contains(&reading.value));
        assert_eq!(reading.timestamp_offset_minutes, u64::from(index));
    }
}

#[test]
fn reading_row_matches_template() {
    let mut rng = ChaCha8Rng::seed_from_u64(2);
    let row = generate_reading_row(0, &mut rng);

    let value = row
        .strip_prefix('(')
        .and_then(|rest| rest.strip_suffix(", now() + interval '0 minute'),"))
        .expect("template");
    let value: i64 = value.parse().expect("integer value");
    assert!((0..30000).contains(&value));

    let row = generate_reading_row(2875, &mut rng);
    assert!(row.ends_with(", now() + interval '2875 minute'),"));
}

#[test]
fn position_fields_stay_in_range() {
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    for index in (0..2880).step_by(5) {
        let record = draw_position(index, &mut rng);

        assert!((0.0..ENTRY_PRICE_MAX).contains(&record.entry_price));
        let jitter = record.execution_price - record.entry_price;
        assert!(jitter >= -EXECUTION_JITTER - 1e-9 && jitter < EXECUTION_JITTER + 1e-9);
        assert!((POSITION_SIZE_MIN..=POSITION_SIZE_MAX).contains(&record.position_size));
        assert!((LEVERAGE_MIN..=LEVERAGE_MAX).contains(&record.leverage));
        assert!((MARGIN_MIN..=MARGIN_MAX).contains(&record.initial_margin));
        assert!((MARGIN_MIN..=MARGIN_MAX).contains(&record.available_margin));
        for valuation in [
            record.bankruptcy_price,
            record.bankruptcy_value,
            record.maintenance_margin,
            record.liquidation_price,
            record.unrealized_pnl,
            record.settlement_price,
        ] {
            assert!((0.0..VALUATION_MAX).contains(&valuation));
        }

        assert_eq!(record.entry_sequence, index as i64);
        assert_eq!(record.entry_nonce, index as i64 * NONCE_STRIDE);
        assert!(record.exit_nonce > record.entry_nonce);
        let gap = record.exit_nonce - record.entry_nonce;
        assert!((EXIT_NONCE_GAP_MIN..=EXIT_NONCE_GAP_MAX).contains(&gap));
        assert_eq!(record.timestamp_offset_minutes, u64::from(index));
    }
}

#[test]
fn position_enums_cover_only_known_labels() {
    let mut rng = ChaCha8Rng::seed_from_u64(4);
    let mut seen_accounts = Vec::new();
    let mut seen_statuses = Vec::new();
    for index in 0..500 {
        let record = draw_position(index, &mut rng);
        assert!(Account::ALL.contains(&record.account));
        assert!(PositionType::ALL.contains(&record.position_type));
        assert!(PositionStatus::ALL.contains(&record.status));
        assert!(OrderType::ALL.contains(&record.order_type));
        if !seen_accounts.contains(&record.account) {
            seen_accounts.push(record.account);
        }
        if !seen_statuses.contains(&record.status) {
            seen_statuses.push(record.status);
        }
    }
    assert_eq!(seen_accounts.len(), Account::ALL.len());
    assert_eq!(seen_statuses.len(), PositionStatus::ALL.len());
}

#[test]
fn position_row_embeds_opaque_expressions() {
    let mut rng = ChaCha8Rng::seed_from_u64(5);
    let row = generate_position_row(35, &mut rng);
    assert!(row.starts_with("(gen_random_uuid(), '"));
    assert!(row.contains(", now() + interval '35 minute', "));
    assert!(row.contains(", 350, "));
    assert!(row.ends_with(", 35),"));
}

#[test]
fn largest_index_keeps_nonces_ordered() {
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    let record = draw_position(u32::MAX, &mut rng);
    assert_eq!(record.entry_sequence, i64::from(u32::MAX));
    assert_eq!(record.entry_nonce, i64::from(u32::MAX) * NONCE_STRIDE);
    assert!(record.exit_nonce > record.entry_nonce);

    let row = generate_position_row(u32::MAX, &mut rng);
    assert!(row.contains(", now() + interval '4294967295 minute', "));
    assert!(row.ends_with(", 4294967295),"));
}

#[test]
fn row_lines_match_the_free_row_functions() {
    let generator = RowGenerator::new(17);
    let line = generator.row_line(PassKind::Positions, 25);
    assert_eq!(line, generator.position_row(25));
    assert_eq!(line, format!("{},", generator.row_literal(PassKind::Positions, 25)));
    assert_eq!(
        generator.row_line(PassKind::Readings, 25),
        format!("{},", generator.reading(25).to_row_literal())
    );
}

#[test]
fn row_generator_is_deterministic_per_seed() {
    let a = RowGenerator::new(99);
    let b = RowGenerator::new(99);
    let c = RowGenerator::new(100);

    assert_eq!(a.position(40), b.position(40));
    assert_eq!(a.reading_row(40), b.reading_row(40));
    assert_eq!(a.base_seed(), 99);

    let differs = (0..20).any(|index| a.reading(index * 5) != c.reading(index * 5));
    assert!(differs);
}
