use sqlfixture_core::{
    Account, OrderType, POSITION_COLUMNS, PositionRecord, PositionStatus, PositionType,
    READING_COLUMNS, TimeSeriesReading,
};

fn position_fixture() -> PositionRecord {
    PositionRecord {
        account: Account::Two,
        position_type: PositionType::Short,
        status: PositionStatus::Filled,
        order_type: OrderType::Limit,
        entry_price: 2500.25,
        execution_price: 2480.75,
        position_size: 1200,
        leverage: 5,
        initial_margin: 3,
        available_margin: 7,
        timestamp_offset_minutes: 10,
        bankruptcy_price: 100.5,
        bankruptcy_value: 200.0,
        maintenance_margin: 300.125,
        liquidation_price: 400.0,
        unrealized_pnl: 500.5,
        settlement_price: 600.0,
        entry_nonce: 100,
        exit_nonce: 113,
        entry_sequence: 10,
    }
}

#[test]
fn reading_literal_matches_template() {
    let reading = TimeSeriesReading {
        value: 29999,
        timestamp_offset_minutes: 0,
    };
    assert_eq!(
        reading.to_row_literal(),
        "(29999, now() + interval '0 minute')"
    );
    assert_eq!(reading.to_values().len(), READING_COLUMNS.len());
}

#[test]
fn position_literal_renders_every_column_in_order() {
    let record = position_fixture();
    assert_eq!(record.to_values().len(), POSITION_COLUMNS.len());
    assert_eq!(
        record.to_row_literal(),
        "(gen_random_uuid(), 'two', 'SHORT', 'FILLED', 'LIMIT', 2500.25, 2480.75, 1200, \
         5, 3, 7, now() + interval '10 minute', 100.5, 200, 300.125, 400, 500.5, 600, \
         100, 113, 10)"
    );
}

#[test]
fn records_serialize_with_sql_labels() {
    let json = serde_json::to_value(position_fixture()).expect("serialize");
    assert_eq!(json["account"], "two");
    assert_eq!(json["position_type"], "SHORT");
    assert_eq!(json["status"], "FILLED");
    assert_eq!(json["order_type"], "LIMIT");
}
