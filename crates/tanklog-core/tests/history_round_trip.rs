use std::fs;

use tanklog_core::{create_record, stats, store, FuelRecord};

fn build_history(inputs: &[(&str, f64, f64, i64)]) -> Vec<FuelRecord> {
    let mut history = Vec::new();
    for &(date, liters, price, odometer) in inputs {
        let record = create_record(date, liters, price, odometer, &history)
            .expect("input should validate");
        history.push(record);
    }
    history
}

#[test]
fn test_validated_history_round_trips_through_disk() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("fuel-log.json");

    let history = build_history(&[
        ("2024-01-01", 40.0, 1.50, 10000),
        ("2024-01-15", 38.0, 1.60, 10500),
        ("2024-02-02", 41.5, 1.55, 11120),
    ]);

    store::save(&path, &history).expect("save should succeed");
    let outcome = store::load(&path);

    assert_eq!(outcome.history, history);
    assert_eq!(outcome.skipped, 0);

    // Statistics read the same before and after the round trip
    assert_eq!(stats::total_cost(&outcome.history), stats::total_cost(&history));
    assert_eq!(stats::total_distance(&outcome.history), 1120);
    assert_eq!(
        stats::average_consumption(&outcome.history),
        stats::average_consumption(&history)
    );
}

#[test]
fn test_loaded_history_accepts_further_records() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("fuel-log.json");

    let history = build_history(&[("2024-01-01", 40.0, 1.50, 10000)]);
    store::save(&path, &history).expect("save should succeed");

    let mut loaded = store::load(&path).history;
    let next = create_record("2024-01-20", 36.0, 1.55, 10480, &loaded)
        .expect("later refuel should validate");
    loaded.push(next);

    assert_eq!(loaded.len(), 2);
    assert_eq!(stats::total_distance(&loaded), 480);
}

#[test]
fn test_hand_edited_file_degrades_to_skip_and_report() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("fuel-log.json");

    fs::write(
        &path,
        r#"[
            {"date": "2024-01-01", "liters": 40.0, "pricePerLiter": 1.5, "odometer": 10000},
            "this is not a record",
            {"date": "2024-02-01", "liters": 36.0, "pricePerLiter": 1.6, "odometer": 11000}
        ]"#,
    )
    .expect("write fixture");

    let outcome = store::load(&path);
    assert_eq!(outcome.history.len(), 2);
    assert_eq!(outcome.skipped, 1);

    // The surviving records still produce statistics
    assert_eq!(stats::total_distance(&outcome.history), 1000);
    assert!(stats::average_consumption(&outcome.history).is_some());
}
