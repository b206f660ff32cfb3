use std::path::{Path, PathBuf};
use std::process::Command;

fn bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_tanklog"))
}

fn tanklog(data_file: &Path, args: &[&str]) -> std::process::Output {
    Command::new(bin())
        .arg("--file")
        .arg(data_file)
        .args(args)
        .output()
        .expect("binary should run")
}

fn add(data_file: &Path, date: &str, liters: &str, price: &str, odometer: &str) {
    let output = tanklog(
        data_file,
        &[
            "add", "--date", date, "--liters", liters, "--price", price, "--odometer", odometer,
        ],
    );
    assert!(
        output.status.success(),
        "add failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
}

fn stdout(output: &std::process::Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

fn stderr(output: &std::process::Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

#[test]
fn test_add_writes_record_and_reports_plain() {
    let dir = tempfile::tempdir().unwrap();
    let data_file = dir.path().join("fuel-log.json");

    let output = tanklog(
        &data_file,
        &[
            "add",
            "--date",
            "2024-01-01",
            "--liters",
            "40.0",
            "--price",
            "1.50",
            "--odometer",
            "10000",
        ],
    );

    assert!(output.status.success());
    let out = stdout(&output);
    assert!(out.contains("status=ok"));
    assert!(out.contains("date=2024-01-01"));
    assert!(out.contains("liters=40.00"));
    assert!(out.contains("price_per_liter=1.50"));
    assert!(out.contains("odometer=10000"));
    assert!(out.contains("cost=60.00"));

    let contents = std::fs::read_to_string(&data_file).expect("data file should exist");
    assert!(contents.trim_start().starts_with('['));
    assert!(contents.contains("\"pricePerLiter\""));
    assert!(contents.contains("\"2024-01-01\""));
}

#[test]
fn test_add_defaults_date_to_today() {
    let dir = tempfile::tempdir().unwrap();
    let data_file = dir.path().join("fuel-log.json");

    let output = tanklog(
        &data_file,
        &["add", "--liters", "40.0", "--price", "1.50", "--odometer", "10000"],
    );

    assert!(output.status.success());
    let today = chrono::Local::now().format("%Y-%m-%d").to_string();
    assert!(stdout(&output).contains(&format!("date={}", today)));
}

#[test]
fn test_add_rejects_bad_date_format() {
    let dir = tempfile::tempdir().unwrap();
    let data_file = dir.path().join("fuel-log.json");

    let output = tanklog(
        &data_file,
        &[
            "add", "--date", "01/01/2024", "--liters", "40.0", "--price", "1.50", "--odometer",
            "10000",
        ],
    );

    assert!(!output.status.success());
    assert!(stderr(&output).contains("Date must be in YYYY-MM-DD format"));
    assert!(!data_file.exists());
}

#[test]
fn test_add_rejects_odometer_not_above_last() {
    let dir = tempfile::tempdir().unwrap();
    let data_file = dir.path().join("fuel-log.json");
    add(&data_file, "2024-01-01", "40.0", "1.50", "10000");

    let output = tanklog(
        &data_file,
        &[
            "add", "--date", "2024-01-02", "--liters", "10.0", "--price", "1.50", "--odometer",
            "9500",
        ],
    );

    assert!(!output.status.success());
    assert!(stderr(&output).contains("Odometer must exceed the last recorded value"));

    // Nothing was appended
    let history = tanklog(&data_file, &["history"]);
    assert_eq!(stdout(&history).lines().count(), 1);
}

#[test]
fn test_add_rejects_date_before_last() {
    let dir = tempfile::tempdir().unwrap();
    let data_file = dir.path().join("fuel-log.json");
    add(&data_file, "2024-03-01", "40.0", "1.50", "10000");

    let output = tanklog(
        &data_file,
        &[
            "add", "--date", "2024-02-01", "--liters", "10.0", "--price", "1.50", "--odometer",
            "20000",
        ],
    );

    assert!(!output.status.success());
    assert!(stderr(&output).contains("Date precedes the last recorded refuel"));
}

#[test]
fn test_add_rejects_zero_liters() {
    let dir = tempfile::tempdir().unwrap();
    let data_file = dir.path().join("fuel-log.json");

    let output = tanklog(
        &data_file,
        &["add", "--date", "2024-01-01", "--liters", "0", "--price", "1.50", "--odometer", "10000"],
    );

    assert!(!output.status.success());
    assert!(stderr(&output).contains("Liters must be positive"));
}

#[test]
fn test_history_lists_records_in_insertion_order() {
    let dir = tempfile::tempdir().unwrap();
    let data_file = dir.path().join("fuel-log.json");
    add(&data_file, "2024-01-01", "40.0", "1.50", "10000");
    add(&data_file, "2024-01-15", "38.0", "1.60", "10500");

    let output = tanklog(&data_file, &["history"]);
    assert!(output.status.success());

    let out = stdout(&output);
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("2024-01-01"));
    assert!(lines[0].contains("40.00"));
    assert!(lines[1].starts_with("2024-01-15"));
    assert!(lines[1].contains("10500"));
}

#[test]
fn test_history_empty() {
    let dir = tempfile::tempdir().unwrap();
    let data_file = dir.path().join("fuel-log.json");

    let output = tanklog(&data_file, &["history"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("status=empty"));
}

#[test]
fn test_total_reports_span_and_cost() {
    let dir = tempfile::tempdir().unwrap();
    let data_file = dir.path().join("fuel-log.json");
    add(&data_file, "2024-01-01", "40.0", "1.50", "10000");
    add(&data_file, "2024-01-15", "38.0", "1.60", "10500");

    let output = tanklog(&data_file, &["total"]);
    assert!(output.status.success());

    let out = stdout(&output);
    assert!(out.contains("first_date=2024-01-01"));
    assert!(out.contains("last_date=2024-01-15"));
    // 40 * 1.50 + 38 * 1.60 = 120.80
    assert!(out.contains("total_cost=120.80"));
}

#[test]
fn test_consumption_needs_two_records() {
    let dir = tempfile::tempdir().unwrap();
    let data_file = dir.path().join("fuel-log.json");
    add(&data_file, "2024-01-01", "40.0", "1.50", "10000");

    let output = tanklog(&data_file, &["consumption"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("status=unavailable"));
}

#[test]
fn test_consumption_over_span() {
    let dir = tempfile::tempdir().unwrap();
    let data_file = dir.path().join("fuel-log.json");
    add(&data_file, "2024-01-01", "40.0", "1.50", "10000");
    add(&data_file, "2024-01-15", "38.0", "1.60", "10500");

    let output = tanklog(&data_file, &["consumption"]);
    assert!(output.status.success());
    // (40 + 38) / 500 * 100 = 15.60
    assert!(stdout(&output).contains("average_consumption=15.60 L/100 km"));
}

#[test]
fn test_summary_reports_all_statistics() {
    let dir = tempfile::tempdir().unwrap();
    let data_file = dir.path().join("fuel-log.json");
    add(&data_file, "2024-01-01", "40.0", "1.50", "10000");
    add(&data_file, "2024-01-15", "38.0", "1.60", "10500");

    let output = tanklog(&data_file, &["summary"]);
    assert!(output.status.success());

    let out = stdout(&output);
    assert!(out.contains("first_date=2024-01-01"));
    assert!(out.contains("last_date=2024-01-15"));
    assert!(out.contains("total_cost=120.80"));
    assert!(out.contains("total_distance=500 km"));
    assert!(out.contains("total_liters=78.00 L"));
    assert!(out.contains("average_consumption=15.60 L/100 km"));
}

#[test]
fn test_summary_single_record_has_no_consumption() {
    let dir = tempfile::tempdir().unwrap();
    let data_file = dir.path().join("fuel-log.json");
    add(&data_file, "2024-01-01", "40.0", "1.50", "10000");

    let output = tanklog(&data_file, &["summary"]);
    assert!(output.status.success());

    let out = stdout(&output);
    assert!(out.contains("total_distance=0 km"));
    assert!(out.contains("average_consumption=n/a"));
}

#[test]
fn test_corrupted_file_degrades_to_warning() {
    let dir = tempfile::tempdir().unwrap();
    let data_file = dir.path().join("fuel-log.json");
    std::fs::write(
        &data_file,
        r#"[
            {"date": "2024-01-01", "liters": 40.0, "pricePerLiter": 1.5, "odometer": 10000},
            {"date": "2024-01-15"}
        ]"#,
    )
    .unwrap();

    let output = tanklog(&data_file, &["history"]);
    assert!(output.status.success());
    assert!(stderr(&output).contains("warning="));
    assert!(stderr(&output).contains("Skipped 1"));
    assert_eq!(stdout(&output).lines().count(), 1);
}

#[test]
fn test_unreadable_file_is_empty_history() {
    let dir = tempfile::tempdir().unwrap();
    let data_file = dir.path().join("fuel-log.json");
    std::fs::write(&data_file, "{ not json").unwrap();

    let output = tanklog(&data_file, &["total"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("status=empty"));
}

#[test]
fn test_data_file_from_env() {
    let dir = tempfile::tempdir().unwrap();
    let data_file = dir.path().join("fuel-log.json");

    let output = Command::new(bin())
        .env("TANKLOG_FILE", &data_file)
        .args(["add", "--date", "2024-01-01", "--liters", "40.0", "--price", "1.50", "--odometer", "10000"])
        .output()
        .expect("binary should run");

    assert!(output.status.success());
    assert!(data_file.exists());
}

#[test]
fn test_quiet_suppresses_receipt() {
    let dir = tempfile::tempdir().unwrap();
    let data_file = dir.path().join("fuel-log.json");

    let output = tanklog(
        &data_file,
        &[
            "--quiet", "add", "--date", "2024-01-01", "--liters", "40.0", "--price", "1.50",
            "--odometer", "10000",
        ],
    );

    assert!(output.status.success());
    assert!(stdout(&output).is_empty());
    assert!(data_file.exists());
}
