use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{init_db, punch_cycle, rti, setup_test_db};

#[test]
fn test_init_creates_database() {
    let db_path = setup_test_db("init_creates");

    rti()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Database initialized at"));

    assert!(std::path::Path::new(&db_path).exists());
}

#[test]
fn test_punch_in_then_out_across_invocations() {
    let db_path = setup_test_db("in_out");
    init_db(&db_path);

    rti()
        .args(["--db", &db_path, "in"])
        .assert()
        .success()
        .stdout(contains("Punched in at"))
        .stdout(contains("Punched in since"));

    rti()
        .args(["--db", &db_path, "out"])
        .assert()
        .success()
        .stdout(contains("Punched out at"))
        .stdout(contains("record #1"))
        .stdout(contains("Punched out (1 record(s))"));

    rti()
        .args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("Punch records (1):"))
        .stdout(contains("Total Time"))
        .stdout(contains("hours"));
}

#[test]
fn test_out_without_in_is_a_noop() {
    let db_path = setup_test_db("out_noop");
    init_db(&db_path);

    rti()
        .args(["--db", &db_path, "out"])
        .assert()
        .success()
        .stdout(contains("Not punched in; nothing to do."))
        .stdout(contains("Punched out (0 record(s))"));

    rti()
        .args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("No punch records yet."));
}

#[test]
fn test_double_in_keeps_a_single_open_record() {
    let db_path = setup_test_db("double_in");
    init_db(&db_path);

    rti().args(["--db", &db_path, "in"]).assert().success();
    rti()
        .args(["--db", &db_path, "in"])
        .assert()
        .success()
        .stdout(contains("Already punched in since"));

    let output = rti()
        .args(["--db", &db_path, "list", "--json"])
        .output()
        .expect("failed to list records");
    assert!(output.status.success());

    let rows: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("list --json prints JSON");
    let rows = rows.as_array().expect("array of records");
    assert_eq!(rows.len(), 1);
    assert!(rows[0]["out_time"].is_null());
}

#[test]
fn test_list_json_on_fresh_database_is_valid_json() {
    let db_path = setup_test_db("fresh_list_json");

    let output = rti()
        .args(["--db", &db_path, "list", "--json"])
        .output()
        .expect("failed to list records");
    assert!(output.status.success());

    let rows: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("list --json prints only JSON");
    assert_eq!(rows, serde_json::json!([]));
}

#[test]
fn test_status_reports_state() {
    let db_path = setup_test_db("status");
    init_db(&db_path);
    punch_cycle(&db_path);

    rti()
        .args(["--db", &db_path, "status"])
        .assert()
        .success()
        .stdout(contains("Punched out (1 record(s))"))
        .stdout(contains("Punched in since").not());
}

#[test]
fn test_log_records_punches() {
    let db_path = setup_test_db("log_punches");
    init_db(&db_path);
    punch_cycle(&db_path);

    rti()
        .args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("Internal log"))
        .stdout(contains("Database initialized at"))
        .stdout(contains("(punch)"))
        .stdout(contains("Punched in at"))
        .stdout(contains("Punched out at"));
}
