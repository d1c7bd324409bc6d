//! CLI tests for booking exports and database backups.

use predicates::str::contains;
use std::fs;

mod common;
use common::{bb, book_fixture, init_seeded_db, setup_test_db, temp_out};

#[test]
fn export_bookings_to_csv() {
    let db_path = setup_test_db("export_csv");
    let out = temp_out("export_csv", "csv");
    init_seeded_db(&db_path);

    book_fixture(&db_path, "2030-03-05", "09:00");

    bb().args(["--db", &db_path, "export", "--format", "csv", "--file", &out])
        .assert()
        .success()
        .stdout(contains("CSV export completed"));

    let content = fs::read_to_string(&out).expect("read export");
    assert!(content.starts_with("id,date,time,service_id,stylist_id"));
    assert!(content.contains("2030-03-05"));
    assert!(content.contains("Casey Morgan"));
}

#[test]
fn export_bookings_to_json() {
    let db_path = setup_test_db("export_json");
    let out = temp_out("export_json", "json");
    init_seeded_db(&db_path);

    book_fixture(&db_path, "2030-03-05", "09:00");

    bb().args(["--db", &db_path, "export", "--format", "json", "--file", &out])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read export");
    let parsed: serde_json::Value = serde_json::from_str(&content).expect("valid json");
    assert_eq!(parsed[0]["client_name"], "Casey Morgan");
    assert_eq!(parsed[0]["time"], "09:00");
}

#[test]
fn export_range_filters_bookings() {
    let db_path = setup_test_db("export_range");
    let out = temp_out("export_range", "csv");
    init_seeded_db(&db_path);

    book_fixture(&db_path, "2030-03-05", "09:00");
    book_fixture(&db_path, "2030-04-02", "10:00");

    bb().args([
        "--db", &db_path, "export", "--format", "csv", "--file", &out, "--range", "2030-03",
    ])
    .assert()
    .success();

    let content = fs::read_to_string(&out).expect("read export");
    assert!(content.contains("2030-03-05"));
    assert!(!content.contains("2030-04-02"));
}

#[test]
fn export_refuses_overwrite_without_force() {
    let db_path = setup_test_db("export_force");
    let out = temp_out("export_force", "csv");
    init_seeded_db(&db_path);

    book_fixture(&db_path, "2030-03-05", "09:00");
    fs::write(&out, "sentinel").expect("precreate file");

    bb().args(["--db", &db_path, "export", "--format", "csv", "--file", &out])
        .assert()
        .failure()
        .stderr(contains("already exists"));

    bb().args([
        "--db", &db_path, "export", "--format", "csv", "--file", &out, "--force",
    ])
    .assert()
    .success();

    let content = fs::read_to_string(&out).expect("read export");
    assert!(content.contains("Casey Morgan"));
}

#[test]
fn export_of_an_empty_range_warns_and_writes_nothing() {
    let db_path = setup_test_db("export_empty");
    let out = temp_out("export_empty", "csv");
    init_seeded_db(&db_path);

    bb().args([
        "--db", &db_path, "export", "--format", "csv", "--file", &out, "--range", "2029",
    ])
    .assert()
    .success()
    .stdout(contains("No bookings found"));

    assert!(!std::path::Path::new(&out).exists());
}

#[test]
fn backup_copies_the_database() {
    let db_path = setup_test_db("backup_plain");
    let out = temp_out("backup_plain", "sqlite");
    init_seeded_db(&db_path);

    bb().args(["--db", &db_path, "backup", "--file", &out])
        .assert()
        .success()
        .stdout(contains("Backup created"));

    let original = fs::metadata(&db_path).expect("db metadata").len();
    let copied = fs::metadata(&out).expect("backup metadata").len();
    assert_eq!(original, copied);
}

#[test]
fn compressed_backup_produces_a_zip() {
    let db_path = setup_test_db("backup_zip");
    let out = temp_out("backup_zip", "sqlite");
    init_seeded_db(&db_path);

    bb().args(["--db", &db_path, "backup", "--file", &out, "--compress"])
        .assert()
        .success();

    let zip_path = std::path::Path::new(&out).with_extension("zip");
    assert!(zip_path.exists());
    assert!(!std::path::Path::new(&out).exists());

    fs::remove_file(&zip_path).ok();
}
